/*
 * Responsibility
 * - /admins 系 handler
 * - 認証済みの管理者は CurrentAdmin extractor から受け取る (DB の再読込はしない)
 */
use axum::Json;

use crate::api::v1::{dto::admins::AdminResponse, extractors::CurrentAdmin};

pub async fn get_me(CurrentAdmin(admin): CurrentAdmin) -> Json<AdminResponse> {
    Json(admin.into())
}
