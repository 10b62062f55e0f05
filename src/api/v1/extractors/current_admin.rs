use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::repos::admin_repo::AdminAccount;
use crate::state::AppState;

/// Handler で、認証済みの AdminAccount を受け取るための extractor
/// access middleware が AdminAccount を request.extensions() に insert 済みである前提
/// 見つからない場合は 401 を返す（ミドルウェア未設定）
pub struct CurrentAdmin(pub AdminAccount);

impl FromRequestParts<AppState> for CurrentAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminAccount>()
            .cloned()
            .map(CurrentAdmin)
            .ok_or(AppError::Unauthorized)
    }
}
