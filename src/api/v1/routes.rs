/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health は公開、/admins 配下は Bearer 認証 (access middleware) を適用
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{admins::get_me, health::health};
use crate::middleware;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new().route("/health", get(health));

    let protected = Router::new().route("/admins/me", get(get_me));
    let protected = middleware::auth::access::apply(protected, state);

    public.merge(protected)
}
