//! access token (JWT) 検証 → AdminAccount を extensions に入れる
//!
//! - `Authorization: Bearer <jwt>` を取り出す
//! - 署名検証 (decoder) → 有効期間 + 管理者の存在確認 (validator) は AuthService 側で実施
//! - 成功時は AdminAccount (password なし) を request extensions に格納し、handler は
//!   `CurrentAdmin` extractor で受け取る

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::services::auth::{AuthError, ValidateError};
use crate::state::AppState;

/// 保護したい Router に認証を掛ける。
///
/// 例：
/// ```ignore
/// let protected = middleware::auth::access::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers()).ok_or_else(|| {
        tracing::warn!("missing or malformed bearer authorization header");
        AppError::Unauthorized
    })?;

    let admin = match state.auth.authenticate(token).await {
        Ok(admin) => admin,
        Err(err) => {
            match &err {
                AuthError::Validate(ValidateError::Store(e)) => {
                    tracing::error!(error = ?e, "admin lookup failed during authentication");
                }
                _ => tracing::warn!(error = %err, "access token rejected"),
            }
            return Err(err.into());
        }
    };

    tracing::debug!(admin_id = %admin.id, "access token accepted");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(admin);

    Ok(next.run(req).await)
}

// Scheme is case-insensitive (RFC 7235); the token itself must be non-empty.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}
