use std::sync::Arc;

use thiserror::Error;

use crate::repos::admin_repo::{AdminAccount, AdminStore};
use crate::repos::error::RepoError;
use crate::services::auth::access_jwt::TokenPayload;

/// Wall-clock source, in Unix milliseconds.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("token expired")]
    TokenExpired,
    #[error("unauthenticated")]
    Unauthenticated,
    #[error("admin lookup failed: {0}")]
    Store(#[from] RepoError),
}

/// Turns a decoded payload into the authenticated administrator.
///
/// The lifetime is re-derived from the token's own `iat`/`exp`: the token is
/// valid while `now - iat <= exp - iat`, evaluated at validation time. A
/// non-positive window (`exp <= iat`) never validates.
pub struct TokenValidator {
    store: Arc<dyn AdminStore>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for TokenValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenValidator").finish_non_exhaustive()
    }
}

impl TokenValidator {
    pub fn new(store: Arc<dyn AdminStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn validate(&self, payload: &TokenPayload) -> Result<AdminAccount, ValidateError> {
        if is_expired(payload, self.clock.now_millis()) {
            return Err(ValidateError::TokenExpired);
        }

        self.store
            .find_by_id(&payload.subject_id)
            .await?
            .ok_or(ValidateError::Unauthenticated)
    }
}

fn is_expired(payload: &TokenPayload, now_millis: i64) -> bool {
    let issued_at_millis = payload.issued_at.saturating_mul(1000);
    let window = payload
        .expires_at
        .saturating_mul(1000)
        .saturating_sub(issued_at_millis);
    let elapsed = now_millis.saturating_sub(issued_at_millis);

    window <= 0 || elapsed > window
}
