/// Factory: build `AuthService` from application `Config`.
use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::repos::admin_repo::PgAdminStore;
use crate::services::auth::{AccessTokenDecoder, AuthService, SystemClock, TokenValidator};

pub fn build_auth_service(config: &Config, db: PgPool) -> Arc<AuthService> {
    let decoder = AccessTokenDecoder::new(config.jwt_secret.as_bytes(), config.jwt_algorithm);
    let validator = TokenValidator::new(Arc::new(PgAdminStore::new(db)), Arc::new(SystemClock));

    Arc::new(AuthService::new(decoder, validator))
}
