use thiserror::Error;

use crate::repos::admin_repo::AdminAccount;
use crate::services::auth::access_jwt::{AccessTokenDecoder, DecodeError};
use crate::services::auth::validator::{TokenValidator, ValidateError};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Validate(#[from] ValidateError),
}

/// Bearer-token authentication: decode (signature) then validate (lifetime + account).
///
/// Stateless per call; shared across requests through `AppState`.
#[derive(Debug)]
pub struct AuthService {
    decoder: AccessTokenDecoder,
    validator: TokenValidator,
}

impl AuthService {
    pub fn new(decoder: AccessTokenDecoder, validator: TokenValidator) -> Self {
        Self { decoder, validator }
    }

    /// This is the entry-point for the access middleware.
    pub async fn authenticate(&self, token: &str) -> Result<AdminAccount, AuthError> {
        let payload = self.decoder.decode(token)?;
        let admin = self.validator.validate(&payload).await?;

        Ok(admin)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jsonwebtoken::Algorithm;

    use super::*;
    use crate::repos::admin_repo::AdminId;
    use crate::test_support::{
        FixedClock, InMemoryAdminStore, SECRET, admin_record, mint_token,
    };

    fn service_at(now_secs: i64) -> AuthService {
        let store = InMemoryAdminStore::with_records([admin_record("u1")]);
        AuthService::new(
            AccessTokenDecoder::new(SECRET, Algorithm::HS256),
            TokenValidator::new(Arc::new(store), Arc::new(FixedClock::at_secs(now_secs))),
        )
    }

    #[tokio::test]
    async fn valid_token_resolves_admin() {
        let token = mint_token("u1", 1000, 2000);

        let admin = service_at(1500).authenticate(&token).await.unwrap();

        assert_eq!(admin.id, AdminId::new("u1"));
    }

    #[tokio::test]
    async fn decode_failure_is_surfaced_as_is() {
        let err = service_at(1500).authenticate("garbage").await.unwrap_err();

        assert!(matches!(err, AuthError::Decode(_)));
    }

    #[tokio::test]
    async fn expired_token_is_reported_as_expired() {
        let token = mint_token("u1", 1000, 2000);

        let err = service_at(3500).authenticate(&token).await.unwrap_err();

        assert!(matches!(
            err,
            AuthError::Validate(ValidateError::TokenExpired)
        ));
    }

    #[tokio::test]
    async fn unknown_admin_is_unauthenticated() {
        let token = mint_token("u2", 1000, 2000);

        let err = service_at(1500).authenticate(&token).await.unwrap_err();

        assert!(matches!(
            err,
            AuthError::Validate(ValidateError::Unauthenticated)
        ));
    }

    #[tokio::test]
    async fn concurrent_validations_are_independent() {
        let service = Arc::new(service_at(1500));
        let good = mint_token("u1", 1000, 2000);
        let expired = mint_token("u1", 1000, 1200);

        let (a, b) = tokio::join!(
            service.authenticate(&good),
            service.authenticate(&expired)
        );

        assert!(a.is_ok());
        assert!(matches!(
            b,
            Err(AuthError::Validate(ValidateError::TokenExpired))
        ));
    }
}
