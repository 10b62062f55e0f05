use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use thiserror::Error;

use crate::repos::admin_repo::AdminId;

// Errors returned by signature verification + structural claim checks.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("jwt verification failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("empty '{0}' claim")]
    EmptyClaim(&'static str),
}

/// Decoded access token payload.
///
/// Produced once per request by [`AccessTokenDecoder`]; lifetime checks happen
/// afterwards in the validator, against these raw timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPayload {
    pub subject_id: AdminId,
    /// Unix seconds.
    pub issued_at: i64,
    /// Unix seconds.
    pub expires_at: i64,
}

// Issuers put either a numeric or a string primary key in `id`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SubjectClaim {
    Text(String),
    Number(i64),
}

#[derive(Debug, Deserialize)]
struct AccessTokenClaims {
    id: SubjectClaim,
    iat: i64,
    exp: i64,
}

/// HMAC access-token decoder.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct AccessTokenDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for AccessTokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("AccessTokenDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl AccessTokenDecoder {
    pub fn new(secret: &[u8], algorithm: Algorithm) -> Self {
        let mut validation = Validation::new(algorithm);
        // `exp` must be present, but whether it has passed is decided by the
        // validator's lifetime window, not by jsonwebtoken.
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);
        // `nbf` is optional; when present it must not be in the future.
        validation.validate_nbf = true;
        // Tokens from our issuer carry no audience.
        validation.validate_aud = false;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Verify the signature and extract the payload.
    ///
    /// `jsonwebtoken::Validation` checks:
    /// - signature and algorithm
    /// - presence of `exp`
    /// - `nbf`, when present
    ///
    /// Deserialization additionally requires `id` and `iat` (integer seconds).
    pub fn decode(&self, token: &str) -> Result<TokenPayload, DecodeError> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;
        let claims = data.claims;

        let subject_id = match claims.id {
            SubjectClaim::Text(s) if s.trim().is_empty() => {
                return Err(DecodeError::EmptyClaim("id"));
            }
            SubjectClaim::Text(s) => AdminId::new(s),
            SubjectClaim::Number(n) => AdminId::new(n.to_string()),
        };

        Ok(TokenPayload {
            subject_id,
            issued_at: claims.iat,
            expires_at: claims.exp,
        })
    }
}
