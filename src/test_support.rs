//! Shared fixtures for unit and router tests (no database required).
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::json;

use crate::repos::admin_repo::{AdminAccount, AdminId, AdminStore};
use crate::repos::error::RepoError;
use crate::services::auth::validator::Clock;
use crate::services::auth::{AccessTokenDecoder, AuthService, SystemClock, TokenValidator};
use crate::state::AppState;

pub const SECRET: &[u8] = b"test_secret_key_for_testing_purposes_only";

/// Full stored row, credential included.
#[derive(Debug, Clone)]
pub struct AdminRecord {
    pub id: AdminId,
    pub email: String,
    pub name: Option<String>,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AdminRecord {
    pub fn into_public(self) -> AdminAccount {
        AdminAccount {
            id: self.id,
            email: self.email,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

pub fn admin_record(id: &str) -> AdminRecord {
    let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    AdminRecord {
        id: AdminId::new(id),
        email: format!("{id}@example.com"),
        name: Some(format!("Admin {id}")),
        password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        created_at: at,
        updated_at: at,
    }
}

#[derive(Debug, Default)]
pub struct InMemoryAdminStore {
    records: HashMap<AdminId, AdminRecord>,
    fail: bool,
    pub lookups: AtomicUsize,
}

impl InMemoryAdminStore {
    pub fn with_records(records: impl IntoIterator<Item = AdminRecord>) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.id.clone(), r)).collect(),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl AdminStore for InMemoryAdminStore {
    async fn find_by_id(&self, admin_id: &AdminId) -> Result<Option<AdminAccount>, RepoError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(RepoError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(self
            .records
            .get(admin_id)
            .cloned()
            .map(AdminRecord::into_public))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(i64);

impl FixedClock {
    pub fn at_secs(secs: i64) -> Self {
        Self(secs * 1000)
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

pub fn mint_token(id: &str, issued_at: i64, expires_at: i64) -> String {
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &json!({"id": id, "iat": issued_at, "exp": expires_at}),
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap()
}

/// Token valid for 15 minutes from the real wall clock.
pub fn fresh_token(id: &str) -> String {
    let now = Utc::now().timestamp();
    mint_token(id, now, now + 15 * 60)
}

/// App state backed by the in-memory store and the system clock.
pub fn test_state(records: impl IntoIterator<Item = AdminRecord>) -> AppState {
    let validator = TokenValidator::new(
        Arc::new(InMemoryAdminStore::with_records(records)),
        Arc::new(SystemClock),
    );
    let auth = AuthService::new(AccessTokenDecoder::new(SECRET, Algorithm::HS256), validator);

    AppState::new(Arc::new(auth))
}
