/*
 * Responsibility
 * - admins テーブル向け SQLx 操作 (読み取りのみ)
 * - 認証で使う AdminStore (id で管理者を引く) の定義と PgPool 実装
 * - password 列は SELECT しない (公開用の projection だけを返す)
 */
use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

/// Opaque administrator identifier (`admins."id"`, also the `id` claim of access tokens).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct AdminId(String);

impl AdminId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for AdminId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Public projection of an administrator row: every column except `password`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct AdminAccount {
    pub id: AdminId,
    pub email: String,
    pub name: Option<String>,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[sqlx(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Read-only administrator lookup used by token validation.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait AdminStore: Send + Sync {
    // `Ok(None)` means the account does not exist (deleted or never created).
    async fn find_by_id(&self, admin_id: &AdminId) -> Result<Option<AdminAccount>, RepoError>;
}

pub async fn get_public(db: &PgPool, admin_id: &AdminId) -> Result<Option<AdminAccount>, RepoError> {
    let row = sqlx::query_as::<_, AdminAccount>(
        r#"
        SELECT "id", "email", "name", "createdAt", "updatedAt"
        FROM admins
        WHERE "id" = $1
        "#,
    )
    .bind(admin_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

/// Postgres-backed [`AdminStore`].
#[derive(Clone, Debug)]
pub struct PgAdminStore {
    db: PgPool,
}

impl PgAdminStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminStore for PgAdminStore {
    async fn find_by_id(&self, admin_id: &AdminId) -> Result<Option<AdminAccount>, RepoError> {
        get_public(&self.db, admin_id).await
    }
}
