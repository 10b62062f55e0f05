/*
 * Responsibility
 * - Admins の response DTO
 * - AdminAccount 自体が password を持たないため、ここでも credential は出ない
 */
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::repos::admin_repo::{AdminAccount, AdminId};

#[derive(Debug, Serialize)]
pub struct AdminResponse {
    pub id: AdminId,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AdminAccount> for AdminResponse {
    fn from(admin: AdminAccount) -> Self {
        Self {
            id: admin.id,
            email: admin.email,
            name: admin.name,
            created_at: admin.created_at,
            updated_at: admin.updated_at,
        }
    }
}
