/*
 * Responsibility
 * - DB アクセス層 (SQLx) の公開
 */
pub mod admin_repo;
pub mod error;
