/**
 * Responsibility
 * - repo が上位に伝える意味の定義
 * - 「行が無い」はエラーではなく Ok(None) で返す (認証側で Unauthenticated に変換)
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("db error")]
    Db(#[from] sqlx::Error),
}
