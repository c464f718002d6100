use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("constraint violation: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}
