use sea_orm::{ConnAcquireErr, DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database timeout")]
    Timeout,
    #[error("database error: {0}")]
    Db(String),
}

/// Classify a driver error into the boundary taxonomy: unique-constraint
/// violations become `Conflict`, pool-acquire timeouts and Postgres query
/// cancellation (SQLSTATE 57014) become `Timeout`, everything else `Db`.
impl From<DbErr> for ModelError {
    fn from(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(msg)) = err.sql_err() {
            return ModelError::Conflict(msg);
        }
        if let DbErr::ConnectionAcquire(ConnAcquireErr::Timeout) = err {
            return ModelError::Timeout;
        }
        let msg = err.to_string();
        if msg.contains("57014")
            || msg.contains("statement timeout")
            || msg.contains("canceling statement")
        {
            return ModelError::Timeout;
        }
        ModelError::Db(msg)
    }
}
