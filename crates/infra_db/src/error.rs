//! Database error types

use thiserror::Error;

/// SQLSTATE for a unique constraint violation
const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE for a NOT NULL violation
const NOT_NULL_VIOLATION: &str = "23502";
/// SQLSTATE for a CHECK constraint violation
const CHECK_VIOLATION: &str = "23514";
/// SQLSTATE for a value too long for its column
const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";
/// SQLSTATE for a number that does not fit its column, e.g. `NUMERIC(19,2)`
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

/// Failures of the `insurances` table store
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// No connection became free within the acquire timeout
    #[error("Connection pool exhausted")]
    PoolExhausted,

    #[error("Insurance record {id} not found")]
    NotFound { id: i64 },

    /// A second row tried to take an existing policy number
    #[error("Duplicate entry violates {constraint}: {message}")]
    DuplicateEntry { constraint: String, message: String },

    /// A row was rejected by a column or check constraint
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl DatabaseError {
    pub fn not_found(id: i64) -> Self {
        DatabaseError::NotFound { id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DatabaseError::NotFound { .. })
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            DatabaseError::DuplicateEntry { .. } | DatabaseError::ConstraintViolation(_)
        )
    }

    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted
        )
    }
}

impl From<&sqlx::Error> for DatabaseError {
    fn from(error: &sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::Io(e) => DatabaseError::ConnectionFailed(e.to_string()),
            sqlx::Error::PoolClosed => DatabaseError::ConnectionFailed(error.to_string()),
            sqlx::Error::Database(db_err) => {
                let message = db_err.message().to_string();
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                match db_err.code().as_deref() {
                    Some(UNIQUE_VIOLATION) => DatabaseError::DuplicateEntry {
                        constraint: db_err.constraint().unwrap_or("unique constraint").to_string(),
                        message,
                    },
                    Some(
                        NOT_NULL_VIOLATION
                        | CHECK_VIOLATION
                        | STRING_DATA_RIGHT_TRUNCATION
                        | NUMERIC_VALUE_OUT_OF_RANGE,
                    ) => DatabaseError::ConstraintViolation(message),
                    _ => DatabaseError::QueryFailed(message),
                }
            }
            _ => DatabaseError::QueryFailed(error.to_string()),
        }
    }
}

/// Classifies an owned SQLx error
pub(crate) fn classify(error: sqlx::Error) -> DatabaseError {
    DatabaseError::from(&error)
}
