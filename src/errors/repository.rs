use sqlx::{error::ErrorKind, Error as SqlxError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Connection, query or I/O failure in the backing store
    #[error("Database error: {0}")]
    Database(SqlxError),

    /// No row matched the requested short code
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Primary-key violation on `short_code`
    #[error("Conflict error: {0}")]
    Conflict(String),
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match err {
            SqlxError::RowNotFound => Self::NotFound("Resource not found".to_string()),
            SqlxError::Database(db_err) => {
                // SQLite reports both UNIQUE and PRIMARY KEY constraint failures as this kind
                if matches!(db_err.kind(), ErrorKind::UniqueViolation) {
                    return Self::Conflict("Short code already exists".to_string());
                }
                Self::Database(SqlxError::Database(db_err))
            }
            _ => Self::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err = RepositoryError::from(SqlxError::RowNotFound);
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[test]
    fn other_errors_map_to_database() {
        let err = RepositoryError::from(SqlxError::PoolClosed);
        assert!(matches!(err, RepositoryError::Database(SqlxError::PoolClosed)));
    }
}
