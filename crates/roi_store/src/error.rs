//! Store error types.

use thiserror::Error;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from scenario store operations.
///
/// # Variants
/// - `Validation`: the scenario was rejected before touching the database
/// - `NotFound`: no scenario has the requested id
/// - `Database`: the SQLite driver failed (open, lock, I/O, SQL)
#[derive(Debug, Error)]
pub enum StoreError {
    /// The scenario was rejected before touching the database.
    #[error("Validation error: {0}")]
    Validation(String),

    /// No scenario has the requested id.
    #[error("Scenario not found: {0}")]
    NotFound(i64),

    /// The SQLite driver failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Validation("scenario_name is required".to_string());
        assert_eq!(err.to_string(), "Validation error: scenario_name is required");

        let err = StoreError::NotFound(42);
        assert_eq!(err.to_string(), "Scenario not found: 42");

        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("Database error"));
    }
}
