//! Database error types for pdx-db.

use thiserror::Error;

use pdx_core::errors::ValidationError;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A field value was rejected before any SQL executed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Underlying libSQL error (including foreign-key and CHECK violations).
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
