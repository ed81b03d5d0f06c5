//! Service layer owning the database handle.
//!
//! `PdxService` wraps `PdxDb` (raw database access). All repo methods are
//! implemented as `impl PdxService` blocks in `repos/`. Validation runs in
//! the repo methods before any SQL, so a stored row can never violate the
//! field rules; referential integrity stays with the store's foreign keys.

use crate::PdxDb;
use crate::error::DatabaseError;

/// Entry point for all Powerdex storage operations.
pub struct PdxService {
    db: PdxDb,
}

impl PdxService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` — Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = PdxDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `PdxDb` (for testing).
    #[must_use]
    pub const fn from_db(db: PdxDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &PdxDb {
        &self.db
    }
}
