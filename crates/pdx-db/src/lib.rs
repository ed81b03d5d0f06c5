//! # pdx-db
//!
//! libSQL storage for the Powerdex data model: heroes, powers, and the
//! hero_powers join table.
//!
//! Uses the `libsql` crate (C `SQLite` fork) as an embedded local database.
//! All access goes through [`service::PdxService`]; the repository modules
//! add CRUD, cascade deletes, and serialization projections as
//! `impl PdxService` blocks.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
mod test_support;
pub mod updates;

use error::DatabaseError;
use libsql::Builder;

/// Database handle for Powerdex storage.
///
/// Wraps a libSQL database and connection. Opening runs migrations and
/// enables foreign-key enforcement.
pub struct PdxDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl PdxDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Must be per-connection in SQLite; without it the hero_powers
        // foreign keys are not enforced.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let pdx_db = Self { db, conn };
        pdx_db.run_migrations().await?;
        Ok(pdx_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Row id assigned by the most recent INSERT on this connection.
    #[must_use]
    pub fn last_insert_id(&self) -> i64 {
        self.conn.last_insert_rowid()
    }
}
