//! Validation error types for Powerdex.
//!
//! Storage-level errors (`DatabaseError`) live in `pdx-db`; this crate only
//! knows about field validation. One variant per rule so callers can tell
//! failure causes apart without matching on message text.

use thiserror::Error;

/// A field value was rejected on write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A power description was absent or shorter than 20 characters.
    #[error("Description must be present and at least 20 characters long")]
    Description,

    /// A strength value outside the closed vocabulary.
    #[error("Invalid strength value.")]
    Strength,
}
