//! Explicit field validation.
//!
//! The rules run before any SQL executes, so stored values can never violate
//! them. Strength validation lives on [`crate::enums::Strength`]'s `FromStr`.

use crate::errors::ValidationError;

/// Minimum accepted length of a power description, in characters.
pub const MIN_DESCRIPTION_LEN: usize = 20;

/// Check a power description: must be present and at least 20 characters.
///
/// Length is counted in characters, not bytes, so multi-byte text is not
/// penalized.
///
/// # Errors
///
/// Returns `ValidationError::Description` for empty or too-short input.
pub fn check_description(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() < MIN_DESCRIPTION_LEN {
        return Err(ValidationError::Description);
    }
    Ok(())
}
