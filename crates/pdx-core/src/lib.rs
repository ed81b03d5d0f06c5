//! # pdx-core
//!
//! Core types for the Powerdex data layer.
//!
//! This crate provides the types shared by the storage layer and its
//! consumers:
//! - Entity structs for heroes, powers, and the hero/power join rows
//! - The `Strength` enum with its closed vocabulary
//! - Field validation rules and `ValidationError`
//! - Serialization view structs that break relationship cycles

pub mod entities;
pub mod enums;
pub mod errors;
pub mod validate;
pub mod views;
