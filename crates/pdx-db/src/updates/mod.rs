//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields generate SET clauses in the dynamic UPDATE SQL; an empty update
//! degenerates to a plain read. Validated fields (`description`, `strength`)
//! are checked in the repo methods before the UPDATE is built.

pub mod hero;
pub mod hero_power;
pub mod power;
