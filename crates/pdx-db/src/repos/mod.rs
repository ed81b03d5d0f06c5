//! Repository modules implementing CRUD operations for all Powerdex entities.
//!
//! Each module adds methods to `PdxService` via `impl PdxService` blocks.

pub mod hero;
pub mod hero_power;
pub mod power;
