//! Entity structs for the Powerdex domain.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! generation.

mod hero;
mod hero_power;
mod power;

pub use hero::Hero;
pub use hero_power::HeroPower;
pub use power::Power;
