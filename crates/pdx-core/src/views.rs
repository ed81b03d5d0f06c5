//! Serialization views — the external representation of each entity.
//!
//! Relationship traversal between heroes and powers is cyclic (hero →
//! hero_powers → power → hero_powers → hero …). Instead of a generic
//! recursive serializer with exclusion patterns, each entity gets a
//! hand-written projection struct that carries exactly the fields the API
//! layer may expose. The cycle-breaking is structural: no view contains a
//! `hero_powers` collection, and the nested entities are the plain structs,
//! which have no relationship fields at all.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Hero, Power};
use crate::enums::Strength;

/// A hero with its associated powers resolved through the join table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HeroView {
    pub id: i64,
    pub name: String,
    pub super_name: String,
    pub powers: Vec<Power>,
}

/// A power with the heroes that hold it resolved through the join table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PowerView {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub heroes: Vec<Hero>,
}

/// A join row with both referenced entities inlined.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HeroPowerView {
    pub id: i64,
    pub strength: Strength,
    pub hero_id: i64,
    pub power_id: i64,
    pub hero: Hero,
    pub power: Power,
}
