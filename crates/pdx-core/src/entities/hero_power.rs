use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Strength;

/// Join row associating a hero with a power, with a strength attribute.
///
/// `hero_id` and `power_id` always reference existing rows — the schema
/// enforces both foreign keys.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HeroPower {
    pub id: i64,
    pub strength: Strength,
    pub hero_id: i64,
    pub power_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
