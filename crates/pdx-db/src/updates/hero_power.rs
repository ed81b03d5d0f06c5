//! HeroPower update builder.
//!
//! `strength` is carried as raw text; `update_hero_power` parses it against
//! the closed vocabulary before building the UPDATE statement. Foreign keys
//! are fixed at creation, so there is nothing else to update.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct HeroPowerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<String>,
}

pub struct HeroPowerUpdateBuilder(HeroPowerUpdate);

impl HeroPowerUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(HeroPowerUpdate::default())
    }

    #[must_use]
    pub fn strength(mut self, val: impl Into<String>) -> Self {
        self.0.strength = Some(val.into());
        self
    }

    #[must_use]
    pub fn build(self) -> HeroPowerUpdate {
        self.0
    }
}

impl Default for HeroPowerUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
