//! Power update builder.
//!
//! `description` is carried raw; `update_power` validates it before building
//! the UPDATE statement.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct PowerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub struct PowerUpdateBuilder(PowerUpdate);

impl PowerUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(PowerUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.0.name = Some(val.into());
        self
    }

    #[must_use]
    pub fn description(mut self, val: impl Into<String>) -> Self {
        self.0.description = Some(val.into());
        self
    }

    #[must_use]
    pub fn build(self) -> PowerUpdate {
        self.0
    }
}

impl Default for PowerUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
