//! Hero update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct HeroUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_name: Option<String>,
}

pub struct HeroUpdateBuilder(HeroUpdate);

impl HeroUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(HeroUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.0.name = Some(val.into());
        self
    }

    #[must_use]
    pub fn super_name(mut self, val: impl Into<String>) -> Self {
        self.0.super_name = Some(val.into());
        self
    }

    #[must_use]
    pub fn build(self) -> HeroUpdate {
        self.0
    }
}

impl Default for HeroUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
