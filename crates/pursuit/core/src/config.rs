use crate::error::ConfigError;

/// Planner tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Look-around radius: how many cells each direction is probed per tick.
    pub radius: u32,

    /// Which selection rule decides the step once the fast path is abandoned.
    pub strategy: Strategy,
}

impl PlannerConfig {
    pub const DEFAULT_RADIUS: u32 = 5;

    /// Radii past this cannot be expressed as cell offsets.
    pub const MAX_RADIUS: u32 = i32::MAX as u32;

    pub const fn new() -> Self {
        Self {
            radius: Self::DEFAULT_RADIUS,
            strategy: Strategy::LookAround,
        }
    }

    #[must_use]
    pub const fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.radius == 0 {
            return Err(ConfigError::ZeroRadius);
        }
        if self.radius > Self::MAX_RADIUS {
            return Err(ConfigError::RadiusTooLarge {
                radius: self.radius,
                max: Self::MAX_RADIUS,
            });
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Step selection rule.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Strategy {
    /// Fast path, radius-capped scan, then frontier selection with degrade.
    #[default]
    LookAround,
    /// Uncapped scan with target sighting and obstacle-penalised frontier scores.
    ScoredFrontier,
}
