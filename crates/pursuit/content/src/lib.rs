//! Data-driven scenarios and planner configuration.
//!
//! This crate houses the built-in scenario presets and provides loaders for
//! RON/TOML data files:
//! - Scenarios (grid layout, agent start, target) via RON
//! - Planner configuration via TOML
//!
//! Scenarios can also be written back to RON so an edited grid survives a
//! session.

pub mod presets;
pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use presets::Preset;
pub use scenario::Scenario;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, ScenarioLoader, ScenarioWriter};
