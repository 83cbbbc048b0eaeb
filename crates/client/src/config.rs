//! Client configuration read from the process environment.
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use pursuit_content::{ConfigLoader, Preset, Scenario, ScenarioLoader};
use pursuit_core::{PlannerConfig, Strategy};

use crate::simulation::Limits;

/// Everything the `pursuit` binary needs to set up a run.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub scenario_path: Option<PathBuf>,
    pub preset: Preset,
    pub config_path: Option<PathBuf>,
    pub radius: Option<u32>,
    pub strategy: Option<Strategy>,
    pub tick_period: Duration,
    pub max_ticks: u64,
    pub stall_limit: u32,
    pub start_paused: bool,
    pub show_overlay: bool,
    pub save_path: Option<PathBuf>,
    pub session_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scenario_path: None,
            preset: Preset::WallCorner,
            config_path: None,
            radius: None,
            strategy: None,
            tick_period: Self::DEFAULT_TICK_PERIOD,
            max_ticks: 500,
            stall_limit: 20,
            start_paused: false,
            show_overlay: true,
            save_path: None,
            session_id: None,
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(250);

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PURSUIT_SCENARIO` - Scenario RON file (takes precedence over the preset)
    /// - `PURSUIT_PRESET` - Built-in scenario name (default: wall_corner)
    /// - `PURSUIT_CONFIG` - Planner config TOML file
    /// - `PURSUIT_RADIUS` - Overrides the configured radius
    /// - `PURSUIT_STRATEGY` - `look_around` or `scored_frontier`
    /// - `PURSUIT_TICK_PERIOD_MS` - Minimum interval between ticks (default: 250)
    /// - `PURSUIT_MAX_TICKS` - Stop after this many ticks (default: 500)
    /// - `PURSUIT_STALL_LIMIT` - Stop after this many consecutive stalls (default: 20)
    /// - `PURSUIT_START_PAUSED` - Step one tick per input line (default: false)
    /// - `PURSUIT_SHOW_OVERLAY` - Draw scanned cells in frames (default: true)
    /// - `PURSUIT_SAVE_PATH` - Write the final scenario to this RON file
    /// - `PURSUIT_SESSION_ID` - Log session identifier (default: auto-generated)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with a custom variable source.
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.scenario_path = lookup("PURSUIT_SCENARIO").map(PathBuf::from);
        if let Some(preset) = read_env::<Preset, _>(&lookup, "PURSUIT_PRESET") {
            config.preset = preset;
        }
        config.config_path = lookup("PURSUIT_CONFIG").map(PathBuf::from);

        config.radius = read_env::<u32, _>(&lookup, "PURSUIT_RADIUS");
        config.strategy = read_env::<Strategy, _>(&lookup, "PURSUIT_STRATEGY");

        if let Some(millis) = read_env::<u64, _>(&lookup, "PURSUIT_TICK_PERIOD_MS") {
            config.tick_period = Duration::from_millis(millis);
        }
        if let Some(max_ticks) = read_env::<u64, _>(&lookup, "PURSUIT_MAX_TICKS") {
            config.max_ticks = max_ticks;
        }
        if let Some(limit) = read_env::<u32, _>(&lookup, "PURSUIT_STALL_LIMIT") {
            config.stall_limit = limit.max(1);
        }
        if let Some(paused) = read_env::<bool, _>(&lookup, "PURSUIT_START_PAUSED") {
            config.start_paused = paused;
        }
        if let Some(show) = read_env::<bool, _>(&lookup, "PURSUIT_SHOW_OVERLAY") {
            config.show_overlay = show;
        }

        config.save_path = lookup("PURSUIT_SAVE_PATH").map(PathBuf::from);
        config.session_id = lookup("PURSUIT_SESSION_ID");

        config
    }

    pub fn limits(&self) -> Limits {
        Limits {
            max_ticks: self.max_ticks,
            stall_limit: self.stall_limit,
        }
    }

    /// Load the scenario file if one is set, otherwise build the preset.
    pub fn load_scenario(&self) -> anyhow::Result<Scenario> {
        match &self.scenario_path {
            Some(path) => ScenarioLoader::load(path),
            None => self
                .preset
                .build()
                .with_context(|| format!("Failed to build preset {}", self.preset)),
        }
    }

    /// Planner configuration from the TOML file (or defaults) with the
    /// environment overrides applied on top.
    pub fn load_planner_config(&self) -> anyhow::Result<PlannerConfig> {
        let mut planner = match &self.config_path {
            Some(path) => ConfigLoader::load(path)?,
            None => PlannerConfig::default(),
        };

        if let Some(radius) = self.radius {
            planner.radius = radius;
        }
        if let Some(strategy) = self.strategy {
            planner.strategy = strategy;
        }
        planner.validate()?;
        Ok(planner)
    }
}

fn read_env<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}
