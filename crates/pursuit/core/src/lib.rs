//! Reactive grid pursuit planner.
//!
//! `pursuit-core` moves a single agent one cell per tick toward a target on a
//! bounded obstacle grid. It is a local heuristic, not a pathfinder: each tick
//! ranks the eight compass directions by their unobstructed run length and
//! steps toward the most promising frontier cell.
//!
//! All decisions flow through [`planner::Planner`]; the free function [`tick`]
//! runs it with [`PlannerConfig::default`]. Nothing here performs I/O or logs;
//! callers observe each decision through the returned [`TickOutcome`].
pub mod agent;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod planner;

pub use agent::Agent;
pub use config::{PlannerConfig, Strategy};
pub use error::{ConfigError, GridError, ScenarioError};
pub use geometry::{Direction, Position};
pub use grid::{Cell, Grid, GridDimensions, ScanOverlay};
pub use planner::{Planner, Resolution, RunTable, TickOutcome, tick};
