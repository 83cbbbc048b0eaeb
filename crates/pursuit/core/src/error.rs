//! Error types for pursuit-core.
//!
//! The tick path itself never fails: out-of-bounds probes are skipped and an
//! agent with no viable direction simply stays put. Errors only arise when
//! building or editing the world (grid construction, cell edits, scenario
//! validation) and when validating configuration.

use crate::geometry::Position;
use crate::grid::GridDimensions;

/// Errors raised while constructing or editing a [`Grid`](crate::Grid).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions {width}x{height} must both be between 1 and i32::MAX")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("position {position} is outside the {dimensions} grid")]
    OutOfBounds {
        position: Position,
        dimensions: GridDimensions,
    },

    #[error("layout row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown layout glyph {glyph:?} at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },
}

/// Errors raised by [`PlannerConfig::validate`](crate::PlannerConfig::validate).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("search radius must be at least 1")]
    ZeroRadius,

    #[error("search radius {radius} exceeds the maximum of {max}")]
    RadiusTooLarge { radius: u32, max: u32 },
}

/// Errors raised when placing an agent into a grid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    #[error("agent location {0} is outside the grid")]
    AgentOutOfBounds(Position),

    #[error("target {0} is outside the grid")]
    TargetOutOfBounds(Position),

    #[error("agent location {0} is a blocked cell")]
    AgentOnBlockedCell(Position),

    #[error(transparent)]
    Grid(#[from] GridError),
}
