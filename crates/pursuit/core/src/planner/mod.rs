//! Per-tick step decision.
//!
//! A tick runs a fixed stage sequence and stops at the first stage that
//! commits a move:
//!
//! 1. [`fast_path`]: if the straight line toward the target is clear for the
//!    whole radius, step along it.
//! 2. [`runs`]: rank all eight directions by unobstructed run length.
//! 3. [`select`]: pick the frontier cell closest to the target, lowering the
//!    radius until some direction qualifies, and step toward it.
//!
//! [`Strategy::ScoredFrontier`] replaces all three stages with [`scored`].
//!
//! Ticks never fail. An agent with nowhere to go stays put and the outcome
//! reports [`Resolution::Stalled`].
mod fast_path;
mod runs;
mod scored;
mod select;

use crate::agent::Agent;
use crate::config::{PlannerConfig, Strategy};
use crate::error::ConfigError;
use crate::geometry::{Direction, Position};
use crate::grid::{Grid, ScanOverlay};

pub use runs::RunTable;

/// Result of a pipeline stage.
pub(crate) enum Stage<T> {
    /// The stage decided the step; later stages are skipped.
    Commit(Decision),
    /// Hand the stage's product to the next stage.
    Continue(T),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Decision {
    pub next: Position,
    pub resolution: Resolution,
}

impl Decision {
    pub const fn step(next: Position, resolution: Resolution) -> Self {
        Self { next, resolution }
    }
}

/// Which rule decided a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Agent already stands on its target.
    AtTarget,
    /// Straight line toward the target was clear for the whole radius.
    FastPath,
    /// `direction`'s frontier reached `radius`; the agent stepped toward it.
    Selected { radius: u32, direction: Direction },
    /// Scored-frontier strategy picked the lowest scoring frontier.
    Scored,
    /// Scored-frontier scan saw the target along a straight line.
    TargetSighted,
    /// No direction had an open cell; the agent stayed put.
    Stalled,
}

impl Resolution {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AtTarget => "at_target",
            Self::FastPath => "fast_path",
            Self::Selected { .. } => "selected",
            Self::Scored => "scored",
            Self::TargetSighted => "target_sighted",
            Self::Stalled => "stalled",
        }
    }
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickOutcome {
    pub from: Position,
    pub to: Position,
    pub resolution: Resolution,
    /// Run lengths of the full scan, when one ran to completion.
    pub runs: Option<RunTable>,
}

impl TickOutcome {
    pub fn moved(&self) -> bool {
        self.from != self.to
    }

    pub fn is_stalled(&self) -> bool {
        matches!(self.resolution, Resolution::Stalled)
    }
}

/// Configured planner. Cheap to copy; holds no per-tick state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    pub fn new(config: PlannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Advances `agent` by at most one cell.
    pub fn tick(&self, grid: &Grid, agent: &mut Agent) -> TickOutcome {
        self.run(grid, agent, None)
    }

    /// Same as [`Planner::tick`], recording scanned cells into `overlay`.
    ///
    /// The overlay is not cleared here; renderers clear it between ticks.
    pub fn tick_with_overlay(
        &self,
        grid: &Grid,
        agent: &mut Agent,
        overlay: &mut ScanOverlay,
    ) -> TickOutcome {
        self.run(grid, agent, Some(overlay))
    }

    fn run(&self, grid: &Grid, agent: &mut Agent, overlay: Option<&mut ScanOverlay>) -> TickOutcome {
        let from = agent.location();
        let target = agent.target();

        let (decision, runs) = if from == target {
            (Decision::step(from, Resolution::AtTarget), None)
        } else {
            match self.config.strategy {
                Strategy::LookAround => self.look_around(grid, from, target, overlay),
                Strategy::ScoredFrontier => scored::decide(grid, from, target, overlay),
            }
        };

        if decision.next != from {
            agent.commit(decision.next);
        }

        TickOutcome {
            from,
            to: agent.location(),
            resolution: decision.resolution,
            runs,
        }
    }

    fn look_around(
        &self,
        grid: &Grid,
        origin: Position,
        target: Position,
        overlay: Option<&mut ScanOverlay>,
    ) -> (Decision, Option<RunTable>) {
        let radius = self.config.radius;

        if let Stage::Commit(decision) = fast_path::try_fast_path(grid, origin, target, radius) {
            return (decision, None);
        }

        let runs = RunTable::scan(grid, origin, radius, overlay);
        let decision = match select::select_with_degrade(&runs, origin, target) {
            Some(candidate) => Decision::step(
                origin.step_toward(candidate.cell),
                Resolution::Selected {
                    radius: candidate.radius,
                    direction: candidate.direction,
                },
            ),
            None => Decision::step(origin, Resolution::Stalled),
        };

        (decision, Some(runs))
    }
}

/// Advances `agent` by at most one cell using the default planner.
pub fn tick(grid: &Grid, agent: &mut Agent) -> TickOutcome {
    Planner::default().tick(grid, agent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_radius_planner_is_rejected() {
        let config = PlannerConfig::new().with_radius(0);
        assert_eq!(Planner::new(config), Err(ConfigError::ZeroRadius));
    }

    #[test]
    fn agent_on_target_holds_position() {
        let grid = Grid::new(5, 5).unwrap();
        let spot = Position::new(2, 2);
        let mut agent = Agent::new(spot, spot);

        let outcome = tick(&grid, &mut agent);

        assert_eq!(outcome.resolution, Resolution::AtTarget);
        assert!(!outcome.moved());
        assert_eq!(agent.location(), spot);
        assert_eq!(agent.last_visited(), None);
    }

    #[test]
    fn stalled_tick_does_not_touch_history() {
        let grid = Grid::from_ascii(&["###", "#.#", "###"]).unwrap();
        let mut agent = Agent::new(Position::new(1, 1), Position::new(2, 2));

        let outcome = tick(&grid, &mut agent);

        assert!(outcome.is_stalled());
        assert_eq!(outcome.runs.map(|runs| runs.as_array()), Some([0; 8]));
        assert_eq!(agent.last_visited(), None);
    }

    #[test]
    fn moving_tick_records_last_visited() {
        let grid = Grid::new(10, 10).unwrap();
        let mut agent = Agent::new(Position::new(1, 8), Position::new(8, 1));

        tick(&grid, &mut agent);

        assert_eq!(agent.last_visited(), Some(Position::new(1, 8)));
    }

    #[test]
    fn resolution_labels() {
        let selected = Resolution::Selected {
            radius: 3,
            direction: Direction::East,
        };
        assert_eq!(selected.as_str(), "selected");
        assert_eq!(Resolution::Stalled.as_str(), "stalled");
    }
}
