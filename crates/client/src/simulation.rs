//! A scenario being played tick by tick.
use std::path::Path;

use pursuit_content::{LoadResult, Scenario, ScenarioWriter};
use pursuit_core::{
    Agent, Grid, GridError, Planner, Position, ScanOverlay, ScenarioError, TickOutcome,
};

/// Errors from editing a running simulation.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("cannot block {0}: the agent stands there")]
    AgentCell(Position),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Placement(#[from] ScenarioError),
}

/// When a run should end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub max_ticks: u64,
    pub stall_limit: u32,
}

/// Where a run stands after its latest tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum RunStatus {
    Running,
    Arrived,
    /// Too many consecutive stalled ticks.
    Stuck,
    TickLimit,
    /// The step input ended before the run did.
    Interrupted,
}

/// Grid, agent, planner and the overlay of the most recent scan.
pub struct Simulation {
    name: String,
    grid: Grid,
    agent: Agent,
    planner: Planner,
    overlay: ScanOverlay,
    ticks: u64,
    consecutive_stalls: u32,
}

impl Simulation {
    pub fn new(scenario: Scenario, planner: Planner) -> Self {
        let overlay = ScanOverlay::new(scenario.grid.dimensions());
        Self {
            name: scenario.name,
            grid: scenario.grid,
            agent: scenario.agent,
            planner,
            overlay,
            ticks: 0,
            consecutive_stalls: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn overlay(&self) -> &ScanOverlay {
        &self.overlay
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn consecutive_stalls(&self) -> u32 {
        self.consecutive_stalls
    }

    /// Run one tick. The overlay is cleared first so it only shows this
    /// tick's scan.
    pub fn advance(&mut self) -> TickOutcome {
        self.overlay.clear();
        let outcome = self
            .planner
            .tick_with_overlay(&self.grid, &mut self.agent, &mut self.overlay);
        self.ticks += 1;

        if outcome.is_stalled() {
            self.consecutive_stalls += 1;
            tracing::warn!(
                tick = self.ticks,
                at = %outcome.from,
                stalls = self.consecutive_stalls,
                "Agent has no open neighbour"
            );
        } else {
            self.consecutive_stalls = 0;
        }

        tracing::debug!(
            tick = self.ticks,
            from = %outcome.from,
            to = %outcome.to,
            resolution = outcome.resolution.as_str(),
            runs = ?outcome.runs.map(|runs| runs.as_array()),
            "Tick"
        );
        outcome
    }

    pub fn status(&self, limits: Limits) -> RunStatus {
        if self.agent.has_arrived() {
            RunStatus::Arrived
        } else if self.consecutive_stalls >= limits.stall_limit {
            RunStatus::Stuck
        } else if self.ticks >= limits.max_ticks {
            RunStatus::TickLimit
        } else {
            RunStatus::Running
        }
    }

    /// Flip a cell between open and blocked, returning whether it is now
    /// blocked. The agent's own cell cannot be blocked.
    pub fn toggle(&mut self, position: Position) -> Result<bool, EditError> {
        if position == self.agent.location() && self.grid.is_open(position) {
            return Err(EditError::AgentCell(position));
        }
        let blocked = self.grid.toggle(position)?;
        tracing::debug!(%position, blocked, "Cell toggled");
        Ok(blocked)
    }

    /// Move the target. Takes effect on the next tick.
    pub fn retarget(&mut self, target: Position) -> Result<(), EditError> {
        self.agent.retarget(&self.grid, target)?;
        tracing::debug!(%target, "Target moved");
        Ok(())
    }

    /// Teleport the agent onto an open cell.
    pub fn relocate(&mut self, location: Position) -> Result<(), EditError> {
        self.agent.relocate(&self.grid, location)?;
        self.consecutive_stalls = 0;
        tracing::debug!(%location, "Agent moved");
        Ok(())
    }

    /// Persist the current grid, agent cell and target.
    pub fn save(&self, path: &Path) -> LoadResult<()> {
        ScenarioWriter::save(path, &self.name, &self.grid, &self.agent)
    }
}
