use pursuit_core::{Agent, Grid, Position, ScenarioError};

/// A grid together with the agent placed on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub grid: Grid,
    pub agent: Agent,
}

impl Scenario {
    /// Places a fresh agent on `grid`, validating start and target cells.
    pub fn new(
        name: impl Into<String>,
        grid: Grid,
        location: Position,
        target: Position,
    ) -> Result<Self, ScenarioError> {
        let agent = Agent::placed(&grid, location, target)?;
        Ok(Self {
            name: name.into(),
            grid,
            agent,
        })
    }
}
