use crate::error::ScenarioError;
use crate::geometry::Position;
use crate::grid::Grid;

/// The pursuing agent.
///
/// `location` changes at most once per tick and only through the planner.
/// `target` and manual repositioning belong to external editors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    location: Position,
    target: Position,
    last_visited: Option<Position>,
}

impl Agent {
    pub const fn new(location: Position, target: Position) -> Self {
        Self {
            location,
            target,
            last_visited: None,
        }
    }

    /// Creates an agent after checking it can legally stand on `grid`.
    pub fn placed(grid: &Grid, location: Position, target: Position) -> Result<Self, ScenarioError> {
        if !grid.contains(location) {
            return Err(ScenarioError::AgentOutOfBounds(location));
        }
        if !grid.contains(target) {
            return Err(ScenarioError::TargetOutOfBounds(target));
        }
        if grid.is_blocked(location) {
            return Err(ScenarioError::AgentOnBlockedCell(location));
        }
        Ok(Self::new(location, target))
    }

    pub fn location(&self) -> Position {
        self.location
    }

    pub fn target(&self) -> Position {
        self.target
    }

    /// Cell the agent occupied before its most recent tick.
    ///
    /// Bookkeeping only; no planner decision reads it.
    pub fn last_visited(&self) -> Option<Position> {
        self.last_visited
    }

    pub fn has_arrived(&self) -> bool {
        self.location == self.target
    }

    /// Editor move of the target. The target must lie on `grid`; it may be
    /// a blocked cell.
    pub fn retarget(&mut self, grid: &Grid, target: Position) -> Result<(), ScenarioError> {
        if !grid.contains(target) {
            return Err(ScenarioError::TargetOutOfBounds(target));
        }
        self.target = target;
        Ok(())
    }

    /// Editor teleport onto an open cell. Clears the visit history.
    pub fn relocate(&mut self, grid: &Grid, location: Position) -> Result<(), ScenarioError> {
        if !grid.contains(location) {
            return Err(ScenarioError::AgentOutOfBounds(location));
        }
        if grid.is_blocked(location) {
            return Err(ScenarioError::AgentOnBlockedCell(location));
        }
        self.location = location;
        self.last_visited = None;
        Ok(())
    }

    pub(crate) fn commit(&mut self, next: Position) {
        self.last_visited = Some(self.location);
        self.location = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_is_validated() {
        let grid = Grid::from_ascii(&["..", "#."]).unwrap();
        let target = Position::new(1, 0);

        assert!(Agent::placed(&grid, Position::new(0, 0), target).is_ok());
        assert_eq!(
            Agent::placed(&grid, Position::new(0, 1), target),
            Err(ScenarioError::AgentOnBlockedCell(Position::new(0, 1)))
        );
        assert_eq!(
            Agent::placed(&grid, Position::new(2, 0), target),
            Err(ScenarioError::AgentOutOfBounds(Position::new(2, 0)))
        );
        assert_eq!(
            Agent::placed(&grid, Position::ORIGIN, Position::new(0, 5)),
            Err(ScenarioError::TargetOutOfBounds(Position::new(0, 5)))
        );
    }

    #[test]
    fn commit_records_previous_cell() {
        let mut agent = Agent::new(Position::new(1, 1), Position::new(4, 4));
        assert_eq!(agent.last_visited(), None);

        agent.commit(Position::new(2, 2));
        assert_eq!(agent.location(), Position::new(2, 2));
        assert_eq!(agent.last_visited(), Some(Position::new(1, 1)));
    }

    #[test]
    fn editor_moves_are_validated() {
        let grid = Grid::from_ascii(&["...", ".#.", "..."]).unwrap();
        let mut agent = Agent::new(Position::new(0, 0), Position::new(2, 2));
        agent.commit(Position::new(1, 0));

        assert_eq!(
            agent.relocate(&grid, Position::new(1, 1)),
            Err(ScenarioError::AgentOnBlockedCell(Position::new(1, 1)))
        );
        assert_eq!(
            agent.relocate(&grid, Position::new(3, 0)),
            Err(ScenarioError::AgentOutOfBounds(Position::new(3, 0)))
        );
        assert_eq!(agent.location(), Position::new(1, 0));

        agent.relocate(&grid, Position::new(0, 2)).unwrap();
        assert_eq!(agent.location(), Position::new(0, 2));
        assert_eq!(agent.last_visited(), None);

        assert_eq!(
            agent.retarget(&grid, Position::new(i32::MAX, 0)),
            Err(ScenarioError::TargetOutOfBounds(Position::new(i32::MAX, 0)))
        );
        agent.retarget(&grid, Position::new(1, 1)).unwrap();
        assert_eq!(agent.target(), Position::new(1, 1));
    }
}
