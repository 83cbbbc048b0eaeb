use crate::geometry::{Direction, Position};

use super::GridDimensions;

/// Per-cell record of which direction scanned each cell during the last tick.
///
/// Purely observational: the planner writes it, renderers read it, and no
/// decision ever depends on it. Callers clear it before each tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOverlay {
    dimensions: GridDimensions,
    marks: Vec<Option<Direction>>,
}

impl ScanOverlay {
    pub fn new(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            marks: vec![None; dimensions.area()],
        }
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Records that `direction` reached `position`. Out-of-bounds marks are ignored.
    pub fn mark(&mut self, position: Position, direction: Direction) {
        if let Some(index) = self.dimensions.index_of(position) {
            self.marks[index] = Some(direction);
        }
    }

    pub fn direction_at(&self, position: Position) -> Option<Direction> {
        self.dimensions
            .index_of(position)
            .and_then(|index| self.marks[index])
    }

    pub fn scanned_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.marks
            .iter()
            .enumerate()
            .filter(|(_, mark)| mark.is_some())
            .map(|(index, _)| self.dimensions.position_of(index))
    }

    pub fn is_empty(&self) -> bool {
        self.marks.iter().all(Option::is_none)
    }

    pub fn clear(&mut self) {
        self.marks.fill(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_and_clears() {
        let mut overlay = ScanOverlay::new(GridDimensions::new(4, 4));
        assert!(overlay.is_empty());

        overlay.mark(Position::new(1, 2), Direction::East);
        overlay.mark(Position::new(7, 7), Direction::East);

        assert_eq!(overlay.direction_at(Position::new(1, 2)), Some(Direction::East));
        assert_eq!(
            overlay.scanned_cells().collect::<Vec<_>>(),
            vec![Position::new(1, 2)]
        );

        overlay.clear();
        assert!(overlay.is_empty());
    }
}
