use crate::geometry::{Direction, Position};
use crate::grid::Grid;

use super::{Decision, Resolution, Stage};

/// Straight-line check toward the target.
///
/// Probes `radius` cells along the clamped direction to `target`. Probes that
/// leave the grid are skipped; any blocked probe hands over to the full scan.
/// The committed cell must itself be in bounds and open.
pub(crate) fn try_fast_path(grid: &Grid, origin: Position, target: Position, radius: u32) -> Stage<()> {
    let (dx, dy) = origin.unit_step_toward(target);
    let Some(direction) = Direction::from_delta(dx, dy) else {
        return Stage::Commit(Decision::step(origin, Resolution::AtTarget));
    };

    // Probes past the longest side are always off the grid.
    for i in 1..=radius.min(grid.longest_side()) {
        let probe = origin.offset(direction, i);
        if !grid.contains(probe) {
            continue;
        }
        if grid.is_blocked(probe) {
            return Stage::Continue(());
        }
    }

    let next = origin.offset(direction, 1);
    if !grid.is_open(next) {
        return Stage::Continue(());
    }

    Stage::Commit(Decision::step(next, Resolution::FastPath))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn committed(stage: Stage<()>) -> Option<Decision> {
        match stage {
            Stage::Commit(decision) => Some(decision),
            Stage::Continue(()) => None,
        }
    }

    #[test]
    fn clear_diagonal_commits_single_step() {
        let grid = Grid::new(10, 10).unwrap();
        let decision = committed(try_fast_path(
            &grid,
            Position::new(1, 8),
            Position::new(8, 1),
            5,
        ));
        assert_eq!(
            decision,
            Some(Decision::step(Position::new(2, 7), Resolution::FastPath))
        );
    }

    #[test]
    fn obstacle_within_radius_abandons() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set_blocked(Position::new(6, 3), true).unwrap();
        let stage = try_fast_path(&grid, Position::new(1, 8), Position::new(8, 1), 5);
        assert!(committed(stage).is_none());
    }

    #[test]
    fn obstacle_beyond_radius_is_ignored() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set_blocked(Position::new(7, 2), true).unwrap();
        let stage = try_fast_path(&grid, Position::new(1, 8), Position::new(8, 1), 5);
        assert!(committed(stage).is_some());
    }

    #[test]
    fn probes_past_the_edge_are_skipped() {
        let grid = Grid::new(4, 4).unwrap();
        let decision = committed(try_fast_path(
            &grid,
            Position::new(0, 1),
            Position::new(3, 1),
            5,
        ));
        assert_eq!(
            decision.map(|d| d.next),
            Some(Position::new(1, 1))
        );
    }

    #[test]
    fn target_outside_grid_falls_through() {
        let grid = Grid::new(4, 4).unwrap();
        let stage = try_fast_path(&grid, Position::new(3, 3), Position::new(9, 3), 5);
        assert!(committed(stage).is_none());
    }

    #[test]
    fn radius_larger_than_grid_still_probes_every_cell() {
        let grid = Grid::with_blocked(10, 10, [Position::new(3, 6)]).unwrap();
        let stage = try_fast_path(
            &grid,
            Position::new(1, 8),
            Position::new(8, 1),
            u32::MAX,
        );
        assert!(committed(stage).is_none());
    }
}
