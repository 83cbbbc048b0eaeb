use crate::geometry::{Direction, Position};

use super::RunTable;

/// Winning frontier cell and the radius at which it was found.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Candidate {
    pub cell: Position,
    pub direction: Direction,
    pub radius: u32,
    pub distance: f64,
}

/// Picks the frontier cell closest to `target`, starting at the scan radius
/// and lowering it until some direction's run ends exactly there.
///
/// Returns `None` only when every run is zero; the loop never goes below 1.
pub(crate) fn select_with_degrade(
    runs: &RunTable,
    origin: Position,
    target: Position,
) -> Option<Candidate> {
    (1..=runs.radius())
        .rev()
        .find_map(|radius| closest_at(runs, origin, target, radius))
}

fn closest_at(runs: &RunTable, origin: Position, target: Position, radius: u32) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for direction in runs.frontier_at(radius) {
        let cell = origin.offset(direction, radius);
        let distance = cell.euclidean_distance(target);

        // Strict comparison: ties keep the earlier direction.
        if best.is_none_or(|current| distance < current.distance) {
            best = Some(Candidate {
                cell,
                direction,
                radius,
                distance,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_radius_frontier_wins_over_shorter_runs() {
        // E and N reach 5; NE stops at 4.
        let runs = RunTable::from_runs([1, 1, 5, 4, 5, 1, 1, 1], 5);
        let candidate = select_with_degrade(&runs, Position::new(1, 8), Position::new(8, 1)).unwrap();

        assert_eq!(candidate.radius, 5);
        // E at (6, 8) and N at (1, 3) are both sqrt(53) away; E comes first.
        assert_eq!(candidate.direction, Direction::East);
        assert_eq!(candidate.cell, Position::new(6, 8));
    }

    #[test]
    fn degrades_until_some_run_matches() {
        let runs = RunTable::from_runs([1, 1, 1, 1, 1, 1, 1, 1], 5);
        let candidate = select_with_degrade(&runs, Position::new(5, 5), Position::new(9, 1)).unwrap();

        assert_eq!(candidate.radius, 1);
        assert_eq!(candidate.direction, Direction::NorthEast);
        assert_eq!(candidate.cell, Position::new(6, 4));
    }

    #[test]
    fn frontier_is_exact_radius_not_at_least() {
        // At r = 3 only SW qualifies even though E runs farther.
        let runs = RunTable::from_runs([0, 0, 4, 0, 0, 0, 0, 3], 3);
        let candidate = select_with_degrade(&runs, Position::new(5, 5), Position::new(9, 5)).unwrap();

        assert_eq!(candidate.direction, Direction::SouthWest);
    }

    #[test]
    fn candidate_on_target_is_a_valid_winner() {
        let runs = RunTable::from_runs([0, 0, 2, 0, 0, 0, 0, 0], 2);
        let candidate = select_with_degrade(&runs, Position::new(0, 0), Position::new(2, 0)).unwrap();

        assert_eq!(candidate.cell, Position::new(2, 0));
        assert_eq!(candidate.distance, 0.0);
    }

    #[test]
    fn all_zero_runs_yield_nothing() {
        let runs = RunTable::from_runs([0; 8], 5);
        assert!(select_with_degrade(&runs, Position::new(1, 1), Position::new(4, 4)).is_none());
    }
}
