//! Scored-frontier strategy.
//!
//! Runs are not capped by a radius: every direction extends until it hits a
//! blocked cell or the grid edge. Seeing the target along any straight line
//! commits a step straight at it. Otherwise each frontier cell is scored by
//! its distance to the target, raised to the power 1.5 once per blocked
//! neighbour, and the lowest score wins. A frontier bordering the target wins
//! outright.

use crate::geometry::{Direction, Position};
use crate::grid::{Grid, ScanOverlay};

use super::{Decision, Resolution, RunTable};

const OBSTACLE_EXPONENT: f64 = 1.5;

pub(crate) fn decide(
    grid: &Grid,
    origin: Position,
    target: Position,
    mut overlay: Option<&mut ScanOverlay>,
) -> (Decision, Option<RunTable>) {
    let limit = grid.longest_side();
    let mut runs = [0u32; Direction::COUNT];

    for i in 1..=limit {
        let mut extended = false;

        for direction in Direction::ALL {
            let run = &mut runs[direction.index()];
            if *run != i - 1 {
                continue;
            }

            let cell = origin.offset(direction, i);
            if grid.is_blocked(cell) {
                continue;
            }
            if cell == target {
                let decision = Decision::step(origin.step_toward(target), Resolution::TargetSighted);
                return (decision, None);
            }

            *run = i;
            extended = true;
            if let Some(overlay) = overlay.as_deref_mut() {
                overlay.mark(cell, direction);
            }
        }

        if !extended {
            break;
        }
    }

    let runs = RunTable::from_runs(runs, limit);
    let decision = match best_frontier(grid, &runs, origin, target) {
        Some(frontier) => Decision::step(origin.step_toward(frontier), Resolution::Scored),
        None => Decision::step(origin, Resolution::Stalled),
    };

    (decision, Some(runs))
}

fn best_frontier(grid: &Grid, runs: &RunTable, origin: Position, target: Position) -> Option<Position> {
    let mut best: Option<(Position, f64)> = None;

    for (direction, _) in runs.iter() {
        let Some(frontier) = runs.frontier_cell(origin, direction) else {
            continue;
        };

        let mut score = frontier.euclidean_distance(target);
        for neighbour_direction in Direction::ALL {
            let neighbour = frontier.offset(neighbour_direction, 1);
            if !grid.contains(neighbour) {
                continue;
            }
            if neighbour == target {
                return Some(frontier);
            }
            if grid.is_blocked(neighbour) {
                score = score.powf(OBSTACLE_EXPONENT);
            }
        }

        if best.is_none_or(|(_, current)| score < current) {
            best = Some((frontier, score));
        }
    }

    best.map(|(frontier, _)| frontier)
}
