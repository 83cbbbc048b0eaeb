use arrayvec::ArrayVec;

use crate::geometry::{Direction, Position};
use crate::grid::{Grid, ScanOverlay};

/// Unobstructed run length per direction, capped at the scan radius.
///
/// `run(d)` counts consecutive open cells starting next to the origin. A run
/// stops at the first blocked cell or the grid edge, whichever comes first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunTable {
    runs: [u32; Direction::COUNT],
    radius: u32,
}

impl RunTable {
    pub(crate) const fn from_runs(runs: [u32; Direction::COUNT], radius: u32) -> Self {
        Self { runs, radius }
    }

    /// Probes every direction out to `radius`, step by step.
    ///
    /// `radius` is capped at the grid's longest side, past which every probe
    /// is off the grid.
    ///
    /// Each scanned open cell that extends an unbroken run is marked in
    /// `overlay` with the direction that reached it.
    pub fn scan(
        grid: &Grid,
        origin: Position,
        radius: u32,
        mut overlay: Option<&mut ScanOverlay>,
    ) -> Self {
        let radius = radius.min(grid.longest_side());
        let mut runs = [0u32; Direction::COUNT];

        for i in 1..=radius {
            for direction in Direction::ALL {
                let cell = origin.offset(direction, i);
                if !grid.contains(cell) || grid.is_blocked(cell) {
                    continue;
                }

                // Only unbroken runs grow.
                let run = &mut runs[direction.index()];
                if *run == i - 1 {
                    *run = i;
                    if let Some(overlay) = overlay.as_deref_mut() {
                        overlay.mark(cell, direction);
                    }
                }
            }
        }

        Self::from_runs(runs, radius)
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn run(&self, direction: Direction) -> u32 {
        self.runs[direction.index()]
    }

    pub fn as_array(&self) -> [u32; Direction::COUNT] {
        self.runs
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, u32)> + '_ {
        Direction::ALL
            .into_iter()
            .map(|direction| (direction, self.run(direction)))
    }

    /// True when not a single neighbouring cell is open.
    pub fn is_enclosed(&self) -> bool {
        self.runs.iter().all(|&run| run == 0)
    }

    /// Directions whose run reaches exactly `radius`, in scan order.
    pub fn frontier_at(&self, radius: u32) -> ArrayVec<Direction, { Direction::COUNT }> {
        self.iter()
            .filter(|&(_, run)| run == radius)
            .map(|(direction, _)| direction)
            .collect()
    }

    /// Farthest open cell along `direction`, or `None` for a zero run.
    pub fn frontier_cell(&self, origin: Position, direction: Direction) -> Option<Position> {
        match self.run(direction) {
            0 => None,
            run => Some(origin.offset(direction, run)),
        }
    }
}
