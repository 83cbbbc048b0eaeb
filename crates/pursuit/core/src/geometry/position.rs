use std::fmt;

use super::Direction;

/// Discrete grid position expressed in cell coordinates. `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position `steps` cells away along `direction`, saturating at the
    /// `i32` range.
    #[inline]
    pub fn offset(self, direction: Direction, steps: u32) -> Self {
        let (dx, dy) = direction.delta();
        let steps = i32::try_from(steps).unwrap_or(i32::MAX);
        Self::new(
            self.x.saturating_add(dx * steps),
            self.y.saturating_add(dy * steps),
        )
    }

    /// Unit step from `self` toward `other`, each axis clamped to `{-1, 0, 1}`.
    ///
    /// Returns `(0, 0)` when both positions coincide.
    #[inline]
    pub const fn unit_step_toward(self, other: Position) -> (i32, i32) {
        (
            other.x.saturating_sub(self.x).signum(),
            other.y.saturating_sub(self.y).signum(),
        )
    }

    /// The adjacent cell (or `self`) one clamped step toward `other`.
    #[inline]
    pub const fn step_toward(self, other: Position) -> Self {
        let (dx, dy) = self.unit_step_toward(other);
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Straight-line distance, used to score candidate cells.
    pub fn euclidean_distance(self, other: Position) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// King-move distance; two cells are adjacent when this is 1.
    pub fn chebyshev_distance(self, other: Position) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
