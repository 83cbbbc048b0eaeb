//! Obstacle grid and the scan overlay sidecar.
//!
//! The grid is the only world data the planner reads. Editors may change cells
//! between ticks; dimensions are fixed for the lifetime of a grid.
mod overlay;

use std::fmt;

use crate::error::GridError;
use crate::geometry::Position;

pub use overlay::ScanOverlay;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
}

impl GridDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as i64) < i64::from(self.width)
            && (position.y as i64) < i64::from(self.height)
    }

    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of an in-bounds position.
    fn index_of(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        Some(position.y as usize * self.width as usize + position.x as usize)
    }

    fn position_of(&self, index: usize) -> Position {
        let width = self.width as usize;
        Position::new((index % width) as i32, (index / width) as i32)
    }
}

impl fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Binary cell state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Open,
    Blocked,
}

impl Cell {
    pub const fn is_blocked(self) -> bool {
        matches!(self, Cell::Blocked)
    }

    pub const fn from_blocked(blocked: bool) -> Self {
        if blocked { Cell::Blocked } else { Cell::Open }
    }

    /// Layout glyph: `.` open, `#` blocked. `|` is also read as blocked.
    pub const fn glyph(self) -> char {
        match self {
            Cell::Open => '.',
            Cell::Blocked => '#',
        }
    }

    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Cell::Open),
            '#' | '|' => Some(Cell::Blocked),
            _ => None,
        }
    }
}

/// Fixed-size map of open and blocked cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dimensions: GridDimensions,
    cells: Vec<Cell>,
}

impl Grid {
    /// Largest width or height; every cell coordinate fits in an `i32`.
    pub const MAX_SIDE: u32 = i32::MAX as u32;

    /// Creates an all-open grid.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if !(1..=Self::MAX_SIDE).contains(&width) || !(1..=Self::MAX_SIDE).contains(&height) {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let dimensions = GridDimensions::new(width, height);
        Ok(Self {
            dimensions,
            cells: vec![Cell::Open; dimensions.area()],
        })
    }

    /// Creates a grid with the given cells blocked.
    pub fn with_blocked<I>(width: u32, height: u32, blocked: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut grid = Self::new(width, height)?;
        for position in blocked {
            grid.set_blocked(position, true)?;
        }
        Ok(grid)
    }

    /// Parses a text layout, one string per row. All rows must have equal width.
    pub fn from_ascii<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        let mut grid = Self::new(width as u32, height as u32)?;

        for (y, row) in rows.iter().enumerate() {
            let found = row.as_ref().chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, glyph) in row.as_ref().chars().enumerate() {
                let cell = Cell::from_glyph(glyph).ok_or(GridError::UnknownGlyph { glyph, x, y })?;
                grid.cells[y * width + x] = cell;
            }
        }

        Ok(grid)
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    /// The larger of width and height. No straight run from an in-bounds
    /// cell reaches further than this.
    pub fn longest_side(&self) -> u32 {
        self.width().max(self.height())
    }

    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.dimensions
            .index_of(position)
            .map(|index| self.cells[index])
    }

    /// Out-of-bounds positions report blocked.
    pub fn is_blocked(&self, position: Position) -> bool {
        self.cell(position).is_none_or(Cell::is_blocked)
    }

    /// In bounds and not blocked.
    pub fn is_open(&self, position: Position) -> bool {
        !self.is_blocked(position)
    }

    pub fn set_blocked(&mut self, position: Position, blocked: bool) -> Result<(), GridError> {
        let index = self.checked_index(position)?;
        self.cells[index] = Cell::from_blocked(blocked);
        Ok(())
    }

    /// Flips a cell and returns whether it is now blocked.
    pub fn toggle(&mut self, position: Position) -> Result<bool, GridError> {
        let index = self.checked_index(position)?;
        let blocked = !self.cells[index].is_blocked();
        self.cells[index] = Cell::from_blocked(blocked);
        Ok(blocked)
    }

    pub fn blocked_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_blocked())
            .map(|(index, _)| self.dimensions.position_of(index))
    }

    /// Text layout understood by [`Grid::from_ascii`].
    pub fn to_ascii(&self) -> Vec<String> {
        self.cells
            .chunks(self.dimensions.width as usize)
            .map(|row| row.iter().map(|cell| cell.glyph()).collect())
            .collect()
    }

    fn checked_index(&self, position: Position) -> Result<usize, GridError> {
        self.dimensions
            .index_of(position)
            .ok_or(GridError::OutOfBounds {
                position,
                dimensions: self.dimensions,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 4),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 4
            })
        );
        assert_eq!(
            Grid::new(Grid::MAX_SIDE + 1, 1),
            Err(GridError::InvalidDimensions {
                width: Grid::MAX_SIDE + 1,
                height: 1
            })
        );
    }

    #[test]
    fn longest_side_picks_larger_dimension() {
        assert_eq!(Grid::new(7, 3).unwrap().longest_side(), 7);
        assert_eq!(Grid::new(2, 9).unwrap().longest_side(), 9);
    }

    #[test]
    fn out_of_bounds_reads_as_blocked() {
        let grid = Grid::new(10, 10).unwrap();
        assert!(!grid.is_blocked(Position::new(9, 9)));
        assert!(grid.is_blocked(Position::new(10, 9)));
        assert!(grid.is_blocked(Position::new(9, 10)));
        assert!(grid.is_blocked(Position::new(-1, 0)));
        assert_eq!(grid.cell(Position::new(0, -1)), None);
    }

    #[test]
    fn set_blocked_validates_bounds() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_blocked(Position::new(2, 1), true).unwrap();
        assert!(grid.is_blocked(Position::new(2, 1)));

        let err = grid.set_blocked(Position::new(3, 1), true).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { .. }));
    }

    #[test]
    fn toggle_flips_state() {
        let mut grid = Grid::new(2, 2).unwrap();
        let cell = Position::new(1, 0);
        assert!(grid.toggle(cell).unwrap());
        assert!(grid.is_blocked(cell));
        assert!(!grid.toggle(cell).unwrap());
        assert!(grid.is_open(cell));
    }

    #[test]
    fn ascii_layout_parses_and_renders() {
        let rows = ["..|.", "#...", "...."];
        let grid = Grid::from_ascii(&rows).unwrap();
        assert_eq!(grid.dimensions(), GridDimensions::new(4, 3));
        assert!(grid.is_blocked(Position::new(2, 0)));
        assert!(grid.is_blocked(Position::new(0, 1)));
        assert_eq!(
            grid.blocked_cells().collect::<Vec<_>>(),
            vec![Position::new(2, 0), Position::new(0, 1)]
        );
        assert_eq!(grid.to_ascii(), vec!["..#.", "#...", "...."]);
    }

    #[test]
    fn ascii_layout_errors() {
        assert!(matches!(
            Grid::from_ascii(&["...", ".."]),
            Err(GridError::RaggedRow { row: 1, .. })
        ));
        assert!(matches!(
            Grid::from_ascii(&["..x"]),
            Err(GridError::UnknownGlyph { glyph: 'x', x: 2, y: 0 })
        ));
        assert!(matches!(
            Grid::from_ascii::<&str>(&[]),
            Err(GridError::InvalidDimensions { .. })
        ));
    }
}
