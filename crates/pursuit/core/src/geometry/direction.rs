/// One of the eight compass directions.
///
/// Discriminants are the canonical scan order; tie-breaking between equally
/// good candidates always keeps the lowest index.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    South = 0,
    SouthEast = 1,
    East = 2,
    NorthEast = 3,
    North = 4,
    NorthWest = 5,
    West = 6,
    SouthWest = 7,
}

impl Direction {
    pub const COUNT: usize = 8;

    /// All directions in scan order.
    pub const ALL: [Direction; Self::COUNT] = [
        Direction::South,
        Direction::SouthEast,
        Direction::East,
        Direction::NorthEast,
        Direction::North,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::South => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::NorthEast => (1, -1),
            Direction::North => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::SouthWest => (-1, 1),
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Direction::delta`]; `None` for `(0, 0)` or non-unit deltas.
    pub const fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, 1) => Some(Direction::South),
            (1, 1) => Some(Direction::SouthEast),
            (1, 0) => Some(Direction::East),
            (1, -1) => Some(Direction::NorthEast),
            (0, -1) => Some(Direction::North),
            (-1, -1) => Some(Direction::NorthWest),
            (-1, 0) => Some(Direction::West),
            (-1, 1) => Some(Direction::SouthWest),
            _ => None,
        }
    }
}
