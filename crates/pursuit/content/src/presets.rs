//! Built-in scenarios.

use pursuit_core::{Grid, Position, ScenarioError};

use crate::scenario::Scenario;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Preset {
    /// Empty 10x10 field, agent in the lower-left, target upper-right.
    OpenField,
    /// A wall across row 2 bending down column 6, between agent and target.
    WallCorner,
    /// U-shaped pocket the target sits inside, open from below only.
    Pocket,
    /// Agent walled in on all sides.
    Enclosed,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::OpenField,
        Preset::WallCorner,
        Preset::Pocket,
        Preset::Enclosed,
    ];

    pub fn build(self) -> Result<Scenario, ScenarioError> {
        let (rows, location, target): (&[&str], Position, Position) = match self {
            Preset::OpenField => (OPEN_FIELD.as_slice(), Position::new(1, 8), Position::new(8, 1)),
            Preset::WallCorner => (WALL_CORNER.as_slice(), Position::new(1, 8), Position::new(8, 1)),
            Preset::Pocket => (POCKET.as_slice(), Position::new(1, 8), Position::new(5, 5)),
            Preset::Enclosed => (ENCLOSED.as_slice(), Position::new(2, 2), Position::new(4, 0)),
        };
        let grid = Grid::from_ascii(rows)?;
        Scenario::new(self.as_ref(), grid, location, target)
    }
}

static OPEN_FIELD: [&str; 10] = [
    "..........",
    "..........",
    "..........",
    "..........",
    "..........",
    "..........",
    "..........",
    "..........",
    "..........",
    "..........",
];

static WALL_CORNER: [&str; 10] = [
    "..........",
    "..........",
    "..#####...",
    "......#...",
    "......#...",
    "......#...",
    "..........",
    "..........",
    "..........",
    "..........",
];

static POCKET: [&str; 10] = [
    "..........",
    ".#......#.",
    ".#......#.",
    ".#......#.",
    ".#......#.",
    ".##....##.",
    "..###.##..",
    "....###...",
    "..........",
    "..........",
];

static ENCLOSED: [&str; 5] = [
    ".....", //
    ".###.", //
    ".#.#.", //
    ".###.", //
    ".....",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn every_preset_builds() {
        for preset in Preset::ALL {
            let scenario = preset.build().unwrap();
            assert_eq!(scenario.name, preset.to_string());
            assert!(scenario.grid.is_open(scenario.agent.location()));
        }
    }

    #[test]
    fn presets_parse_from_names() {
        assert_eq!(Preset::from_str("wall_corner").unwrap(), Preset::WallCorner);
        assert_eq!(Preset::from_str("Pocket").unwrap(), Preset::Pocket);
        assert!(Preset::from_str("maze").is_err());
    }

    #[test]
    fn wall_corner_matches_the_column_layout() {
        let scenario = Preset::WallCorner.build().unwrap();
        for y in 3..=5 {
            assert!(scenario.grid.is_blocked(Position::new(6, y)));
        }
        assert_eq!(scenario.grid.blocked_cells().count(), 8);
    }
}
