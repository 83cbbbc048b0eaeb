//! Scenario loader and writer.
//!
//! A scenario file describes the grid either as text rows (`layout`), as an
//! explicit list of blocked cells (`blocked`), or both. `dimensions` is
//! required when no layout is given and must match the layout otherwise.
//!
//! ```ron
//! (
//!     name: "wall_corner",
//!     layout: [
//!         "..........",
//!         "..#####...",
//!     ],
//!     blocked: [(0, 0)],
//!     agent: (1, 1),
//!     target: (8, 1),
//! )
//! ```

use std::path::Path;

use pursuit_core::{Agent, Grid, Position};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::scenario::Scenario;

/// Scenario data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScenarioRon {
    #[serde(default)]
    name: String,
    /// `(0, 0)` when the layout alone defines the size.
    #[serde(default)]
    dimensions: (u32, u32),
    #[serde(default)]
    layout: Vec<String>,
    #[serde(default)]
    blocked: Vec<(i32, i32)>,
    agent: (i32, i32),
    target: (i32, i32),
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    ///
    /// Unnamed scenarios take the file stem as their name.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        let fallback_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "scenario".to_string());

        let scenario = Self::parse(&content, &fallback_name)?;
        tracing::info!(
            name = %scenario.name,
            dimensions = %scenario.grid.dimensions(),
            blocked = scenario.grid.blocked_cells().count(),
            "Scenario loaded from {}",
            path.display()
        );
        Ok(scenario)
    }

    pub fn parse(content: &str, fallback_name: &str) -> LoadResult<Scenario> {
        let data: ScenarioRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        let (width, height) = data.dimensions;
        let mut grid = if data.layout.is_empty() {
            if (width, height) == (0, 0) {
                anyhow::bail!("Scenario needs either `layout` or `dimensions`");
            }
            Grid::new(width, height)?
        } else {
            let grid = Grid::from_ascii(data.layout.as_slice())?;
            if (width, height) != (0, 0) && (width, height) != (grid.width(), grid.height()) {
                anyhow::bail!(
                    "Scenario dimensions {}x{} disagree with its {} layout",
                    width,
                    height,
                    grid.dimensions()
                );
            }
            grid
        };

        // Then override with explicitly listed cells
        for (x, y) in data.blocked {
            grid.set_blocked(Position::new(x, y), true)?;
        }

        let name = if data.name.is_empty() {
            fallback_name.to_string()
        } else {
            data.name
        };
        let scenario = Scenario::new(name, grid, data.agent.into(), data.target.into())?;
        Ok(scenario)
    }
}

/// Writer that persists a scenario, including editor changes, back to RON.
pub struct ScenarioWriter;

impl ScenarioWriter {
    /// Serialize the grid as layout rows plus the agent's current cell and target.
    pub fn to_ron(name: &str, grid: &Grid, agent: &Agent) -> LoadResult<String> {
        let location = agent.location();
        let target = agent.target();
        let data = ScenarioRon {
            name: name.to_string(),
            dimensions: (grid.width(), grid.height()),
            layout: grid.to_ascii(),
            blocked: Vec::new(),
            agent: (location.x, location.y),
            target: (target.x, target.y),
        };

        ron::ser::to_string_pretty(&data, ron::ser::PrettyConfig::new())
            .map_err(|e| anyhow::anyhow!("Failed to serialize scenario RON: {}", e))
    }

    pub fn save(path: &Path, name: &str, grid: &Grid, agent: &Agent) -> LoadResult<()> {
        let content = Self::to_ron(name, grid, agent)?;
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!("Failed to create directory {}: {}", parent.display(), e)
            })?;
        }
        std::fs::write(path, content)
            .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))?;

        tracing::info!(name, "Scenario saved to {}", path.display());
        Ok(())
    }
}
