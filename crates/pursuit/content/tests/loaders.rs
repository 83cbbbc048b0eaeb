use std::path::PathBuf;

use pursuit_content::{ConfigLoader, ContentFactory, Preset, ScenarioLoader, ScenarioWriter};
use pursuit_core::{Position, Strategy};

fn shipped_data() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"))
}

#[test]
fn shipped_config_uses_defaults() {
    let config = shipped_data().load_config().unwrap();
    assert_eq!(config.radius, 5);
    assert_eq!(config.strategy, Strategy::LookAround);
}

#[test]
fn shipped_scenarios_are_listed_and_load() {
    let factory = shipped_data();
    let names = factory.scenario_names().unwrap();
    assert_eq!(names, vec!["column", "pocket", "wall_corner"]);

    for name in &names {
        let scenario = factory.load_scenario(name).unwrap();
        assert_eq!(&scenario.name, name);
    }
}

#[test]
fn shipped_files_match_presets() {
    let factory = shipped_data();
    for preset in [Preset::WallCorner, Preset::Pocket] {
        let from_file = factory.load_scenario(preset.as_ref()).unwrap();
        let built = preset.build().unwrap();
        assert_eq!(from_file.grid, built.grid, "{preset}");
        assert_eq!(from_file.agent, built.agent, "{preset}");
    }
}

#[test]
fn edited_grid_survives_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sessions").join("edited.ron");

    let mut scenario = Preset::OpenField.build().unwrap();
    scenario.grid.toggle(Position::new(4, 4)).unwrap();
    scenario.grid.toggle(Position::new(5, 4)).unwrap();

    ScenarioWriter::save(&path, "edited", &scenario.grid, &scenario.agent).unwrap();
    let loaded = ScenarioLoader::load(&path).unwrap();

    assert_eq!(loaded.name, "edited");
    assert_eq!(loaded.grid, scenario.grid);
    assert!(loaded.grid.is_blocked(Position::new(5, 4)));
    assert_eq!(loaded.agent.location(), scenario.agent.location());
    assert_eq!(loaded.agent.target(), scenario.agent.target());
}

#[test]
fn unnamed_scenario_takes_file_stem() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corridor.ron");
    std::fs::write(
        &path,
        "(layout: [\"#####\", \".....\", \"#####\"], agent: (0, 1), target: (4, 1))",
    )
    .unwrap();

    let scenario = ScenarioLoader::load(&path).unwrap();
    assert_eq!(scenario.name, "corridor");
}

#[test]
fn config_parses_strategy_names() {
    let config = ConfigLoader::parse("radius = 3\nstrategy = \"scored_frontier\"\n").unwrap();
    assert_eq!(config.radius, 3);
    assert_eq!(config.strategy, Strategy::ScoredFrontier);

    let partial = ConfigLoader::parse("radius = 2\n").unwrap();
    assert_eq!(partial.strategy, Strategy::LookAround);
}

#[test]
fn config_rejects_zero_radius() {
    assert!(ConfigLoader::parse("radius = 0\n").is_err());
}

#[test]
fn config_rejects_unknown_strategy() {
    assert!(ConfigLoader::parse("strategy = \"breadth_first\"\n").is_err());
}

#[test]
fn factory_reports_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let factory = ContentFactory::new(dir.path());

    assert!(factory.load_config().is_err());
    assert!(factory.load_scenario("absent").is_err());
    assert!(factory.scenario_names().is_err());
}
