//! `pursuit` binary entry point.
use anyhow::Result;
use pursuit_client::logging::setup_logging;
use pursuit_client::{ClientConfig, Driver, Simulation, TickClock};
use pursuit_core::Planner;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = setup_logging(config.session_id.as_deref())?;

    let scenario = config.load_scenario()?;
    let planner_config = config.load_planner_config()?;
    tracing::info!(
        scenario = %scenario.name,
        dimensions = %scenario.grid.dimensions(),
        radius = planner_config.radius,
        strategy = %planner_config.strategy,
        "Configuration loaded"
    );

    let planner = Planner::new(planner_config)?;
    let mut clock = TickClock::new(config.tick_period);
    if config.start_paused {
        clock.pause();
    }

    let mut driver = Driver::new(Simulation::new(scenario, planner), clock, config.limits())
        .with_overlay(config.show_overlay);
    driver.run(std::io::stdin().lock(), std::io::stdout().lock())?;

    if let Some(path) = &config.save_path {
        driver.simulation().save(path)?;
    }
    Ok(())
}
