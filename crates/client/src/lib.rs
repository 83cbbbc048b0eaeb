//! Headless driver for the pursuit planner.
//!
//! ```text
//! ClientConfig (env) ──→ Scenario + PlannerConfig
//!                              │
//!                          Simulation ──→ Driver ──→ frames on stdout
//!                              ▲             │
//!                          TickClock ────────┘
//! ```
//!
//! [`Simulation`] owns the grid, the agent and the scan overlay; [`Driver`]
//! paces it with a [`TickClock`] and renders every tick.

pub mod clock;
pub mod config;
pub mod driver;
pub mod logging;
pub mod render;
pub mod simulation;

pub use clock::TickClock;
pub use config::ClientConfig;
pub use driver::Driver;
pub use simulation::{EditError, Limits, RunStatus, Simulation};
