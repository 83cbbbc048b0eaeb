//! Headless run loop.
use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::Result;

use crate::clock::TickClock;
use crate::render::{render_frame, status_line};
use crate::simulation::{Limits, RunStatus, Simulation};

/// Drives a [`Simulation`] until it ends, writing a frame after every tick.
///
/// While the clock is paused, every line read from the step input requests
/// one tick. A line reading `r` resumes timed ticking instead. A line reading
/// `q`, or the end of the input, stops the run.
pub struct Driver {
    simulation: Simulation,
    clock: TickClock,
    limits: Limits,
    show_overlay: bool,
}

impl Driver {
    pub fn new(simulation: Simulation, clock: TickClock, limits: Limits) -> Self {
        Self {
            simulation,
            clock,
            limits,
            show_overlay: true,
        }
    }

    #[must_use]
    pub fn with_overlay(mut self, show_overlay: bool) -> Self {
        self.show_overlay = show_overlay;
        self
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn run<R, W>(&mut self, mut steps: R, mut out: W) -> Result<RunStatus>
    where
        R: BufRead,
        W: Write,
    {
        tracing::info!(
            scenario = self.simulation.name(),
            paused = self.clock.is_paused(),
            period = ?self.clock.period(),
            "Run started"
        );
        self.write_frame(&mut out, "start")?;

        let mut line = String::new();
        let status = loop {
            let status = self.simulation.status(self.limits);
            if status != RunStatus::Running {
                break status;
            }

            if self.clock.is_paused() {
                line.clear();
                if steps.read_line(&mut line)? == 0 {
                    break RunStatus::Interrupted;
                }
                match line.trim() {
                    "q" => break RunStatus::Interrupted,
                    "r" => {
                        tracing::info!(tick = self.simulation.ticks(), "Resumed");
                        self.clock.resume();
                    }
                    _ => self.clock.request_step(),
                }
            } else {
                std::thread::sleep(self.clock.remaining(Instant::now()));
            }

            if !self.clock.should_tick(Instant::now()) {
                continue;
            }

            let outcome = self.simulation.advance();
            self.write_frame(&mut out, outcome.resolution.as_str())?;
        };

        tracing::info!(
            scenario = self.simulation.name(),
            %status,
            ticks = self.simulation.ticks(),
            at = %self.simulation.agent().location(),
            "Run finished"
        );
        writeln!(out, "{status} after {} ticks", self.simulation.ticks())?;
        out.flush()?;
        Ok(status)
    }

    fn write_frame<W: Write>(&self, out: &mut W, resolution: &str) -> Result<()> {
        let simulation = &self.simulation;
        let overlay = self.show_overlay.then(|| simulation.overlay());

        writeln!(
            out,
            "{}",
            status_line(simulation.ticks(), simulation.agent(), resolution)
        )?;
        write!(
            out,
            "{}",
            render_frame(simulation.grid(), simulation.agent(), overlay)
        )?;
        writeln!(out)?;
        Ok(())
    }
}
