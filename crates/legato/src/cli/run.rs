use crate::config::{AxisConfig, Config};
use crate::sim::{self, Mode, Sample, Scenario};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct RunArgs {
    /// Path to the scenario file (TOML or JSON).
    pub config: PathBuf,

    /// How solver output drives each axis.
    #[arg(long, value_enum, default_value = "position")]
    pub mode: Mode,
}

impl RunArgs {
    pub fn run(&self) -> Result<()> {
        // Initialize tracing
        tracing_subscriber::fmt::init();

        let config = Config::from_file(&self.config)?;
        config.validate()?;

        tracing::info!("running scenario {}", self.config.display());

        for axis in &config.axes {
            let scenario = Scenario {
                start: axis.start,
                velocity: axis.velocity,
                target: axis.target,
                target_rate: axis.target_rate,
                accel: config.acceleration,
                timestep: config.timestep,
                steps: config.steps,
            };
            let samples = sim::simulate(&scenario, self.mode)?;
            let last = samples.last().context("axis produced no samples")?;

            if settled(self.mode, axis, config.acceleration, config.timestep, last) {
                tracing::info!(
                    axis = %axis.name,
                    steps = last.step,
                    time = last.time,
                    "settled"
                );
            } else {
                let final_target = axis.target + axis.target_rate * last.time;
                tracing::warn!(
                    axis = %axis.name,
                    position = last.position,
                    velocity = last.velocity,
                    lag = final_target - last.position,
                    "did not settle within the step budget"
                );
            }
        }

        Ok(())
    }
}

/// Whether the axis ended the run settled on its target. Position
/// mode lands exactly; force mode hands the acceleration to an
/// integrator and hovers in a small band around the target, so it
/// gets a tolerance scaled by the step.
fn settled(mode: Mode, axis: &AxisConfig, accel: f64, dt: f64, last: &Sample) -> bool {
    if axis.target_rate != 0.0 {
        return false;
    }
    match mode {
        Mode::Position => last.position == axis.target && last.velocity == 0.0,
        Mode::Force => {
            (axis.target - last.position).abs() <= 2.0 * accel * dt * dt
                && last.velocity.abs() <= 2.0 * accel * dt
        }
    }
}
