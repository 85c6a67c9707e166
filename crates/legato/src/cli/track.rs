use crate::sim::{self, Mode, Scenario};
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct TrackArgs {
    /// Target position to converge on.
    #[arg(long)]
    pub target: f64,

    /// Starting position.
    #[arg(long, default_value_t = 0.0)]
    pub start: f64,

    /// Starting velocity.
    #[arg(long, default_value_t = 0.0)]
    pub velocity: f64,

    /// Maximum acceleration magnitude.
    #[arg(long, default_value_t = 10.0)]
    pub accel: f64,

    /// Seconds per simulated step.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub timestep: f64,

    /// Step budget.
    #[arg(long, default_value_t = 600)]
    pub steps: u32,

    /// Units per second the target moves during the run.
    #[arg(long, default_value_t = 0.0)]
    pub target_rate: f64,

    /// How solver output drives the axis.
    #[arg(long, value_enum, default_value = "position")]
    pub mode: Mode,
}

impl TrackArgs {
    pub fn run(&self) -> Result<()> {
        let scenario = Scenario {
            start: self.start,
            velocity: self.velocity,
            target: self.target,
            target_rate: self.target_rate,
            accel: self.accel,
            timestep: self.timestep,
            steps: self.steps,
        };
        let samples = sim::simulate(&scenario, self.mode)?;

        println!("step,time,position,velocity");
        for sample in &samples {
            println!(
                "{},{:.6},{:.9},{:.9}",
                sample.step, sample.time, sample.position, sample.velocity
            );
        }

        Ok(())
    }
}
