//! Fixed-timestep driver for the solver.
//!
//! Plays the role of the embedding application: it steps one axis at
//! a fixed timestep, either writing the solved position directly or
//! handing the solved acceleration to a semi-implicit Euler
//! integrator the way a physics engine would.

use anyhow::Result;
use clap::ValueEnum;
use legato_core::{Axis, solve_force};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// The solver output is written to the position directly.
    Position,
    /// The solver returns an acceleration which an external
    /// integrator applies; the integrator owns the velocity.
    Force,
}

#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub start: f64,
    pub velocity: f64,
    pub target: f64,
    /// Units per second the target drifts during the run.
    pub target_rate: f64,
    pub accel: f64,
    pub timestep: f64,
    pub steps: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub step: u32,
    pub time: f64,
    pub position: f64,
    pub velocity: f64,
}

/// Step the scenario, recording one sample per step. Position mode
/// stops early once a stationary target is reached exactly.
pub fn simulate(scenario: &Scenario, mode: Mode) -> Result<Vec<Sample>> {
    let dt = scenario.timestep;
    let mut target = scenario.target;
    let mut axis = Axis {
        position: scenario.start,
        velocity: scenario.velocity,
    };
    let mut samples = Vec::with_capacity(scenario.steps as usize);

    for step in 1..=scenario.steps {
        target += scenario.target_rate * dt;
        match mode {
            Mode::Position => {
                axis.seek(target, scenario.accel, dt)?;
            }
            Mode::Force => {
                let accel = solve_force(axis.position, target, axis.velocity, scenario.accel, dt)?;
                axis.velocity += accel * dt;
                axis.position += axis.velocity * dt;
            }
        }
        samples.push(Sample {
            step,
            time: step as f64 * dt,
            position: axis.position,
            velocity: axis.velocity,
        });
        if mode == Mode::Position && scenario.target_rate == 0.0 && axis.arrived(target) {
            break;
        }
    }

    Ok(samples)
}
