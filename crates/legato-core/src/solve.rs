//! Closed-form two-phase seek.
//!
//! One call plans a time-symmetric acceleration profile - full
//! acceleration toward the target, then full braking - that lands on
//! the target with zero relative velocity, and integrates the slice
//! of that profile covered by the caller's timestep. Re-planning
//! happens every call, so a target that moves between calls is picked
//! up automatically.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SolveError {
    #[error("acceleration bound must be positive, got {0}")]
    NonPositiveAcceleration(f64),
    #[error("timestep must be positive, got {0}")]
    NonPositiveTimestep(f64),
}

pub type Result<T> = std::result::Result<T, SolveError>;

/// Position and velocity at the end of one solved timestep.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Step {
    pub position: f64,
    pub velocity: f64,
}

// Terminal state of the profile slice covered by one timestep.
// `Arrived` marks the discrete-step clamp: the profile reaches the
// target partway through the step, and braking for the whole step
// would overshoot.
enum Outcome {
    Arrived,
    Moving { position: f64, velocity: f64 },
}

fn check_params(accel: f64, dt: f64) -> Result<()> {
    // `!(x > 0.0)` also rejects NaN.
    if !(accel > 0.0) {
        return Err(SolveError::NonPositiveAcceleration(accel));
    }
    if !(dt > 0.0) {
        return Err(SolveError::NonPositiveTimestep(dt));
    }
    Ok(())
}

// Shared derivation for both entry points.
//
// Phase 1 runs at constant acceleration `a1` until the halfway time,
// phase 2 at `-a1` until arrival. `a1` points toward the target
// unless the current velocity already exceeds the critical speed
// (the fastest approach that full braking can still stop on the
// target), in which case the profile flips to brake-now,
// accelerate-later.
fn advance(current: f64, target: f64, velocity: f64, accel: f64, dt: f64) -> Outcome {
    let delta = target - current;
    let toward = if delta >= 0.0 { 1.0 } else { -1.0 };

    // v^2 = 2*a*|delta|, signed toward the target.
    let critical = toward * (2.0 * accel * delta.abs()).sqrt();
    let overshooting = if delta >= 0.0 {
        velocity > critical
    } else {
        velocity < critical
    };
    let a1 = if overshooting {
        -toward * accel
    } else {
        toward * accel
    };
    // Velocity normalized to the sign of a1.
    let vs = if a1 >= 0.0 { velocity } else { -velocity };

    // Time at which the acceleration sign must flip so that velocity
    // hits zero exactly on the target. The max() absorbs round-off
    // that can push a zero discriminant slightly negative.
    let halfway = ((0.5 * velocity * velocity + a1 * delta).max(0.0).sqrt() - vs) / accel;

    if dt <= halfway {
        // The whole step stays inside phase 1. Position must use the
        // pre-update velocity.
        return Outcome::Moving {
            position: current + velocity * dt + 0.5 * a1 * dt * dt,
            velocity: velocity + a1 * dt,
        };
    }

    // Braking from the flip takes halfway + vs/accel seconds.
    let arrival = 2.0 * halfway + vs / accel;
    if arrival <= dt {
        return Outcome::Arrived;
    }

    // State at the flip instant, then brake for the remainder.
    let flip_velocity = velocity + a1 * halfway;
    let flip_position = current + velocity * halfway + 0.5 * a1 * halfway * halfway;
    let rest = dt - halfway;
    let position = flip_position + flip_velocity * rest - 0.5 * a1 * rest * rest;
    // Phase 2 approaches the target moving in the direction of a1.
    // When arrival beats dt by less than round-off, the remainder can
    // land a hair past the target; snap that to arrival.
    if (target - position) * a1 <= 0.0 {
        return Outcome::Arrived;
    }
    Outcome::Moving {
        position,
        velocity: flip_velocity - a1 * rest,
    }
}

/// Advance one timestep toward `target`, returning the new position
/// and the velocity the caller must supply on the next call.
///
/// When the profile arrives within this step, the result is clamped
/// to exactly `target` with zero velocity rather than braking past
/// it.
pub fn solve_position(
    current: f64,
    target: f64,
    velocity: f64,
    accel: f64,
    dt: f64,
) -> Result<Step> {
    check_params(accel, dt)?;
    Ok(match advance(current, target, velocity, accel, dt) {
        Outcome::Arrived => Step {
            position: target,
            velocity: 0.0,
        },
        Outcome::Moving { position, velocity } => Step { position, velocity },
    })
}

/// Average acceleration over this timestep that reproduces the
/// [`solve_position`] trajectory when an external integrator applies
/// it for exactly `dt`. Velocity is owned by that integrator and is
/// not touched here.
///
/// In the arrival case this returns `(target - current) / dt`, a
/// simplified single-step correction; it does not re-derive the
/// discrete clamp that position mode applies, so near the target an
/// integrator settles into a small band instead of landing exactly.
pub fn solve_force(current: f64, target: f64, velocity: f64, accel: f64, dt: f64) -> Result<f64> {
    check_params(accel, dt)?;
    Ok(match advance(current, target, velocity, accel, dt) {
        Outcome::Arrived => (target - current) / dt,
        Outcome::Moving {
            velocity: terminal, ..
        } => (terminal - velocity) / dt,
    })
}
