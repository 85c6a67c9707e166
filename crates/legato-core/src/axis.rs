//! Per-axis state threading.
//!
//! The solver is stateless; whoever calls it owns the velocity and
//! must hand it back on the next call. `Axis` packages that contract
//! for callers stepping one scalar axis per frame. Multi-dimensional
//! motion is composed from independent axes.

use crate::solve::{self, Result};

/// Position and caller-owned velocity for one controlled axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Axis {
    pub position: f64,
    pub velocity: f64,
}

impl Axis {
    /// At rest at the given position.
    pub fn at(position: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
        }
    }

    /// Advance one timestep toward `target`, updating both fields.
    /// Returns the new position.
    pub fn seek(&mut self, target: f64, accel: f64, dt: f64) -> Result<f64> {
        let step = solve::solve_position(self.position, target, self.velocity, accel, dt)?;
        self.position = step.position;
        self.velocity = step.velocity;
        Ok(self.position)
    }

    /// Exact arrival: on the target with no residual velocity.
    pub fn arrived(&self, target: f64) -> bool {
        self.position == target && self.velocity == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_without_overshoot() {
        // 0 -> 10 at a = 5 with 100 ms steps. Analytic arrival is
        // 2*sqrt(2) s, ~29 steps.
        let mut axis = Axis::at(0.0);
        for _ in 0..40 {
            axis.seek(10.0, 5.0, 0.1).unwrap();
            assert!(axis.position <= 10.0, "overshot to {}", axis.position);
        }
        assert!((axis.position - 10.0).abs() < 1e-3);
        assert!(axis.velocity.abs() < 1e-3);
        assert!(axis.arrived(10.0));
    }

    #[test]
    fn converges_from_a_running_start() {
        // Initial velocity below the critical speed: still no
        // overshoot.
        let mut axis = Axis {
            position: 0.0,
            velocity: 2.0,
        };
        for _ in 0..100 {
            axis.seek(10.0, 5.0, 0.1).unwrap();
            assert!(axis.position <= 10.0, "overshot to {}", axis.position);
        }
        assert!(axis.arrived(10.0));
    }

    #[test]
    fn approaches_from_above() {
        let mut axis = Axis::at(4.0);
        for _ in 0..100 {
            axis.seek(-4.0, 2.0, 0.05).unwrap();
            assert!(axis.position >= -4.0, "overshot to {}", axis.position);
        }
        assert!(axis.arrived(-4.0));
    }

    #[test]
    fn stays_put_once_arrived() {
        let mut axis = Axis::at(1.0);
        for _ in 0..50 {
            axis.seek(1.0, 3.0, 0.016).unwrap();
        }
        assert_eq!(axis.position, 1.0);
        assert_eq!(axis.velocity, 0.0);
    }

    #[test]
    fn tracks_a_receding_target_with_bounded_lag() {
        // Target recedes at 5 units/s against a = 2: never caught,
        // but the lag settles near v^2 / (2a) instead of growing.
        let (a, dt, rate) = (2.0, 0.1, 5.0);
        let mut axis = Axis::at(0.0);
        let mut target = 5.0;
        let mut lags = Vec::new();
        for _ in 0..600 {
            target += rate * dt;
            axis.seek(target, a, dt).unwrap();
            lags.push(target - axis.position);
        }
        let early = lags[200..400].iter().cloned().fold(f64::MIN, f64::max);
        let late = lags[400..].iter().cloned().fold(f64::MIN, f64::max);
        assert!(late < 20.0, "lag diverged to {late}");
        assert!(late <= early + 1.0, "lag still growing: {early} -> {late}");
    }
}
