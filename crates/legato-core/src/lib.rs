//! Bounded-acceleration motion control.
//!
//! A closed-form two-phase solver that converges a scalar value onto
//! a target without overshooting a stationary one, while never
//! exceeding a configured acceleration magnitude. The solver is
//! stateless; callers own and thread velocity between steps.
//!
//! This crate intentionally avoids any host- or rendering-specific
//! dependencies.

pub mod axis;
pub mod solve;

pub use axis::Axis;
pub use solve::{SolveError, Step, solve_force, solve_position};
