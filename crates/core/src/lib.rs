//! Numerical core for the plumb pendulum simulator.
//!
//! This crate integrates the motion of a simple pendulum,
//!
//! ```text
//! θ'' + (g/L)·sin θ = 0
//! ```
//!
//! with a fixed-step explicit forward Euler scheme and evaluates the
//! closed-form small-angle solution on the same time grid as a comparison
//! baseline. The pieces:
//!
//! - [`State`] — the pendulum at one instant: angle and angular velocity
//! - [`Pendulum`] — physical parameters (g, L) and the state derivative
//! - [`Trajectory`] — the time-ordered sequence of states from one run
//! - [`euler::integrate`] — forward Euler integration of the full equation
//! - [`small_angle::reference`] — the linearized solution, point by point
//! - [`compare`] — both operations on a shared grid, with their difference
//!
//! Both operations are pure: no hidden state, no I/O, bit-identical output
//! for identical inputs. Rendering lives in a separate crate and consumes
//! the trajectories produced here.

mod compare;
mod error;
mod pendulum;
mod state;
mod trajectory;

pub mod euler;
pub mod small_angle;

pub use compare::{Comparison, SimConfig, compare};
pub use error::Error;
pub use pendulum::Pendulum;
pub use state::{Derivative, State};
pub use trajectory::Trajectory;
