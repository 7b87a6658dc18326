//! Fixed-step forward Euler integration of the pendulum equations.
//!
//! The second-order equation θ'' + (g/L)·sin θ = 0 is split into the coupled
//! first-order system θ' = ω, ω' = −(g/L)·sin θ and stepped explicitly:
//!
//! ```text
//! θ_{i+1} = θ_i + ω_i·dt
//! ω_{i+1} = ω_i − (g/L)·sin(θ_i)·dt
//! t_{i+1} = t_i + dt
//! ```
//!
//! Each update uses only the immediately preceding state, so the walk is a
//! single forward pass over pre-sized buffers. First-order accuracy means
//! the error shrinks with dt but accumulates over long horizons; comparing
//! against [`small_angle::reference`](crate::small_angle::reference) makes
//! that drift visible.

use crate::{Error, Pendulum, SimConfig, Trajectory};

/// Integrates the pendulum forward in time with explicit forward Euler.
///
/// Produces a [`Trajectory`] of `config.steps + 1` entries whose first entry
/// is the initial condition. With `steps = 0` the result holds only the
/// initial condition. The output is a pure function of the inputs: two calls
/// with identical arguments return bit-identical trajectories.
///
/// Angles are never wrapped, and non-finite initial values are not rejected;
/// they contaminate the output from their first use onward, which keeps
/// divergence observable to the caller.
///
/// # Errors
///
/// Returns [`Error::NonPositiveTimeStep`] if `config.dt <= 0`, before any
/// computation begins.
pub fn integrate(pendulum: &Pendulum, config: SimConfig) -> Result<Trajectory, Error> {
    let SimConfig { initial, dt, steps } = config;

    if dt <= 0.0 {
        return Err(Error::NonPositiveTimeStep { dt });
    }

    let mut trajectory = Trajectory::with_capacity(steps + 1);
    trajectory.push(0.0, initial);

    let mut time = 0.0;
    let mut state = initial;

    for _ in 1..=steps {
        let derivative = pendulum.derivative(&state);
        state = state.step(derivative, dt);
        time += dt;
        trajectory.push(time, state);
    }

    Ok(trajectory)
}
