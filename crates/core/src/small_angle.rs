//! Closed-form solution of the linearized pendulum equation.
//!
//! With sin θ ≈ θ the equation of motion becomes simple harmonic, and for
//! initial conditions (θ₀, ω₀) it has the exact solution
//!
//! ```text
//! θ(t) = θ₀·cos(Ω·t) + (ω₀/Ω)·sin(Ω·t)
//! ω(t) = −θ₀·Ω·sin(Ω·t) + ω₀·cos(Ω·t)
//! ```
//!
//! where Ω = √(g/L). For a release from rest (ω₀ = 0) this reduces to the
//! familiar θ₀·cos(Ω·t).
//!
//! Each grid point is evaluated directly from its own t_i rather than by
//! recurrence, so this reference carries no accumulated rounding error and
//! serves as the baseline the Euler walk is judged against.

use crate::{Error, Pendulum, SimConfig, State, Trajectory};

/// Evaluates the small-angle solution on the grid t_i = i·dt.
///
/// Produces a [`Trajectory`] with the same shape as
/// [`euler::integrate`](crate::euler::integrate): `config.steps + 1`
/// entries, the first being the initial condition. The approximation is
/// only locally valid — close to the Euler result for small θ₀, visibly
/// divergent for large amplitudes.
///
/// # Errors
///
/// Returns [`Error::NonPositiveTimeStep`] if `config.dt <= 0`, before any
/// computation begins.
pub fn reference(pendulum: &Pendulum, config: SimConfig) -> Result<Trajectory, Error> {
    let SimConfig { initial, dt, steps } = config;

    if dt <= 0.0 {
        return Err(Error::NonPositiveTimeStep { dt });
    }

    let frequency = pendulum.natural_frequency();
    let mut trajectory = Trajectory::with_capacity(steps + 1);

    for i in 0..=steps {
        #[allow(clippy::cast_precision_loss)]
        let t = i as f64 * dt;
        let (sin, cos) = (frequency * t).sin_cos();

        let angle = initial.angle * cos + initial.angular_velocity / frequency * sin;
        let angular_velocity =
            -initial.angle * frequency * sin + initial.angular_velocity * cos;

        trajectory.push(t, State::new(angle, angular_velocity));
    }

    Ok(trajectory)
}
