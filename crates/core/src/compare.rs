use crate::{Error, Pendulum, State, Trajectory, euler, small_angle};

/// Configuration for one simulation run: initial condition and time grid.
///
/// Built explicitly at the call site; nothing in this crate reads
/// configuration from the environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// State at t = 0.
    pub initial: State,
    /// Step size in seconds. Must be strictly positive.
    pub dt: f64,
    /// Number of integration steps; the resulting trajectories hold
    /// `steps + 1` entries.
    pub steps: usize,
}

/// The Euler and small-angle trajectories for one shared grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Forward Euler integration of the full nonlinear equation.
    pub euler: Trajectory,
    /// Closed-form solution of the linearized equation.
    pub small_angle: Trajectory,
}

impl Comparison {
    /// Largest |θ_euler − θ_ref| across the grid.
    ///
    /// Small for small amplitudes, where the linearization holds; grows
    /// visibly over long horizons for large ones. That divergence is the
    /// point of the comparison, not a defect.
    #[must_use]
    pub fn max_angle_difference(&self) -> f64 {
        self.euler
            .states()
            .iter()
            .zip(self.small_angle.states())
            .map(|(e, r)| (e.angle - r.angle).abs())
            .fold(0.0, f64::max)
    }
}

/// Runs both operations on the same grid.
///
/// The two computations never feed each other; they are composed only
/// here, and rendering the result is a separate, optional step.
///
/// # Errors
///
/// Returns [`Error::NonPositiveTimeStep`] if `config.dt <= 0`.
pub fn compare(pendulum: &Pendulum, config: SimConfig) -> Result<Comparison, Error> {
    Ok(Comparison {
        euler: euler::integrate(pendulum, config)?,
        small_angle: small_angle::reference(pendulum, config)?,
    })
}
