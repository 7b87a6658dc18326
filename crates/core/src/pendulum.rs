use crate::{Derivative, State};

/// Physical parameters of a simple pendulum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pendulum {
    /// Gravitational acceleration, in m/s².
    pub gravity: f64,
    /// Pendulum length, in m.
    pub length: f64,
}

impl Default for Pendulum {
    /// Earth gravity (9.81 m/s²) and a 1 m pendulum.
    fn default() -> Self {
        Self {
            gravity: 9.81,
            length: 1.0,
        }
    }
}

impl Pendulum {
    /// Creates a pendulum from gravity (m/s²) and length (m).
    #[must_use]
    pub fn new(gravity: f64, length: f64) -> Self {
        Self { gravity, length }
    }

    /// Evaluates the state derivative of the full (nonlinear) equation:
    ///
    /// ```text
    /// θ' = ω
    /// ω' = −(g/L)·sin θ
    /// ```
    #[must_use]
    pub fn derivative(&self, state: &State) -> Derivative {
        Derivative {
            d_angle: state.angular_velocity,
            d_angular_velocity: -(self.gravity / self.length) * state.angle.sin(),
        }
    }

    /// The natural frequency √(g/L) of the linearized pendulum, in rad/s.
    #[must_use]
    pub fn natural_frequency(&self) -> f64 {
        (self.gravity / self.length).sqrt()
    }
}
