/// The pendulum at one instant: angle and angular velocity.
///
/// Angles are unwrapped: a swing past the vertical keeps accumulating, so
/// `angle` may leave ±π. This matches the physical coordinate being
/// integrated, not a display convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    /// Angle from the vertical, in radians.
    pub angle: f64,
    /// Angular velocity, in radians per second.
    pub angular_velocity: f64,
}

/// Time derivative of a [`State`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivative {
    /// dθ/dt, in radians per second.
    pub d_angle: f64,
    /// dω/dt, in radians per second squared.
    pub d_angular_velocity: f64,
}

impl State {
    /// Creates a state from an angle (rad) and angular velocity (rad/s).
    #[must_use]
    pub fn new(angle: f64, angular_velocity: f64) -> Self {
        Self {
            angle,
            angular_velocity,
        }
    }

    /// A pendulum released from rest at the given angle.
    #[must_use]
    pub fn released_at(angle: f64) -> Self {
        Self::new(angle, 0.0)
    }

    /// Returns the state after one explicit first-order step:
    /// `state + derivative * dt`.
    ///
    /// Non-finite values are not trapped; they propagate into the result.
    #[must_use]
    pub fn step(&self, derivative: Derivative, dt: f64) -> Self {
        Self {
            angle: self.angle + derivative.d_angle * dt,
            angular_velocity: self.angular_velocity + derivative.d_angular_velocity * dt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn step_applies_derivative_scaled_by_dt() {
        let state = State::new(1.0, -2.0);
        let derivative = Derivative {
            d_angle: -2.0,
            d_angular_velocity: 0.5,
        };

        let next = state.step(derivative, 0.1);

        assert_relative_eq!(next.angle, 0.8);
        assert_relative_eq!(next.angular_velocity, -1.95);
    }

    #[test]
    fn zero_derivative_leaves_state_unchanged() {
        let state = State::released_at(0.25);
        let derivative = Derivative {
            d_angle: 0.0,
            d_angular_velocity: 0.0,
        };

        assert_eq!(state.step(derivative, 10.0), state);
    }

    #[test]
    fn non_finite_derivative_propagates() {
        let state = State::new(0.0, 0.0);
        let derivative = Derivative {
            d_angle: f64::NAN,
            d_angular_velocity: f64::INFINITY,
        };

        let next = state.step(derivative, 0.01);

        assert!(next.angle.is_nan());
        assert!(next.angular_velocity.is_infinite());
    }
}
