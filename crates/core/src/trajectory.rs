use crate::State;

/// The time-ordered result of one simulation run.
///
/// Holds parallel sequences of times and states, always of length
/// `steps + 1`: element 0 is the initial condition, element i+1 follows
/// from element i. Built in a single forward pass and immutable once
/// returned.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    times: Vec<f64>,
    states: Vec<State>,
}

impl Trajectory {
    /// Creates an empty trajectory pre-sized for `steps + 1` entries.
    pub(crate) fn with_capacity(len: usize) -> Self {
        Self {
            times: Vec::with_capacity(len),
            states: Vec::with_capacity(len),
        }
    }

    /// Appends one (time, state) entry.
    pub(crate) fn push(&mut self, time: f64, state: State) {
        self.times.push(time);
        self.states.push(state);
    }

    /// Number of recorded entries (steps + 1 for a completed run).
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the trajectory holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// The time grid, t_i = i·dt.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// The recorded states, index-aligned with [`times`](Self::times).
    #[must_use]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The angle sequence Θ, in radians.
    #[must_use]
    pub fn angles(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.angle).collect()
    }

    /// The angular-velocity sequence Ω, in rad/s.
    #[must_use]
    pub fn angular_velocities(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.angular_velocity).collect()
    }

    /// `[t, θ]` pairs ready for a 2D line plot.
    #[must_use]
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.times
            .iter()
            .zip(&self.states)
            .map(|(&t, s)| [t, s.angle])
            .collect()
    }
}
