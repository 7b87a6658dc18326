/// Errors raised by the simulation operations.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// The time grid requires a strictly positive step size.
    ///
    /// Raised before any computation begins; no partial trajectory is
    /// produced. A NaN step size is not caught here — non-finite inputs
    /// propagate through the arithmetic instead, so divergence stays
    /// observable in the output.
    #[error("time step must be strictly positive, got {dt}")]
    NonPositiveTimeStep { dt: f64 },
}
