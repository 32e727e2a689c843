use thiserror::Error;

/// Library-wide error type for idfcheck operations.
#[derive(Debug, Error)]
pub enum GateError {
    /// Fewer than two version arguments were supplied.
    #[error("Not enough parameters")]
    NotEnoughParameters,
}
