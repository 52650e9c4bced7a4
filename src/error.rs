//! Error type shared by the grid and the experiment driver.

use thiserror::Error;

/// Errors raised by percolation operations.
///
/// All of them are caller errors: nothing is retried or recovered
/// internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PercolationError {
    /// A size, trial count, or coordinate outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, PercolationError>;
