use thiserror::Error;

/// Errors produced when configuring a solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// The discount factor must lie in (0, 1].
    #[error("discount factor must be in (0, 1], got {0}")]
    InvalidDiscount(f64),
}

pub type Result<T> = std::result::Result<T, SolverError>;
