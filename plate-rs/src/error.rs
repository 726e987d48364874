use thiserror::Error;

/// Result type alias for operations of this library.
pub type Result<T> = std::result::Result<T, PlateError>;

/// Errors that can occur while importing orders, evaluating or optimizing plate layouts.
#[derive(Debug, Error)]
pub enum PlateError {
    /// A row of the order list could not be parsed.
    #[error("malformed order on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// The input cannot be processed, e.g. the utilization of a solution without plates.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The bounded genetic driver ran out of attempts.
    #[error(
        "no improvement above {threshold_pct}% found after {attempts} attempts (best: {best_improvement_pct:.3}%)"
    )]
    NoImprovementFound {
        attempts: usize,
        threshold_pct: f64,
        best_improvement_pct: f64,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
