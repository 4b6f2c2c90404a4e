// src/error.rs

use thiserror::Error;

/// Result type alias using polyarith's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in polynomial operations
#[derive(Error, Debug)]
pub enum Error {
    /// The divisor of a Euclidean division was the zero polynomial
    #[error("Division by zero polynomial")]
    DivisionByZero,

    /// Fit inputs were not paired point for point
    #[error("Length mismatch: {xs} x values but {ys} y values")]
    LengthMismatch {
        /// Number of x coordinates
        xs: usize,
        /// Number of y coordinates
        ys: usize,
    },

    /// Text could not be read as a polynomial
    #[error("Cannot parse '{input}' as a polynomial: {reason}")]
    Parse {
        /// The offending input
        input: String,
        /// What was wrong with it
        reason: String,
    },

    /// A coefficient does not fit the requested coefficient type
    #[error("Coefficient {value} cannot be represented in the target type")]
    InvalidCoefficient {
        /// The coefficient, rendered as text
        value: String,
    },

    /// Newton-Raphson stopped without meeting its tolerance
    #[error("Root search did not converge after {iterations} iterations (last estimate {last_estimate})")]
    NoConvergence {
        /// The final iterate
        last_estimate: f64,
        /// Iterations performed
        iterations: usize,
    },

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
