//! Error types for Summatim operations.
//!
//! This module defines the main error type [`SummatimError`] which represents
//! all caller-facing faults. The engine itself is built from total functions:
//! empty or degenerate input produces empty/zero results, never an error. The
//! only fault conditions are invalid configuration values and serialization
//! failures.
//!
//! # Example
//!
//! ```rust
//! use summatim_core::{Strategy, SummatimError, summarize};
//!
//! match summarize("Some text.", 1.5, Strategy::Graph) {
//!     Err(SummatimError::InvalidRatio { ratio }) => {
//!         println!("Ratio {} is out of range", ratio);
//!     }
//!     other => panic!("expected a configuration fault, got {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Main error type for summarization and metric operations.
///
/// Configuration faults are signaled explicitly rather than silently coerced:
/// an out-of-range ratio or an unrecognized strategy tag is always an error.
#[derive(Error, Debug)]
pub enum SummatimError {
    /// Summary ratio outside the half-open interval (0, 1].
    ///
    /// The ratio is the fraction of sentences to keep; zero or negative
    /// ratios select nothing and ratios above 1 are meaningless.
    #[error("Invalid ratio {ratio}: must be greater than 0 and at most 1")]
    InvalidRatio { ratio: f64 },

    /// Unrecognized scoring strategy tag.
    ///
    /// Returned when parsing a strategy name that is neither the frequency
    /// nor the graph strategy.
    #[error("Unknown strategy: {0} (valid options: frequency, graph)")]
    UnknownStrategy(String),

    /// Result serialization failure.
    ///
    /// Wraps serde_json errors raised while converting a [`crate::Summary`]
    /// or [`crate::ReadabilityReport`] to JSON.
    #[error("Failed to serialize output: {0}")]
    Serialization(String),
}

/// Result type alias for SummatimError.
///
/// This is a convenience alias for `std::result::Result<T, SummatimError>`.
pub type Result<T> = std::result::Result<T, SummatimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_ratio_display() {
        let err = SummatimError::InvalidRatio { ratio: 1.5 };
        assert!(err.to_string().contains("1.5"));
        assert!(err.to_string().contains("Invalid ratio"));
    }

    #[test]
    fn test_unknown_strategy_display() {
        let err = SummatimError::UnknownStrategy("cosine".to_string());
        assert!(err.to_string().contains("cosine"));
        assert!(err.to_string().contains("frequency"));
    }

    #[test]
    fn test_serialization_display() {
        let err = SummatimError::Serialization("boom".to_string());
        assert!(err.to_string().contains("boom"));
    }
}
