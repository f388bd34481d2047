//! Typed errors for the sampling core.
//!
//! A call either yields a fully valid result or fails with one of these;
//! partial results are never returned.

use thiserror::Error;

/// Errors reported by [`crate::sampler::sample_unique`] and the draw layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// The range is empty: `min > max`.
    #[error("invalid range: min {min} exceeds max {max}")]
    InvalidRange { min: i64, max: i64 },

    /// More unique values requested than the range contains.
    #[error("cannot draw {requested} unique values from a range of {available}")]
    InsufficientRange { requested: u64, available: u64 },

    /// The rejection loop hit its draw cap without filling the set.
    ///
    /// With the cap set well above the expected draw count this only fires
    /// if the underlying RNG is broken (e.g. returns a constant).
    #[error("draw budget of {budget} exhausted after collecting {collected} of {requested} values")]
    DrawBudgetExceeded {
        budget: u64,
        collected: u64,
        requested: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = SampleError::InvalidRange { min: 5, max: 3 };
        assert_eq!(e.to_string(), "invalid range: min 5 exceeds max 3");

        let e = SampleError::InsufficientRange {
            requested: 10,
            available: 5,
        };
        assert_eq!(
            e.to_string(),
            "cannot draw 10 unique values from a range of 5"
        );

        let e = SampleError::DrawBudgetExceeded {
            budget: 100_000,
            collected: 1,
            requested: 2,
        };
        assert_eq!(
            e.to_string(),
            "draw budget of 100000 exhausted after collecting 1 of 2 values"
        );
    }
}
