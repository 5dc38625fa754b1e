// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for bounds validation and miss evaluation.

use std::fmt;

/// Errors surfaced to the caller of the search.
///
/// The first four variants come from validating [`crate::SearchBounds`];
/// the rest guard the arithmetic of the evaluator and the power table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Exponent is not in the open interval (2, 12).
    ExponentOutOfRange { n: i64 },

    /// Upper bound is not greater than 10.
    BoundTooSmall { k: i64 },

    /// kⁿ would not fit in the platform's signed 64-bit integer.
    BoundTooLarge { k: u64, n: u32, max_k: u64 },

    /// Lower end of the x, y window is zero or above k.
    LowerBoundOutOfRange { lower_bound: u64, k: u64 },

    /// A power or sum overflowed u128.
    ArithmeticOverflow { base: u64, n: u32 },

    /// xⁿ + yⁿ is zero, so the relative miss is undefined.
    ZeroSum { x: u64, y: u64, n: u32 },

    /// A base was requested that the power table was not built for.
    BaseOutOfTable { base: u64, max_base: u64 },

    /// The search window contained no candidates.
    NoCandidates,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::ExponentOutOfRange { .. } | SearchError::BoundTooSmall { .. } => {
                write!(f, "Invalid input. Please make sure 2 < n < 12 and k > 10.")
            }
            SearchError::BoundTooLarge { max_k, .. } => {
                write!(f, "k should be less than {} to avoid overflow.", max_k + 1)
            }
            SearchError::LowerBoundOutOfRange { lower_bound, k } => {
                write!(
                    f,
                    "Lower bound {} must be between 1 and k ({})",
                    lower_bound, k
                )
            }
            SearchError::ArithmeticOverflow { base, n } => {
                write!(f, "{}^{} overflows 128-bit arithmetic", base, n)
            }
            SearchError::ZeroSum { x, y, n } => {
                write!(f, "{}^{} + {}^{} is zero", x, n, y, n)
            }
            SearchError::BaseOutOfTable { base, max_base } => {
                write!(f, "Base {} is outside the power table (max {})", base, max_base)
            }
            SearchError::NoCandidates => write!(f, "Search window contained no candidates"),
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_errors_share_message() {
        let n = SearchError::ExponentOutOfRange { n: 2 }.to_string();
        let k = SearchError::BoundTooSmall { k: 10 }.to_string();
        assert_eq!(n, k);
        assert!(n.contains("2 < n < 12"));
    }

    #[test]
    fn test_overflow_message_names_limit() {
        let err = SearchError::BoundTooLarge {
            k: 60,
            n: 11,
            max_k: 52,
        };
        assert_eq!(err.to_string(), "k should be less than 53 to avoid overflow.");
    }
}
