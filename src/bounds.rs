// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validated search bounds.
//!
//! All range checks happen here, before any search starts. The search itself
//! trusts a [`SearchBounds`] and performs no further validation.

use crate::error::SearchError;

/// Smallest x and y examined unless overridden.
pub const DEFAULT_LOWER_BOUND: u64 = 10;

/// Exclusive lower limit on n.
pub const MIN_EXPONENT_EXCLUSIVE: i64 = 2;

/// Exclusive upper limit on n.
pub const MAX_EXPONENT_EXCLUSIVE: i64 = 12;

/// Exclusive lower limit on k.
pub const MIN_BOUND_EXCLUSIVE: i64 = 10;

/// Largest kⁿ the search accepts, the platform's maximum signed integer.
pub const MAX_POWER: u128 = i64::MAX as u128;

/// Exponent and window of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBounds {
    n: u32,
    k: u64,
    lower_bound: u64,
}

impl SearchBounds {
    /// Validate raw integers as read from the user.
    ///
    /// Requires 2 < n < 12, k > 10 and kⁿ ≤ `i64::MAX`. The lower bound
    /// starts at [`DEFAULT_LOWER_BOUND`].
    pub fn new(n: i64, k: i64) -> Result<Self, SearchError> {
        if n <= MIN_EXPONENT_EXCLUSIVE || n >= MAX_EXPONENT_EXCLUSIVE {
            return Err(SearchError::ExponentOutOfRange { n });
        }
        if k <= MIN_BOUND_EXCLUSIVE {
            return Err(SearchError::BoundTooSmall { k });
        }
        // Both casts are in range after the checks above.
        let n = n as u32;
        let k = k as u64;
        let max_k = max_bound(n);
        if k > max_k {
            return Err(SearchError::BoundTooLarge { k, n, max_k });
        }
        Ok(Self {
            n,
            k,
            lower_bound: DEFAULT_LOWER_BOUND,
        })
    }

    /// Replace the lower end of the x, y window.
    pub fn with_lower_bound(self, lower_bound: u64) -> Result<Self, SearchError> {
        if lower_bound == 0 || lower_bound > self.k {
            return Err(SearchError::LowerBoundOutOfRange {
                lower_bound,
                k: self.k,
            });
        }
        Ok(Self {
            lower_bound,
            ..self
        })
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn k(&self) -> u64 {
        self.k
    }

    pub fn lower_bound(&self) -> u64 {
        self.lower_bound
    }

    /// Number of values x (or y) takes.
    pub fn window_len(&self) -> u64 {
        self.k - self.lower_bound + 1
    }

    /// Largest base the search evaluates: z + 1 where z can reach k + 1.
    pub fn max_base(&self) -> u64 {
        self.k + 2
    }
}

/// Largest k with kⁿ ≤ [`MAX_POWER`].
pub fn max_bound(n: u32) -> u64 {
    if n == 0 {
        return u64::MAX;
    }
    // Start from the floating point root and correct for rounding.
    let mut k = (MAX_POWER as f64).powf(1.0 / n as f64) as u64;
    while !fits(k, n) {
        k -= 1;
    }
    while fits(k + 1, n) {
        k += 1;
    }
    k
}

fn fits(base: u64, n: u32) -> bool {
    (base as u128)
        .checked_pow(n)
        .is_some_and(|power| power <= MAX_POWER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_smallest_valid_inputs() {
        let bounds = SearchBounds::new(3, 11).unwrap();
        assert_eq!(bounds.n(), 3);
        assert_eq!(bounds.k(), 11);
        assert_eq!(bounds.lower_bound(), DEFAULT_LOWER_BOUND);
        assert_eq!(bounds.window_len(), 2);
        assert_eq!(bounds.max_base(), 13);
    }

    #[test]
    fn test_rejects_exponent_at_limits() {
        assert_eq!(
            SearchBounds::new(2, 20),
            Err(SearchError::ExponentOutOfRange { n: 2 })
        );
        assert_eq!(
            SearchBounds::new(12, 20),
            Err(SearchError::ExponentOutOfRange { n: 12 })
        );
        assert_eq!(
            SearchBounds::new(-4, 20),
            Err(SearchError::ExponentOutOfRange { n: -4 })
        );
    }

    #[test]
    fn test_rejects_small_bound() {
        assert_eq!(
            SearchBounds::new(3, 10),
            Err(SearchError::BoundTooSmall { k: 10 })
        );
        assert_eq!(
            SearchBounds::new(3, -100),
            Err(SearchError::BoundTooSmall { k: -100 })
        );
    }

    #[test]
    fn test_max_bound_values() {
        assert_eq!(max_bound(3), 2_097_151);
        assert_eq!(max_bound(4), 55_108);
        assert_eq!(max_bound(7), 511);
        assert_eq!(max_bound(11), 52);
    }

    #[test]
    fn test_overflow_guard() {
        assert!(SearchBounds::new(11, 52).is_ok());
        assert_eq!(
            SearchBounds::new(11, 53),
            Err(SearchError::BoundTooLarge {
                k: 53,
                n: 11,
                max_k: 52
            })
        );
    }

    #[test]
    fn test_lower_bound_override() {
        let bounds = SearchBounds::new(3, 20).unwrap();
        assert_eq!(bounds.with_lower_bound(1).unwrap().window_len(), 20);
        assert_eq!(bounds.with_lower_bound(20).unwrap().window_len(), 1);
        assert!(bounds.with_lower_bound(0).is_err());
        assert!(bounds.with_lower_bound(21).is_err());
    }
}
