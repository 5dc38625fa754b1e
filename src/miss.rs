// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Miss evaluation.
//!
//! For s = xⁿ + yⁿ, the miss against z is the smaller of |s − zⁿ| and
//! |(z+1)ⁿ − s|, and the relative miss is that gap as a percentage of s.

use crate::error::SearchError;

/// Gap between xⁿ + yⁿ and the nearer of zⁿ, (z+1)ⁿ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Miss {
    /// min(|s − zⁿ|, |(z+1)ⁿ − s|)
    pub absolute: u128,
    /// `absolute / s × 100`
    pub relative_percent: f64,
}

impl Miss {
    /// Build a miss from precomputed powers.
    ///
    /// `sum` must be non-zero.
    pub(crate) fn between(sum: u128, lower: u128, upper: u128) -> Self {
        debug_assert!(sum > 0);
        let absolute = sum.abs_diff(lower).min(upper.abs_diff(sum));
        Self {
            absolute,
            relative_percent: absolute as f64 / sum as f64 * 100.0,
        }
    }
}

/// One evaluated candidate (x, y, z, n).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissRecord {
    pub x: u64,
    pub y: u64,
    pub z: u64,
    pub n: u32,
    pub absolute_miss: u128,
    pub relative_miss_percent: f64,
}

impl MissRecord {
    pub fn new(x: u64, y: u64, z: u64, n: u32, miss: Miss) -> Self {
        Self {
            x,
            y,
            z,
            n,
            absolute_miss: miss.absolute,
            relative_miss_percent: miss.relative_percent,
        }
    }
}

/// Evaluate the miss of (x, y, z) for exponent n.
///
/// All arithmetic is checked; an overflow is reported rather than wrapped.
///
/// # Example
///
/// ```
/// use fermat_near_miss::evaluate;
///
/// let miss = evaluate(10, 11, 12, 3).unwrap();
/// assert_eq!(miss.absolute, 134);
/// assert!((miss.relative_percent - 5.75).abs() < 0.01);
/// ```
pub fn evaluate(x: u64, y: u64, z: u64, n: u32) -> Result<Miss, SearchError> {
    let sum = power(x, n)?
        .checked_add(power(y, n)?)
        .ok_or(SearchError::ArithmeticOverflow { base: x.max(y), n })?;
    if sum == 0 {
        return Err(SearchError::ZeroSum { x, y, n });
    }
    let next = z
        .checked_add(1)
        .ok_or(SearchError::ArithmeticOverflow { base: z, n })?;
    Ok(Miss::between(sum, power(z, n)?, power(next, n)?))
}

/// `baseⁿ` in u128, or an overflow error.
pub(crate) fn power(base: u64, n: u32) -> Result<u128, SearchError> {
    (base as u128)
        .checked_pow(n)
        .ok_or(SearchError::ArithmeticOverflow { base, n })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_example() {
        // s = 1000 + 1331 = 2331, 12³ = 1728, 13³ = 2197
        let miss = evaluate(10, 11, 12, 3).unwrap();
        assert_eq!(miss.absolute, 134);
        assert!((miss.relative_percent - 134.0 / 2331.0 * 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_lower_gap_wins() {
        // s = 1000 + 1000 = 2000, 12³ = 1728, 13³ = 2197
        let miss = evaluate(10, 10, 12, 3).unwrap();
        assert_eq!(miss.absolute, 197);
    }

    #[test]
    fn test_z_above_sum() {
        // Both powers exceed s; the nearer one is zⁿ.
        let miss = evaluate(1, 1, 5, 3).unwrap();
        assert_eq!(miss.absolute, 125 - 2);
        assert!(miss.relative_percent > 100.0);
    }

    #[test]
    fn test_exact_hit_for_square_exponent() {
        let miss = evaluate(3, 4, 5, 2).unwrap();
        assert_eq!(miss.absolute, 0);
        assert_eq!(miss.relative_percent, 0.0);
    }

    #[test]
    fn test_zero_sum_rejected() {
        assert_eq!(
            evaluate(0, 0, 3, 3),
            Err(SearchError::ZeroSum { x: 0, y: 0, n: 3 })
        );
    }

    #[test]
    fn test_overflow_reported() {
        assert!(matches!(
            evaluate(u64::MAX, 1, 1, 3),
            Err(SearchError::ArithmeticOverflow { .. })
        ));
        assert!(matches!(
            evaluate(1, 1, u64::MAX, 1),
            Err(SearchError::ArithmeticOverflow { .. })
        ));
    }
}
