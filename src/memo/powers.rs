// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Precomputed powers bⁿ.
//!
//! Every step of the search needs xⁿ, yⁿ, zⁿ and (z+1)ⁿ. The bases are all
//! small and the exponent is fixed for the whole run, so the powers are
//! tabulated once, with checked arithmetic, and the search only does lookups.

use crate::error::SearchError;
use crate::miss::{power, Miss};

/// Table of bⁿ for b in `0..=max_base`.
#[derive(Debug, Clone)]
pub struct PowerTable {
    n: u32,
    powers: Vec<u128>,
}

impl PowerTable {
    /// Tabulate bⁿ for every b up to and including `max_base`.
    ///
    /// Fails if any entry overflows u128.
    pub fn new(n: u32, max_base: u64) -> Result<Self, SearchError> {
        let powers = (0..=max_base)
            .map(|base| power(base, n))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { n, powers })
    }

    /// The exponent the table was built for.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Largest base in the table.
    pub fn max_base(&self) -> u64 {
        self.powers.len() as u64 - 1
    }

    /// bⁿ, if b is in the table.
    pub fn get(&self, base: u64) -> Result<u128, SearchError> {
        usize::try_from(base)
            .ok()
            .and_then(|index| self.powers.get(index))
            .copied()
            .ok_or(SearchError::BaseOutOfTable {
                base,
                max_base: self.max_base(),
            })
    }

    /// Same result as [`crate::evaluate`]`(x, y, z, n)`, from table lookups.
    pub fn miss(&self, x: u64, y: u64, z: u64) -> Result<Miss, SearchError> {
        let sum = self
            .get(x)?
            .checked_add(self.get(y)?)
            .ok_or(SearchError::ArithmeticOverflow {
                base: x.max(y),
                n: self.n,
            })?;
        if sum == 0 {
            return Err(SearchError::ZeroSum { x, y, n: self.n });
        }
        Ok(Miss::between(sum, self.get(z)?, self.get(z.saturating_add(1))?))
    }
}
