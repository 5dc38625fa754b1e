// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the core data structure passed to every predicate:
//! - Tier 1 (MEMO): the [`PowerTable`] for the run's exponent
//! - Tier 2 (DYNAMIC): the current pair, z window and best record
//!
//! The context is an explicit accumulator: the search owns it, the
//! predicates mutate it, and the best record is read back from it once the
//! engine is exhausted.

use crate::bounds::SearchBounds;
use crate::engine::PredicateResult;
use crate::error::SearchError;
use crate::memo::PowerTable;
use crate::miss::{Miss, MissRecord};
use crate::state::statistics::{Counters, Statistics};
use crate::state::SearchState;
use tracing::debug;

/// Search context combining MEMO and DYNAMIC state.
///
/// ```text
/// SearchContext {
///     bounds: SearchBounds,      // validated input
///     memo: PowerTable,          // Tier 1: immutable
///     state: SearchState,        // Tier 2: mutable
///     statistics: Statistics,    // counters
/// }
/// ```
#[derive(Debug)]
pub struct SearchContext {
    /// Validated exponent and window
    pub bounds: SearchBounds,
    /// Immutable precomputed powers (Tier 1)
    pub memo: PowerTable,
    /// Mutable search state (Tier 2)
    pub state: SearchState,
    /// Search counters
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a context, tabulating every power the search can reach.
    pub fn new(bounds: SearchBounds) -> Result<Self, SearchError> {
        let memo = PowerTable::new(bounds.n(), bounds.max_base())?;
        Ok(Self::with_memo(bounds, memo))
    }

    /// Create a context with an existing power table.
    ///
    /// The table must cover `bounds.max_base()` for the exponent `bounds.n()`.
    pub fn with_memo(bounds: SearchBounds, memo: PowerTable) -> Self {
        debug_assert_eq!(memo.n(), bounds.n());
        Self {
            bounds,
            memo,
            state: SearchState::new(),
            statistics: Statistics::new(),
        }
    }

    /// Evaluate the current (x, y) against z.
    pub fn evaluate(&mut self, z: u64) -> Result<Miss, SearchError> {
        self.statistics.increment_counter(Counters::Evaluations);
        self.memo.miss(self.state.x, self.state.y, z)
    }

    /// Offer the current (x, y) with z as a candidate for the best record.
    pub fn consider(&mut self, z: u64, miss: Miss) {
        let record = MissRecord::new(self.state.x, self.state.y, z, self.bounds.n(), miss);
        if self.state.offer(record) {
            self.statistics.increment_counter(Counters::Improvements);
            debug!(
                x = record.x,
                y = record.y,
                z = record.z,
                absolute_miss = %record.absolute_miss,
                relative_miss_percent = record.relative_miss_percent,
                "new smallest relative miss"
            );
        }
    }

    /// Record `failure` and tell the engine to stop.
    pub fn fail(&mut self, failure: SearchError) -> PredicateResult {
        if self.state.failure.is_none() {
            self.state.failure = Some(failure);
        }
        PredicateResult::Suspend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> SearchContext {
        SearchContext::new(SearchBounds::new(3, 11).unwrap()).unwrap()
    }

    #[test]
    fn test_memo_covers_z_plus_one_at_k_plus_one() {
        let mut ctx = context();
        ctx.state.x = 11;
        ctx.state.y = 11;
        assert!(ctx.evaluate(12).is_ok());
        assert!(ctx.evaluate(13).is_err());
    }

    #[test]
    fn test_consider_tracks_improvements() {
        let mut ctx = context();
        ctx.state.x = 10;
        ctx.state.y = 11;
        let worse = ctx.evaluate(6).unwrap();
        let better = ctx.evaluate(11).unwrap();
        ctx.consider(6, worse);
        ctx.consider(11, better);
        ctx.consider(6, worse);
        assert_eq!(ctx.statistics.get(Counters::Evaluations), 2);
        assert_eq!(ctx.statistics.get(Counters::Improvements), 2);
        assert_eq!(ctx.state.best.unwrap().z, 11);
    }

    #[test]
    fn test_fail_keeps_first_error() {
        let mut ctx = context();
        assert_eq!(ctx.fail(SearchError::NoCandidates), PredicateResult::Suspend);
        ctx.fail(SearchError::ZeroSum { x: 0, y: 0, n: 3 });
        assert_eq!(ctx.state.failure, Some(SearchError::NoCandidates));
    }
}
