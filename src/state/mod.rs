// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable during the search).
//!
//! - The (x, y) pair chosen by the axis predicates
//! - The z window of the bisection
//! - The best record found so far
//!
//! Nothing here is undone on backtracking: the axis predicates overwrite
//! x and y on every choice, the bisection resets its window on round 0,
//! and the best record only ever improves.

pub mod statistics;

use crate::error::SearchError;
use crate::miss::MissRecord;

/// Closed interval of z still to be searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZWindow {
    pub low: u64,
    pub high: u64,
}

impl ZWindow {
    pub fn new(low: u64, high: u64) -> Self {
        Self { low, high }
    }

    pub fn is_empty(&self) -> bool {
        self.low > self.high
    }

    pub fn mid(&self) -> u64 {
        self.low + (self.high - self.low) / 2
    }
}

/// Mutable search state.
#[derive(Debug, Default)]
pub struct SearchState {
    /// Current x (set by `AxisPredicate(X)`).
    pub x: u64,

    /// Current y (set by `AxisPredicate(Y)`).
    pub y: u64,

    /// Remaining z interval of the current bisection.
    pub window: Option<ZWindow>,

    /// Smallest relative miss seen anywhere so far.
    pub best: Option<MissRecord>,

    /// First error raised by a predicate; the engine suspends when set.
    pub failure: Option<SearchError>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the best record if `candidate` is strictly better.
    ///
    /// Returns whether the best record changed. Ties keep the earlier record.
    pub fn offer(&mut self, candidate: MissRecord) -> bool {
        let improved = match &self.best {
            Some(best) => candidate.relative_miss_percent < best.relative_miss_percent,
            None => true,
        };
        if improved {
            self.best = Some(candidate);
        }
        improved
    }
}
