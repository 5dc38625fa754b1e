// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive scan over z.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};

/// Offers every z in `[1, k]`, in increasing order, to the best record.
///
/// Finds the true minimum for each pair at k evaluations per pair, against
/// roughly 2·log₂k for [`crate::predicates::BisectPredicate`].
#[derive(Debug, Default)]
pub struct LinearScanPredicate;

impl LinearScanPredicate {
    pub fn new() -> Self {
        Self
    }
}

impl Predicate for LinearScanPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        for z in 1..=ctx.bounds.k() {
            match ctx.evaluate(z) {
                Ok(miss) => ctx.consider(z, miss),
                Err(err) => return ctx.fail(err),
            }
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "LinearScan"
    }
}
