// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bisection over z.
//!
//! For the current (x, y), z is searched in `[1, k]`. Each round tests the
//! midpoint of the remaining window and compares its relative miss with that
//! of mid + 1: if mid + 1 is strictly better the window moves up, otherwise
//! down. Every midpoint is offered to the best record, not only the last.
//!
//! The rule assumes the relative miss falls and then rises as z grows. That
//! holds away from the bracketing z but is not guaranteed, so this is a
//! heuristic: it can step past the best z of a pair. Use
//! [`crate::predicates::LinearScanPredicate`] for an exhaustive scan.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::ZWindow;

/// One midpoint per round, `SuccessSamePredicate` until the window is empty.
#[derive(Debug, Default)]
pub struct BisectPredicate;

impl BisectPredicate {
    pub fn new() -> Self {
        Self
    }
}

impl Predicate for BisectPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if round == 0 {
            ctx.state.window = Some(ZWindow::new(1, ctx.bounds.k()));
        }
        let window = match ctx.state.window {
            Some(window) if !window.is_empty() => window,
            _ => return PredicateResult::Success,
        };

        let mid = window.mid();
        let here = match ctx.evaluate(mid) {
            Ok(miss) => miss,
            Err(err) => return ctx.fail(err),
        };
        ctx.consider(mid, here);
        let above = match ctx.evaluate(mid + 1) {
            Ok(miss) => miss,
            Err(err) => return ctx.fail(err),
        };

        ctx.state.window = Some(if above.relative_percent < here.relative_percent {
            ZWindow::new(mid + 1, window.high)
        } else {
            // mid >= 1, so this cannot underflow
            ZWindow::new(window.low, mid - 1)
        });
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "Bisect"
    }
}
