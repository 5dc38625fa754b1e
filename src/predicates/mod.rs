// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! # Organization
//!
//! - `axis`: AxisPredicate, choosing x or y from the window
//! - `bisect`: BisectPredicate, the reference z search
//! - `linear`: LinearScanPredicate, an exhaustive z search
//! - Built-in predicate: `FailPredicate`

pub mod axis;
pub mod bisect;
pub mod linear;

// Re-export main predicates for convenience
pub use axis::{Axis, AxisPredicate};
pub use bisect::BisectPredicate;
pub use linear::LinearScanPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Placed at the end of
/// the sequence it makes the engine enumerate every choice of every earlier
/// predicate.
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}
