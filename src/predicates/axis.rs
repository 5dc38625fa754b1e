// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Choice of x or y.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};

/// Which coordinate an [`AxisPredicate`] sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Offers every value of the window `[lower_bound, k]`, in increasing order,
/// as a choice for x or y.
#[derive(Debug)]
pub struct AxisPredicate {
    axis: Axis,
}

impl AxisPredicate {
    pub fn new(axis: Axis) -> Self {
        Self { axis }
    }

    pub fn x() -> Self {
        Self::new(Axis::X)
    }

    pub fn y() -> Self {
        Self::new(Axis::Y)
    }
}

impl Predicate for AxisPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        match usize::try_from(ctx.bounds.window_len()) {
            Ok(0) | Err(_) => PredicateResult::Failure,
            Ok(count) => PredicateResult::Choices(count),
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        let value = ctx.bounds.lower_bound() + choice as u64;
        match self.axis {
            Axis::X => ctx.state.x = value,
            Axis::Y => ctx.state.y = value,
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        match self.axis {
            Axis::X => "AxisX",
            Axis::Y => "AxisY",
        }
    }
}
