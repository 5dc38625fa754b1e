// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and are incremented by the counting
//! predicate or directly by the context while probing.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(EnumCountMacro, EnumIter, IntoStaticStr, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// (x, y) pairs whose z scan completed.
    PairsSearched,
    /// Calls to the miss evaluator.
    Evaluations,
    /// Times the best record was replaced.
    Improvements,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// A predicate that increments the given counter each time it is reached.
    pub fn counting_predicate(counter: Counters) -> Box<dyn Predicate> {
        Box::new(CountingPredicate { counter })
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// All counters with their names, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        Counters::iter().map(move |counter| {
            let name: &'static str = counter.into();
            (name, self.get(counter))
        })
    }
}

struct CountingPredicate {
    counter: Counters,
}

impl Predicate for CountingPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        ctx.statistics.increment_counter(self.counter);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Count"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        for counter in Counters::iter() {
            assert_eq!(stats.get(counter), 0);
        }
    }

    #[test]
    fn test_increment_is_per_counter() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::Evaluations);
        stats.increment_counter(Counters::Evaluations);
        stats.increment_counter(Counters::Improvements);
        assert_eq!(stats.get(Counters::PairsSearched), 0);
        assert_eq!(stats.get(Counters::Evaluations), 2);
        assert_eq!(stats.get(Counters::Improvements), 1);
    }

    #[test]
    fn test_entries_are_named() {
        let names: Vec<_> = Statistics::new().entries().map(|(name, _)| name).collect();
        assert_eq!(names, ["PairsSearched", "Evaluations", "Improvements"]);
    }
}
