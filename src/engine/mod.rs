// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! The execution model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! A sequence ending in [`crate::predicates::FailPredicate`] therefore visits
//! every combination of choices before the engine is exhausted.
//!
//! # Example
//!
//! ```
//! use fermat_near_miss::engine::EngineBuilder;
//! use fermat_near_miss::predicates::{AxisPredicate, FailPredicate};
//! use fermat_near_miss::state::statistics::{Counters, Statistics};
//! use fermat_near_miss::{SearchBounds, SearchContext};
//!
//! let bounds = SearchBounds::new(3, 12).unwrap();
//! let mut ctx = SearchContext::new(bounds).unwrap();
//! let engine = EngineBuilder::new()
//!     .add(Box::new(AxisPredicate::x()))
//!     .add(Box::new(AxisPredicate::y()))
//!     .add(Statistics::counting_predicate(Counters::PairsSearched))
//!     .terminal(Box::new(FailPredicate))
//!     .build();
//!
//! // Exhausted: every (x, y) in [10, 12]² was visited
//! assert!(engine.search(&mut ctx).is_none());
//! assert_eq!(ctx.statistics.get(Counters::PairsSearched), 9);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Initial capacity of the predicate stack.
const STACK_CAPACITY: usize = 64;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
        }
    }

    /// Mark a deterministic success: backtracking into it must fail.
    fn exhaust(&mut self) {
        self.in_choice_mode = true;
        self.current_choice = 0;
        self.num_choices = 0;
    }
}

/// Search engine that coordinates predicate execution and backtracking.
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl SearchEngine {
    fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(STACK_CAPACITY),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - calling search() again resumes by
    ///   backtracking from the suspending predicate
    /// - `None` if exhausted (backtracked past first predicate) - search is complete
    ///
    /// Results are communicated via side effects on `ctx`.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence runs off its end, or if `retry_pred`
    /// returns `Choices` or `Suspend`.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.stack.is_empty() {
            if self.predicates.is_empty() {
                return None; // Empty is exhausted
            }
            self.stack.push(StackEntry::new(0, 0));
        } else {
            // Resuming: the suspending entry has no alternatives.
            self.stack.pop();
        }

        loop {
            let Some(entry) = self.stack.last_mut() else {
                return None; // Search exhausted (all choices failed)
            };

            let pred_idx = entry.predicate_index;
            let round = entry.round;

            let result = if !entry.in_choice_mode {
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);
                if let PredicateResult::Choices(n) = result {
                    entry.in_choice_mode = true;
                    entry.current_choice = 0;
                    entry.num_choices = n;
                    continue;
                }
                if matches!(
                    result,
                    PredicateResult::Success | PredicateResult::SuccessSamePredicate
                ) {
                    entry.exhaust();
                }
                result
            } else {
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);
                match result {
                    PredicateResult::Failure => continue, // Try next choice
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                    _ => result,
                }
            };

            match result {
                PredicateResult::Success => self.push_next_predicate(pred_idx),
                PredicateResult::SuccessSamePredicate => {
                    self.stack.push(StackEntry::new(pred_idx, round + 1));
                }
                PredicateResult::Failure => {
                    self.stack.pop();
                }
                PredicateResult::Suspend => return Some(self),
                PredicateResult::Choices(_) => unreachable!("handled above"),
            }
        }
    }

    /// Push a new stack entry for the predicate after `current`.
    fn push_next_predicate(&mut self, current: usize) {
        let next_index = current + 1;
        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without a terminal predicate ({} succeeded)",
                self.predicates[current].name()
            );
        }
        self.stack.push(StackEntry::new(next_index, 0));
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder that guarantees every engine ends with a terminal predicate.
#[derive(Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

/// An [`EngineBuilder`] after its terminal predicate was added.
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the sequence.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate; no further predicates may follow.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}
