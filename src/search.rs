// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The near-miss search.
//!
//! Builds the predicate sequence for a [`ScanStrategy`], runs the engine to
//! exhaustion and reads the best record back from the context.

use std::fmt;

use tracing::info;

use crate::bounds::SearchBounds;
use crate::context::SearchContext;
use crate::engine::{EngineBuilder, Predicate};
use crate::error::SearchError;
use crate::miss::MissRecord;
use crate::predicates::{AxisPredicate, BisectPredicate, FailPredicate, LinearScanPredicate};
use crate::state::statistics::{Counters, Statistics};

/// How z is searched for each (x, y) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanStrategy {
    /// Midpoint comparison over `[1, k]`; O(log k) evaluations, heuristic.
    #[default]
    Bisection,
    /// Every z in `[1, k]`; exact per pair.
    Linear,
}

impl ScanStrategy {
    fn predicate(self) -> Box<dyn Predicate> {
        match self {
            ScanStrategy::Bisection => Box::new(BisectPredicate::new()),
            ScanStrategy::Linear => Box::new(LinearScanPredicate::new()),
        }
    }
}

impl fmt::Display for ScanStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanStrategy::Bisection => write!(f, "bisection"),
            ScanStrategy::Linear => write!(f, "linear"),
        }
    }
}

/// Outcome of a completed search.
#[derive(Debug, Clone, PartialEq)]
pub struct BestResult {
    /// Candidate with the smallest relative miss (first found on ties).
    pub record: MissRecord,
    /// Upper bound of the search.
    pub k: u64,
    /// Counters collected during the search.
    pub statistics: Statistics,
}

impl fmt::Display for BestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = &self.record;
        let rule = "-------------------------------------------------";
        writeln!(f, "{}", rule)?;
        writeln!(
            f,
            "Smallest relative miss: {:.2}%",
            record.relative_miss_percent
        )?;
        writeln!(
            f,
            "for x: {}, y: {}, z: {}, n: {}, and k: {}",
            record.x, record.y, record.z, record.n, self.k
        )?;
        writeln!(f, "Actual Miss: {}", record.absolute_miss)?;
        writeln!(f, "Relative Miss: {:.2}%", record.relative_miss_percent)?;
        write!(f, "{}", rule)
    }
}

/// Search with the reference bisection strategy.
pub fn search(bounds: SearchBounds) -> Result<BestResult, SearchError> {
    search_with(bounds, ScanStrategy::default())
}

/// Run the predicate sequence for `strategy` to exhaustion over `ctx`.
///
/// Returns the best record, or the first evaluation error. On error the
/// engine stops at the failing evaluation and the best record keeps whatever was
/// found before it.
pub fn run_search(ctx: &mut SearchContext, strategy: ScanStrategy) -> Result<MissRecord, SearchError> {
    let engine = EngineBuilder::new()
        .add(Box::new(AxisPredicate::x()))
        .add(Box::new(AxisPredicate::y()))
        .add(strategy.predicate())
        .add(Statistics::counting_predicate(Counters::PairsSearched))
        .terminal(Box::new(FailPredicate))
        .build();

    // The only suspending path is an evaluation failure.
    let _suspended = engine.search(ctx);
    if let Some(failure) = ctx.state.failure.take() {
        return Err(failure);
    }
    ctx.state.best.ok_or(SearchError::NoCandidates)
}

/// Search every pair of the window with the given z strategy.
pub fn search_with(bounds: SearchBounds, strategy: ScanStrategy) -> Result<BestResult, SearchError> {
    let mut ctx = SearchContext::new(bounds)?;
    info!(
        n = bounds.n(),
        k = bounds.k(),
        lower_bound = bounds.lower_bound(),
        %strategy,
        "starting near-miss search"
    );

    let record = run_search(&mut ctx, strategy)?;
    let statistics = ctx.statistics;
    info!(
        pairs = statistics.get(Counters::PairsSearched),
        evaluations = statistics.get(Counters::Evaluations),
        improvements = statistics.get(Counters::Improvements),
        relative_miss_percent = record.relative_miss_percent,
        "search complete"
    );
    Ok(BestResult {
        record,
        k: bounds.k(),
        statistics,
    })
}
