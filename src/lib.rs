// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for near misses of Fermat's equation xⁿ + yⁿ = zⁿ.
//!
//! For a fixed exponent n (2 < n < 12) and bound k (k > 10), every pair
//! (x, y) in the window `[lower_bound, k]²` is examined, and for each pair
//! the integer z whose neighbourhood `zⁿ ≤ xⁿ + yⁿ ≤ (z+1)ⁿ` is closest is
//! sought. The combination with the smallest relative miss is reported.
//!
//! # Architecture
//!
//! The implementation reuses the two-tier memory model of a predicate search:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! - [`memo::PowerTable`]: bⁿ for every base the search can touch, computed
//!   once with checked arithmetic.
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! - The current (x, y) pair and z window
//! - The best [`MissRecord`] found so far
//! - Counters ([`state::statistics`])
//!
//! # Search Algorithm
//!
//! The search runs as a sequence of predicates:
//!
//! 1. **AxisPredicate(X)**: choose x from the window
//! 2. **AxisPredicate(Y)**: choose y from the window
//! 3. **BisectPredicate** (or **LinearScanPredicate**): scan z, offering
//!    every visited z to the best-so-far record
//! 4. **FailPredicate**: force backtracking so that every pair is visited
//!
//! # Example
//!
//! ```
//! use fermat_near_miss::{search, SearchBounds};
//!
//! let bounds = SearchBounds::new(3, 11).unwrap();
//! let best = search(bounds).unwrap();
//! assert_eq!((best.record.x, best.record.y, best.record.z), (10, 10, 11));
//! assert_eq!(best.record.absolute_miss, 272);
//! ```

pub mod bounds;
pub mod context;
pub mod engine;
pub mod error;
pub mod memo;
pub mod miss;
pub mod predicates;
pub mod search;
pub mod state;

// Re-export commonly used types
pub use bounds::SearchBounds;
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use error::SearchError;
pub use miss::{evaluate, Miss, MissRecord};
pub use search::{run_search, search, search_with, BestResult, ScanStrategy};
