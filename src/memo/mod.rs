// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! Computed once when a [`crate::SearchContext`] is created and never
//! changed during the search.

pub mod powers;

pub use powers::PowerTable;
