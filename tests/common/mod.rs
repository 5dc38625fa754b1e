// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use fermat_near_miss::{evaluate, MissRecord, ScanStrategy, SearchBounds};

/// Every candidate offered to the best record, in search order, computed
/// with plain loops and [`evaluate`] rather than the predicate engine.
pub fn candidate_trace(bounds: SearchBounds, strategy: ScanStrategy) -> Vec<MissRecord> {
    let (n, k) = (bounds.n(), bounds.k());
    let mut trace = Vec::new();
    for x in bounds.lower_bound()..=k {
        for y in bounds.lower_bound()..=k {
            match strategy {
                ScanStrategy::Linear => {
                    for z in 1..=k {
                        trace.push(MissRecord::new(x, y, z, n, evaluate(x, y, z, n).unwrap()));
                    }
                }
                ScanStrategy::Bisection => {
                    let (mut low, mut high) = (1, k);
                    while low <= high {
                        let mid = (low + high) / 2;
                        let here = evaluate(x, y, mid, n).unwrap();
                        trace.push(MissRecord::new(x, y, mid, n, here));
                        let above = evaluate(x, y, mid + 1, n).unwrap();
                        if above.relative_percent < here.relative_percent {
                            low = mid + 1;
                        } else {
                            high = mid - 1;
                        }
                    }
                }
            }
        }
    }
    trace
}

/// Records that were strictly better than everything before them, in order.
///
/// Entry i is the best record after the prefix of the trace ending at it.
pub fn improvements(trace: &[MissRecord]) -> Vec<MissRecord> {
    let mut steps: Vec<MissRecord> = Vec::new();
    for record in trace {
        let improves = steps
            .last()
            .map_or(true, |best| record.relative_miss_percent < best.relative_miss_percent);
        if improves {
            steps.push(*record);
        }
    }
    steps
}

/// First record with the smallest relative miss.
pub fn first_minimum(trace: &[MissRecord]) -> MissRecord {
    *improvements(trace).last().expect("trace is empty")
}
