//! Cycle-level metric aggregation.

use crate::domain::models::{CycleMetrics, Execution, StatusBucket};
use crate::services::classifier;

/// Aggregate one cycle's executions into counts and rates.
///
/// Single pass; each record bumps exactly one of the four counters, so the
/// counters always sum to the input length. Counting is order-independent.
/// An empty slice is valid and yields all-zero metrics.
pub fn aggregate(executions: &[Execution]) -> CycleMetrics {
    let mut passed = 0;
    let mut failed = 0;
    let mut blocked = 0;
    let mut unexecuted = 0;

    for execution in executions {
        match classifier::status_bucket(execution) {
            StatusBucket::Passed => passed += 1,
            StatusBucket::Failed => failed += 1,
            StatusBucket::Blocked => blocked += 1,
            StatusBucket::Unexecuted => unexecuted += 1,
        }
    }

    CycleMetrics::from_counts(executions.len(), passed, failed, blocked, unexecuted)
}
