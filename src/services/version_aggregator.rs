//! Version-level rollup across cycles.

use crate::domain::models::{Cycle, CycleBreakdown, CycleMetrics, Execution, VersionRollup};
use crate::services::{classifier, cycle_aggregator};

/// Roll a version's cycles up into a [`VersionRollup`].
///
/// `executions_by_cycle[i]` must hold the executions of `cycles[i]`; the
/// caller fetches each cycle's executions exactly once and this function
/// reuses them for the per-cycle metrics, the breakdown, and the
/// version-wide regression/negative classification.
///
/// Version totals are sums of the per-cycle counters with both rates
/// recomputed from the sums; averaging per-cycle rates would misweight
/// cycles of unequal size. Cycle order is preserved as fetched. An empty
/// cycle list yields an all-zero rollup with an empty breakdown.
pub fn aggregate(cycles: Vec<Cycle>, executions_by_cycle: Vec<Vec<Execution>>) -> VersionRollup {
    debug_assert_eq!(cycles.len(), executions_by_cycle.len());

    let mut passed = 0;
    let mut failed = 0;
    let mut blocked = 0;
    let mut unexecuted = 0;
    let mut total = 0;
    let mut regression_test_count = 0;
    let mut negative_test_count = 0;

    let mut breakdown = Vec::with_capacity(cycles.len());
    for (cycle, executions) in cycles.into_iter().zip(executions_by_cycle) {
        let metrics = cycle_aggregator::aggregate(&executions);
        total += metrics.total;
        passed += metrics.passed;
        failed += metrics.failed;
        blocked += metrics.blocked;
        unexecuted += metrics.unexecuted;

        // Each execution belongs to exactly one cycle, so classifying the
        // per-cycle lists in turn covers the union without double counting.
        for execution in &executions {
            if classifier::is_regression_test(execution, None) {
                regression_test_count += 1;
            }
            if classifier::is_negative_test(execution) {
                negative_test_count += 1;
            }
        }

        breakdown.push(CycleBreakdown {
            cycle,
            metrics,
            executions: Some(executions),
        });
    }

    VersionRollup {
        totals: CycleMetrics::from_counts(total, passed, failed, blocked, unexecuted),
        regression_test_count,
        negative_test_count,
        cycles: breakdown,
    }
}
