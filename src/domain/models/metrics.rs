//! Derived execution metrics.
//!
//! Nothing in this module is persisted; every value is recomputed from the
//! fetched executions on each request.

use serde::{Deserialize, Serialize};

use super::entities::{Cycle, Execution};

/// The four-way status partition every execution falls into.
///
/// The mapping is closed: unrecognized or absent status strings land in
/// [`StatusBucket::Unexecuted`], so classification never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBucket {
    /// Executed with status `PASS`.
    Passed,
    /// Executed with status `FAIL`.
    Failed,
    /// Executed with status `BLOCKED`.
    Blocked,
    /// Not yet executed, or an unrecognized status.
    Unexecuted,
}

/// Counts and rates for one cycle's executions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CycleMetrics {
    /// Total number of executions in the cycle.
    pub total: usize,
    /// Executions with status `PASS`.
    pub passed: usize,
    /// Executions with status `FAIL`.
    pub failed: usize,
    /// Executions with status `BLOCKED`.
    pub blocked: usize,
    /// Executions not yet run (or carrying an unrecognized status).
    pub unexecuted: usize,
    /// Percentage of executions that have been run: `(total - unexecuted) / total * 100`.
    pub execution_rate: f64,
    /// Percentage of passing executions: `passed / total * 100`.
    pub pass_rate: f64,
}

impl CycleMetrics {
    /// Build metrics from raw counters, computing both rates.
    ///
    /// A zero total yields zero rates; division by zero cannot occur.
    pub fn from_counts(
        total: usize,
        passed: usize,
        failed: usize,
        blocked: usize,
        unexecuted: usize,
    ) -> Self {
        let (execution_rate, pass_rate) = if total == 0 {
            (0.0, 0.0)
        } else {
            (
                total.saturating_sub(unexecuted) as f64 / total as f64 * 100.0,
                passed as f64 / total as f64 * 100.0,
            )
        };
        Self {
            total,
            passed,
            failed,
            blocked,
            unexecuted,
            execution_rate,
            pass_rate,
        }
    }
}

/// One cycle's entry in a version breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleBreakdown {
    /// The cycle this entry describes.
    pub cycle: Cycle,
    /// Derived metrics for the cycle.
    pub metrics: CycleMetrics,
    /// Raw execution records, present only when details were requested.
    ///
    /// `None` omits the field from serialized output entirely, bounding
    /// response size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executions: Option<Vec<Execution>>,
}

/// Version-level aggregate produced by the version aggregator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionRollup {
    /// Counters summed across all cycles, rates recomputed from the sums.
    pub totals: CycleMetrics,
    /// Regression tests across the union of the version's executions.
    pub regression_test_count: usize,
    /// Negative tests across the union of the version's executions.
    pub negative_test_count: usize,
    /// Per-cycle breakdown in the fetcher's cycle order.
    pub cycles: Vec<CycleBreakdown>,
}
