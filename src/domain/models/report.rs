//! Result objects returned by the report entry points.
//!
//! Each carries a `generated_at` stamp so consumers can tell when the
//! underlying data was fetched; nothing here is cached or persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entities::{Cycle, DefectSummary, Execution, Project};
use super::metrics::{CycleBreakdown, CycleMetrics};

/// Version-level overall metrics as they appear in a release report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionMetrics {
    /// Total executions across all cycles.
    pub total: usize,
    /// Passing executions.
    pub passed: usize,
    /// Failing executions.
    pub failed: usize,
    /// Blocked executions.
    pub blocked: usize,
    /// Unexecuted executions.
    pub unexecuted: usize,
    /// Executed fraction, recomputed from the summed counters.
    pub execution_rate: f64,
    /// Passing fraction, recomputed from the summed counters.
    pub pass_rate: f64,
    /// Executions whose test-case name marks them as regression tests.
    pub regression_test_count: usize,
    /// Executions whose name or description marks them as negative tests.
    pub negative_test_count: usize,
}

impl VersionMetrics {
    /// Combine summed cycle counters with the version-wide classification
    /// counts.
    pub fn new(
        totals: CycleMetrics,
        regression_test_count: usize,
        negative_test_count: usize,
    ) -> Self {
        Self {
            total: totals.total,
            passed: totals.passed,
            failed: totals.failed,
            blocked: totals.blocked,
            unexecuted: totals.unexecuted,
            execution_rate: totals.execution_rate,
            pass_rate: totals.pass_rate,
            regression_test_count,
            negative_test_count,
        }
    }
}

/// The composite release report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseReport {
    /// Project the report was generated for.
    pub project_id: String,
    /// Version the report was generated for.
    pub version_id: String,
    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,
    /// Version-level metrics.
    pub overall_metrics: VersionMetrics,
    /// Per-cycle breakdown in the fetcher's cycle order.
    pub cycle_breakdown: Vec<CycleBreakdown>,
    /// Defect summary attached unmodified from the remote service.
    pub defect_summary: DefectSummary,
}

/// Per-cycle execution progress for a version, optionally narrowed to one
/// cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionProgress {
    /// Project queried.
    pub project_id: String,
    /// Version queried.
    pub version_id: String,
    /// Cycle filter that was applied, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_id: Option<String>,
    /// Counters summed over the included cycles.
    pub totals: CycleMetrics,
    /// Per-cycle metrics in the fetcher's cycle order.
    pub progress: Vec<CycleBreakdown>,
    /// When the progress snapshot was taken.
    pub generated_at: DateTime<Utc>,
}

/// Regression-cycle listing and the execution count inside those cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionSummary {
    /// Project queried.
    pub project_id: String,
    /// Version queried.
    pub version_id: String,
    /// Cycles whose name marks them as regression cycles (or matched the
    /// caller's filter).
    pub regression_cycles: Vec<Cycle>,
    /// Total executions belonging to the qualifying cycles.
    pub total_regression_tests: usize,
    /// When the summary was computed.
    pub generated_at: DateTime<Utc>,
}

/// Negative-test count for a version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegativeSummary {
    /// Project queried.
    pub project_id: String,
    /// Version queried.
    pub version_id: String,
    /// Number of executions classified as negative tests.
    pub negative_test_count: usize,
    /// Total executions considered.
    pub total_tests: usize,
    /// The matching executions.
    pub negative_tests: Vec<Execution>,
    /// When the summary was computed.
    pub generated_at: DateTime<Utc>,
}

/// All projects visible to the configured remote instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCatalog {
    /// The fetched projects.
    pub projects: Vec<Project>,
    /// Number of projects fetched.
    pub total_count: usize,
    /// When the catalog was fetched.
    pub generated_at: DateTime<Utc>,
}
