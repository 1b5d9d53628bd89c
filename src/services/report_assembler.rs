//! Final report assembly.

use chrono::Utc;

use crate::domain::models::{DefectSummary, ReleaseReport, VersionMetrics, VersionRollup};

/// Assemble the composite release report.
///
/// Combines the version rollup with the pass-through defect summary and a
/// generation timestamp. When `include_details` is false the execution
/// list is stripped from every breakdown entry so the field is absent from
/// serialized output, not emptied. All inputs must already have been
/// gathered by the caller; this function fetches nothing.
pub fn assemble(
    project_id: &str,
    version_id: &str,
    rollup: VersionRollup,
    defect_summary: DefectSummary,
    include_details: bool,
) -> ReleaseReport {
    let mut cycle_breakdown = rollup.cycles;
    if !include_details {
        for entry in &mut cycle_breakdown {
            entry.executions = None;
        }
    }

    ReleaseReport {
        project_id: project_id.to_string(),
        version_id: version_id.to_string(),
        generated_at: Utc::now(),
        overall_metrics: VersionMetrics::new(
            rollup.totals,
            rollup.regression_test_count,
            rollup.negative_test_count,
        ),
        cycle_breakdown,
        defect_summary,
    }
}
