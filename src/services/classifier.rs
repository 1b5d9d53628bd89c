//! Execution and cycle classification.
//!
//! Pure functions over single records; no side effects, no error path.
//! Status bucketing is a closed four-way partition: anything that is not
//! exactly `PASS`, `FAIL`, or `BLOCKED` counts as unexecuted, including an
//! absent status.

use crate::domain::models::{Cycle, Execution, StatusBucket};

/// Keyword marking a test or cycle as regression-related.
const REGRESSION_KEYWORD: &str = "regression";

/// Keywords marking a test as a negative test.
const NEGATIVE_KEYWORDS: [&str; 3] = ["negative", "error", "invalid"];

/// Map an execution's raw status to its bucket.
pub fn status_bucket(execution: &Execution) -> StatusBucket {
    match execution.status.as_deref() {
        Some("PASS") => StatusBucket::Passed,
        Some("FAIL") => StatusBucket::Failed,
        Some("BLOCKED") => StatusBucket::Blocked,
        _ => StatusBucket::Unexecuted,
    }
}

/// Whether an execution counts as a regression test.
///
/// True when the test-case name contains `regression` (case-insensitive),
/// or when `extra_keyword` is supplied and the name contains it. The extra
/// keyword widens the match; the default keyword always applies.
pub fn is_regression_test(execution: &Execution, extra_keyword: Option<&str>) -> bool {
    let name = execution.name.to_lowercase();
    if name.contains(REGRESSION_KEYWORD) {
        return true;
    }
    match extra_keyword {
        Some(keyword) if !keyword.is_empty() => name.contains(&keyword.to_lowercase()),
        _ => false,
    }
}

/// Whether an execution counts as a negative test.
///
/// True when the test-case name or description contains any of
/// `negative`, `error`, or `invalid`, case-insensitively.
pub fn is_negative_test(execution: &Execution) -> bool {
    let name = execution.name.to_lowercase();
    let description = execution.description.to_lowercase();
    NEGATIVE_KEYWORDS
        .iter()
        .any(|keyword| name.contains(keyword) || description.contains(keyword))
}

/// Whether a cycle qualifies as a regression cycle.
///
/// True when the cycle name contains `regression`, or when `name_filter`
/// is supplied and the cycle name contains it, case-insensitively.
pub fn is_regression_cycle(cycle: &Cycle, name_filter: Option<&str>) -> bool {
    let name = cycle.name.to_lowercase();
    if name.contains(REGRESSION_KEYWORD) {
        return true;
    }
    match name_filter {
        Some(filter) if !filter.is_empty() => name.contains(&filter.to_lowercase()),
        _ => false,
    }
}
