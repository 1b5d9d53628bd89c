//! Core test-management entities.
//!
//! These are the typed records the engine works with after the Zephyr
//! adapter has mapped the remote JSON payloads at the boundary. They are
//! read-only once fetched; every aggregate is computed fresh from them.

use serde::{Deserialize, Serialize};

/// A Zephyr project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier as reported by the remote service.
    pub id: String,
    /// Short project key (e.g., "WEB").
    #[serde(default)]
    pub key: String,
    /// Human-readable project name.
    #[serde(default)]
    pub name: String,
    /// Free-form project description (may be empty).
    #[serde(default)]
    pub description: String,
}

/// A version (release) under a project.
///
/// Release-level metrics are computed at this scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    /// Unique version identifier.
    pub id: String,
    /// Version name (e.g., "2.4.0").
    #[serde(default)]
    pub name: String,
    /// Free-form version description.
    #[serde(default)]
    pub description: String,
}

/// A test cycle: a named grouping of executions within a version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    /// Unique cycle identifier.
    pub id: String,
    /// Cycle name (e.g., "Regression Pass 3").
    #[serde(default)]
    pub name: String,
    /// Free-form cycle description.
    #[serde(default)]
    pub description: String,
}

/// One test case's recorded outcome within a specific cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Execution {
    /// Unique execution identifier.
    pub id: String,
    /// Test-case name.
    #[serde(default)]
    pub name: String,
    /// Test-case description.
    #[serde(default)]
    pub description: String,
    /// Raw remote status string (`"PASS"`, `"FAIL"`, `"BLOCKED"`, ...).
    ///
    /// `None` means the test has not been executed. Classification into
    /// status buckets happens in the classifier, not here.
    #[serde(default)]
    pub status: Option<String>,
}

impl Execution {
    /// Convenience constructor used heavily by tests.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        status: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            status: status.map(ToString::to_string),
        }
    }
}

/// Opaque defect summary as returned by the remote dashboard gadget.
///
/// Attached to reports unmodified; the engine never interprets it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefectSummary(pub serde_json::Value);
