//! Shared test fixtures: an in-memory entity fetcher.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use zephyr_insight::domain::errors::{EngineError, EngineResult};
use zephyr_insight::{Cycle, DefectSummary, EntityFetcher, Execution, Project, Version};

/// In-memory [`EntityFetcher`] serving canned collections.
///
/// Per-cycle executions are keyed by cycle id; cycle ids listed in
/// `failing_cycles` make the corresponding execution fetch fail, which the
/// fail-fast tests rely on. `fetch_calls` counts every port invocation so
/// tests can prove input validation happens before any fetch.
#[derive(Debug, Default)]
pub struct StubFetcher {
    pub projects: Vec<Project>,
    pub versions: Vec<Version>,
    pub cycles: Vec<Cycle>,
    pub executions_by_cycle: HashMap<String, Vec<Execution>>,
    pub version_executions: Vec<Execution>,
    pub defects: DefectSummary,
    pub failing_cycles: Vec<String>,
    pub fetch_calls: AtomicUsize,
}

impl StubFetcher {
    pub fn calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl EntityFetcher for StubFetcher {
    async fn list_projects(&self) -> EngineResult<Vec<Project>> {
        self.record_call();
        Ok(self.projects.clone())
    }

    async fn list_versions(&self, _project_id: &str) -> EngineResult<Vec<Version>> {
        self.record_call();
        Ok(self.versions.clone())
    }

    async fn list_cycles(&self, _project_id: &str, _version_id: &str) -> EngineResult<Vec<Cycle>> {
        self.record_call();
        Ok(self.cycles.clone())
    }

    async fn list_executions(
        &self,
        _project_id: &str,
        _version_id: &str,
        cycle_id: Option<&str>,
    ) -> EngineResult<Vec<Execution>> {
        self.record_call();
        match cycle_id {
            Some(id) => {
                if self.failing_cycles.iter().any(|c| c == id) {
                    return Err(EngineError::Fetch(format!(
                        "executions for cycle {id} unavailable"
                    )));
                }
                Ok(self
                    .executions_by_cycle
                    .get(id)
                    .cloned()
                    .unwrap_or_default())
            }
            None => Ok(self.version_executions.clone()),
        }
    }

    async fn defect_summary(
        &self,
        _project_id: &str,
        _version_id: Option<&str>,
    ) -> EngineResult<DefectSummary> {
        self.record_call();
        Ok(self.defects.clone())
    }
}

pub fn cycle(id: &str, name: &str) -> Cycle {
    Cycle {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
    }
}

pub fn execution(id: &str, name: &str, status: Option<&str>) -> Execution {
    Execution::new(id, name, "", status)
}

/// The two-cycle scenario: Cycle A with [PASS, PASS, FAIL, null] and
/// Cycle B with [BLOCKED, PASS].
pub fn two_cycle_fixture() -> StubFetcher {
    let mut executions_by_cycle = HashMap::new();
    executions_by_cycle.insert(
        "a".to_string(),
        vec![
            execution("1", "Checkout flow 1", Some("PASS")),
            execution("2", "Checkout flow 2", Some("PASS")),
            execution("3", "Checkout flow 3", Some("FAIL")),
            execution("4", "Checkout flow 4", None),
        ],
    );
    executions_by_cycle.insert(
        "b".to_string(),
        vec![
            execution("5", "Search flow 1", Some("BLOCKED")),
            execution("6", "Search flow 2", Some("PASS")),
        ],
    );

    StubFetcher {
        cycles: vec![cycle("a", "Cycle A"), cycle("b", "Cycle B")],
        executions_by_cycle,
        defects: DefectSummary(serde_json::json!({ "open": 3, "resolved": 7 })),
        ..Default::default()
    }
}
