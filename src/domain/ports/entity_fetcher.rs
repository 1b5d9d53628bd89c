//! The consumed entity-fetcher port.

use async_trait::async_trait;

use crate::domain::errors::EngineResult;
use crate::domain::models::{Cycle, DefectSummary, Execution, Project, Version};

/// Port trait for retrieving raw test-management entities.
///
/// One call per entity collection; implementations perform no aggregation
/// and no retries. Transport or API failures map to
/// [`EngineError::Fetch`](crate::domain::errors::EngineError::Fetch) and are
/// propagated unchanged by the engine.
///
/// Implementations must be cheaply shareable across concurrent fetches
/// (`Send + Sync`); the report service fans out one `list_executions` call
/// per cycle.
#[async_trait]
pub trait EntityFetcher: Send + Sync {
    /// Fetch all projects visible to the configured instance.
    async fn list_projects(&self) -> EngineResult<Vec<Project>>;

    /// Fetch the versions (releases) of a project.
    async fn list_versions(&self, project_id: &str) -> EngineResult<Vec<Version>>;

    /// Fetch the test cycles of a project version.
    async fn list_cycles(&self, project_id: &str, version_id: &str) -> EngineResult<Vec<Cycle>>;

    /// Fetch execution records for a version, optionally narrowed to one
    /// cycle.
    async fn list_executions(
        &self,
        project_id: &str,
        version_id: &str,
        cycle_id: Option<&str>,
    ) -> EngineResult<Vec<Execution>>;

    /// Fetch the opaque defect summary for a project (and optionally one
    /// version).
    async fn defect_summary(
        &self,
        project_id: &str,
        version_id: Option<&str>,
    ) -> EngineResult<DefectSummary>;
}
