//! Report entry points.
//!
//! This service owns the orchestration the report consumers see: it
//! validates identifiers before touching the network, fans the per-cycle
//! execution fetches out concurrently, and hands the fetched collections to
//! the pure aggregation functions. Each cycle's executions are fetched
//! exactly once per operation and reused for every downstream computation.

use std::sync::Arc;

use chrono::Utc;
use futures::future::try_join_all;
use tokio::sync::Semaphore;

use crate::domain::errors::{EngineError, EngineResult};
use crate::domain::models::{
    Cycle, Execution, ExecutionProgress, FetchConfig, NegativeSummary, ProjectCatalog,
    RegressionSummary, ReleaseReport,
};
use crate::domain::ports::EntityFetcher;
use crate::services::{classifier, report_assembler, version_aggregator};

/// The exposed aggregation entry points over an [`EntityFetcher`].
///
/// Holds no mutable state; every call re-fetches and recomputes from
/// scratch. The fetcher is shared so concurrent per-cycle fetches can run
/// against one client instance.
#[derive(Debug, Clone)]
pub struct ReportService<F: EntityFetcher> {
    fetcher: Arc<F>,
    max_concurrent_fetches: usize,
}

impl<F: EntityFetcher> ReportService<F> {
    /// Create a service over the given fetcher.
    pub fn new(fetcher: Arc<F>, fetch: &FetchConfig) -> Self {
        Self {
            fetcher,
            max_concurrent_fetches: fetch.max_concurrent.max(1),
        }
    }

    /// Generate the composite release report for a version.
    ///
    /// Fail-fast: if any cycle's execution fetch fails, the whole report
    /// fails with that error; a report with silently missing cycles is
    /// worse than no report.
    pub async fn generate_report(
        &self,
        project_id: &str,
        version_id: &str,
        include_details: bool,
    ) -> EngineResult<ReleaseReport> {
        require_id(project_id, "project_id")?;
        require_id(version_id, "version_id")?;

        let cycles = self.fetcher.list_cycles(project_id, version_id).await?;
        tracing::info!(
            project_id,
            version_id,
            cycles = cycles.len(),
            include_details,
            "Generating release report"
        );

        let (executions_by_cycle, defect_summary) = tokio::try_join!(
            self.executions_per_cycle(project_id, version_id, &cycles),
            self.fetcher.defect_summary(project_id, Some(version_id)),
        )?;

        let rollup = version_aggregator::aggregate(cycles, executions_by_cycle);
        Ok(report_assembler::assemble(
            project_id,
            version_id,
            rollup,
            defect_summary,
            include_details,
        ))
    }

    /// Per-cycle execution progress, optionally narrowed to one cycle.
    ///
    /// With a `cycle_id` filter only the matching cycle is fetched and
    /// aggregated, and the totals reflect that single cycle.
    pub async fn execution_progress(
        &self,
        project_id: &str,
        version_id: &str,
        cycle_id: Option<&str>,
    ) -> EngineResult<ExecutionProgress> {
        require_id(project_id, "project_id")?;
        require_id(version_id, "version_id")?;

        let mut cycles = self.fetcher.list_cycles(project_id, version_id).await?;
        if let Some(id) = cycle_id {
            cycles.retain(|cycle| cycle.id == id);
        }

        let executions_by_cycle = self
            .executions_per_cycle(project_id, version_id, &cycles)
            .await?;
        let rollup = version_aggregator::aggregate(cycles, executions_by_cycle);

        let mut progress = rollup.cycles;
        for entry in &mut progress {
            entry.executions = None;
        }

        Ok(ExecutionProgress {
            project_id: project_id.to_string(),
            version_id: version_id.to_string(),
            cycle_id: cycle_id.map(ToString::to_string),
            totals: rollup.totals,
            progress,
            generated_at: Utc::now(),
        })
    }

    /// List regression cycles and count the executions they contain.
    ///
    /// A cycle qualifies when its name contains `regression` or the
    /// caller-supplied filter. The count covers every execution inside the
    /// qualifying cycles, which is narrower than the report's version-wide
    /// per-test regression classification.
    pub async fn regression_count(
        &self,
        project_id: &str,
        version_id: &str,
        cycle_name: Option<&str>,
    ) -> EngineResult<RegressionSummary> {
        require_id(project_id, "project_id")?;
        require_id(version_id, "version_id")?;

        let cycles = self.fetcher.list_cycles(project_id, version_id).await?;
        let regression_cycles: Vec<Cycle> = cycles
            .into_iter()
            .filter(|cycle| classifier::is_regression_cycle(cycle, cycle_name))
            .collect();

        let executions_by_cycle = self
            .executions_per_cycle(project_id, version_id, &regression_cycles)
            .await?;
        let total_regression_tests = executions_by_cycle.iter().map(Vec::len).sum();

        tracing::debug!(
            project_id,
            version_id,
            qualifying_cycles = regression_cycles.len(),
            total_regression_tests,
            "Counted regression cycle executions"
        );

        Ok(RegressionSummary {
            project_id: project_id.to_string(),
            version_id: version_id.to_string(),
            regression_cycles,
            total_regression_tests,
            generated_at: Utc::now(),
        })
    }

    /// Count negative tests across a version.
    pub async fn negative_count(
        &self,
        project_id: &str,
        version_id: &str,
    ) -> EngineResult<NegativeSummary> {
        require_id(project_id, "project_id")?;
        require_id(version_id, "version_id")?;

        let executions = self
            .fetcher
            .list_executions(project_id, version_id, None)
            .await?;
        let total_tests = executions.len();
        let negative_tests: Vec<Execution> = executions
            .into_iter()
            .filter(classifier::is_negative_test)
            .collect();

        Ok(NegativeSummary {
            project_id: project_id.to_string(),
            version_id: version_id.to_string(),
            negative_test_count: negative_tests.len(),
            total_tests,
            negative_tests,
            generated_at: Utc::now(),
        })
    }

    /// Fetch the project catalog.
    pub async fn list_projects(&self) -> EngineResult<ProjectCatalog> {
        let projects = self.fetcher.list_projects().await?;
        Ok(ProjectCatalog {
            total_count: projects.len(),
            projects,
            generated_at: Utc::now(),
        })
    }

    /// Fetch each cycle's executions concurrently, bounded by the
    /// configured fan-out limit.
    ///
    /// `try_join_all` is the join barrier: results come back in cycle
    /// order, and the first fetch error aborts the remaining in-flight
    /// fetches (dropped futures) and becomes the operation's error.
    async fn executions_per_cycle(
        &self,
        project_id: &str,
        version_id: &str,
        cycles: &[Cycle],
    ) -> EngineResult<Vec<Vec<Execution>>> {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent_fetches));
        let fetches = cycles.iter().map(|cycle| {
            let semaphore = Arc::clone(&semaphore);
            async move {
                let _permit = semaphore
                    .acquire()
                    .await
                    .map_err(|_| EngineError::Fetch("execution fetch pool closed".to_string()))?;
                self.fetcher
                    .list_executions(project_id, version_id, Some(&cycle.id))
                    .await
            }
        });
        try_join_all(fetches).await
    }
}

/// Reject missing or blank identifiers before any fetch is attempted.
fn require_id(value: &str, field: &str) -> EngineResult<()> {
    if value.trim().is_empty() {
        return Err(EngineError::InvalidInput(format!("{field} is required")));
    }
    Ok(())
}
