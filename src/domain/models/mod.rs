//! Domain models: fetched entities, derived metrics, report objects, and
//! configuration.

pub mod config;
pub mod entities;
pub mod metrics;
pub mod report;

pub use config::{Config, FetchConfig, LoggingConfig};
pub use entities::{Cycle, DefectSummary, Execution, Project, Version};
pub use metrics::{CycleBreakdown, CycleMetrics, StatusBucket, VersionRollup};
pub use report::{
    ExecutionProgress, NegativeSummary, ProjectCatalog, RegressionSummary, ReleaseReport,
    VersionMetrics,
};
