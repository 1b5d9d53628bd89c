//! Zephyr Insight - Test-Management Report Engine
//!
//! Zephyr Insight queries a Zephyr test-management instance for its
//! project → version → cycle → execution hierarchy and derives release
//! metrics: pass/fail/blocked/unexecuted counts, execution and pass rates,
//! regression- and negative-test counts, and a composite release report
//! with a pass-through defect summary.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): entities, derived metrics, errors, and
//!   the fetcher port
//! - **Service Layer** (`services`): classification, aggregation, and the
//!   report entry points
//! - **Adapter Layer** (`adapters`): the Zephyr ZAPI HTTP client
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): JSON-emitting command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use zephyr_insight::{Config, ReportService, ZephyrClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = zephyr_insight::ConfigLoader::load()?;
//!     let service = ReportService::new(Arc::new(ZephyrClient::new(&config)), &config.fetch);
//!     let report = service.generate_report("10200", "10301", false).await?;
//!     println!("{}", serde_json::to_string_pretty(&report)?);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::ZephyrClient;
pub use domain::errors::{EngineError, EngineResult};
pub use domain::models::{
    Config, Cycle, CycleBreakdown, CycleMetrics, DefectSummary, Execution, ExecutionProgress,
    FetchConfig, LoggingConfig, NegativeSummary, Project, ProjectCatalog, RegressionSummary,
    ReleaseReport, StatusBucket, Version, VersionMetrics, VersionRollup,
};
pub use domain::ports::EntityFetcher;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::ReportService;
