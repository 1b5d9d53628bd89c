//! Command-line interface.
//!
//! A thin wrapper over the report entry points: every subcommand prints
//! its structured result as pretty JSON on stdout and exits. Rendering
//! (tables, charts, dashboards) belongs to downstream consumers.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::adapters::ZephyrClient;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging;
use crate::services::ReportService;

/// Top-level CLI definition.
#[derive(Parser)]
#[command(name = "zephyr-insight")]
#[command(about = "Release-report engine for Zephyr test management", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a config file (bypasses the hierarchical lookup)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available subcommands, mirroring the report entry points.
#[derive(Subcommand)]
pub enum Commands {
    /// List projects visible to the configured Zephyr instance
    Projects,

    /// Generate the composite release report for a version
    Report {
        /// Project ID
        project_id: String,

        /// Version ID
        version_id: String,

        /// Include raw execution lists in each cycle breakdown entry
        #[arg(long)]
        details: bool,
    },

    /// Show per-cycle execution progress for a version
    Progress {
        /// Project ID
        project_id: String,

        /// Version ID
        version_id: String,

        /// Restrict to a single cycle
        #[arg(long)]
        cycle_id: Option<String>,
    },

    /// List regression cycles and count their executions
    Regression {
        /// Project ID
        project_id: String,

        /// Version ID
        version_id: String,

        /// Extra cycle-name filter (in addition to the "regression" keyword)
        #[arg(long)]
        cycle_name: Option<String>,
    },

    /// Count negative tests across a version
    Negative {
        /// Project ID
        project_id: String,

        /// Version ID
        version_id: String,
    },
}

/// Load config, build the service, and run the requested subcommand.
pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    logging::init(&config.logging);

    let fetcher = Arc::new(ZephyrClient::new(&config));
    let service = ReportService::new(fetcher, &config.fetch);

    match cli.command {
        Commands::Projects => print_json(&service.list_projects().await?),
        Commands::Report {
            project_id,
            version_id,
            details,
        } => print_json(
            &service
                .generate_report(&project_id, &version_id, details)
                .await?,
        ),
        Commands::Progress {
            project_id,
            version_id,
            cycle_id,
        } => print_json(
            &service
                .execution_progress(&project_id, &version_id, cycle_id.as_deref())
                .await?,
        ),
        Commands::Regression {
            project_id,
            version_id,
            cycle_name,
        } => print_json(
            &service
                .regression_count(&project_id, &version_id, cycle_name.as_deref())
                .await?,
        ),
        Commands::Negative {
            project_id,
            version_id,
        } => print_json(&service.negative_count(&project_id, &version_id).await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Structured error body emitted on stderr, mirroring the error payload
/// the original tool surface produced.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    timestamp: DateTime<Utc>,
}

/// Print a structured JSON error and exit nonzero.
pub fn handle_error(err: &anyhow::Error) -> ! {
    let body = ErrorBody {
        error: format!("{err:#}"),
        timestamp: Utc::now(),
    };
    match serde_json::to_string_pretty(&body) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{err:#}"),
    }
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_report_parses_details_flag() {
        let cli = Cli::parse_from(["zephyr-insight", "report", "P1", "V1", "--details"]);
        match cli.command {
            Commands::Report { details, .. } => assert!(details),
            _ => panic!("Expected report subcommand"),
        }
    }

    #[test]
    fn test_progress_cycle_filter_optional() {
        let cli = Cli::parse_from(["zephyr-insight", "progress", "P1", "V1"]);
        match cli.command {
            Commands::Progress { cycle_id, .. } => assert!(cycle_id.is_none()),
            _ => panic!("Expected progress subcommand"),
        }
    }

    #[test]
    fn test_error_body_serializes() {
        let body = ErrorBody {
            error: "Fetch failed: 502".to_string(),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "Fetch failed: 502");
        assert!(json.get("timestamp").is_some());
    }
}
