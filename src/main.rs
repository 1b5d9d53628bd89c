//! Zephyr Insight CLI entry point.

use clap::Parser;

use zephyr_insight::cli::{self, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli::execute(cli).await {
        cli::handle_error(&err);
    }
}
