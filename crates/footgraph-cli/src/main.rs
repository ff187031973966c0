//! footgraph CLI
//!
//! Exports the football events dataset (match metadata plus match events)
//! as gzip CSV node and relationship files for a graph bulk importer.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::{Cli, Commands};

/// Create `dir` and start an empty `football_graph_<YYYY-MM-DD>.log` in it.
/// A log left by an earlier run on the same day is truncated. Returns the
/// log file name.
fn prepare_log_file(dir: &Path) -> Result<String> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let file_name = format!(
        "football_graph_{}.log",
        chrono::Local::now().format("%Y-%m-%d")
    );
    let log_path = dir.join(&file_name);
    std::fs::File::create(&log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
    Ok(file_name)
}

/// Initialize tracing: console output on stderr plus a plain-text log file
/// in `log_dir` when one is given.
///
/// The returned guard flushes the file writer on drop and must be kept
/// alive until the command finishes.
fn init_tracing(log_dir: Option<&Path>, verbose: bool) -> Result<Option<WorkerGuard>> {
    let default_filter = if verbose {
        "footgraph=debug,footgraph_graph=debug,footgraph_store=debug"
    } else {
        "footgraph=info,footgraph_graph=info,footgraph_store=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    // stdout is reserved for the summary (and --json output).
    let console = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    match log_dir {
        Some(dir) => {
            let file_name = prepare_log_file(dir)?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(console)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(console)
                .init();
            Ok(None)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_dir = match &cli.command {
        Commands::Import(args) => Some(args.output.clone()),
    };

    let _guard = init_tracing(log_dir.as_deref(), cli.verbose)?;

    cli.execute()
}
