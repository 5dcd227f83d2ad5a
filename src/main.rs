//! resched - command line entry point
//!
//! Parses the CLI, picks the reporter from the terminal capability of stdout,
//! and runs one pass. The actual logic lives in the `resched` library.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use resched::api::TodoistClient;
use resched::report::{BatchReporter, InteractiveReporter, Reporter};

/// Reschedule overdue Todoist tasks to the next weekday
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Preview the changes without applying them
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let interactive = std::io::stdout().is_terminal();
    if !interactive {
        // Scheduled runs get timestamped log lines instead of console output
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    let token =
        std::env::var("TODOIST_API_TOKEN").context("TODOIST_API_TOKEN is not set")?;
    let client = TodoistClient::new(token)?;

    let mut reporter: Box<dyn Reporter> = if interactive {
        Box::new(InteractiveReporter)
    } else {
        Box::new(BatchReporter)
    };

    let today = Local::now().date_naive();
    resched::run(&client, reporter.as_mut(), today, args.dry_run)?;
    Ok(())
}
