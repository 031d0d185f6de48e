//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::status::{self, StatusArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "belmont")]
#[command(author, version, about = "Status reporting for markdown-driven agent planning")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the global config, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show product or feature status
    #[command(after_help = "\
NOTE:
  Without --feature, lists every feature under .belmont/features/.
  With    --feature, reports tasks, milestones, blockers and decisions for one feature.
  A `## Status:` line mentioning \"blocked\" overrides the status derived from tasks.")]
    Status {
        /// Project root (defaults to the nearest directory containing .belmont/)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Feature slug for a detailed report
        #[arg(long)]
        feature: Option<String>,

        /// Longest task name before truncation (0 or less disables)
        #[arg(long, allow_negative_numbers = true)]
        max_task_name: Option<i32>,
    },

    /// Print version and build information
    Version,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Status {
            root,
            feature,
            max_task_name,
        } => status::run(
            StatusArgs {
                root,
                feature,
                max_task_name,
            },
            cli.format,
            cli.verbose,
        )?,

        Commands::Version => version(&Output::new(cli.format.unwrap_or_default(), cli.verbose))?,
    }

    Ok(())
}

/// Prints `belmont <version> (<commit>, <build date>)`
fn version(output: &Output) -> Result<()> {
    let commit = option_env!("BELMONT_COMMIT_SHA").unwrap_or("unknown");
    let build_date = option_env!("BELMONT_BUILD_DATE").unwrap_or("unknown");

    if output.is_json() {
        output.data(&serde_json::json!({
            "version": VERSION,
            "commit": commit,
            "build_date": build_date,
        }))?;
    } else {
        println!("belmont {} ({}, {})", VERSION, commit, build_date);
    }

    Ok(())
}
