mod cli_messages;
mod config;
mod consts;
mod dataset;
mod error_classifier;
mod events;
mod logging;
mod session;
mod stats;
mod ui;

use crate::config::{Config, get_config_path};
use clap::{Parser, Subcommand};
use std::{error::Error, path::PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the interactive dashboard
    Start {
        /// Path to the maintenance schedule CSV. Falls back to the configured
        /// path when omitted.
        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,

        /// Print the dashboard blocks once and exit instead of opening the TUI.
        #[arg(long)]
        headless: bool,

        /// Enable the dashboard background color.
        #[arg(long)]
        with_background: bool,
    },
    /// Print a one-shot report of the dashboard blocks
    Report {
        /// Path to the maintenance schedule CSV. Falls back to the configured
        /// path when omitted.
        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,

        /// Emit the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Remember the dataset location for later runs.
    SetData {
        /// Path to the maintenance schedule CSV.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start {
            data,
            headless,
            with_background,
        } => {
            let session = session::setup_session(data)?;
            if headless {
                session::run_headless_mode(session, false)
            } else {
                session::run_tui_mode(session, with_background)
            }
        }
        Command::Report { data, json } => {
            let session = session::setup_session(data)?;
            session::run_headless_mode(session, json)
        }
        Command::SetData { path } => {
            // Reject unreadable/malformed files up front rather than at the
            // next `start`.
            let dataset = dataset::load(&path).map_err(|e| format!("{}", e))?;

            let config_path = get_config_path()?;
            let config = Config::new(path.clone());
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;

            print_cmd_success!(
                "Dataset configured",
                "{} ({} records)",
                path.display(),
                dataset.len()
            );
            Ok(())
        }
    }
}
