//! CLI argument parsing for taskflow.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "taskflow",
    about = "An in-memory task tracker with a dashboard",
    version = env!("GIT_DESCRIBE"),
    after_help = "Logs are written to: ~/.local/share/taskflow/logs/taskflow.log"
)]
pub struct Cli {
    /// Path to a YAML config file (default: ~/.config/taskflow/taskflow.yml)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve JSON-lines requests on stdin, one response per line on stdout
    Serve,

    /// Show the dashboard for the welcome tasks
    Demo {
        /// Print the dashboard as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply a JSON-lines request file to a fresh store and show the dashboard
    Replay {
        /// File with one request per line
        file: PathBuf,

        /// Print the dashboard as JSON
        #[arg(long)]
        json: bool,
    },
}
