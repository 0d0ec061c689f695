//! taskflow CLI - an in-memory task tracker with a dashboard.

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io::{self, BufReader};
use std::path::PathBuf;
use taskflow::{Config, Dashboard, Response, Session};

mod cli;
mod render;

use cli::{Cli, Command};

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskflow")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("taskflow.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn show(dashboard: &Dashboard, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(dashboard).context("Failed to encode dashboard")?;
        println!("{}", out);
    } else {
        render::print_dashboard(dashboard);
    }
    Ok(())
}

fn describe_failure(response: &Response) -> String {
    match response {
        Response::NotFound { id } => format!("task not found: {}", id),
        Response::Invalid { message } | Response::Error { message } => message.clone(),
        other => format!("{:?}", other),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Command::Serve => {
            let seed = config.seed_welcome;
            let mut session = Session::new(config);
            if seed {
                session.store_mut().seed_welcome().context("Failed to seed welcome tasks")?;
            }

            let stdin = io::stdin();
            let stdout = io::stdout();
            session
                .serve(stdin.lock(), stdout.lock())
                .context("Session error")?;
        }

        Command::Demo { json } => {
            let mut session = Session::new(config);
            let seeded = session
                .store_mut()
                .seed_welcome()
                .context("Failed to seed welcome tasks")?;
            info!("Seeded {} welcome task(s)", seeded);

            show(&session.dashboard(), json)?;
        }

        Command::Replay { file, json } => {
            let reader = BufReader::new(
                fs::File::open(&file).with_context(|| format!("Failed to open {}", file.display()))?,
            );

            let mut session = Session::new(config);
            let failures = session.replay(reader).context("Failed to replay requests")?;

            for failure in &failures {
                eprintln!(
                    "{} line {}: {}",
                    "✗".red(),
                    failure.line,
                    describe_failure(&failure.response)
                );
            }

            show(&session.dashboard(), json)?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    info!("Command: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
