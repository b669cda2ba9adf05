//! Scrollkit CLI
//!
//! Headless tooling for the viewport engine:
//! - `run` replays a JSON scenario and reports the viewport after each step
//! - `config` prints or writes the default `scrollkit.toml`

mod host;
mod report;
mod runner;
mod scenario;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scrollkit_viewport::ViewportConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::scenario::Scenario;

#[derive(Parser, Debug)]
#[command(name = "scrollkit")]
#[command(author, version, about = "Headless tools for the scrollkit viewport engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a scenario file against a viewport
    Run {
        /// Scenario JSON file
        scenario: PathBuf,

        /// Viewport config (scrollkit.toml); defaults when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the default configuration as TOML
    Config {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            scenario,
            config,
            json,
        } => cmd_run(&scenario, config.as_deref(), json),
        Commands::Config { output } => cmd_config(output.as_deref()),
    }
}

fn cmd_run(path: &Path, config: Option<&Path>, json: bool) -> Result<ExitCode> {
    let config = match config {
        Some(path) => ViewportConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ViewportConfig::default(),
    };
    let scenario = Scenario::from_path(path)?;
    tracing::info!(
        scenario = %path.display(),
        steps = scenario.steps.len(),
        "running scenario"
    );

    let report = runner::run_scenario(&scenario, config)?;
    let mut stdout = io::stdout().lock();
    if json {
        report.write_json(&mut stdout)?;
    } else {
        report.write_text(&mut stdout)?;
    }

    Ok(if report.is_failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn cmd_config(output: Option<&Path>) -> Result<ExitCode> {
    let text = ViewportConfig::default().to_toml()?;
    match output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote default config");
        }
        None => print!("{text}"),
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_args() {
        let cli = Cli::parse_from(["scrollkit", "run", "s.json", "--json", "-v"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Run {
                scenario,
                config,
                json,
            } => {
                assert_eq!(scenario, PathBuf::from("s.json"));
                assert!(config.is_none());
                assert!(json);
            }
            Commands::Config { .. } => panic!("expected run"),
        }
    }

    #[test]
    fn test_default_config_parses_back() {
        let text = ViewportConfig::default().to_toml().unwrap();
        assert_eq!(
            ViewportConfig::from_toml_str(&text).unwrap(),
            ViewportConfig::default()
        );
    }
}
