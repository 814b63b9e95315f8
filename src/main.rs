//! Peg Adapter CLI
//!
//! Try square and round pegs against a round hole from the command line.
//!
//! Usage:
//!     peg-adapter demo
//!     peg-adapter fit --hole 5 --square 5 --square 10 --round 4
//!     peg-adapter init --config ~/.peg-adapter/scenario.toml
//!     peg-adapter run --config ~/.peg-adapter/scenario.toml --json

use clap::{Parser, Subcommand};
use std::process;
use tracing::{info, warn};

use peg_adapter::core::config::{default_scenario_path, expand_path};
use peg_adapter::logging;
use peg_adapter::{ConfigError, FitReport, PegSpec, Scenario, ScenarioConfig};

/// Peg Adapter - Fit square pegs into round holes
#[derive(Parser)]
#[command(name = "peg-adapter")]
#[command(version)]
#[command(about = "Square pegs, round holes, one adapter", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the classic demonstration (hole 5, square pegs 5 and 10)
    Demo,

    /// Check ad-hoc pegs against a hole
    Fit {
        /// Hole radius
        #[arg(long, default_value = "5.0")]
        hole: f64,

        /// Square peg width (repeatable)
        #[arg(short, long = "square")]
        squares: Vec<f64>,

        /// Round peg radius (repeatable)
        #[arg(short, long = "round")]
        rounds: Vec<f64>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a scenario file
    Run {
        /// Scenario file path
        #[arg(short, long, default_value = default_scenario_path())]
        config: String,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the demonstration scenario to a file
    Init {
        /// Scenario file path
        #[arg(short, long, default_value = default_scenario_path())]
        config: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("Failed to encode results: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        if let CliError::Config(ConfigError::Io { source, .. }) = self {
            if source.kind() == std::io::ErrorKind::NotFound {
                eprintln!();
                eprintln!("Create a scenario first: peg-adapter init");
            }
        }
        process::exit(1)
    }
}

fn print_reports(reports: &[FitReport], json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(());
    }
    for report in reports {
        match report.width {
            Some(width) => println!(
                "{} (width {}, radius {:.4}) fits: {}",
                report.label, width, report.radius, report.fits
            ),
            None => println!(
                "{} (radius {:.4}) fits: {}",
                report.label, report.radius, report.fits
            ),
        }
    }
    Ok(())
}

fn cmd_demo() {
    for report in Scenario::demo().run() {
        println!("{} fits: {}", report.label, report.fits);
    }
}

fn cmd_fit(hole: f64, squares: &[f64], rounds: &[f64], json: bool) -> Result<(), CliError> {
    let config = squares
        .iter()
        .enumerate()
        .map(|(i, &width)| PegSpec::square(format!("Square peg #{}", i + 1), width))
        .chain(
            rounds
                .iter()
                .enumerate()
                .map(|(i, &radius)| PegSpec::round(format!("Round peg #{}", i + 1), radius)),
        )
        .fold(ScenarioConfig::new(hole), ScenarioConfig::with_peg);

    let scenario = Scenario::from_config(&config)?;
    print_reports(&scenario.run(), json)
}

fn cmd_run(config_path: &str, json: bool) -> Result<(), CliError> {
    let path = expand_path(config_path);
    let config = ScenarioConfig::load_from(&path)?;
    let scenario = Scenario::from_config(&config)?;
    print_reports(&scenario.run(), json)
}

fn cmd_init(config_path: &str, force: bool) -> Result<(), CliError> {
    let path = expand_path(config_path);
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path).into());
    }
    ScenarioConfig::default().save_to(&path)?;
    info!(path = %path.display(), "Wrote scenario");
    println!("Scenario written to {}", path.display());
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let result = match cli.command {
        Commands::Demo => {
            cmd_demo();
            Ok(())
        }
        Commands::Fit {
            hole,
            squares,
            rounds,
            json,
        } => {
            if squares.is_empty() && rounds.is_empty() {
                warn!("No pegs given; pass --square or --round");
            }
            cmd_fit(hole, &squares, &rounds, json)
        }
        Commands::Run { config, json } => cmd_run(&config, json),
        Commands::Init { config, force } => cmd_init(&config, force),
    };

    if let Err(e) = result {
        e.exit();
    }
}
