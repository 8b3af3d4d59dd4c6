use crate::solver::ExpressionSolver;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Exprhunt - Find arithmetic expressions over an integer sequence
#[derive(Parser, Debug)]
#[command(name = "exprhunt")]
#[command(
    about = "Find arithmetic expressions over a sequence of integers that evaluate to a target value"
)]
#[command(version)]
pub struct CliArgs {
    /// Integers to combine, in order
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub numbers: Vec<i64>,

    /// Target value to match
    #[arg(short, long, allow_negative_numbers = true)]
    pub target: i64,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub numbers: Vec<i64>,
    pub target: i64,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    Ok(CliConfig {
        numbers: args.numbers,
        target: args.target,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = ExpressionSolver::new();

    info!(
        "Searching for expressions over {:?} that equal {}",
        config.numbers, config.target
    );

    let matches = solver
        .find_expressions(&config.numbers, config.target)
        .context("Expression search failed")?;

    if matches.is_empty() {
        warn!("No matching expression found");
    }

    for expr in &matches {
        println!("{}", expr);
    }
    Ok(())
}
