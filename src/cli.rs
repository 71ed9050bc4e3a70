use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use expression_finder::solver::report_all;
use expression_finder::{
    ExpressionSolver, MatchKind, MatchReporter, MatchResult, OperandSet, SearchConfig,
};
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

/// Expression Finder - arrange numbers and operators to reach a target value
#[derive(Parser, Debug)]
#[command(name = "expression-finder")]
#[command(about = "Find arithmetic expressions over the given numbers that evaluate to a target")]
#[command(version)]
pub struct CliArgs {
    /// Numbers to combine, separated by spaces or commas
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub numbers: Vec<String>,

    /// Target value to match
    #[arg(short, long, allow_negative_numbers = true)]
    pub target: i64,

    /// Operator symbols to place between numbers (any of + - * / %)
    #[arg(short, long, default_value = "+-*/", allow_hyphen_values = true)]
    pub operators: String,

    /// Also report values within this percentage of the target
    #[arg(short = 'r', long, value_name = "PERCENT", default_value_t = 0)]
    pub tolerance: u32,

    /// Keep searching after the first exact match
    #[arg(short, long)]
    pub all: bool,

    /// Spread the search over all cores (match order is not deterministic)
    #[arg(short, long)]
    pub parallel: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub operands: OperandSet,
    pub search: SearchConfig,
    pub parallel: bool,
    pub log_level: LogLevel,
}

impl CliArgs {
    fn into_config(self) -> Result<CliConfig> {
        let operands = OperandSet::parse(&self.numbers.join(" "), &self.operators)
            .context("Invalid numbers or operators")?;

        Ok(CliConfig {
            operands,
            search: SearchConfig::new(self.target, self.tolerance, !self.all),
            parallel: self.parallel,
            log_level: self.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliArgs::parse().into_config()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Prints each match on its own line
struct ConsoleReporter {
    target: i64,
}

impl ConsoleReporter {
    fn line(&self, result: &MatchResult) -> String {
        match result.kind {
            MatchKind::Exact => format!("Found value: {}", result),
            _ => format!(
                "Close value: {} ({:.2}%)",
                result,
                result.value.abs() / self.target as f64 * 100.0
            ),
        }
    }
}

impl MatchReporter for ConsoleReporter {
    fn report(&mut self, result: &MatchResult) {
        println!("{}", self.line(result));
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    info!(
        "Searching {:?} with operators {:?} for {}",
        config.operands.numbers(),
        config.operands.operators().as_slice(),
        config.search.expected_result
    );

    let solver = ExpressionSolver::new(config.search);
    let mut reporter = ConsoleReporter {
        target: config.search.expected_result,
    };

    let reported = if config.parallel {
        let results = solver
            .search_parallel(&config.operands)
            .context("Could not start the search")?;
        report_all(results, &mut reporter)
    } else {
        let search = solver
            .search(&config.operands)
            .context("Could not start the search")?;
        report_all(search, &mut reporter)
    };

    if reported == 0 {
        warn!("No matching expression found");
        println!("No matching expression found.");
    }
    Ok(())
}
