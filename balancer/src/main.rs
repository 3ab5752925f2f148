//! Main entry point for the balancer binary
//!
//! Loads one scenario, balances it and prints the winning agent id
//! (or `0` when no single agent leads).

use std::path::PathBuf;

use clap::Parser;

use balancer::{
    BalancerError, BalancerResult, RunOptions, Runner, services::FileScenarioSource,
};
use shared::logging;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Assign customers to customer-success agents by score band
#[derive(Parser)]
#[command(name = "balancer")]
#[command(about = "Finds the customer-success agent attending the most customers")]
pub struct Args {
    /// Scenario JSON file, or `-` to read standard input
    pub scenario: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "BALANCER_LOG_LEVEL", default_value = logging::DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Reject zero or duplicate identifiers instead of balancing them
    #[arg(long)]
    pub strict: bool,

    /// Print the full distribution as JSON instead of only the winner id
    #[arg(long)]
    pub report: bool,
}

fn main() -> BalancerResult<()> {
    // Variables from .env take effect before arguments are parsed
    let _ = dotenv::dotenv();

    let args = Args::parse();

    if !LOG_LEVELS.contains(&args.log_level.as_str()) {
        return Err(BalancerError::config(format!(
            "Invalid log level: {}",
            args.log_level
        )));
    }
    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup("customer-success balancer");

    let options = RunOptions {
        strict: args.strict,
        report: args.report,
    };
    let runner = Runner::new(FileScenarioSource::new(args.scenario), options);

    let output = runner
        .run()
        .and_then(|outcome| runner.render(&outcome))
        .inspect_err(|error| logging::log_error("Balancing run", error))?;

    println!("{output}");

    logging::log_success("Balancing run finished");
    Ok(())
}
