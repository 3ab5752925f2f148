//! Single balancing run: load a scenario, balance it, render the result

use serde::Serialize;
use shared::logging;

use crate::core::{Distribution, NO_WINNER};
use crate::error::BalancerResult;
use crate::traits::ScenarioSource;

/// How a run treats its input and output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Reject zero and duplicate identifiers instead of balancing them
    pub strict: bool,
    /// Render the full distribution instead of only the winner id
    pub report: bool,
}

/// Result of one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    /// Winning agent id, `0` when there is no unique winner
    pub winner: u64,
    pub distribution: Distribution,
}

/// Drives one balancing run against an injected scenario source
pub struct Runner<S: ScenarioSource> {
    source: S,
    options: RunOptions,
}

impl<S: ScenarioSource> Runner<S> {
    pub fn new(source: S, options: RunOptions) -> Self {
        Self { source, options }
    }

    pub fn options(&self) -> RunOptions {
        self.options
    }

    pub fn run(&self) -> BalancerResult<RunOutcome> {
        logging::log_progress("Loading scenario", &self.source.describe());
        let scenario = self.source.load()?;

        let balancer = if self.options.strict {
            scenario.try_into_balancer()?
        } else {
            scenario.into_balancer()
        };

        let distribution = balancer.distribute();
        let winner = distribution.winner().map_or(NO_WINNER, |agent_id| agent_id.get());

        logging::log_progress(
            "Balanced",
            &format!(
                "{} agents, {} customers, {} unassigned",
                distribution.loads.len(),
                distribution.total_assigned(),
                distribution.unassigned.len()
            ),
        );

        Ok(RunOutcome {
            winner,
            distribution,
        })
    }

    /// Render an outcome for standard output
    pub fn render(&self, outcome: &RunOutcome) -> BalancerResult<String> {
        if self.options.report {
            Ok(serde_json::to_string_pretty(outcome)?)
        } else {
            Ok(outcome.winner.to_string())
        }
    }
}
