//! Trait definitions with mockall annotations for testing
//!
//! The balancer core never touches I/O. Everything that feeds it a scenario
//! goes through the traits here so that the runner can be tested with mocks.

use crate::error::BalancerResult;
use crate::scenario::Scenario;

/// Source of the input snapshot for one balancing run
#[mockall::automock]
pub trait ScenarioSource {
    /// Human-readable location of the scenario, used in log output
    fn describe(&self) -> String;

    /// Load and parse the scenario
    ///
    /// # Returns
    /// The parsed scenario, or a read/parse error naming what went wrong
    fn load(&self) -> BalancerResult<Scenario>;
}
