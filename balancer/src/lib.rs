//! Customer-success balancer library
//!
//! Assigns customers to customer-success agents by score band and finds the
//! agent left with the most customers. The balancing itself lives in
//! [`core`]; the rest loads scenarios and drives single runs.

pub mod core;
pub mod error;
pub mod runner;
pub mod scenario;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use crate::core::{AgentLoad, Balancer, Distribution, NO_WINNER};
pub use error::{BalancerError, BalancerResult};
pub use runner::{RunOptions, RunOutcome, Runner};
pub use scenario::Scenario;
pub use traits::ScenarioSource;
