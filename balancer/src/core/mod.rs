//! Core balancing logic
//!
//! This module contains pure business logic with no I/O dependencies.
//! All functions are deterministic and easily testable.

pub mod balancer;
pub mod bands;
pub mod roster;
pub mod winner;

pub use balancer::Balancer;
pub use bands::{AgentLoad, Distribution};
pub use roster::Roster;
pub use winner::NO_WINNER;
