//! Shared types for the customer-success balancer
//!
//! Contains the entity records handed to the balancer, the validation
//! errors raised on malformed input, and the tracing setup used by the binary.

pub mod types;
pub mod errors;
pub mod logging;

pub use types::*;
pub use errors::*;
