//! Balancer-specific error types

use std::path::PathBuf;

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BalancerError {
    #[error("Failed to read scenario from {path}")]
    ScenarioRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Scenario is not valid JSON: {0}")]
    ScenarioParse(#[from] serde_json::Error),

    #[error("Invalid balancer input: {0}")]
    InvalidInput(#[from] SharedError),

    #[error("Configuration error: {field}")]
    ConfigurationError { field: String },
}

impl BalancerError {
    pub fn config(field: impl Into<String>) -> Self {
        Self::ConfigurationError { field: field.into() }
    }
}

pub type BalancerResult<T> = Result<T, BalancerError>;
