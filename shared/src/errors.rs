//! Shared error types for balancer input validation

use thiserror::Error;

use crate::types::EntityKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Invalid {kind} identifier: {id}")]
    InvalidIdentifier { kind: EntityKind, id: u64 },

    #[error("Duplicate {kind} identifier: {id}")]
    DuplicateIdentifier { kind: EntityKind, id: u64 },
}

pub type SharedResult<T> = Result<T, SharedError>;
