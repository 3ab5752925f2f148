//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Experience level shared by agents and customers
pub type Score = i64;

/// Identifier of a customer-success agent
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub u64);

impl AgentId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AgentId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Identifier of a customer
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub u64);

impl CustomerId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CustomerId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A customer-success agent and the highest customer score it can serve
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub score: Score,
}

impl Agent {
    pub fn new(id: u64, score: Score) -> Self {
        Self {
            id: AgentId(id),
            score,
        }
    }
}

/// A customer waiting to be attended
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub score: Score,
}

impl Customer {
    pub fn new(id: u64, score: Score) -> Self {
        Self {
            id: CustomerId(id),
            score,
        }
    }
}

/// Which input collection an identifier belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Agent,
    Customer,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Agent => write!(f, "agent"),
            EntityKind::Customer => write!(f, "customer"),
        }
    }
}

/// Build agents from bare scores, numbering them from 1 in input order
pub fn agents_from_scores(scores: &[Score]) -> Vec<Agent> {
    scores
        .iter()
        .zip(1u64..)
        .map(|(&score, id)| Agent::new(id, score))
        .collect()
}

/// Build customers from bare scores, numbering them from 1 in input order
pub fn customers_from_scores(scores: &[Score]) -> Vec<Customer> {
    scores
        .iter()
        .zip(1u64..)
        .map(|(&score, id)| Customer::new(id, score))
        .collect()
}
