//! The customer-success balancer
//!
//! Holds one immutable input snapshot and computes, on demand, which agent
//! ends up with the most customers.

use std::collections::HashSet;

use shared::{Agent, AgentId, Customer, EntityKind, SharedError, SharedResult};
use tracing::debug;

use super::bands::{Distribution, assign_bands};
use super::roster::{Roster, sort_customers};
use super::winner::NO_WINNER;

/// Assigns customers to agents by score band and reports the busiest agent
#[derive(Debug, Clone)]
pub struct Balancer {
    agents: Vec<Agent>,
    customers: Vec<Customer>,
    unavailable: HashSet<AgentId>,
}

impl Balancer {
    /// Create a balancer without validating identifiers
    pub fn new(
        agents: Vec<Agent>,
        customers: Vec<Customer>,
        unavailable: impl IntoIterator<Item = AgentId>,
    ) -> Self {
        Self {
            agents,
            customers,
            unavailable: unavailable.into_iter().collect(),
        }
    }

    /// Create a balancer, rejecting zero and duplicate identifiers.
    ///
    /// Zero is refused because it doubles as the no-winner result of
    /// [`Balancer::execute`]. Unavailable ids matching no agent are accepted.
    pub fn try_new(
        agents: Vec<Agent>,
        customers: Vec<Customer>,
        unavailable: impl IntoIterator<Item = AgentId>,
    ) -> SharedResult<Self> {
        check_identifiers(agents.iter().map(|agent| agent.id.get()), EntityKind::Agent)?;
        check_identifiers(
            customers.iter().map(|customer| customer.id.get()),
            EntityKind::Customer,
        )?;

        Ok(Self::new(agents, customers, unavailable))
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn unavailable(&self) -> &HashSet<AgentId> {
        &self.unavailable
    }

    /// Assign every customer to the band of an available agent
    pub fn distribute(&self) -> Distribution {
        let roster = Roster::select(&self.agents, &self.unavailable);
        let customers = sort_customers(&self.customers);

        let (agents, excluded) = roster.into_parts();
        let mut distribution = assign_bands(&agents, &customers);
        distribution.excluded = excluded;
        distribution
    }

    /// The agent with strictly the most customers, if there is one
    pub fn winner(&self) -> Option<AgentId> {
        let winner = self.distribute().winner();
        debug!(
            agents = self.agents.len(),
            customers = self.customers.len(),
            winner = ?winner,
            "Balancing run complete"
        );
        winner
    }

    /// Id of the agent with strictly the most customers, or `0` when the
    /// roster is empty or the maximum is shared
    pub fn execute(&self) -> u64 {
        self.winner().map_or(NO_WINNER, AgentId::get)
    }
}

fn check_identifiers(ids: impl Iterator<Item = u64>, kind: EntityKind) -> SharedResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id == NO_WINNER {
            return Err(SharedError::InvalidIdentifier { kind, id });
        }
        if !seen.insert(id) {
            return Err(SharedError::DuplicateIdentifier { kind, id });
        }
    }
    Ok(())
}
