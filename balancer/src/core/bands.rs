//! Score band assignment
//!
//! Each working agent owns the half-open band `(previous score, own score]`,
//! the lowest agent's band being open below. Customers are matched to bands
//! in one merge pass over both sorted sequences.

use serde::{Deserialize, Serialize};
use shared::{Agent, AgentId, Customer, CustomerId, Score};
use tracing::{debug, trace};

use super::winner::unique_leader;

/// Customers assigned to one agent during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentLoad {
    pub agent_id: AgentId,
    pub score: Score,
    pub customers: Vec<CustomerId>,
}

impl AgentLoad {
    pub fn assigned_count(&self) -> usize {
        self.customers.len()
    }
}

/// Outcome of assigning every customer to a band
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    /// One entry per working agent, in ascending band order
    pub loads: Vec<AgentLoad>,
    /// Customers scoring above every working agent
    pub unassigned: Vec<CustomerId>,
    /// Agents removed by the availability filter
    pub excluded: Vec<AgentId>,
}

impl Distribution {
    /// Customers assigned to `agent_id`; zero for excluded or unknown agents
    pub fn assigned_count(&self, agent_id: AgentId) -> usize {
        self.loads
            .iter()
            .filter(|load| load.agent_id == agent_id)
            .map(AgentLoad::assigned_count)
            .sum()
    }

    pub fn total_assigned(&self) -> usize {
        self.loads.iter().map(AgentLoad::assigned_count).sum()
    }

    /// The agent holding strictly more customers than any other
    pub fn winner(&self) -> Option<AgentId> {
        unique_leader(
            self.loads
                .iter()
                .map(|load| (load.agent_id, load.assigned_count())),
        )
    }
}

/// Assign sorted customers to the bands of sorted agents.
///
/// Both slices must be in ascending score order. Customers below or equal to
/// the lowest agent score go to that agent; customers above the highest
/// agent score end up in `unassigned`. Of several agents sharing a score,
/// the first owns the band and the rest get an empty one.
pub fn assign_bands(agents: &[Agent], customers: &[Customer]) -> Distribution {
    let mut loads = Vec::with_capacity(agents.len());
    let mut cursor = 0;

    for agent in agents {
        // Everything before `cursor` already scored at or below the previous agent
        let width = customers[cursor..].partition_point(|customer| customer.score <= agent.score);
        let band = &customers[cursor..cursor + width];
        cursor += width;

        trace!(agent = %agent.id, score = agent.score, assigned = band.len(), "Band assigned");

        loads.push(AgentLoad {
            agent_id: agent.id,
            score: agent.score,
            customers: band.iter().map(|customer| customer.id).collect(),
        });
    }

    let unassigned: Vec<CustomerId> = customers[cursor..].iter().map(|customer| customer.id).collect();

    debug!(
        bands = loads.len(),
        assigned = cursor,
        unassigned = unassigned.len(),
        "Customers distributed"
    );

    Distribution {
        loads,
        unassigned,
        excluded: Vec::new(),
    }
}
