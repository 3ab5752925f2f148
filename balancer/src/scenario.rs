//! Scenario documents
//!
//! A scenario is one input snapshot for the balancer. On disk it is JSON and
//! may list full records or, more compactly, bare scores:
//!
//! ```json
//! { "agent_scores": [60, 20, 95, 75],
//!   "customer_scores": [90, 20, 70, 40, 60, 10],
//!   "unavailable_agent_ids": [2, 4] }
//! ```

use serde::{Deserialize, Serialize};
use shared::{Agent, AgentId, Customer, Score, agents_from_scores, customers_from_scores};

use crate::core::Balancer;
use crate::error::BalancerResult;

/// One balancing input snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawScenario")]
pub struct Scenario {
    pub agents: Vec<Agent>,
    pub customers: Vec<Customer>,
    pub unavailable_agent_ids: Vec<AgentId>,
}

/// Wire form accepting either records or score lists for each collection
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawScenario {
    agents: Option<Vec<Agent>>,
    agent_scores: Option<Vec<Score>>,
    customers: Option<Vec<Customer>>,
    customer_scores: Option<Vec<Score>>,
    #[serde(default)]
    unavailable_agent_ids: Vec<AgentId>,
}

impl TryFrom<RawScenario> for Scenario {
    type Error = String;

    fn try_from(raw: RawScenario) -> Result<Self, Self::Error> {
        let agents = match (raw.agents, raw.agent_scores) {
            (Some(_), Some(_)) => {
                return Err("give either `agents` or `agent_scores`, not both".to_string());
            }
            (Some(agents), None) => agents,
            (None, Some(scores)) => agents_from_scores(&scores),
            (None, None) => Vec::new(),
        };

        let customers = match (raw.customers, raw.customer_scores) {
            (Some(_), Some(_)) => {
                return Err("give either `customers` or `customer_scores`, not both".to_string());
            }
            (Some(customers), None) => customers,
            (None, Some(scores)) => customers_from_scores(&scores),
            (None, None) => Vec::new(),
        };

        Ok(Self {
            agents,
            customers,
            unavailable_agent_ids: raw.unavailable_agent_ids,
        })
    }
}

impl Scenario {
    pub fn new(agents: Vec<Agent>, customers: Vec<Customer>, unavailable_agent_ids: Vec<AgentId>) -> Self {
        Self {
            agents,
            customers,
            unavailable_agent_ids,
        }
    }

    /// Build a scenario from bare scores, numbering both collections from 1
    pub fn from_scores(agent_scores: &[Score], customer_scores: &[Score], unavailable: &[u64]) -> Self {
        Self::new(
            agents_from_scores(agent_scores),
            customers_from_scores(customer_scores),
            unavailable.iter().copied().map(AgentId).collect(),
        )
    }

    pub fn from_json_str(json: &str) -> BalancerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Balancer over this snapshot, without identifier checks
    pub fn into_balancer(self) -> Balancer {
        Balancer::new(self.agents, self.customers, self.unavailable_agent_ids)
    }

    /// Balancer over this snapshot, rejecting zero or duplicate identifiers
    pub fn try_into_balancer(self) -> BalancerResult<Balancer> {
        Ok(Balancer::try_new(
            self.agents,
            self.customers,
            self.unavailable_agent_ids,
        )?)
    }
}
