//! Test helpers and builder patterns for balancer tests
//!
//! This module provides convenient helper functions and builder patterns
//! to reduce test boilerplate.

use balancer::{Balancer, Scenario};
use shared::{AgentId, Score, agents_from_scores, customers_from_scores};

use super::fixtures::Case;

/// Builder for balancers with sensible empty defaults
#[derive(Default)]
pub struct BalancerBuilder {
    agent_scores: Vec<Score>,
    customer_scores: Vec<Score>,
    unavailable: Vec<u64>,
}

impl BalancerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_agents(mut self, scores: &[Score]) -> Self {
        self.agent_scores = scores.to_vec();
        self
    }

    pub fn with_customers(mut self, scores: &[Score]) -> Self {
        self.customer_scores = scores.to_vec();
        self
    }

    pub fn with_unavailable(mut self, ids: &[u64]) -> Self {
        self.unavailable = ids.to_vec();
        self
    }

    pub fn from_case(case: &Case) -> Self {
        Self::new()
            .with_agents(&case.agent_scores)
            .with_customers(&case.customer_scores)
            .with_unavailable(&case.unavailable)
    }

    pub fn scenario(&self) -> Scenario {
        Scenario::from_scores(&self.agent_scores, &self.customer_scores, &self.unavailable)
    }

    pub fn build(self) -> Balancer {
        Balancer::new(
            agents_from_scores(&self.agent_scores),
            customers_from_scores(&self.customer_scores),
            self.unavailable.into_iter().map(AgentId),
        )
    }
}

/// Assertion helpers shared by the suites
pub struct TestHelpers;

impl TestHelpers {
    /// Run a fixture case and check its expected winner
    pub fn assert_case(case: Case) {
        let balancer = BalancerBuilder::from_case(&case).build();
        assert_eq!(
            balancer.execute(),
            case.expected,
            "agents {:?}, unavailable {:?}",
            case.agent_scores,
            case.unavailable
        );
    }

    /// Assert how many customers each listed agent received
    pub fn assert_counts(balancer: &Balancer, expected: &[(u64, usize)]) {
        let distribution = balancer.distribute();
        for &(agent_id, count) in expected {
            assert_eq!(
                distribution.assigned_count(AgentId(agent_id)),
                count,
                "assigned count for agent {agent_id}"
            );
        }
    }
}
