//! Test fixtures and data for balancer tests
//!
//! Standard scenarios shared by the integration suites. Ids are assigned in
//! input order starting at 1.

use shared::Score;

/// A named balancing scenario with its expected result
pub struct Case {
    pub agent_scores: Vec<Score>,
    pub customer_scores: Vec<Score>,
    pub unavailable: Vec<u64>,
    pub expected: u64,
}

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Customer scores shared by several team-sized scenarios
    pub const TEAM_CUSTOMERS: [Score; 10] = [10, 10, 10, 20, 20, 30, 30, 30, 20, 60];

    /// Upper bound for the large scenario
    pub const LARGE_SCENARIO_BUDGET_MS: u128 = 1_000;

    pub fn two_agents_away() -> Case {
        Case {
            agent_scores: vec![60, 20, 95, 75],
            customer_scores: vec![90, 20, 70, 40, 60, 10],
            unavailable: vec![2, 4],
            expected: 1,
        }
    }

    pub fn tied_leaders() -> Case {
        Case {
            agent_scores: vec![11, 21, 31, 3, 4, 5],
            customer_scores: Self::TEAM_CUSTOMERS.to_vec(),
            unavailable: vec![],
            expected: 0,
        }
    }

    /// 999 agents scored 1..=999, 10000 customers at 998, agent 999 away
    pub fn large_roster() -> Case {
        Case {
            agent_scores: (1..=999).collect(),
            customer_scores: vec![998; 10_000],
            unavailable: vec![999],
            expected: 998,
        }
    }

    pub fn highest_agent_takes_all() -> Case {
        Case {
            agent_scores: vec![100, 2, 3, 6, 4, 5],
            customer_scores: Self::TEAM_CUSTOMERS.to_vec(),
            unavailable: vec![],
            expected: 1,
        }
    }

    pub fn exact_score_match() -> Case {
        Case {
            agent_scores: vec![2, 5, 6, 7],
            customer_scores: vec![6],
            unavailable: vec![],
            expected: 3,
        }
    }

    /// Every customer scores above every agent, so all tie at zero
    pub fn everyone_out_of_range() -> Case {
        Case {
            agent_scores: vec![1, 2, 3, 4, 5, 6],
            customer_scores: Self::TEAM_CUSTOMERS.to_vec(),
            unavailable: vec![],
            expected: 0,
        }
    }

    pub fn senior_agents_away() -> Case {
        Case {
            agent_scores: vec![100, 99, 88, 3, 4, 5],
            customer_scores: Self::TEAM_CUSTOMERS.to_vec(),
            unavailable: vec![1, 3, 2],
            expected: 0,
        }
    }

    pub fn junior_agents_away() -> Case {
        Case {
            agent_scores: vec![100, 99, 88, 3, 4, 5],
            customer_scores: Self::TEAM_CUSTOMERS.to_vec(),
            unavailable: vec![4, 5, 6],
            expected: 3,
        }
    }
}
