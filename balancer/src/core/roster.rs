//! Working roster selection
//!
//! Removes unavailable agents and puts the remaining agents and all customers
//! into ascending score order, which is the order bands are cut in.

use std::collections::HashSet;

use shared::{Agent, AgentId, Customer};
use tracing::debug;

/// Agents taking part in a run, sorted by score, plus the ones filtered out
#[derive(Debug, Clone, Default)]
pub struct Roster {
    agents: Vec<Agent>,
    excluded: Vec<AgentId>,
}

impl Roster {
    /// Filter out unavailable agents and sort the rest by score.
    ///
    /// Ids in `unavailable` that match no agent are ignored. The sort is
    /// stable, so agents sharing a score keep their input order.
    pub fn select(agents: &[Agent], unavailable: &HashSet<AgentId>) -> Self {
        let (mut working, excluded): (Vec<&Agent>, Vec<&Agent>) = if unavailable.is_empty() {
            (agents.iter().collect(), Vec::new())
        } else {
            agents
                .iter()
                .partition(|agent| !unavailable.contains(&agent.id))
        };

        working.sort_by_key(|agent| agent.score);

        debug!(
            working = working.len(),
            excluded = excluded.len(),
            "Selected working roster"
        );

        Self {
            agents: working.into_iter().cloned().collect(),
            excluded: excluded.into_iter().map(|agent| agent.id).collect(),
        }
    }

    /// Working agents in ascending score order
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Agents removed by the availability filter, in input order
    pub fn excluded(&self) -> &[AgentId] {
        &self.excluded
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Agent>, Vec<AgentId>) {
        (self.agents, self.excluded)
    }
}

/// Copy of `customers` in ascending score order; ties keep input order
pub fn sort_customers(customers: &[Customer]) -> Vec<Customer> {
    let mut sorted = customers.to_vec();
    sorted.sort_by_key(|customer| customer.score);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{agents_from_scores, customers_from_scores};

    fn ids(roster: &Roster) -> Vec<u64> {
        roster.agents().iter().map(|agent| agent.id.get()).collect()
    }

    #[test]
    fn test_unavailable_agents_are_removed() {
        let agents = agents_from_scores(&[60, 20, 95, 75]);
        let unavailable = HashSet::from([AgentId(2), AgentId(4)]);

        let roster = Roster::select(&agents, &unavailable);

        assert_eq!(ids(&roster), vec![1, 3]);
        assert_eq!(roster.excluded(), &[AgentId(2), AgentId(4)]);
    }

    #[test]
    fn test_unknown_unavailable_ids_are_ignored() {
        let agents = agents_from_scores(&[10, 5]);
        let unavailable = HashSet::from([AgentId(42)]);

        let roster = Roster::select(&agents, &unavailable);

        assert_eq!(ids(&roster), vec![2, 1]);
        assert!(roster.excluded().is_empty());
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let agents = agents_from_scores(&[30, 10, 30, 10]);

        let roster = Roster::select(&agents, &HashSet::new());

        assert_eq!(ids(&roster), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_empty_inputs() {
        let roster = Roster::select(&[], &HashSet::from([AgentId(1)]));
        assert!(roster.is_empty());
        assert!(sort_customers(&[]).is_empty());
    }

    #[test]
    fn test_sort_customers_leaves_input_untouched() {
        let customers = customers_from_scores(&[90, 20, 70]);

        let sorted = sort_customers(&customers);

        let sorted_scores: Vec<_> = sorted.iter().map(|c| c.score).collect();
        assert_eq!(sorted_scores, vec![20, 70, 90]);
        assert_eq!(customers[0].score, 90);
    }
}
