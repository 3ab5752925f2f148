//! Winner determination

use shared::AgentId;
use tracing::debug;

/// Value returned by `Balancer::execute` when no single agent leads
pub const NO_WINNER: u64 = 0;

/// Find the agent whose count is strictly higher than every other count.
///
/// Returns `None` when there are no agents or when two or more agents share
/// the maximum.
pub fn unique_leader<I>(counts: I) -> Option<AgentId>
where
    I: IntoIterator<Item = (AgentId, usize)>,
{
    let mut leader: Option<(AgentId, usize)> = None;
    let mut tied = 0usize;

    for (agent_id, count) in counts {
        match leader {
            Some((_, best)) if count < best => {}
            Some((_, best)) if count == best => tied += 1,
            _ => {
                leader = Some((agent_id, count));
                tied = 1;
            }
        }
    }

    match leader {
        Some((agent_id, count)) if tied == 1 => {
            debug!(winner = %agent_id, assigned = count, "Unique leader found");
            Some(agent_id)
        }
        Some((_, count)) => {
            debug!(tied, assigned = count, "Maximum shared, no winner");
            None
        }
        None => None,
    }
}
