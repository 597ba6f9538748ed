use crate::graph::algos::dfs;
use crate::graph::algos::shared::Traversal;
use crate::graph::types::{SearchOutcome, VertexId};
use crate::graph::GraphProvider;

/// Depth-first search that gives up after `limit` expansions.
///
/// Running out of steps is a normal outcome, reported as
/// [`SearchOutcome::LimitExhausted`] rather than an error.
pub fn depth_limited(
    provider: &dyn GraphProvider,
    origin: VertexId,
    goal: VertexId,
    limit: usize,
) -> Traversal {
    dfs::search_limited(provider, origin, goal, Some(limit))
}

/// Repeat depth-limited search with growing limits, starting at `initial_limit`.
///
/// Stops when the goal is found, when a pass explores everything reachable
/// without hitting its limit, or once the limit reaches `vertex_count - 1`
/// (no path can need more expansions than that). At most
/// `vertex_count - initial_limit` passes run past the first one.
pub fn iterative_deepening(
    provider: &dyn GraphProvider,
    origin: VertexId,
    goal: VertexId,
    initial_limit: usize,
) -> Traversal {
    let ceiling = provider.vertex_count().saturating_sub(1);
    let mut limit = initial_limit;
    let mut rounds = 0;

    loop {
        rounds += 1;
        let mut pass = depth_limited(provider, origin, goal, limit);
        tracing::trace!(limit, outcome = %pass.outcome, expanded = pass.expanded, "deepening_pass");

        if pass.outcome == SearchOutcome::LimitExhausted && limit < ceiling {
            limit += 1;
            continue;
        }

        if pass.outcome == SearchOutcome::LimitExhausted {
            pass.outcome = SearchOutcome::NoPath;
        }
        pass.rounds = rounds;
        return pass;
    }
}
