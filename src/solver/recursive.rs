//! Memoized top-down solver.
//!
//! Depth-first exploration from the source toward a fixed target. Each vertex
//! is solved once per top-level call; the memo is a local map threaded through
//! the recursion, never a field, so no stale entry can outlive the call.

use super::result::{Path, PathResult};
use crate::graph::{DagGraph, GraphError, VertexId};
use std::collections::HashMap;

/// Shortest path from `source` to `target` by memoized recursion.
///
/// Amortized O(V + E) per call: every vertex below the source is solved at
/// most once and reused for overlapping sub-paths.
pub fn shortest_path(
    graph: &DagGraph,
    source: VertexId,
    target: VertexId,
) -> Result<PathResult, GraphError> {
    graph.check_vertex(source)?;
    graph.check_vertex(target)?;

    let mut memo = HashMap::new();
    Ok(solve(graph, source, target, &mut memo))
}

fn solve(
    graph: &DagGraph,
    current: VertexId,
    target: VertexId,
    memo: &mut HashMap<VertexId, PathResult>,
) -> PathResult {
    if current == target {
        return PathResult::trivial(current);
    }
    if let Some(hit) = memo.get(&current) {
        return hit.clone();
    }

    let mut best = PathResult::unreachable();
    for (&next, &weight) in graph.out_edges(current) {
        // Store invariant already guarantees forward edges; re-checked here so
        // the traversal cannot loop even on a corrupted adjacency.
        if next.index() <= current.index() {
            continue;
        }

        let sub = solve(graph, next, target, memo);
        if let Some(sub_path) = &sub.path {
            let total = weight + sub.distance;
            if total < best.distance {
                let mut path = Path::new();
                path.push(current);
                path.extend(sub_path.iter().copied());
                best = PathResult {
                    distance: total,
                    path: Some(path),
                };
            }
        }
    }

    memo.insert(current, best.clone());
    best
}
