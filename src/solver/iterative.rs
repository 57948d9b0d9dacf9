//! Bottom-up solver: one relaxation pass in topological order.
//!
//! Bellman-Ford specialized to acyclic graphs. When a vertex is visited, every
//! predecessor has already been finalized (store invariant: edges only point
//! forward), so a single pass suffices and no relaxation-count bound is
//! needed.

use super::result::{Path, PathResult};
use crate::graph::{DagGraph, GraphError, VertexId};

/// Shortest paths from `source` to every vertex in the graph, indexed by
/// `VertexId`. Vertices the source cannot reach (including every vertex
/// earlier in the order, and isolated vertices) come back unreachable.
pub fn shortest_paths_from(
    graph: &DagGraph,
    source: VertexId,
) -> Result<Vec<PathResult>, GraphError> {
    graph.check_vertex(source)?;

    let count = graph.vertex_count();
    let mut dist = vec![f64::INFINITY; count];
    let mut prev: Vec<Option<VertexId>> = vec![None; count];
    dist[source.index()] = 0.0;

    for u in graph.vertices() {
        if !dist[u.index()].is_finite() {
            continue;
        }
        for (&v, &weight) in graph.out_edges(u) {
            let candidate = dist[u.index()] + weight;
            if candidate < dist[v.index()] {
                dist[v.index()] = candidate;
                prev[v.index()] = Some(u);
            }
        }
    }

    let mut results = Vec::with_capacity(count);
    for v in graph.vertices() {
        if dist[v.index()].is_finite() {
            // Walk predecessor links back to the source, then reverse.
            let mut path = Path::new();
            let mut cursor = Some(v);
            while let Some(vertex) = cursor {
                path.push(vertex);
                cursor = prev[vertex.index()];
            }
            path.reverse();
            results.push(PathResult {
                distance: dist[v.index()],
                path: Some(path),
            });
        } else {
            results.push(PathResult::unreachable());
        }
    }

    Ok(results)
}
