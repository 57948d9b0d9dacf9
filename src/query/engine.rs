//! The query façade: one entry point over both solvers, returning the
//! assembled per-vertex report in topological order.

use super::report::{PathOutcome, QueryReport, TargetRow};
use crate::graph::{DagGraph, GraphError, VertexId};
use crate::solver::{iterative, recursive, PathResult};
use std::str::FromStr;

/// Which solver answers the query. Both must agree on every valid graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Memoized top-down recursion, one invocation per target.
    Recursive,
    /// Single bottom-up relaxation pass over the whole graph.
    Dynamic,
}

impl FromStr for Method {
    type Err = String;

    /// Accepts the `"recursive"` / `"dynamic"` tokens an embedder's controls
    /// typically pass through.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "recursive" => Ok(Method::Recursive),
            "dynamic" => Ok(Method::Dynamic),
            other => Err(format!("unknown method '{}'", other)),
        }
    }
}

/// Runs shortest-path queries against one graph.
pub struct QueryEngine<'a> {
    graph: &'a DagGraph,
}

impl<'a> QueryEngine<'a> {
    pub fn new(graph: &'a DagGraph) -> Self {
        Self { graph }
    }

    /// Shortest paths from `source` to every vertex, via the chosen method.
    pub fn query(&self, source: &str, method: Method) -> Result<QueryReport, GraphError> {
        let src = self.graph.resolve(source)?;

        let per_vertex = match method {
            Method::Dynamic => iterative::shortest_paths_from(self.graph, src)?,
            Method::Recursive => self.solve_each_target(src)?,
        };

        let rows = self
            .graph
            .vertices()
            .map(|v| TargetRow {
                target: self.graph.name_of(v).to_string(),
                outcome: self.to_outcome(&per_vertex[v.index()]),
            })
            .collect();

        Ok(QueryReport {
            source: source.to_string(),
            rows,
        })
    }

    /// Recursive method: one memoized top-level call per target at or after
    /// the source. Targets before the source cannot be reached over forward
    /// edges, so they are reported unreachable without being solved.
    fn solve_each_target(&self, src: VertexId) -> Result<Vec<PathResult>, GraphError> {
        let mut per_vertex = vec![PathResult::unreachable(); self.graph.vertex_count()];
        for target in self.graph.vertices().skip(src.index()) {
            per_vertex[target.index()] = recursive::shortest_path(self.graph, src, target)?;
        }
        Ok(per_vertex)
    }

    fn to_outcome(&self, result: &PathResult) -> PathOutcome {
        match &result.path {
            Some(path) => PathOutcome::Reached {
                distance: result.distance,
                path: path
                    .iter()
                    .map(|&v| self.graph.name_of(v).to_string())
                    .collect(),
            },
            None => PathOutcome::Unreachable,
        }
    }
}
