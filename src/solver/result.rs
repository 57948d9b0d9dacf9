//! Defines the per-target result value produced by both solvers.

use crate::graph::VertexId;
use smallvec::SmallVec;

/// A shortest path as a sequence of vertex ids, source first. Paths are short
/// in practice, so the first few hops live inline.
pub type Path = SmallVec<[VertexId; 8]>;

/// Distance and path from a fixed source to one target.
///
/// Invariant: `distance.is_finite()` iff `path` is `Some`. An unreachable
/// target is `(+inf, None)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    pub distance: f64,
    pub path: Option<Path>,
}

impl PathResult {
    pub fn unreachable() -> Self {
        Self {
            distance: f64::INFINITY,
            path: None,
        }
    }

    /// The zero-length path from a vertex to itself.
    pub fn trivial(vertex: VertexId) -> Self {
        let mut path = Path::new();
        path.push(vertex);
        Self {
            distance: 0.0,
            path: Some(path),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.path.is_some()
    }
}
