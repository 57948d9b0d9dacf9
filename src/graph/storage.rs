//! storage.rs
//! Append-only vertex registry. Insertion order doubles as the topological
//! order, so a `VertexId` is also the vertex's topological position.

use super::error::GraphError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct VertexId(pub u32);

impl VertexId {
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
    pub fn new(idx: usize) -> Self {
        Self(idx as u32)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GraphRegistry {
    /// Insertion order = topological order. Append-only, never reordered.
    names: Vec<String>,
    /// O(1) name resolution and duplicate detection.
    index_of: HashMap<String, VertexId>,
    /// Forward adjacency, one row per vertex. BTreeMap keeps neighbor
    /// iteration deterministic and makes edge re-insertion last-write-wins.
    adjacency: Vec<BTreeMap<VertexId, f64>>,
}

impl GraphRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// Appends a vertex to the topological order.
    ///
    /// All checks run before any mutation, so a failure leaves the registry
    /// untouched.
    pub fn add_vertex(&mut self, id: &str) -> Result<VertexId, GraphError> {
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return Err(GraphError::InvalidVertex(id.to_string()));
        }
        if self.index_of.contains_key(id) {
            return Err(GraphError::DuplicateVertex(id.to_string()));
        }

        let vid = VertexId::new(self.names.len());
        self.names.push(id.to_string());
        self.index_of.insert(id.to_string(), vid);
        self.adjacency.push(BTreeMap::new());
        Ok(vid)
    }

    /// Inserts (or overwrites) the forward edge `from -> to`.
    ///
    /// Rejecting `index(from) >= index(to)` also rejects self-loops and every
    /// back-edge, which is what keeps the graph acyclic without any cycle
    /// search.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64) -> Result<(), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if from.index() >= to.index() {
            return Err(GraphError::TopologicalViolation {
                from: self.names[from.index()].clone(),
                to: self.names[to.index()].clone(),
            });
        }
        if !weight.is_finite() {
            return Err(GraphError::InvalidWeight {
                from: self.names[from.index()].clone(),
                to: self.names[to.index()].clone(),
                weight,
            });
        }

        self.adjacency[from.index()].insert(to, weight);
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Option<VertexId> {
        self.index_of.get(name).copied()
    }

    pub fn name_of(&self, id: VertexId) -> &str {
        &self.names[id.index()]
    }

    #[inline(always)]
    pub fn out_edges(&self, id: VertexId) -> &BTreeMap<VertexId, f64> {
        &self.adjacency[id.index()]
    }

    /// All vertices in topological order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.count()).map(VertexId::new)
    }

    pub fn check_vertex(&self, id: VertexId) -> Result<(), GraphError> {
        if id.index() < self.count() {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex(format!("#{}", id.0)))
        }
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|row| row.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn abc() -> (GraphRegistry, VertexId, VertexId, VertexId) {
        let mut reg = GraphRegistry::new();
        let a = reg.add_vertex("A").unwrap();
        let b = reg.add_vertex("B").unwrap();
        let c = reg.add_vertex("C").unwrap();
        (reg, a, b, c)
    }

    #[test]
    fn test_insertion_order_is_topological_position() {
        let (reg, a, b, c) = abc();
        assert_eq!((a.index(), b.index(), c.index()), (0, 1, 2));
        let order: Vec<&str> = reg.vertices().map(|v| reg.name_of(v)).collect();
        assert_eq!(order, ["A", "B", "C"]);
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("a b")]
    #[case("a\tb")]
    #[case("a\n")]
    fn test_malformed_vertex_id_rejected(#[case] id: &str) {
        let mut reg = GraphRegistry::new();
        assert_eq!(
            reg.add_vertex(id).unwrap_err(),
            GraphError::InvalidVertex(id.to_string())
        );
        assert_eq!(reg.count(), 0);
    }

    #[test]
    fn test_duplicate_vertex_leaves_order_unchanged() {
        let (mut reg, ..) = abc();
        let err = reg.add_vertex("B").unwrap_err();
        assert_eq!(err, GraphError::DuplicateVertex("B".to_string()));
        assert_eq!(reg.count(), 3);
        let order: Vec<&str> = reg.vertices().map(|v| reg.name_of(v)).collect();
        assert_eq!(order, ["A", "B", "C"]);
    }

    #[test]
    fn test_back_edge_and_self_loop_rejected() {
        let (mut reg, a, _, c) = abc();
        assert_eq!(
            reg.add_edge(c, a, 1.0).unwrap_err(),
            GraphError::TopologicalViolation {
                from: "C".into(),
                to: "A".into()
            }
        );
        assert_eq!(
            reg.add_edge(a, a, 1.0).unwrap_err(),
            GraphError::TopologicalViolation {
                from: "A".into(),
                to: "A".into()
            }
        );
        assert_eq!(reg.edge_count(), 0);
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn test_non_finite_weight_rejected(#[case] w: f64) {
        let (mut reg, a, b, _) = abc();
        assert!(matches!(
            reg.add_edge(a, b, w).unwrap_err(),
            GraphError::InvalidWeight { .. }
        ));
        assert_eq!(reg.edge_count(), 0);
    }

    #[test]
    fn test_unknown_endpoint_rejected() {
        let (mut reg, a, ..) = abc();
        let ghost = VertexId::new(99);
        assert!(matches!(
            reg.add_edge(a, ghost, 1.0).unwrap_err(),
            GraphError::UnknownVertex(_)
        ));
        assert_eq!(reg.edge_count(), 0);
    }

    #[test]
    fn test_edge_reinsertion_is_last_write_wins() {
        let (mut reg, a, b, _) = abc();
        reg.add_edge(a, b, 2.0).unwrap();
        reg.add_edge(a, b, 2.0).unwrap();
        assert_eq!(reg.edge_count(), 1);
        assert_eq!(reg.out_edges(a).get(&b), Some(&2.0));

        reg.add_edge(a, b, 7.5).unwrap();
        assert_eq!(reg.edge_count(), 1);
        assert_eq!(reg.out_edges(a).get(&b), Some(&7.5));
    }
}
