//! dag.rs
//! Wraps the low-level GraphRegistry with the string-keyed construction API
//! the embedder calls, plus change notification for view refresh.

use super::error::GraphError;
use super::storage::{GraphRegistry, VertexId};
use std::collections::BTreeMap;
use std::fmt;

/// Emitted after every *successful* mutation. Failed operations emit nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GraphEvent {
    VertexAdded(VertexId),
    EdgeAdded {
        from: VertexId,
        to: VertexId,
        weight: f64,
    },
}

/// The DAG under construction.
///
/// Vertices are identified by the strings the embedder supplies; the registry
/// interns them into dense `VertexId`s whose order is the topological order.
/// The embedder can subscribe a listener to be told when the graph changed
/// (e.g. to redraw a view); the core itself never renders anything.
#[derive(Default)]
pub struct DagGraph {
    pub(crate) store: GraphRegistry,
    listeners: Vec<Box<dyn FnMut(&GraphEvent)>>,
}

impl DagGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an on-change listener. Listeners run synchronously, in
    /// subscription order, after the mutation has been applied.
    pub fn subscribe(&mut self, listener: impl FnMut(&GraphEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, event: GraphEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    pub fn add_vertex(&mut self, id: &str) -> Result<VertexId, GraphError> {
        let vid = self.store.add_vertex(id)?;
        self.emit(GraphEvent::VertexAdded(vid));
        Ok(vid)
    }

    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<(), GraphError> {
        let from_id = self.resolve(from)?;
        let to_id = self.resolve(to)?;
        self.store.add_edge(from_id, to_id, weight)?;
        self.emit(GraphEvent::EdgeAdded {
            from: from_id,
            to: to_id,
            weight,
        });
        Ok(())
    }

    // --- Read accessors (used by the solvers and the query façade) ---

    pub fn resolve(&self, name: &str) -> Result<VertexId, GraphError> {
        self.store
            .resolve(name)
            .ok_or_else(|| GraphError::UnknownVertex(name.to_string()))
    }

    pub fn vertex_count(&self) -> usize {
        self.store.count()
    }

    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    pub fn name_of(&self, id: VertexId) -> &str {
        self.store.name_of(id)
    }

    pub fn out_edges(&self, id: VertexId) -> &BTreeMap<VertexId, f64> {
        self.store.out_edges(id)
    }

    /// All vertices in topological order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        self.store.vertices()
    }

    pub fn check_vertex(&self, id: VertexId) -> Result<(), GraphError> {
        self.store.check_vertex(id)
    }
}

impl fmt::Debug for DagGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DagGraph")
            .field("store", &self.store)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_events_fire_once_per_successful_mutation() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut graph = DagGraph::new();
        graph.subscribe(move |e| sink.borrow_mut().push(*e));

        let a = graph.add_vertex("A").unwrap();
        let b = graph.add_vertex("B").unwrap();
        graph.add_edge("A", "B", 1.5).unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(
            *events.borrow(),
            vec![
                GraphEvent::VertexAdded(a),
                GraphEvent::VertexAdded(b),
                GraphEvent::EdgeAdded {
                    from: a,
                    to: b,
                    weight: 1.5
                },
            ]
        );
    }

    #[test]
    fn test_failed_mutations_emit_nothing() {
        let count = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&count);

        let mut graph = DagGraph::new();
        graph.add_vertex("A").unwrap();
        graph.add_vertex("B").unwrap();
        graph.subscribe(move |_| *sink.borrow_mut() += 1);

        assert!(graph.add_vertex("A").is_err());
        assert!(graph.add_edge("B", "A", 1.0).is_err());
        assert!(graph.add_edge("A", "Z", 1.0).is_err());
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_edge_by_name_resolves_unknown_endpoints() {
        let mut graph = DagGraph::new();
        graph.add_vertex("A").unwrap();
        assert_eq!(
            graph.add_edge("A", "Z", 1.0).unwrap_err(),
            GraphError::UnknownVertex("Z".to_string())
        );
        assert_eq!(
            graph.resolve("Q").unwrap_err(),
            GraphError::UnknownVertex("Q".to_string())
        );
    }
}
