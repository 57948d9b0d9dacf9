//! The graph store: topological order, weighted forward adjacency, and the
//! construction API exposed to the embedder.
pub mod dag;
pub mod error;
pub mod storage;

// Re-export key types for convenient access
pub use dag::{DagGraph, GraphEvent};
pub use error::GraphError;
pub use storage::{GraphRegistry, VertexId};
