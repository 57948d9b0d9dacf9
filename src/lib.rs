//! Core engine for single-source shortest paths on weighted DAGs.
//!
//! The graph is built through [`DagGraph`]: vertices are appended in what
//! becomes the topological order, and an edge is only accepted if it points
//! from an earlier to a later vertex. That check is the whole acyclicity
//! mechanism; no cycle search ever runs.
//!
//! Two solvers answer queries and must agree on every valid graph: a memoized
//! recursive solver ([`solver::recursive`]) and a single-pass relaxation
//! solver ([`solver::iterative`]). [`QueryEngine`] wraps both behind one
//! string-keyed operation and returns an owned [`QueryReport`] the embedder
//! can list, serialize, or draw however it likes; this crate depends on no
//! rendering library.
//!
//! The core is single-threaded and synchronous. Solvers borrow the graph
//! immutably, so the borrow checker already rules out mutation while a query
//! runs, and shared read-only queries are safe side by side.

pub mod graph;
pub mod query;
pub mod solver;

pub use graph::{DagGraph, GraphError, GraphEvent, VertexId};
pub use query::{Method, PathOutcome, QueryEngine, QueryReport, TargetRow};
pub use solver::{Path, PathResult};
