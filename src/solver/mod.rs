//! The two shortest-path solvers. Both take a read-only borrow of the graph
//! and must agree on every valid input.
pub mod iterative;
pub mod recursive;
pub mod result;

pub use result::{Path, PathResult};
