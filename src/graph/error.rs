//! Defines the error types raised by graph construction and the solvers.
use thiserror::Error;

/// A recoverable validation failure from the graph core.
///
/// Every variant carries the offending identifiers so the embedder can build
/// its own user-facing message. No operation leaves the graph partially
/// mutated when it returns one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("vertex '{0}' already exists")]
    DuplicateVertex(String),
    #[error("invalid vertex id '{0}'")]
    InvalidVertex(String),
    #[error("unknown vertex '{0}'")]
    UnknownVertex(String),
    #[error("edge '{from}' -> '{to}' violates the topological order")]
    TopologicalViolation { from: String, to: String },
    #[error("invalid weight {weight} on edge '{from}' -> '{to}'")]
    InvalidWeight { from: String, to: String, weight: f64 },
}
