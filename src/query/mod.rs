//! The query façade exposed to the embedder.
pub mod engine;
pub mod report;

pub use engine::{Method, QueryEngine};
pub use report::{PathOutcome, QueryReport, TargetRow};
