//! The outbound result types handed back to the embedder, plus their text and
//! JSON renderings. No rendering library is involved; the embedder decides
//! how to present these.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome for one target vertex relative to the query source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PathOutcome {
    /// Finite distance and one minimum-cost path, source first.
    Reached { distance: f64, path: Vec<String> },
    /// No forward path from the source.
    Unreachable,
}

impl PathOutcome {
    pub fn distance(&self) -> f64 {
        match self {
            PathOutcome::Reached { distance, .. } => *distance,
            PathOutcome::Unreachable => f64::INFINITY,
        }
    }
}

/// One row of a query result: a target and its outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRow {
    pub target: String,
    pub outcome: PathOutcome,
}

/// The full answer to one query: every vertex of the graph, in topological
/// order, with its distance and path from the source. Produced fresh per
/// query and owning all of its data, so it stays valid across later graph
/// mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryReport {
    pub source: String,
    pub rows: Vec<TargetRow>,
}

impl QueryReport {
    /// Looks up the outcome for a target by name.
    pub fn outcome(&self, target: &str) -> Option<&PathOutcome> {
        self.rows
            .iter()
            .find(|row| row.target == target)
            .map(|row| &row.outcome)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for QueryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "shortest paths from '{}':", self.source)?;
        for row in &self.rows {
            match &row.outcome {
                PathOutcome::Reached { distance, path } => writeln!(
                    f,
                    "  {}: distance = {}, path = {}",
                    row.target,
                    distance,
                    path.join(" -> ")
                )?,
                PathOutcome::Unreachable => writeln!(f, "  {}: unreachable", row.target)?,
            }
        }
        Ok(())
    }
}
