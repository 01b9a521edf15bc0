//! Exported precedence table.
//!
//! The inferred relation is handed to solver front-ends as two per-job
//! sets. Front-ends treat it as an opaque table of additional
//! constraints: for every `i` in `predecessors[j]`, job `i` must
//! complete before job `j` starts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Transitively closed predecessor/successor sets, one pair per job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecedenceSets {
    /// `predecessors[j]`: every job that must precede `j`.
    pub predecessors: Vec<BTreeSet<usize>>,
    /// `successors[i]`: every job that must follow `i`.
    pub successors: Vec<BTreeSet<usize>>,
}

impl PrecedenceSets {
    /// Whether `before` must precede `after`.
    pub fn requires(&self, before: usize, after: usize) -> bool {
        self.predecessors
            .get(after)
            .is_some_and(|preds| preds.contains(&before))
    }

    /// All ordered pairs `(before, after)`, sorted.
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs: Vec<(usize, usize)> = self
            .predecessors
            .iter()
            .enumerate()
            .flat_map(|(j, preds)| preds.iter().map(move |&i| (i, j)))
            .collect();
        pairs.sort_unstable();
        pairs
    }
}
