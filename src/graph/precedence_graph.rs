//! Mutable acyclic precedence relation with maintained closure.
//!
//! Keeps two views of the same relation:
//! - direct edges, as inserted (reachability, longest paths)
//! - transitively closed ancestor/descendant sets (dominance checks, queries)
//!
//! Every accepted insertion updates both, so the closure is consistent
//! with the edge set at all times and the relation never contains a cycle.

use std::collections::BTreeSet;

use super::{has_path, LongestPathTable};
use crate::models::PrecedenceSets;

/// Directed acyclic "must complete before" relation over job indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecedenceGraph {
    /// Direct successors, in insertion order.
    edges: Vec<Vec<usize>>,
    predecessors: Vec<BTreeSet<usize>>,
    successors: Vec<BTreeSet<usize>>,
    edge_count: usize,
    version: u64,
}

impl PrecedenceGraph {
    /// Creates an empty relation over `n` jobs.
    pub fn new(n: usize) -> Self {
        Self {
            edges: vec![Vec::new(); n],
            predecessors: vec![BTreeSet::new(); n],
            successors: vec![BTreeSet::new(); n],
            edge_count: 0,
            version: 0,
        }
    }

    /// Builds a relation from `(before, after)` pairs.
    ///
    /// Pairs that would be rejected by [`insert`](Self::insert) are
    /// skipped; the number of skipped pairs is returned alongside.
    pub fn from_pairs<I>(n: usize, pairs: I) -> (Self, usize)
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(n);
        let mut skipped = 0;
        for (i, j) in pairs {
            if !graph.insert(i, j) {
                skipped += 1;
            }
        }
        (graph, skipped)
    }

    /// Number of jobs.
    pub fn job_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of direct edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Incremented on every accepted insertion.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Inserts `i → j`.
    ///
    /// Rejects (returns `false`, no mutation) when either index is out of
    /// range, `i == j`, the pair is already implied, or a path `j → i`
    /// exists. Otherwise adds the edge and extends the closure: every
    /// ancestor of `i` (and `i`) now precedes every descendant of `j` (and `j`).
    pub fn insert(&mut self, i: usize, j: usize) -> bool {
        let n = self.job_count();
        if i >= n || j >= n || i == j {
            return false;
        }
        if self.contains(i, j) || self.has_path(j, i) {
            return false;
        }

        self.edges[i].push(j);
        self.edge_count += 1;
        self.version += 1;

        let mut ancestors: Vec<usize> = self.predecessors[i].iter().copied().collect();
        ancestors.push(i);
        let mut descendants: Vec<usize> = self.successors[j].iter().copied().collect();
        descendants.push(j);

        for &a in &ancestors {
            self.successors[a].extend(descendants.iter().copied());
        }
        for &d in &descendants {
            self.predecessors[d].extend(ancestors.iter().copied());
        }

        debug_assert!(!self.successors[j].contains(&i));
        true
    }

    /// Whether `i` precedes `j`, directly or transitively.
    #[inline]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.predecessors
            .get(j)
            .is_some_and(|preds| preds.contains(&i))
    }

    /// Whether `i → j` was inserted as a direct edge.
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.edges.get(i).is_some_and(|succ| succ.contains(&j))
    }

    /// Whether `target` is reachable from `source` over direct edges.
    pub fn has_path(&self, source: usize, target: usize) -> bool {
        has_path(source, target, &self.edges)
    }

    /// Whether neither job precedes the other.
    pub fn is_incomparable(&self, i: usize, j: usize) -> bool {
        i != j && !self.contains(i, j) && !self.contains(j, i)
    }

    /// Every job that must precede `j`.
    pub fn predecessors(&self, j: usize) -> &BTreeSet<usize> {
        &self.predecessors[j]
    }

    /// Every job that must follow `i`.
    pub fn successors(&self, i: usize) -> &BTreeSet<usize> {
        &self.successors[i]
    }

    /// Closed predecessor sets for all jobs.
    pub fn predecessor_sets(&self) -> &[BTreeSet<usize>] {
        &self.predecessors
    }

    /// Closed successor sets for all jobs.
    pub fn successor_sets(&self) -> &[BTreeSet<usize>] {
        &self.successors
    }

    /// Direct edges `(before, after)` in insertion order per source.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .flat_map(|(i, succ)| succ.iter().map(move |&j| (i, j)))
    }

    /// Longest-path table over the direct edges.
    pub fn longest_paths(&self) -> LongestPathTable {
        LongestPathTable::compute(self.job_count(), self.edges())
    }

    /// Longest-path table as if `extra` were also a direct edge.
    pub fn longest_paths_with(&self, extra: (usize, usize)) -> LongestPathTable {
        LongestPathTable::compute(
            self.job_count(),
            self.edges().chain(std::iter::once(extra)),
        )
    }

    /// Exports the closed relation.
    pub fn to_sets(&self) -> PrecedenceSets {
        PrecedenceSets {
            predecessors: self.predecessors.clone(),
            successors: self.successors.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_insert_and_contains() {
        let mut g = PrecedenceGraph::new(3);
        assert!(g.insert(0, 1));
        assert!(g.contains(0, 1));
        assert!(!g.contains(1, 0));
        assert!(g.has_edge(0, 1));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.version(), 1);
    }

    #[test]
    fn test_reject_self_loop() {
        let mut g = PrecedenceGraph::new(2);
        assert!(!g.insert(1, 1));
        assert_eq!(g.version(), 0);
    }

    #[test]
    fn test_path_from_unknown_job() {
        let mut g = PrecedenceGraph::new(2);
        g.insert(0, 1);
        assert!(!g.has_path(2, 1));
        assert!(!g.has_path(0, 2));
        assert!(g.has_path(0, 1));
    }

    #[test]
    fn test_reject_out_of_range() {
        let mut g = PrecedenceGraph::new(2);
        assert!(!g.insert(0, 2));
        assert!(!g.insert(5, 0));
    }

    #[test]
    fn test_reject_duplicate() {
        let mut g = PrecedenceGraph::new(2);
        assert!(g.insert(0, 1));
        assert!(!g.insert(0, 1));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_reject_cycle() {
        // 0 → 1 → 2, then 2 → 0 closes a cycle
        let mut g = PrecedenceGraph::new(3);
        assert!(g.insert(0, 1));
        assert!(g.insert(1, 2));
        assert!(!g.insert(2, 0));
        assert!(!g.contains(2, 0));
        assert_eq!(g.version(), 2);
    }

    #[test]
    fn test_reject_implied_pair() {
        let mut g = PrecedenceGraph::new(3);
        g.insert(0, 1);
        g.insert(1, 2);
        assert!(g.contains(0, 2));
        assert!(!g.insert(0, 2));
        assert!(!g.has_edge(0, 2));
    }

    #[test]
    fn test_closure_joins_chains() {
        // 0 → 1 and 2 → 3, then 1 → 2 links both chains
        let mut g = PrecedenceGraph::new(4);
        g.insert(0, 1);
        g.insert(2, 3);
        g.insert(1, 2);

        assert_eq!(g.successors(0), &BTreeSet::from([1, 2, 3]));
        assert_eq!(g.predecessors(3), &BTreeSet::from([0, 1, 2]));
        assert!(g.contains(0, 3));
        assert!(g.has_path(0, 3));
    }

    #[test]
    fn test_incomparable() {
        let mut g = PrecedenceGraph::new(3);
        g.insert(0, 1);
        assert!(!g.is_incomparable(0, 1));
        assert!(!g.is_incomparable(1, 0));
        assert!(g.is_incomparable(0, 2));
        assert!(!g.is_incomparable(2, 2));
    }

    #[test]
    fn test_from_pairs_counts_skipped() {
        let (g, skipped) = PrecedenceGraph::from_pairs(3, [(0, 1), (1, 0), (0, 1), (1, 2)]);
        assert_eq!(skipped, 2);
        assert_eq!(g.edge_count(), 2);
        assert!(g.contains(0, 2));
    }

    #[test]
    fn test_longest_paths_with_extra_edge() {
        let mut g = PrecedenceGraph::new(4);
        g.insert(0, 1);
        g.insert(2, 3);
        let table = g.longest_paths_with((1, 2));
        assert_eq!(table.get(0, 3), 3);
        // The graph itself is untouched.
        assert_eq!(g.longest_paths().get(0, 3), 0);
    }

    #[test]
    fn test_export_sets() {
        let mut g = PrecedenceGraph::new(3);
        g.insert(2, 0);
        g.insert(0, 1);
        let sets = g.to_sets();
        assert_eq!(sets.pairs(), vec![(0, 1), (2, 0), (2, 1)]);
    }

    proptest! {
        #[test]
        fn prop_insertions_stay_acyclic(
            pairs in prop::collection::vec((0usize..8, 0usize..8), 0..60)
        ) {
            let mut g = PrecedenceGraph::new(8);
            for (i, j) in pairs {
                if g.insert(i, j) {
                    prop_assert!(!g.has_path(j, i));
                    prop_assert!(!g.contains(j, i));
                }
            }
            for i in 0..8 {
                prop_assert!(!g.contains(i, i));
            }
        }

        #[test]
        fn prop_closure_is_transitive(
            pairs in prop::collection::vec((0usize..8, 0usize..8), 0..60)
        ) {
            let mut g = PrecedenceGraph::new(8);
            for (i, j) in pairs {
                if g.insert(i, j) {
                    let mut expected = g.predecessors(i).clone();
                    expected.insert(i);
                    prop_assert!(expected.is_subset(g.predecessors(j)));

                    let mut expected = g.successors(j).clone();
                    expected.insert(j);
                    prop_assert!(expected.is_subset(g.successors(i)));
                }
            }
            // Closure agrees with reachability over direct edges.
            for i in 0..8 {
                for j in 0..8 {
                    if i != j {
                        prop_assert_eq!(g.contains(i, j), g.has_path(i, j));
                    }
                }
            }
        }
    }
}
