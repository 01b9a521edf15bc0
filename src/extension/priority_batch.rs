//! Priority batch extender for instances with an original partial order.
//!
//! The original relation must be preserved and may only be extended.
//! For every incomparable pair `(i, j)`, forcing `i` before `j` also
//! orders every ancestor of `i` before every descendant of `j`. Each of
//! those implied pairs must be justified on its own, so the extender
//! treats them as one batch:
//!
//! 1. Build the batch: the cross product of `B_i ∪ {i}` and `A_j ∪ {j}`,
//!    minus pairs already related.
//! 2. Rank it by longest-path length in the relation extended by `i → j`,
//!    longest first, so the pairs spanning the most structure are tried
//!    before the pairs they imply.
//! 3. Apply the batch to a copy of the relation. Every pair must pass
//!    the dominance oracle against the copy as it grows. If one fails,
//!    the copy is dropped and the live relation is untouched.
//!
//! Passes repeat until one commits nothing.
//!
//! # Complexity
//! One O(n³) longest-path computation per incomparable pair per pass.

use super::{incomparable_pairs, run_passes, ExtensionConfig, ExtensionObserver, ExtensionStats};
use crate::dominance::{satisfied_condition, KanetCondition};
use crate::graph::PrecedenceGraph;
use crate::models::Job;

/// A pair committed as part of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertedEdge {
    pub before: usize,
    pub after: usize,
    pub condition: KanetCondition,
}

/// Result of a successful batch application.
#[derive(Debug, Clone)]
pub struct AppliedBatch {
    /// The extended relation.
    pub graph: PrecedenceGraph,
    /// Direct edges added, in application order. Pairs already implied
    /// by an earlier member's closure were checked but not re-inserted.
    pub inserted: Vec<InsertedEdge>,
}

/// Ranked candidate batch for forcing `i` before `j`.
///
/// Ordered by descending longest-path length in `graph` extended by
/// `i → j`; ties by descending `(k, l)`. Empty if `i` and `j` are
/// already comparable.
pub fn candidate_batch(graph: &PrecedenceGraph, i: usize, j: usize) -> Vec<(usize, usize)> {
    if !graph.is_incomparable(i, j) {
        return Vec::new();
    }

    let table = graph.longest_paths_with((i, j));
    let sources = graph
        .predecessors(i)
        .iter()
        .copied()
        .chain(std::iter::once(i));

    let mut ranked: Vec<(i64, usize, usize)> = sources
        .flat_map(|k| {
            graph
                .successors(j)
                .iter()
                .copied()
                .chain(std::iter::once(j))
                .map(move |l| (k, l))
        })
        .filter(|&(k, l)| !graph.contains(k, l))
        .map(|(k, l)| (table.get(k, l), k, l))
        .collect();

    ranked.sort_unstable_by(|a, b| b.cmp(a));
    ranked.into_iter().map(|(_, k, l)| (k, l)).collect()
}

/// Applies `batch` to a copy of `graph`, all or nothing.
///
/// Each pair is checked against the copy as it stands after the
/// previous pairs. Returns the first pair that fails the dominance
/// oracle (or would close a cycle) as the error; `graph` is never
/// modified.
pub fn apply_batch(
    jobs: &[Job],
    graph: &PrecedenceGraph,
    batch: &[(usize, usize)],
) -> Result<AppliedBatch, (usize, usize)> {
    let mut tentative = graph.clone();
    let mut inserted = Vec::with_capacity(batch.len());

    for &(k, l) in batch {
        let condition = satisfied_condition(
            k,
            l,
            jobs,
            tentative.predecessor_sets(),
            tentative.successor_sets(),
        )
        .ok_or((k, l))?;

        if tentative.contains(k, l) {
            continue;
        }
        if !tentative.insert(k, l) {
            return Err((k, l));
        }
        inserted.push(InsertedEdge {
            before: k,
            after: l,
            condition,
        });
    }

    Ok(AppliedBatch {
        graph: tentative,
        inserted,
    })
}

/// Extends `graph` (holding the original relation) batch by batch.
pub fn extend_priority_batch<O>(
    jobs: &[Job],
    graph: &mut PrecedenceGraph,
    config: &ExtensionConfig,
    observer: &mut O,
) -> ExtensionStats
where
    O: ExtensionObserver + ?Sized,
{
    run_passes(graph, config, observer, |graph, observer, stats| {
        for (i, j) in incomparable_pairs(graph) {
            let batch = candidate_batch(graph, i, j);
            if batch.is_empty() {
                continue;
            }

            match apply_batch(jobs, graph, &batch) {
                Ok(applied) => {
                    *graph = applied.graph;
                    for edge in &applied.inserted {
                        observer.on_edge_inserted(edge.before, edge.after, edge.condition);
                    }
                    observer.on_batch_accepted(&batch);
                    stats.batches_accepted += 1;
                }
                Err(failed) => {
                    observer.on_batch_rejected(&batch, failed);
                    stats.batches_rejected += 1;
                }
            }
        }
    })
}

/// Runs the priority batch extender starting from `original`.
pub fn infer_with_precedence<O>(
    jobs: &[Job],
    original: &PrecedenceGraph,
    config: &ExtensionConfig,
    observer: &mut O,
) -> (PrecedenceGraph, ExtensionStats)
where
    O: ExtensionObserver + ?Sized,
{
    let mut graph = original.clone();
    let stats = extend_priority_batch(jobs, &mut graph, config, observer);
    (graph, stats)
}
