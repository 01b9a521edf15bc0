//! Precedence inference by repeated dominance checks.
//!
//! Two extenders apply the dominance oracle to a [`PrecedenceGraph`]:
//!
//! - **Fixed point** ([`extend_fixed_point`]): no original partial order;
//!   pairs are inserted one at a time.
//! - **Priority batch** ([`extend_priority_batch`]): an original partial
//!   order must be preserved; every inference is committed together with
//!   the pairs it implies, or not at all.
//!
//! Both run in passes. Each pass works through the pairs that were
//! incomparable when it started; the relation version tells whether the
//! pass changed anything. [`infer_precedence`] picks the extender the
//! same way every solver front-end does: by whether the instance carries
//! precedence pairs.
//!
//! Everything is single-threaded. Later checks in a pass must see the
//! closure left by earlier insertions, so pairs are never evaluated
//! concurrently.

mod config;
mod fixed_point;
mod observer;
mod priority_batch;

pub use config::ExtensionConfig;
pub use fixed_point::{extend_fixed_point, infer_without_precedence};
pub use observer::{EventLog, ExtensionEvent, ExtensionObserver, NoOpObserver};
pub use priority_batch::{
    apply_batch, candidate_batch, extend_priority_batch, infer_with_precedence, AppliedBatch,
    InsertedEdge,
};

use crate::graph::PrecedenceGraph;
use crate::models::{Instance, PrecedenceSets};
use crate::validation::{validate_instance, ValidationError};

/// Counters collected by an extender run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionStats {
    /// Passes started.
    pub passes: usize,
    /// Direct edges added across all passes.
    pub edges_inserted: usize,
    /// Batches committed (priority batch extender only).
    pub batches_accepted: usize,
    /// Batches discarded (priority batch extender only).
    pub batches_rejected: usize,
    /// Whether the last pass added nothing. `false` when the pass budget ran out first.
    pub converged: bool,
}

/// Which extender produced an inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    FixedPoint,
    PriorityBatch,
}

/// Result of [`infer_precedence`].
#[derive(Debug, Clone)]
pub struct Inference {
    /// The original relation, as supplied by the instance.
    pub original: PrecedenceGraph,
    /// The inferred relation, a superset of `original`.
    pub graph: PrecedenceGraph,
    pub strategy: Strategy,
    pub stats: ExtensionStats,
}

impl Inference {
    /// Exported closed sets of the inferred relation.
    pub fn sets(&self) -> PrecedenceSets {
        self.graph.to_sets()
    }

    /// Pairs inferred beyond the original relation.
    pub fn added_pairs(&self) -> Vec<(usize, usize)> {
        self.graph
            .to_sets()
            .pairs()
            .into_iter()
            .filter(|&(i, j)| !self.original.contains(i, j))
            .collect()
    }
}

/// Validates `instance` and infers additional precedence relations.
///
/// Runs the fixed-point extender when the instance has no precedence
/// pairs, the priority batch extender otherwise.
///
/// # Errors
/// Every validation problem found in the instance.
pub fn infer_precedence<O>(
    instance: &Instance,
    config: &ExtensionConfig,
    observer: &mut O,
) -> Result<Inference, Vec<ValidationError>>
where
    O: ExtensionObserver + ?Sized,
{
    validate_instance(instance)?;

    let n = instance.job_count();
    let (original, _) = PrecedenceGraph::from_pairs(n, instance.precedence.iter().copied());

    let (graph, stats, strategy) = if instance.has_precedence() {
        let (graph, stats) = infer_with_precedence(&instance.jobs, &original, config, observer);
        (graph, stats, Strategy::PriorityBatch)
    } else {
        let (graph, stats) = infer_without_precedence(&instance.jobs, config, observer);
        (graph, stats, Strategy::FixedPoint)
    };

    Ok(Inference {
        original,
        graph,
        strategy,
        stats,
    })
}

/// Ordered pairs `(i, j)` incomparable in `graph`, row-major.
///
/// Taken once per pass; callers re-check each pair against the live
/// relation before acting on it.
pub(crate) fn incomparable_pairs(graph: &PrecedenceGraph) -> Vec<(usize, usize)> {
    let n = graph.job_count();
    (0..n)
        .flat_map(|i| (0..n).map(move |j| (i, j)))
        .filter(|&(i, j)| graph.is_incomparable(i, j))
        .collect()
}

/// Drives passes until one leaves the relation version unchanged or the
/// pass budget is spent.
pub(crate) fn run_passes<O, F>(
    graph: &mut PrecedenceGraph,
    config: &ExtensionConfig,
    observer: &mut O,
    mut pass: F,
) -> ExtensionStats
where
    O: ExtensionObserver + ?Sized,
    F: FnMut(&mut PrecedenceGraph, &mut O, &mut ExtensionStats),
{
    let mut stats = ExtensionStats::default();

    while config.allows_pass(stats.passes) {
        stats.passes += 1;
        let version = graph.version();
        let edges_before = graph.edge_count();
        observer.on_pass_start(stats.passes);

        pass(graph, observer, &mut stats);

        let inserted = graph.edge_count() - edges_before;
        stats.edges_inserted += inserted;
        observer.on_pass_end(stats.passes, inserted);

        if graph.version() == version {
            stats.converged = true;
            break;
        }
    }

    stats
}
