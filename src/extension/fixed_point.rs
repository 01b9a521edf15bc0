//! Fixed-point extender for instances without an original partial order.
//!
//! # Algorithm
//!
//! 1. At the start of a pass, collect every ordered pair `(i, j)` that is
//!    still incomparable (row-major order).
//! 2. For each pair, re-check it against the live relation (an earlier
//!    insertion in the same pass may have related it), then ask the
//!    dominance oracle with the current closure; insert on success.
//! 3. Stop after a pass that leaves the relation version unchanged.
//!
//! Terminates because the relation only grows and holds at most
//! `n(n-1)/2` pairs.
//!
//! # Complexity
//! O(n²) oracle calls per pass, each O(n).

use super::{incomparable_pairs, run_passes, ExtensionConfig, ExtensionObserver, ExtensionStats};
use crate::dominance::satisfied_condition;
use crate::graph::PrecedenceGraph;
use crate::models::Job;

/// Extends `graph` pair by pair until no further relation can be inferred.
///
/// `graph` is normally empty; a non-empty graph is extended in place.
pub fn extend_fixed_point<O>(
    jobs: &[Job],
    graph: &mut PrecedenceGraph,
    config: &ExtensionConfig,
    observer: &mut O,
) -> ExtensionStats
where
    O: ExtensionObserver + ?Sized,
{
    run_passes(graph, config, observer, |graph, observer, _stats| {
        for (i, j) in incomparable_pairs(graph) {
            if !graph.is_incomparable(i, j) {
                continue;
            }
            let condition = satisfied_condition(
                i,
                j,
                jobs,
                graph.predecessor_sets(),
                graph.successor_sets(),
            );
            if let Some(condition) = condition {
                if graph.insert(i, j) {
                    observer.on_edge_inserted(i, j, condition);
                }
            }
        }
    })
}

/// Runs the fixed-point extender on a fresh relation over `jobs`.
pub fn infer_without_precedence<O>(
    jobs: &[Job],
    config: &ExtensionConfig,
    observer: &mut O,
) -> (PrecedenceGraph, ExtensionStats)
where
    O: ExtensionObserver + ?Sized,
{
    let mut graph = PrecedenceGraph::new(jobs.len());
    let stats = extend_fixed_point(jobs, &mut graph, config, observer);
    (graph, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::{EventLog, ExtensionEvent, NoOpObserver};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn sample_jobs() -> Vec<Job> {
        vec![Job::new(3, 5, 1), Job::new(2, 10, 1), Job::new(4, 2, 5)]
    }

    fn random_jobs(rng: &mut SmallRng, n: usize) -> Vec<Job> {
        (0..n)
            .map(|_| {
                Job::new(
                    rng.random_range(1..=10),
                    rng.random_range(0..=40),
                    rng.random_range(1..=10),
                )
            })
            .collect()
    }

    #[test]
    fn test_urgent_job_forced_first() {
        let jobs = sample_jobs();
        let (graph, stats) =
            infer_without_precedence(&jobs, &ExtensionConfig::default(), &mut NoOpObserver);

        assert!(graph.contains(2, 0));
        assert!(graph.contains(2, 1));
        assert!(stats.converged);
        assert_eq!(stats.passes, 2);
    }

    #[test]
    fn test_events_reported() {
        let jobs = sample_jobs();
        let mut log = EventLog::new();
        let (graph, stats) = infer_without_precedence(&jobs, &ExtensionConfig::default(), &mut log);

        let inserted = log.inserted_edges();
        assert_eq!(inserted.len(), graph.edge_count());
        assert_eq!(stats.edges_inserted, graph.edge_count());
        assert!(inserted.iter().any(|&(i, j, _)| (i, j) == (2, 0)));
        assert_eq!(log.events()[0], ExtensionEvent::PassStarted { pass: 1 });
        assert_eq!(
            log.events().last(),
            Some(&ExtensionEvent::PassFinished {
                pass: 2,
                inserted: 0
            })
        );
    }

    #[test]
    fn test_second_run_adds_nothing() {
        let jobs = sample_jobs();
        let config = ExtensionConfig::default();
        let (mut graph, _) = infer_without_precedence(&jobs, &config, &mut NoOpObserver);
        let before = graph.clone();

        let stats = extend_fixed_point(&jobs, &mut graph, &config, &mut NoOpObserver);
        assert_eq!(stats.edges_inserted, 0);
        assert_eq!(stats.passes, 1);
        assert_eq!(graph, before);
    }

    #[test]
    fn test_idempotent_on_random_instances() {
        let mut rng = SmallRng::seed_from_u64(42);
        let config = ExtensionConfig::default();
        for _ in 0..20 {
            let n = rng.random_range(2..=9);
            let jobs = random_jobs(&mut rng, n);
            let (mut graph, stats) = infer_without_precedence(&jobs, &config, &mut NoOpObserver);
            assert!(stats.converged);

            let sets = graph.to_sets();
            let again = extend_fixed_point(&jobs, &mut graph, &config, &mut NoOpObserver);
            assert_eq!(again.edges_inserted, 0);
            assert_eq!(graph.to_sets(), sets);
        }
    }

    #[test]
    fn test_random_instances_stay_acyclic() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..20 {
            let n = rng.random_range(2..=9);
            let jobs = random_jobs(&mut rng, n);
            let (graph, _) =
                infer_without_precedence(&jobs, &ExtensionConfig::default(), &mut NoOpObserver);
            for (i, j) in graph.edges() {
                assert!(!graph.has_path(j, i));
            }
            for i in 0..n {
                assert!(!graph.contains(i, i));
            }
        }
    }

    #[test]
    fn test_pass_budget_stops_early() {
        let jobs = sample_jobs();
        let config = ExtensionConfig::default().with_max_passes(1);
        let (graph, stats) = infer_without_precedence(&jobs, &config, &mut NoOpObserver);

        assert_eq!(stats.passes, 1);
        assert!(!stats.converged);
        // The first pass already orders all three jobs.
        assert!(graph.contains(2, 0));
    }

    #[test]
    fn test_zero_pass_budget() {
        let jobs = sample_jobs();
        let config = ExtensionConfig::default().with_max_passes(0);
        let (graph, stats) = infer_without_precedence(&jobs, &config, &mut NoOpObserver);
        assert_eq!(stats.passes, 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_empty_and_single_job() {
        let config = ExtensionConfig::default();
        let (graph, stats) = infer_without_precedence(&[], &config, &mut NoOpObserver);
        assert_eq!(graph.job_count(), 0);
        assert!(stats.converged);

        let (graph, _) = infer_without_precedence(&[Job::new(1, 0, 1)], &config, &mut NoOpObserver);
        assert_eq!(graph.edge_count(), 0);
    }
}
