//! Dominance oracle for single-machine weighted tardiness.
//!
//! Decides whether job `i` can be forced before job `j` in at least one
//! optimal schedule, given the current closed predecessor/successor sets.
//! Seven independent closed-form conditions are checked; any one of them
//! is sufficient. Failing all seven means "unknown", not "`j` first".
//!
//! The answer depends on the current closure: adding relations shrinks
//! the set of jobs that can still sit between `i` and `j`, so a pair
//! rejected early may be accepted later.
//!
//! # Notation
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | `B_j` | predecessors of `j` |
//! | `A_i` | successors of `i` |
//! | `Ā_i` | all jobs not in `A_i` |
//! | `P(S)` | total processing time over `S` |
//!
//! # Reference
//! - Kanet (2007), "New precedence theorems for one-machine weighted
//!   tardiness", Mathematics of Operations Research 32(3)
//! - Emmons (1969), "One-machine sequencing to minimize certain functions
//!   of job tardiness"

use std::collections::BTreeSet;

use crate::models::{total_processing_time, Job};

/// The condition that established a dominance relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KanetCondition {
    /// `p_i ≤ p_j`, `w_i ≥ w_j`, and `d_i` is early enough.
    K1,
    /// `p_i ≤ p_j`, `w_i < w_j`, and `d_j` is late enough.
    K2,
    /// `p_i ≤ p_j`, `w_i < w_j`, and `d_i`, `p_i` are small enough.
    K3,
    /// `w_i ≥ w_j` and `d_j` is late enough.
    K4,
    /// `w_i ≥ w_j`, `d_i` is early enough, and `p_j` is large enough.
    K5,
    /// `w_i < w_j` and `d_j` is late enough.
    K6,
    /// `j` cannot be tardy while `i` is still unscheduled.
    K7,
}

impl KanetCondition {
    /// All conditions, in evaluation order.
    pub const ALL: [KanetCondition; 7] = [
        KanetCondition::K1,
        KanetCondition::K2,
        KanetCondition::K3,
        KanetCondition::K4,
        KanetCondition::K5,
        KanetCondition::K6,
        KanetCondition::K7,
    ];

    /// Short label.
    pub fn name(&self) -> &'static str {
        match self {
            KanetCondition::K1 => "K1",
            KanetCondition::K2 => "K2",
            KanetCondition::K3 => "K3",
            KanetCondition::K4 => "K4",
            KanetCondition::K5 => "K5",
            KanetCondition::K6 => "K6",
            KanetCondition::K7 => "K7",
        }
    }
}

impl std::fmt::Display for KanetCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Aggregates shared by the seven conditions.
///
/// Computed once per `(i, j)` query. All arithmetic is in `f64`
/// because the conditions divide by weights.
#[derive(Debug, Clone, Copy)]
struct PairTerms {
    p_i: f64,
    p_j: f64,
    w_i: f64,
    w_j: f64,
    d_i: f64,
    d_j: f64,
    /// `P(B_j)`
    p_before_j: f64,
    /// `P(B_i ∪ B_j) + p_i + p_j`
    p_common: f64,
    /// `P(Ā_i)`
    p_not_after_i: f64,
    /// `P(Ā_i ∩ Ā_j)`
    p_not_after_both: f64,
}

impl PairTerms {
    fn new(
        i: usize,
        j: usize,
        jobs: &[Job],
        predecessors: &[BTreeSet<usize>],
        successors: &[BTreeSet<usize>],
    ) -> Self {
        let (job_i, job_j) = (&jobs[i], &jobs[j]);
        let (b_i, b_j) = (&predecessors[i], &predecessors[j]);
        let (a_i, a_j) = (&successors[i], &successors[j]);

        let p_union = total_processing_time(jobs, b_i.union(b_j));

        let mut p_not_after_i = 0;
        let mut p_not_after_both = 0;
        for (k, job) in jobs.iter().enumerate() {
            if !a_i.contains(&k) {
                p_not_after_i += job.processing_time;
                if !a_j.contains(&k) {
                    p_not_after_both += job.processing_time;
                }
            }
        }

        Self {
            p_i: job_i.processing_time as f64,
            p_j: job_j.processing_time as f64,
            w_i: job_i.weight as f64,
            w_j: job_j.weight as f64,
            d_i: job_i.due_date as f64,
            d_j: job_j.due_date as f64,
            p_before_j: total_processing_time(jobs, b_j) as f64,
            p_common: (p_union + job_i.processing_time + job_j.processing_time) as f64,
            p_not_after_i: p_not_after_i as f64,
            p_not_after_both: p_not_after_both as f64,
        }
    }

    fn holds(&self, condition: KanetCondition) -> bool {
        let Self {
            p_i,
            p_j,
            w_i,
            w_j,
            d_i,
            d_j,
            p_before_j,
            p_common,
            p_not_after_i,
            p_not_after_both,
        } = *self;

        match condition {
            KanetCondition::K1 => {
                let common = (w_i - w_j) * p_common / w_i;
                p_i <= p_j
                    && w_i >= w_j
                    && (d_i <= d_j.max(common + w_j * d_j / w_i)
                        || d_i <= common + w_j * (p_before_j + p_j) / w_i)
            }
            KanetCondition::K2 => {
                let common = (w_j - w_i) * p_not_after_i / w_j;
                p_i <= p_j
                    && w_i < w_j
                    && d_j >= common + w_i * d_i / w_j
                    && d_j >= common + w_i * (p_not_after_both - p_j) / w_j
            }
            KanetCondition::K3 => {
                p_i <= p_j
                    && w_i < w_j
                    && d_i <= (w_i - w_j) * p_not_after_i / w_i + w_j * (p_before_j + p_j) / w_i
                    && p_i <= (w_i - w_j) * (p_not_after_i - p_before_j) / w_i + w_j * p_j / w_i
            }
            KanetCondition::K4 => {
                w_i >= w_j
                    && d_j >= d_i.min((w_j - w_i) * p_common / w_j + w_i * d_i / w_j)
                    && d_j >= p_not_after_i - w_i * p_j / w_j
            }
            KanetCondition::K5 => {
                w_i >= w_j
                    && d_i <= (w_i - w_j) * p_common / w_i + w_j * (p_before_j + p_j) / w_i
                    && p_j >= w_j * (p_not_after_i - p_before_j - p_j) / w_i
            }
            KanetCondition::K6 => {
                w_i < w_j
                    && d_j >= (w_j - w_i) * p_not_after_i / w_j + w_i * d_i / w_j
                    && d_j >= p_not_after_i - w_i * p_j / w_j
            }
            KanetCondition::K7 => d_j >= p_not_after_i,
        }
    }
}

/// First condition under which `i` can be forced before `j`, if any.
///
/// `predecessors` and `successors` must be the transitively closed sets
/// of the current relation. Pure: reads only its arguments.
pub fn satisfied_condition(
    i: usize,
    j: usize,
    jobs: &[Job],
    predecessors: &[BTreeSet<usize>],
    successors: &[BTreeSet<usize>],
) -> Option<KanetCondition> {
    let terms = PairTerms::new(i, j, jobs, predecessors, successors);
    KanetCondition::ALL
        .into_iter()
        .find(|&condition| terms.holds(condition))
}

/// Whether `i` can be forced before `j` in some optimal schedule.
pub fn dominates(
    i: usize,
    j: usize,
    jobs: &[Job],
    predecessors: &[BTreeSet<usize>],
    successors: &[BTreeSet<usize>],
) -> bool {
    satisfied_condition(i, j, jobs, predecessors, successors).is_some()
}

/// Every condition that holds for `i` before `j`.
///
/// Diagnostic only; the extenders stop at the first match.
pub fn satisfied_conditions(
    i: usize,
    j: usize,
    jobs: &[Job],
    predecessors: &[BTreeSet<usize>],
    successors: &[BTreeSet<usize>],
) -> Vec<KanetCondition> {
    let terms = PairTerms::new(i, j, jobs, predecessors, successors);
    KanetCondition::ALL
        .into_iter()
        .filter(|&condition| terms.holds(condition))
        .collect()
}
