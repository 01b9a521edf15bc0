//! Job model.
//!
//! A job is a single non-preemptive operation on the one machine.
//! Attributes are integers, matching the usual benchmark formats
//! (OR-Library `wt`, earliness/tardiness sets).
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3.5

use serde::{Deserialize, Serialize};

/// A job to be sequenced on a single machine.
///
/// Immutable once loaded. The index of a job is its position in the
/// job slice; jobs carry no identifier of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Processing time (positive).
    pub processing_time: i64,
    /// Due date (non-negative).
    pub due_date: i64,
    /// Tardiness weight (positive).
    pub weight: i64,
    /// Earliness weight. Only read by the earliness/tardiness objective.
    #[serde(default)]
    pub earliness_weight: i64,
}

impl Job {
    /// Creates a weighted-tardiness job.
    pub fn new(processing_time: i64, due_date: i64, weight: i64) -> Self {
        Self {
            processing_time,
            due_date,
            weight,
            earliness_weight: 0,
        }
    }

    /// Sets the earliness weight.
    pub fn with_earliness_weight(mut self, earliness_weight: i64) -> Self {
        self.earliness_weight = earliness_weight;
        self
    }

    /// Weighted tardiness for a given completion time.
    #[inline]
    pub fn weighted_tardiness(&self, completion_time: i64) -> i64 {
        self.weight * (completion_time - self.due_date).max(0)
    }

    /// Weighted earliness for a given completion time.
    #[inline]
    pub fn weighted_earliness(&self, completion_time: i64) -> i64 {
        self.earliness_weight * (self.due_date - completion_time).max(0)
    }
}

/// Sum of processing times over a set of job indices.
pub(crate) fn total_processing_time<'a, I>(jobs: &[Job], indices: I) -> i64
where
    I: IntoIterator<Item = &'a usize>,
{
    indices.into_iter().map(|&k| jobs[k].processing_time).sum()
}
