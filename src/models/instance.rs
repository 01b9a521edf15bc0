//! Problem instance model.
//!
//! An instance is an ordered list of jobs plus an optional original
//! partial order, given as `(predecessor, successor)` index pairs.

use serde::{Deserialize, Serialize};

use super::Job;

/// A single-machine scheduling instance.
///
/// The original precedence is kept exactly as supplied; inferred
/// relations never replace it. Schedules are always checked against
/// this original relation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Jobs, indexed by position.
    pub jobs: Vec<Job>,
    /// Original precedence pairs `(before, after)`.
    #[serde(default)]
    pub precedence: Vec<(usize, usize)>,
}

impl Instance {
    /// Creates an instance without precedence.
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs,
            precedence: Vec::new(),
        }
    }

    /// Adds a job.
    pub fn with_job(mut self, job: Job) -> Self {
        self.jobs.push(job);
        self
    }

    /// Adds an original precedence pair: `before` completes before `after` starts.
    pub fn with_precedence(mut self, before: usize, after: usize) -> Self {
        self.precedence.push((before, after));
        self
    }

    /// Number of jobs.
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the instance carries an original partial order.
    pub fn has_precedence(&self) -> bool {
        !self.precedence.is_empty()
    }
}
