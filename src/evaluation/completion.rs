//! Completion times of a job sequence.

use std::collections::BTreeSet;

use super::EvaluationError;
use crate::models::Job;

/// Completion time of every job when processed in `schedule` order.
///
/// `predecessors`, when given, is the original relation (not the
/// inferred one): each job's predecessors must all have completed
/// before it starts.
///
/// # Errors
/// - [`EvaluationError::LengthMismatch`] if `schedule` is not a full sequence
/// - [`EvaluationError::UnknownJob`] for an out-of-range index
/// - [`EvaluationError::DuplicateJob`] for a repeated index
/// - [`EvaluationError::MissingPredecessors`] for a precedence violation
pub fn compute_completion_times(
    schedule: &[usize],
    jobs: &[Job],
    predecessors: Option<&[BTreeSet<usize>]>,
) -> Result<Vec<i64>, EvaluationError> {
    if schedule.len() != jobs.len() {
        return Err(EvaluationError::LengthMismatch {
            expected: jobs.len(),
            actual: schedule.len(),
        });
    }

    let mut completion_times = vec![0; jobs.len()];
    let mut scheduled = vec![false; jobs.len()];
    let mut t = 0;

    for &j in schedule {
        let job = jobs.get(j).ok_or(EvaluationError::UnknownJob(j))?;
        if scheduled[j] {
            return Err(EvaluationError::DuplicateJob(j));
        }

        if let Some(preds) = predecessors.and_then(|p| p.get(j)) {
            let missing: Vec<usize> = preds
                .iter()
                .copied()
                .filter(|&k| !scheduled.get(k).copied().unwrap_or(false))
                .collect();
            if !missing.is_empty() {
                return Err(EvaluationError::MissingPredecessors { job: j, missing });
            }
        }

        t += job.processing_time;
        completion_times[j] = t;
        scheduled[j] = true;
    }

    Ok(completion_times)
}
