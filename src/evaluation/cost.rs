//! Schedule objectives and cost verification.
//!
//! | Objective | Cost |
//! |-----------|------|
//! | Weighted tardiness | Σ w_j · max(0, C_j − d_j) |
//! | Max weighted tardiness | max_j w_j · max(0, C_j − d_j) |
//! | Weighted earliness/tardiness | Σ e_j · max(0, d_j − C_j) + w_j · max(0, C_j − d_j) |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 2.2: Objectives

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{compute_completion_times, EvaluationError, VerificationError};
use crate::models::Job;

/// Scheduling objective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Objective {
    /// Total weighted tardiness.
    #[default]
    WeightedTardiness,
    /// Largest weighted tardiness of any job.
    MaxWeightedTardiness,
    /// Total weighted earliness plus total weighted tardiness.
    WeightedEarlinessTardiness,
}

/// Cost of the given completion times under `objective`.
pub fn compute_cost(objective: Objective, jobs: &[Job], completion_times: &[i64]) -> i64 {
    let per_job = jobs.iter().zip(completion_times);
    match objective {
        Objective::WeightedTardiness => per_job.map(|(job, &c)| job.weighted_tardiness(c)).sum(),
        Objective::MaxWeightedTardiness => per_job
            .map(|(job, &c)| job.weighted_tardiness(c))
            .max()
            .unwrap_or(0),
        Objective::WeightedEarlinessTardiness => per_job
            .map(|(job, &c)| job.weighted_earliness(c) + job.weighted_tardiness(c))
            .sum(),
    }
}

/// Evaluates a schedule under `objective`.
///
/// # Errors
/// Any [`EvaluationError`] from [`compute_completion_times`].
pub fn evaluate(
    schedule: &[usize],
    jobs: &[Job],
    predecessors: Option<&[BTreeSet<usize>]>,
    objective: Objective,
) -> Result<i64, EvaluationError> {
    let completion_times = compute_completion_times(schedule, jobs, predecessors)?;
    Ok(compute_cost(objective, jobs, &completion_times))
}

/// Recomputes the cost of a schedule and checks it against a claim.
///
/// Returns the actual cost when the schedule is feasible and either no
/// cost was claimed or the claim matches.
///
/// # Errors
/// - [`VerificationError::Schedule`] when the schedule is malformed or infeasible
/// - [`VerificationError::CostMismatch`] when the claimed cost is wrong
pub fn verify_cost(
    schedule: &[usize],
    jobs: &[Job],
    predecessors: Option<&[BTreeSet<usize>]>,
    objective: Objective,
    claimed: Option<i64>,
) -> Result<i64, VerificationError> {
    let actual = evaluate(schedule, jobs, predecessors, objective)?;
    match claimed {
        Some(claimed) if claimed != actual => {
            Err(VerificationError::CostMismatch { claimed, actual })
        }
        _ => Ok(actual),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_jobs() -> Vec<Job> {
        vec![Job::new(3, 5, 1), Job::new(2, 10, 1), Job::new(4, 2, 5)]
    }

    #[test]
    fn test_weighted_tardiness() {
        // C = [7, 9, 4]: 1·2 + 1·0 + 5·2 = 12
        let cost = evaluate(&[2, 0, 1], &sample_jobs(), None, Objective::WeightedTardiness);
        assert_eq!(cost, Ok(12));
    }

    #[test]
    fn test_max_weighted_tardiness() {
        let cost = evaluate(&[2, 0, 1], &sample_jobs(), None, Objective::MaxWeightedTardiness);
        assert_eq!(cost, Ok(10));
        assert_eq!(compute_cost(Objective::MaxWeightedTardiness, &[], &[]), 0);
    }

    #[test]
    fn test_weighted_earliness_tardiness() {
        let jobs: Vec<Job> = sample_jobs()
            .into_iter()
            .map(|j| j.with_earliness_weight(2))
            .collect();
        // C = [7, 9, 4]: tardiness 12, earliness 2·(10 − 9) = 2
        let cost = evaluate(&[2, 0, 1], &jobs, None, Objective::WeightedEarlinessTardiness);
        assert_eq!(cost, Ok(14));
    }

    #[test]
    fn test_verify_matching_cost() {
        let jobs = sample_jobs();
        assert_eq!(
            verify_cost(&[2, 0, 1], &jobs, None, Objective::WeightedTardiness, Some(12)),
            Ok(12)
        );
        assert_eq!(
            verify_cost(&[2, 0, 1], &jobs, None, Objective::WeightedTardiness, None),
            Ok(12)
        );
    }

    #[test]
    fn test_verify_cost_mismatch() {
        let err = verify_cost(
            &[2, 0, 1],
            &sample_jobs(),
            None,
            Objective::WeightedTardiness,
            Some(11),
        )
        .unwrap_err();
        assert_eq!(
            err,
            VerificationError::CostMismatch {
                claimed: 11,
                actual: 12
            }
        );
    }

    #[test]
    fn test_verify_infeasible_schedule() {
        let mut preds = vec![BTreeSet::new(); 3];
        preds[0].insert(2);
        let err = verify_cost(
            &[0, 2, 1],
            &sample_jobs(),
            Some(preds.as_slice()),
            Objective::WeightedTardiness,
            Some(0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            VerificationError::Schedule(EvaluationError::MissingPredecessors { job: 0, .. })
        ));
    }

    #[test]
    fn test_objective_default() {
        assert_eq!(Objective::default(), Objective::WeightedTardiness);
    }
}
