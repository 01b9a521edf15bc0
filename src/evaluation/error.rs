//! Schedule evaluation errors.

use thiserror::Error;

/// Why a schedule could not be evaluated.
///
/// Structural errors abort evaluation; no partial completion times are
/// returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("schedule has {actual} jobs, instance has {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("no such job {0}")]
    UnknownJob(usize),
    #[error("job {0} is already scheduled")]
    DuplicateJob(usize),
    #[error("predecessors {missing:?} of job {job} are not scheduled")]
    MissingPredecessors { job: usize, missing: Vec<usize> },
}

/// Why a schedule failed verification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error(transparent)]
    Schedule(#[from] EvaluationError),
    #[error("claimed cost {claimed} mismatches the actual cost {actual}")]
    CostMismatch { claimed: i64, actual: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = EvaluationError::MissingPredecessors {
            job: 0,
            missing: vec![2],
        };
        assert_eq!(err.to_string(), "predecessors [2] of job 0 are not scheduled");

        let err = VerificationError::CostMismatch {
            claimed: 10,
            actual: 12,
        };
        assert_eq!(err.to_string(), "claimed cost 10 mismatches the actual cost 12");
    }

    #[test]
    fn test_schedule_error_converts() {
        let err: VerificationError = EvaluationError::UnknownJob(7).into();
        assert_eq!(err.to_string(), "no such job 7");
        assert_eq!(err, VerificationError::Schedule(EvaluationError::UnknownJob(7)));
    }
}
