//! Input validation for single-machine instances.
//!
//! Checks structural integrity of an instance before inference.
//! Detects:
//! - Non-positive processing times and weights
//! - Negative due dates and earliness weights
//! - Precedence pairs referencing unknown jobs
//! - Self-loops
//!
//! Repeated precedence pairs are not errors; they merge into one.
//! - Circular precedence dependencies (DAG validation)
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use crate::models::Instance;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A job has a processing time of zero or less.
    InvalidProcessingTime,
    /// A job has a negative due date.
    InvalidDueDate,
    /// A job has a non-positive tardiness weight or a negative earliness weight.
    InvalidWeight,
    /// A precedence pair references a job that doesn't exist.
    InvalidPredecessor,
    /// A precedence pair relates a job to itself.
    SelfPrecedence,
    /// Precedence graph contains a cycle.
    CyclicDependency,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a single-machine instance.
///
/// Checks:
/// 1. Every processing time is positive
/// 2. Every due date is non-negative
/// 3. Every tardiness weight is positive, every earliness weight non-negative
/// 4. Every precedence endpoint is a valid job index
/// 5. No self-loops and no duplicate pairs
/// 6. No circular precedence dependencies
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(instance: &Instance) -> ValidationResult {
    let mut errors = Vec::new();
    let n = instance.job_count();

    for (j, job) in instance.jobs.iter().enumerate() {
        if job.processing_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProcessingTime,
                format!("Job {j} has processing time {}", job.processing_time),
            ));
        }
        if job.due_date < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDueDate,
                format!("Job {j} has negative due date {}", job.due_date),
            ));
        }
        if job.weight <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWeight,
                format!("Job {j} has tardiness weight {}", job.weight),
            ));
        }
        if job.earliness_weight < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWeight,
                format!("Job {j} has negative earliness weight {}", job.earliness_weight),
            ));
        }
    }

    let mut well_formed = true;
    for &(before, after) in &instance.precedence {
        if before >= n || after >= n {
            well_formed = false;
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPredecessor,
                format!("Precedence ({before}, {after}) references a job outside 0..{n}"),
            ));
            continue;
        }
        if before == after {
            well_formed = false;
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfPrecedence,
                format!("Job {before} cannot precede itself"),
            ));
        }
    }

    // Cycle detection needs in-range endpoints
    if well_formed {
        if let Some(cycle_err) = detect_cycles(n, &instance.precedence) {
            errors.push(cycle_err);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the precedence graph using DFS.
///
/// # Algorithm
/// Topological sort via DFS. If a back-edge is found (visiting a node
/// currently in the recursion stack), a cycle exists.
///
/// # Reference
/// Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4
fn detect_cycles(n: usize, precedence: &[(usize, usize)]) -> Option<ValidationError> {
    let mut adj: Vec<Vec<usize>> = vec![Vec::new(); n];
    for &(before, after) in precedence {
        adj[before].push(after);
    }

    let mut visited = vec![false; n];
    let mut in_stack = vec![false; n];

    for node in 0..n {
        if !visited[node] && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                format!("Circular dependency detected involving job {node}"),
            ));
        }
    }

    None
}

fn has_cycle_dfs(
    node: usize,
    adj: &[Vec<usize>],
    visited: &mut [bool],
    in_stack: &mut [bool],
) -> bool {
    visited[node] = true;
    in_stack[node] = true;

    for &next in &adj[node] {
        if in_stack[next] {
            return true; // Back edge → cycle
        }
        if !visited[next] && has_cycle_dfs(next, adj, visited, in_stack) {
            return true;
        }
    }

    in_stack[node] = false;
    false
}
