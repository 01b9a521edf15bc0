//! Schedule evaluation and verification.
//!
//! Checks a full job sequence produced elsewhere against the original
//! precedence relation and recomputes its cost. Holds no state.

mod completion;
mod cost;
mod error;

pub use completion::compute_completion_times;
pub use cost::{compute_cost, evaluate, verify_cost, Objective};
pub use error::{EvaluationError, VerificationError};
