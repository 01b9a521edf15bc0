//! Precedence inference for single-machine weighted-tardiness scheduling.
//!
//! Given jobs with processing times, due dates and weights (and optionally
//! a partial order supplied by the instance), infers additional ordering
//! constraints that at least one optimal schedule respects. No schedule is
//! searched for: the inferred relation is handed to external solvers as a
//! pruning hint, and their schedules are checked afterwards.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `Instance`, `PrecedenceSets`
//! - **`validation`**: Input integrity checks (job attributes, precedence references, DAG cycles)
//! - **`graph`**: `PrecedenceGraph` with maintained closure, reachability, longest paths
//! - **`dominance`**: Sufficient conditions for forcing one job before another
//! - **`extension`**: Fixed-point and priority batch extenders, `infer_precedence`
//! - **`evaluation`**: Completion times, objectives, cost verification
//!
//! # Example
//! ```
//! use u_precedence::evaluation::{verify_cost, Objective};
//! use u_precedence::extension::{infer_precedence, ExtensionConfig, NoOpObserver};
//! use u_precedence::models::{Instance, Job};
//!
//! let instance = Instance::new(vec![Job::new(3, 5, 1), Job::new(2, 10, 1), Job::new(4, 2, 5)]);
//! let inference = infer_precedence(&instance, &ExtensionConfig::default(), &mut NoOpObserver)
//!     .unwrap();
//! assert!(inference.sets().requires(2, 0));
//!
//! let cost = verify_cost(&[2, 0, 1], &instance.jobs, None, Objective::WeightedTardiness, None);
//! assert_eq!(cost, Ok(12));
//! ```
//!
//! # References
//!
//! - Kanet (2007), "New precedence theorems for one-machine weighted tardiness"
//! - Emmons (1969), "One-machine sequencing to minimize certain functions of job tardiness"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dominance;
pub mod evaluation;
pub mod extension;
pub mod graph;
pub mod models;
pub mod validation;
