//! Single-machine scheduling models.
//!
//! Provides the data types handed to and returned from the precedence
//! inference engine.
//!
//! | Type | Role |
//! |------|------|
//! | `Job` | Processing time, due date, weights |
//! | `Instance` | Jobs plus the original partial order |
//! | `PrecedenceSets` | Exported inferred relation (solver contract) |

mod instance;
mod job;
mod precedence;

pub use instance::Instance;
pub(crate) use job::total_processing_time;
pub use job::Job;
pub use precedence::PrecedenceSets;
