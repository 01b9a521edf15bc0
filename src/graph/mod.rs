//! Precedence graph and the path queries built on it.
//!
//! - **`PrecedenceGraph`**: acyclic relation with closed ancestor/descendant sets
//! - **`has_path`**: BFS reachability over direct edges (cycle guard)
//! - **`LongestPathTable`**: all-pairs longest paths (candidate priority)

mod longest_path;
mod precedence_graph;
mod reachability;

pub use longest_path::LongestPathTable;
pub use precedence_graph::PrecedenceGraph;
pub use reachability::has_path;
