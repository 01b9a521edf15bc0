//! Path existence over direct successor lists.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.2 (BFS)

use std::collections::VecDeque;

/// Whether `target` is reachable from `source` by following direct edges.
///
/// Breadth-first; visits only the subgraph reachable from `source`.
/// A node is not reachable from itself unless it lies on a cycle. An
/// out-of-range `source` reaches nothing.
pub fn has_path(source: usize, target: usize, successors: &[Vec<usize>]) -> bool {
    let mut visited = vec![false; successors.len()];
    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(node) = queue.pop_front() {
        let Some(succ) = successors.get(node) else {
            continue;
        };
        for &next in succ {
            if next == target {
                return true;
            }
            if let Some(seen) = visited.get_mut(next) {
                if !*seen {
                    *seen = true;
                    queue.push_back(next);
                }
            }
        }
    }

    false
}
