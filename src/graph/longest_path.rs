//! All-pairs longest paths, counted in edges.
//!
//! Floyd–Warshall over negated unit lengths: direct edges start at `-1`,
//! every other pair at `0`, distances are minimized through each
//! intermediate job and negated at the end. Only meaningful on a DAG,
//! where no negative cycle exists.
//!
//! Used to order candidate edges, never to decide correctness.
//!
//! # Complexity
//! O(n³) time, O(n²) space.
//!
//! # Reference
//! Floyd (1962), "Algorithm 97: Shortest Path"

/// Longest-path lengths between every ordered pair of jobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongestPathTable {
    n: usize,
    dist: Vec<i64>,
}

impl LongestPathTable {
    /// Computes the table for `n` jobs and the given direct edges.
    pub fn compute<I>(n: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut d = vec![0i64; n * n];
        for (i, j) in edges {
            d[i * n + j] = -1;
        }

        for k in 0..n {
            for i in 0..n {
                let d_ik = d[i * n + k];
                if d_ik == 0 {
                    continue;
                }
                for j in 0..n {
                    let d_kj = d[k * n + j];
                    if d_kj == 0 {
                        continue;
                    }
                    let via = d_ik + d_kj;
                    if d[i * n + j] > via {
                        d[i * n + j] = via;
                    }
                }
            }
        }

        for v in &mut d {
            *v = -*v;
        }

        Self { n, dist: d }
    }

    /// Longest path from `i` to `j`; `0` when no path exists.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i64 {
        self.dist[i * self.n + j]
    }
}
