//! Benchmark support crate for randnet.
//!
//! Provides the parameter grid shared by the Criterion wiring benchmarks.

use std::fmt;

/// Parameters for one wiring benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct WiringBenchParams {
    /// Number of nodes in the network.
    pub node_count: usize,
    /// Mean of the Poisson target-degree draw.
    pub mean_degree: f64,
}

impl fmt::Display for WiringBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.node_count, self.mean_degree)
    }
}

/// Node counts and mean degrees swept by the wiring benchmarks.
#[must_use]
pub fn wiring_grid() -> Vec<WiringBenchParams> {
    const NODE_COUNTS: [usize; 3] = [100, 1_000, 10_000];
    const MEAN_DEGREES: [f64; 3] = [2.0, 8.0, 32.0];

    NODE_COUNTS
        .iter()
        .flat_map(|&node_count| {
            MEAN_DEGREES.iter().map(move |&mean_degree| WiringBenchParams {
                node_count,
                mean_degree,
            })
        })
        .collect()
}
