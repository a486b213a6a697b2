//! Degree-targeted random wiring.
//!
//! Each node draws a Poisson target degree, capped at `size - 1`. Nodes are
//! then visited in index order: a uniform probe over `[node, size - 1]` tries
//! to link the node to a partner that still has room, and when the probe
//! misses a linear scan over the higher indices takes the first partner that
//! accepts. A node whose scan finds nobody keeps the degree it has reached,
//! so targets are best-effort and every loop is bounded by the node count.

use tracing::{debug, info, instrument, trace};

use crate::{
    Network, Result,
    error::{NetworkError, is_valid_mean},
    random::RandomSource,
};

/// Returns `true` when node `n` has not yet reached its target degree.
fn has_room(actual: &[usize], target: &[usize], n: usize) -> bool {
    matches!((actual.get(n), target.get(n)), (Some(a), Some(t)) if a < t)
}

impl<R: RandomSource> Network<R> {
    /// Replaces every link with a random topology whose degrees follow a
    /// Poisson distribution of mean `mean_degree`.
    ///
    /// Returns the number of directed entries now stored, which is always
    /// twice the number of connections. Networks with fewer than two nodes
    /// end up with no links.
    ///
    /// # Errors
    /// Returns [`NetworkError::InvalidMeanDegree`] when `mean_degree` is
    /// negative, NaN, infinite or too large to sample, in which case existing
    /// links are kept, and
    /// [`NetworkError::Draw`] when the random source fails.
    ///
    /// # Examples
    /// ```
    /// use randnet_core::{Network, SeededRandom};
    ///
    /// let mut network = Network::with_source(SeededRandom::new(5));
    /// network.resize(5);
    /// let entries = network.random_connect(2.0)?;
    /// assert_eq!(entries % 2, 0);
    /// assert!((0..5).all(|n| network.degree(n) <= 4));
    /// # Ok::<(), randnet_core::NetworkError>(())
    /// ```
    #[instrument(
        name = "network.random_connect",
        err,
        skip(self),
        fields(size = self.values.len()),
    )]
    pub fn random_connect(&mut self, mean_degree: f64) -> Result<usize> {
        if !is_valid_mean(mean_degree) {
            return Err(NetworkError::InvalidMeanDegree { mean: mean_degree });
        }
        self.links.clear();

        let size = self.values.len();
        let mut target = vec![0_usize; size];
        self.rng.poisson(&mut target, mean_degree)?;
        let Some(last) = size.checked_sub(1) else {
            return Ok(0);
        };
        for degree in &mut target {
            *degree = (*degree).min(last);
        }

        let mut actual = vec![0_usize; size];
        let mut abandoned = 0_usize;
        for node in 0..size {
            while has_room(&actual, &target, node) {
                let probe = self.rng.uniform_int(node, last);
                let partner = if has_room(&actual, &target, probe) && self.add_link(node, probe) {
                    Some(probe)
                } else {
                    trace!(node, probe, "probe missed, scanning higher indices");
                    (node + 1..size)
                        .find(|&candidate| {
                            has_room(&actual, &target, candidate) && self.add_link(node, candidate)
                        })
                };

                match partner {
                    Some(partner) => {
                        actual[node] += 1;
                        actual[partner] += 1;
                    }
                    None => {
                        debug!(
                            node,
                            target = target[node],
                            achieved = actual[node],
                            "no partner left, settling below target degree"
                        );
                        target[node] = actual[node];
                        abandoned += 1;
                    }
                }
            }
        }

        let links = self.links.len();
        info!(links, abandoned, "random wiring complete");
        Ok(links)
    }
}
