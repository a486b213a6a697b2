//! Degree statistics over the nodes currently in the network.
//!
//! Only nodes `0..size` are counted. Entries left dangling by a shrinking
//! resize are ignored here; see [`crate::LinkInvariant::EndpointBounds`].

use crate::Network;

/// Aggregate degree figures for a network.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DegreeSummary {
    /// Smallest degree of any node, `0` for an empty network.
    pub min: usize,
    /// Largest degree of any node, `0` for an empty network.
    pub max: usize,
    /// Mean degree, `0.0` for an empty network.
    pub mean: f64,
    /// Sum of all node degrees.
    pub total: usize,
}

impl<R> Network<R> {
    /// Summarises the degrees of nodes `0..size`.
    ///
    /// # Examples
    /// ```
    /// use randnet_core::{Network, SeededRandom};
    ///
    /// let mut network = Network::with_source(SeededRandom::new(3));
    /// network.resize(4);
    /// assert!(network.add_link(0, 1));
    /// assert!(network.add_link(0, 2));
    ///
    /// let summary = network.degree_summary();
    /// assert_eq!((summary.min, summary.max, summary.total), (0, 2, 4));
    /// assert_eq!(summary.mean, 1.0);
    /// ```
    #[must_use]
    pub fn degree_summary(&self) -> DegreeSummary {
        let size = self.values.len();
        if size == 0 {
            return DegreeSummary::default();
        }
        let degrees = (0..size).map(|node| self.links.degree(node));
        let (min, max, total) = degrees.fold((usize::MAX, 0, 0), |(min, max, total), degree| {
            (min.min(degree), max.max(degree), total + degree)
        });
        DegreeSummary {
            min,
            max,
            mean: total as f64 / size as f64,
            total,
        }
    }

    /// Counts nodes by degree: entry `k` is the number of nodes with degree
    /// `k`. Empty networks yield an empty histogram.
    #[must_use]
    pub fn degree_histogram(&self) -> Vec<usize> {
        let mut histogram = Vec::new();
        for node in 0..self.values.len() {
            let degree = self.links.degree(node);
            if histogram.len() <= degree {
                histogram.resize(degree + 1, 0);
            }
            histogram[degree] += 1;
        }
        histogram
    }
}
