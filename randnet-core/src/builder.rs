//! Builder utilities for configuring [`Network`] instances.
//!
//! Collects the node count, seed and optional wiring density, validating the
//! configuration before any allocation happens.

use crate::{
    Network, Result,
    error::{NetworkError, is_valid_mean},
    random::SeededRandom,
};

/// Configures and constructs seeded [`Network`] instances.
///
/// # Examples
/// ```
/// use randnet_core::NetworkBuilder;
///
/// let network = NetworkBuilder::new()
///     .with_size(10)
///     .with_seed(42)
///     .with_mean_degree(3.0)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(network.size(), 10);
/// assert_eq!(network.link_count() % 2, 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetworkBuilder {
    size: usize,
    seed: Option<u64>,
    mean_degree: Option<f64>,
}

impl NetworkBuilder {
    /// Creates a builder for an empty, unwired, entropy-seeded network.
    ///
    /// # Examples
    /// ```
    /// use randnet_core::NetworkBuilder;
    ///
    /// let builder = NetworkBuilder::new();
    /// assert_eq!(builder.size(), 0);
    /// assert_eq!(builder.seed(), None);
    /// assert_eq!(builder.mean_degree(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial node count.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Returns the configured node count.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Seeds the random source so values and wiring are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Requests that [`Self::build`] wire the network with
    /// [`Network::random_connect`] at this mean degree.
    #[must_use]
    pub fn with_mean_degree(mut self, mean_degree: f64) -> Self {
        self.mean_degree = Some(mean_degree);
        self
    }

    /// Returns the configured mean degree, if any.
    #[must_use]
    pub fn mean_degree(&self) -> Option<f64> {
        self.mean_degree
    }

    /// Validates the configuration and constructs a [`Network`].
    ///
    /// # Errors
    /// Returns [`NetworkError::InvalidMeanDegree`] when the configured mean
    /// degree is negative, NaN, infinite or too large to sample, and
    /// propagates any
    /// [`NetworkError`] raised while wiring.
    ///
    /// # Examples
    /// ```
    /// use randnet_core::{NetworkBuilder, NetworkError};
    ///
    /// let err = NetworkBuilder::new()
    ///     .with_mean_degree(-2.0)
    ///     .build()
    ///     .expect_err("negative mean degree is rejected");
    /// assert!(matches!(err, NetworkError::InvalidMeanDegree { .. }));
    /// ```
    pub fn build(self) -> Result<Network<SeededRandom>> {
        if let Some(mean) = self.mean_degree.filter(|&mean| !is_valid_mean(mean)) {
            return Err(NetworkError::InvalidMeanDegree { mean });
        }

        let source = self
            .seed
            .map_or_else(SeededRandom::from_entropy, SeededRandom::new);
        let mut network = Network::with_source(source);
        network.resize(self.size);
        if let Some(mean) = self.mean_degree {
            network.random_connect(mean)?;
        }
        Ok(network)
    }
}
