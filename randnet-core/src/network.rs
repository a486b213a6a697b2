//! The [`Network`] model: node values plus a symmetric link relation.
//!
//! Nodes are identified by their zero-based index. Resizing reseeds every
//! value from the network's [`RandomSource`] but leaves links untouched;
//! links whose endpoints fall outside a shrunk network persist until the next
//! [`Network::clear_links`] or [`Network::random_connect`].

use tracing::{instrument, trace};

use crate::{
    Result,
    error::NetworkError,
    links::LinkSet,
    random::{RandomSource, SeededRandom},
};

/// A fixed set of valued nodes connected by undirected links.
///
/// # Examples
/// ```
/// use randnet_core::{Network, SeededRandom};
///
/// let mut network = Network::with_source(SeededRandom::new(9));
/// network.resize(3);
/// assert!(network.add_link(0, 2));
/// assert!(!network.add_link(2, 0));
/// assert_eq!(network.degree(0), 1);
/// assert_eq!(network.neighbors(2), vec![0]);
/// assert_eq!(network.link_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Network<R = SeededRandom> {
    pub(crate) values: Vec<f64>,
    pub(crate) links: LinkSet,
    pub(crate) rng: R,
}

impl Network<SeededRandom> {
    /// Creates an empty network drawing from an entropy-seeded source.
    ///
    /// # Examples
    /// ```
    /// use randnet_core::Network;
    ///
    /// let network = Network::new();
    /// assert_eq!(network.size(), 0);
    /// assert!(network.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(SeededRandom::from_entropy())
    }
}

impl Default for Network<SeededRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> Network<R> {
    /// Creates an empty network drawing from `rng`.
    #[must_use]
    pub fn with_source(rng: R) -> Self {
        Self {
            values: Vec::new(),
            links: LinkSet::default(),
            rng,
        }
    }

    /// Sets the node count to `size` and refills every value with a fresh
    /// standard-normal draw. Existing links are kept.
    #[instrument(name = "network.resize", skip(self), fields(previous = self.values.len()))]
    pub fn resize(&mut self, size: usize) {
        self.values.clear();
        self.values.resize(size, 0.0);
        self.rng.normal(&mut self.values);
    }

    /// Overwrites the leading values with `new_values` and returns how many
    /// were copied: the smaller of the two lengths. Never resizes.
    ///
    /// # Examples
    /// ```
    /// use randnet_core::{Network, SeededRandom};
    ///
    /// let mut network = Network::with_source(SeededRandom::new(1));
    /// network.resize(2);
    /// assert_eq!(network.set_values(&[1.0, 2.0, 3.0]), 2);
    /// assert_eq!(network.values(), &[1.0, 2.0]);
    /// ```
    #[instrument(
        name = "network.set_values",
        skip(self, new_values),
        fields(
            size = self.values.len(),
            offered = new_values.len(),
            copied = tracing::field::Empty,
        ),
    )]
    pub fn set_values(&mut self, new_values: &[f64]) -> usize {
        let copied = self.values.len().min(new_values.len());
        self.values[..copied].copy_from_slice(&new_values[..copied]);
        tracing::Span::current().record("copied", copied);
        copied
    }

    /// Returns the current node count.
    #[must_use]
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when the network has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value held by node `n`.
    ///
    /// # Errors
    /// Returns [`NetworkError::IndexOutOfRange`] when `n >= self.size()`.
    ///
    /// # Examples
    /// ```
    /// use randnet_core::{Network, NetworkError, SeededRandom};
    ///
    /// let mut network = Network::with_source(SeededRandom::new(1));
    /// network.resize(1);
    /// assert!(network.value(0).is_ok());
    /// assert!(matches!(
    ///     network.value(1),
    ///     Err(NetworkError::IndexOutOfRange { index: 1, size: 1 })
    /// ));
    /// ```
    pub fn value(&self, n: usize) -> Result<f64> {
        self.values
            .get(n)
            .copied()
            .ok_or(NetworkError::IndexOutOfRange {
                index: n,
                size: self.values.len(),
            })
    }

    /// Borrowed view of every node value in index order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns a copy of the values sorted in descending order.
    #[must_use]
    pub fn sorted_values(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_unstable_by(|a, b| b.total_cmp(a));
        sorted
    }

    /// Connects `a` and `b` in both directions.
    ///
    /// Returns `false`, leaving the network untouched, when either index is
    /// out of range, `a == b`, or the pair is already linked.
    pub fn add_link(&mut self, a: usize, b: usize) -> bool {
        let size = self.values.len();
        if a >= size || b >= size {
            trace!(a, b, size, "link endpoint out of range");
            return false;
        }
        self.links.insert(a, b)
    }

    /// Number of links whose source endpoint is `n`. Unknown indices report
    /// zero.
    #[must_use]
    pub fn degree(&self, n: usize) -> usize {
        self.links.degree(n)
    }

    /// Nodes linked to `n`, each exactly once, in ascending index order.
    #[must_use]
    pub fn neighbors(&self, n: usize) -> Vec<usize> {
        self.links.neighbors(n).collect()
    }

    /// Number of directed entries stored, twice the number of connections.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Removes every link. Values are untouched.
    pub fn clear_links(&mut self) {
        self.links.clear();
    }

    /// Mutable access to the random source driving this network.
    pub fn source_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
