//! Symmetric adjacency storage for undirected links.
//!
//! Every connection is stored as two directed entries, `a -> b` and `b -> a`,
//! inserted together so symmetry holds by construction. Bounds against the
//! node count are the caller's concern; the set itself only rejects self
//! loops and duplicates.

use std::collections::{BTreeMap, BTreeSet};

/// Adjacency map from node index to the set of its neighbors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct LinkSet {
    adjacency: BTreeMap<usize, BTreeSet<usize>>,
    entries: usize,
}

impl LinkSet {
    /// Returns `true` when the directed entry `a -> b` is stored.
    pub(crate) fn contains(&self, a: usize, b: usize) -> bool {
        self.adjacency.get(&a).is_some_and(|set| set.contains(&b))
    }

    /// Inserts both directions of `a <-> b`.
    ///
    /// Returns `false` without mutating when `a == b` or the pair is already
    /// present.
    pub(crate) fn insert(&mut self, a: usize, b: usize) -> bool {
        if a == b || self.contains(a, b) {
            return false;
        }
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        self.entries += 2;
        true
    }

    /// Number of directed entries keyed by `node`.
    pub(crate) fn degree(&self, node: usize) -> usize {
        self.adjacency.get(&node).map_or(0, BTreeSet::len)
    }

    /// Neighbours of `node` in ascending index order.
    pub(crate) fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Every stored directed entry `(origin, target)`.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&origin, set)| set.iter().map(move |&target| (origin, target)))
    }

    /// Total number of directed entries, twice the number of connections.
    pub(crate) fn len(&self) -> usize {
        self.entries
    }

    pub(crate) fn clear(&mut self) {
        self.adjacency.clear();
        self.entries = 0;
    }

    #[cfg(test)]
    pub(crate) fn insert_directed_unchecked(&mut self, a: usize, b: usize) {
        if self.adjacency.entry(a).or_default().insert(b) {
            self.entries += 1;
        }
    }
}
