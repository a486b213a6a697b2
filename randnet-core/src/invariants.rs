//! Structural invariant checks for the link relation.
//!
//! Symmetry and the absence of self loops hold by construction; endpoint
//! bounds may lapse after [`Network::resize`] shrinks the node count, since
//! resizing deliberately leaves links alone. The checker lets tests and
//! callers audit all three on demand.

use thiserror::Error;
use tracing::debug;

use crate::{Network, links::LinkSet};

/// Enumerates the structural invariants of the link relation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LinkInvariant {
    /// Every stored entry `a -> b` has a matching `b -> a`.
    Symmetry,
    /// No entry links a node to itself.
    NoSelfLoops,
    /// Every endpoint is below the current node count.
    EndpointBounds,
}

impl LinkInvariant {
    /// Returns all invariants in evaluation order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Symmetry, Self::NoSelfLoops, Self::EndpointBounds]
    }
}

/// Reports an invariant violation surfaced by [`LinkInvariantChecker`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum LinkInvariantViolation {
    /// A directed entry is missing its reverse entry.
    #[error("link {origin}->{target} is missing the reverse entry")]
    MissingBacklink {
        /// Node holding the one-way entry.
        origin: usize,
        /// Node lacking the reverse entry.
        target: usize,
    },
    /// A node is linked to itself.
    #[error("node {node} is linked to itself")]
    SelfLoop {
        /// The self-linked node.
        node: usize,
    },
    /// A link endpoint is at or beyond the node count.
    #[error("link {origin}->{target} references a node outside a network of {size}")]
    DanglingEndpoint {
        /// Source endpoint of the entry.
        origin: usize,
        /// Target endpoint of the entry.
        target: usize,
        /// Node count at the time of the check.
        size: usize,
    },
}

/// Helper returned by [`Network::invariants`] to run structural checks.
#[derive(Debug)]
pub struct LinkInvariantChecker<'a> {
    links: &'a LinkSet,
    size: usize,
}

impl LinkInvariantChecker<'_> {
    /// Runs all invariants, returning the first violation encountered.
    ///
    /// # Errors
    /// Returns the first [`LinkInvariantViolation`] found.
    pub fn check_all(&self) -> Result<(), LinkInvariantViolation> {
        self.check_many(LinkInvariant::all())
    }

    /// Runs the selected invariants in order, failing fast.
    ///
    /// # Errors
    /// Returns the first [`LinkInvariantViolation`] found.
    pub fn check_many(
        &self,
        invariants: impl IntoIterator<Item = LinkInvariant>,
    ) -> Result<(), LinkInvariantViolation> {
        self.run_with_mode(invariants, &mut EvaluationMode::FailFast)
    }

    /// Runs a single invariant.
    ///
    /// # Errors
    /// Returns the first [`LinkInvariantViolation`] found.
    pub fn check(&self, invariant: LinkInvariant) -> Result<(), LinkInvariantViolation> {
        self.check_many([invariant])
    }

    /// Executes every invariant and returns the full set of violations.
    #[must_use]
    pub fn collect_all(&self) -> Vec<LinkInvariantViolation> {
        let mut violations = Vec::new();
        let _ = self.run_with_mode(
            LinkInvariant::all(),
            &mut EvaluationMode::Collect(&mut violations),
        );
        violations
    }

    fn run_with_mode(
        &self,
        invariants: impl IntoIterator<Item = LinkInvariant>,
        mode: &mut EvaluationMode<'_>,
    ) -> Result<(), LinkInvariantViolation> {
        for invariant in invariants {
            for (origin, target) in self.links.entries() {
                if let Some(violation) = self.inspect(invariant, origin, target) {
                    debug!(%violation, "link invariant violated");
                    mode.record(violation)?;
                }
            }
        }
        Ok(())
    }

    fn inspect(
        &self,
        invariant: LinkInvariant,
        origin: usize,
        target: usize,
    ) -> Option<LinkInvariantViolation> {
        match invariant {
            LinkInvariant::Symmetry if !self.links.contains(target, origin) => {
                Some(LinkInvariantViolation::MissingBacklink { origin, target })
            }
            LinkInvariant::NoSelfLoops if origin == target => {
                Some(LinkInvariantViolation::SelfLoop { node: origin })
            }
            LinkInvariant::EndpointBounds if origin >= self.size || target >= self.size => {
                Some(LinkInvariantViolation::DanglingEndpoint {
                    origin,
                    target,
                    size: self.size,
                })
            }
            _ => None,
        }
    }
}

enum EvaluationMode<'a> {
    FailFast,
    Collect(&'a mut Vec<LinkInvariantViolation>),
}

impl EvaluationMode<'_> {
    fn record(&mut self, violation: LinkInvariantViolation) -> Result<(), LinkInvariantViolation> {
        match self {
            Self::FailFast => Err(violation),
            Self::Collect(sink) => {
                sink.push(violation);
                Ok(())
            }
        }
    }
}

impl<R> Network<R> {
    /// Returns a checker over the current link relation and node count.
    ///
    /// # Examples
    /// ```
    /// use randnet_core::{LinkInvariantViolation, Network, SeededRandom};
    ///
    /// let mut network = Network::with_source(SeededRandom::new(2));
    /// network.resize(4);
    /// assert!(network.add_link(1, 3));
    /// network.invariants().check_all()?;
    ///
    /// network.resize(2);
    /// assert!(network.invariants().check_all().is_err());
    /// # Ok::<(), LinkInvariantViolation>(())
    /// ```
    #[must_use]
    pub fn invariants(&self) -> LinkInvariantChecker<'_> {
        LinkInvariantChecker {
            links: &self.links,
            size: self.values.len(),
        }
    }
}
