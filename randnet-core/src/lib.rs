//! Randnet core library.
//!
//! An in-memory random network: a fixed set of valued nodes joined by
//! undirected links, with degree-targeted random wiring and structural
//! queries. Randomness is injected through [`RandomSource`] so tests can
//! replace it with deterministic doubles.

mod builder;
mod error;
mod invariants;
mod links;
mod network;
mod random;
mod stats;
mod wiring;

#[cfg(test)]
mod test_utils;


pub use crate::{
    builder::NetworkBuilder,
    error::{DrawError, NetworkError, NetworkErrorCode, Result},
    invariants::{LinkInvariant, LinkInvariantChecker, LinkInvariantViolation},
    network::Network,
    random::{RandomSource, SeededRandom},
    stats::DegreeSummary,
};
