//! Aggregation over a registry of measurable items
//!
//! The aggregator folds every item's measure into one summary value using an
//! associative, commutative reduction. It sees items only through the
//! [`Measurable`](crate::Measurable) contract: there is no downcasting and no
//! per-variant branching, so adding a new variant never touches this module.

use serde::{Deserialize, Serialize};

use crate::registry::Registry;

/// Summary of one aggregation pass.
///
/// Holds the reduced value together with the number of contributing items.
/// Results are never cached: each [`Aggregator::total`] call recomputes from
/// the registry's current contents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// The reduced value over all items' measures.
    pub total: f64,
    /// Number of items that contributed to the reduction.
    pub count: usize,
}

/// Folds a registry's measures into an [`AggregateResult`].
///
/// The reduction must be associative and commutative so the result is
/// independent of registry insertion order. [`Aggregator::sum`] is the
/// canonical reduction; [`Aggregator::new`] accepts any other.
#[derive(Clone, Copy)]
pub struct Aggregator {
    identity: f64,
    combine: fn(f64, f64) -> f64,
}

impl Aggregator {
    /// Create an aggregator with an arbitrary reduction.
    ///
    /// `identity` must be the identity element of `combine` (`combine(identity,
    /// x) == x`), and `combine` must be associative and commutative.
    pub fn new(identity: f64, combine: fn(f64, f64) -> f64) -> Self {
        Self { identity, combine }
    }

    /// The summing aggregator: total measure across all items.
    pub fn sum() -> Self {
        Self::new(0.0, |acc, x| acc + x)
    }

    /// The maximum aggregator: largest single measure.
    ///
    /// An empty registry reduces to the identity `0.0`, which is consistent
    /// with measures being non-negative.
    pub fn max() -> Self {
        Self::new(0.0, f64::max)
    }

    /// Reduce the registry's measures to a single result.
    ///
    /// O(n) in the number of items; no allocation beyond the running value.
    pub fn total(&self, registry: &Registry) -> AggregateResult {
        let mut acc = self.identity;
        let mut count = 0usize;
        for item in registry.items() {
            acc = (self.combine)(acc, item.measure());
            count += 1;
        }
        tracing::debug!(total = acc, count, "aggregated registry");
        AggregateResult { total: acc, count }
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::sum()
    }
}

impl std::fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aggregator")
            .field("identity", &self.identity)
            .finish()
    }
}
