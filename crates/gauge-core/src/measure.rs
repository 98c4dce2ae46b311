//! The `Measurable` capability contract
//!
//! This is the single contract the read path is built on. Consumers
//! ([`crate::Registry`], [`crate::Aggregator`]) see only this trait, never a
//! concrete variant, which is what keeps aggregation closed to modification
//! when new variants are added.

/// Capability to produce one scalar measure.
///
/// # Contract
///
/// - `measure` is a pure function of the implementor's own state: no shared
///   mutable state, no side effects, no dependence on call order.
/// - The returned value is finite and non-negative. Implementors uphold this
///   by validating their parameters at construction, so `measure` itself has
///   no failure path.
///
/// There is no default implementation: every variant supplies its own
/// formula.
pub trait Measurable: Send + Sync {
    /// Compute this variant's scalar measure.
    fn measure(&self) -> f64;
}
