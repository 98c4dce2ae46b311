//! Ordered owning collection of measurable items
//!
//! The registry stores items behind the [`Measurable`] contract only; once an
//! item is added its concrete variant is invisible to every consumer.
//! Insertion order is preserved so iteration is deterministic in tests, but
//! no consumer may rely on it semantically: the aggregation reductions are
//! commutative.

use crate::measure::Measurable;

/// An ordered collection of [`Measurable`] items.
///
/// The registry owns its items exclusively; they are dropped with it.
/// Mutation requires `&mut self` while aggregation borrows `&self`, so the
/// collection cannot change while an aggregation is in flight.
#[derive(Default)]
pub struct Registry {
    items: Vec<Box<dyn Measurable>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to the registry.
    pub fn add(&mut self, item: Box<dyn Measurable>) {
        self.items.push(item);
    }

    /// A restartable, read-only view of the items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &dyn Measurable> {
        self.items.iter().map(|item| &**item)
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("len", &self.items.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Square};

    #[test]
    fn starts_empty() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.items().count(), 0);
    }

    #[test]
    fn preserves_insertion_order() {
        let mut registry = Registry::new();
        registry.add(Box::new(Square::new(2.0).unwrap()));
        registry.add(Box::new(Circle::new(1.0).unwrap()));

        let measures: Vec<f64> = registry.items().map(Measurable::measure).collect();
        assert_eq!(measures.len(), 2);
        assert_eq!(measures[0], 4.0);
        assert!((measures[1] - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn items_is_restartable() {
        let mut registry = Registry::new();
        registry.add(Box::new(Square::new(3.0).unwrap()));

        // Two independent passes over the same view.
        assert_eq!(registry.items().count(), 1);
        assert_eq!(registry.items().count(), 1);
    }
}
