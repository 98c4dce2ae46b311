//! Shared registries and proptest strategies

use gauge_core::shapes::{Circle, Rectangle, RightTriangle, Square};
use gauge_core::{Measurable, Registry};
use proptest::prelude::*;

/// Expected `Aggregator::sum()` total for [`sample_registry`].
pub const SAMPLE_REGISTRY_TOTAL: f64 = 100.0 + std::f64::consts::PI * 25.0;

/// The canonical two-shape registry: a square of side 10 and a circle of
/// radius 5.
pub fn sample_registry() -> Registry {
    let mut registry = Registry::new();
    #[allow(clippy::unwrap_used)] // fixture dimensions are known-valid
    {
        registry.add(Box::new(Square::new(10.0).unwrap()));
        registry.add(Box::new(Circle::new(5.0).unwrap()));
    }
    registry
}

/// One generated shape, kept as a plain description so proptest can print it
/// on failure.
#[derive(Debug, Clone, Copy)]
pub enum AnyShape {
    /// Circle with the given radius
    Circle(f64),
    /// Square with the given side
    Square(f64),
    /// Rectangle with the given width and height
    Rectangle(f64, f64),
    /// Right triangle with the given base and height
    RightTriangle(f64, f64),
}

impl AnyShape {
    /// Build the described shape as a boxed [`Measurable`].
    ///
    /// Generated dimensions are always valid, so construction cannot fail.
    pub fn boxed(self) -> Box<dyn Measurable> {
        #[allow(clippy::unwrap_used)] // dimensions come from valid strategies
        match self {
            Self::Circle(r) => Box::new(Circle::new(r).unwrap()),
            Self::Square(s) => Box::new(Square::new(s).unwrap()),
            Self::Rectangle(w, h) => Box::new(Rectangle::new(w, h).unwrap()),
            Self::RightTriangle(b, h) => Box::new(RightTriangle::new(b, h).unwrap()),
        }
    }
}

/// Strategy producing an arbitrary valid shape description.
pub fn arb_shape() -> impl Strategy<Value = AnyShape> {
    let dim = 0.0..100.0f64;
    prop_oneof![
        dim.clone().prop_map(AnyShape::Circle),
        dim.clone().prop_map(AnyShape::Square),
        (dim.clone(), dim.clone()).prop_map(|(w, h)| AnyShape::Rectangle(w, h)),
        (dim.clone(), dim).prop_map(|(b, h)| AnyShape::RightTriangle(b, h)),
    ]
}

/// Strategy producing a registry of up to 16 arbitrary shapes.
pub fn arb_registry() -> impl Strategy<Value = Registry> {
    proptest::collection::vec(arb_shape(), 0..16).prop_map(|shapes| {
        let mut registry = Registry::new();
        for shape in shapes {
            registry.add(shape.boxed());
        }
        registry
    })
}
