//! Validated geometric shape variants
//!
//! Each shape is an independent implementor of [`Measurable`] whose measure
//! is its area. Dimensions are validated once at construction and immutable
//! afterwards, so `measure` can never fail or return a non-finite value.
//!
//! [`Rectangle`] and [`Square`] are deliberately unrelated types: a square is
//! not a constrained rectangle here, it carries its own state and its own
//! formula. Sharing only the minimal contract avoids the classic trap where a
//! subtype's mutator silently breaks an invariant the supertype promised.

use crate::errors::GaugeError;
use crate::measure::Measurable;

/// Reject dimensions that would make an area undefined or negative.
fn check_dimension(name: &str, value: f64) -> Result<(), GaugeError> {
    if !value.is_finite() {
        return Err(GaugeError::invalid(format!(
            "{name} must be finite, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(GaugeError::invalid(format!(
            "{name} must be non-negative, got {value}"
        )));
    }
    Ok(())
}

/// A circle, measured by its area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Create a circle, rejecting negative or non-finite radii.
    pub fn new(radius: f64) -> Result<Self, GaugeError> {
        check_dimension("radius", radius)?;
        Ok(Self { radius })
    }

    /// The validated radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Measurable for Circle {
    fn measure(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

/// A square, measured by its area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    /// Create a square, rejecting negative or non-finite side lengths.
    pub fn new(side: f64) -> Result<Self, GaugeError> {
        check_dimension("side", side)?;
        Ok(Self { side })
    }

    /// The validated side length.
    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Measurable for Square {
    fn measure(&self) -> f64 {
        self.side * self.side
    }
}

/// An axis-aligned rectangle, measured by its area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Create a rectangle, rejecting negative or non-finite dimensions.
    pub fn new(width: f64, height: f64) -> Result<Self, GaugeError> {
        check_dimension("width", width)?;
        check_dimension("height", height)?;
        Ok(Self { width, height })
    }

    /// The validated width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// The validated height.
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Measurable for Rectangle {
    fn measure(&self) -> f64 {
        self.width * self.height
    }
}

/// A right triangle, measured by its area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RightTriangle {
    base: f64,
    height: f64,
}

impl RightTriangle {
    /// Create a right triangle, rejecting negative or non-finite dimensions.
    pub fn new(base: f64, height: f64) -> Result<Self, GaugeError> {
        check_dimension("base", base)?;
        check_dimension("height", height)?;
        Ok(Self { base, height })
    }

    /// The validated base length.
    pub fn base(&self) -> f64 {
        self.base
    }

    /// The validated height.
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Measurable for RightTriangle {
    fn measure(&self) -> f64 {
        0.5 * self.base * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_area() {
        let circle = Circle::new(5.0).unwrap();
        let expected = std::f64::consts::PI * 25.0;
        assert!((circle.measure() - expected).abs() < 1e-12);
    }

    #[test]
    fn square_area() {
        let square = Square::new(10.0).unwrap();
        assert_eq!(square.measure(), 100.0);
    }

    #[test]
    fn rectangle_area() {
        let rect = Rectangle::new(3.0, 4.0).unwrap();
        assert_eq!(rect.measure(), 12.0);
    }

    #[test]
    fn right_triangle_area() {
        let tri = RightTriangle::new(6.0, 4.0).unwrap();
        assert_eq!(tri.measure(), 12.0);
    }

    #[test]
    fn zero_dimensions_are_allowed() {
        assert_eq!(Circle::new(0.0).unwrap().measure(), 0.0);
        assert_eq!(Rectangle::new(0.0, 7.0).unwrap().measure(), 0.0);
    }

    #[test]
    fn negative_dimension_is_rejected_not_clamped() {
        let err = Circle::new(-1.0).unwrap_err();
        assert!(matches!(err, GaugeError::Invalid { .. }));

        assert!(Square::new(-0.5).is_err());
        assert!(Rectangle::new(2.0, -2.0).is_err());
        assert!(RightTriangle::new(-3.0, 1.0).is_err());
    }

    #[test]
    fn non_finite_dimension_is_rejected() {
        assert!(Circle::new(f64::NAN).is_err());
        assert!(Square::new(f64::INFINITY).is_err());
        assert!(Rectangle::new(f64::NEG_INFINITY, 1.0).is_err());
    }

    proptest::proptest! {
        /// Any validly constructed shape measures finite and non-negative.
        #[test]
        fn valid_shapes_measure_non_negative(
            r in 0.0..1e6f64,
            w in 0.0..1e6f64,
            h in 0.0..1e6f64,
        ) {
            for shape in [
                Box::new(Circle::new(r).unwrap()) as Box<dyn Measurable>,
                Box::new(Square::new(w).unwrap()),
                Box::new(Rectangle::new(w, h).unwrap()),
                Box::new(RightTriangle::new(w, h).unwrap()),
            ] {
                let measure = shape.measure();
                proptest::prop_assert!(measure.is_finite());
                proptest::prop_assert!(measure >= 0.0);
            }
        }

        /// Negative dimensions are always rejected, never clamped to zero.
        #[test]
        fn negative_dimensions_always_rejected(d in -1e6..-f64::MIN_POSITIVE) {
            proptest::prop_assert!(Circle::new(d).is_err());
            proptest::prop_assert!(Square::new(d).is_err());
            proptest::prop_assert!(Rectangle::new(d, 1.0).is_err());
            proptest::prop_assert!(RightTriangle::new(1.0, d).is_err());
        }
    }
}
