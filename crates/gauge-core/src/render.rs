//! Report rendering contracts and built-in renderers
//!
//! Renderers consume only the [`AggregateResult`] value, never registry
//! internals, and each one is a stateless pure function of its input. New
//! renderers are added without touching the aggregator or each other;
//! computation and presentation change for different reasons and live apart.

use crate::aggregate::AggregateResult;

/// Capability to render an [`AggregateResult`] as text.
///
/// The output format is identified by the implementor's type, not by a
/// parameter. Implementations must be pure: the same result always renders to
/// the same string.
pub trait RenderReport: Send + Sync {
    /// Render the result in this renderer's format.
    fn render(&self, result: &AggregateResult) -> String;
}

/// Human-readable single-line renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    /// Create a text renderer.
    pub fn new() -> Self {
        Self
    }
}

impl RenderReport for TextRenderer {
    fn render(&self, result: &AggregateResult) -> String {
        format!("total {:.4} over {} item(s)", result.total, result.count)
    }
}

/// Machine-readable JSON renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    /// Create a JSON renderer.
    pub fn new() -> Self {
        Self
    }
}

impl RenderReport for JsonRenderer {
    fn render(&self, result: &AggregateResult) -> String {
        // AggregateResult holds only finite numbers, so serialization cannot
        // fail; fall back to an empty object rather than panicking in a
        // rendering path.
        serde_json::to_string(result).unwrap_or_else(|_| "{}".to_string())
    }
}
