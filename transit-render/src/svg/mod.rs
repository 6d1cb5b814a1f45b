//! Minimal SVG backend: colours, shapes and document serialisation.
//!
//! Shapes are plain values; build them with struct literals and add them to
//! a [`Document`] in paint order. The serialised form is stable byte for
//! byte, which map snapshot tests rely on.

mod color;
mod document;
mod number;
mod shapes;

use serde::Deserialize;

pub use color::{Color, Rgb, Rgba};
pub use document::Document;
pub use number::Number;
pub use shapes::{Circle, PathProps, Polyline, Shape, StrokeLineCap, StrokeLineJoin, Text};

/// A position or offset on the canvas, in pixels, `y` growing downwards.
///
/// Deserialises from a `[x, y]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Point at `(x, y)`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}
