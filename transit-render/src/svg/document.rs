//! Ordered container of shapes serialised as an SVG 1.1 document.

use std::fmt;

use super::Shape;

/// Shapes in paint order: later shapes are drawn over earlier ones.
///
/// # Examples
/// ```
/// use transit_render::svg::{Circle, Color, Document, PathProps, Point};
///
/// let mut doc = Document::new();
/// doc.add(Circle {
///     center: Point::new(1.0, 2.0),
///     radius: 3.0,
///     props: PathProps::filled(Color::from("white")),
/// });
///
/// assert_eq!(
///     doc.to_string(),
///     "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n\
///      <svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n  \
///      <circle cx=\"1\" cy=\"2\" r=\"3\" fill=\"white\"/>\n\
///      </svg>"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    shapes: Vec<Shape>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top of those already present.
    pub fn add(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Shapes in paint order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the document holds no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl<S: Into<Shape>> Extend<S> for Document {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.shapes.extend(iter.into_iter().map(Into::into));
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n")?;
        f.write_str("<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n")?;
        for shape in &self.shapes {
            writeln!(f, "  {shape}")?;
        }
        f.write_str("</svg>")
    }
}
