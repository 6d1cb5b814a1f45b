//! Drawable primitives and their attribute serialisation.

use std::fmt;

use super::{Color, Number, Point};

/// Shape used at the ends of open stroked paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineCap {
    /// `butt`.
    Butt,
    /// `round`.
    Round,
    /// `square`.
    Square,
}

impl StrokeLineCap {
    /// Attribute value for `stroke-linecap`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

impl fmt::Display for StrokeLineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape used at the corners of stroked paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineJoin {
    /// `arcs`.
    Arcs,
    /// `bevel`.
    Bevel,
    /// `miter`.
    Miter,
    /// `miter-clip`.
    MiterClip,
    /// `round`.
    Round,
}

impl StrokeLineJoin {
    /// Attribute value for `stroke-linejoin`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arcs => "arcs",
            Self::Bevel => "bevel",
            Self::Miter => "miter",
            Self::MiterClip => "miter-clip",
            Self::Round => "round",
        }
    }
}

impl fmt::Display for StrokeLineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paint and stroke attributes shared by every shape.
///
/// Unset attributes are omitted. Set attributes are written in a fixed
/// order: `fill`, `stroke`, `stroke-width`, `stroke-linecap`,
/// `stroke-linejoin`.
///
/// Where the block lands depends on the element. [`Circle`] and
/// [`Polyline`] write it after their geometry, while [`Text`] writes it
/// before `x`. Downstream consumers compare map documents byte for byte
/// against this layout, so the two orders must stay as they are.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathProps {
    /// Fill paint.
    pub fill: Option<Color>,
    /// Stroke paint.
    pub stroke: Option<Color>,
    /// Stroke width in pixels.
    pub stroke_width: Option<f64>,
    /// End caps of open paths.
    pub stroke_linecap: Option<StrokeLineCap>,
    /// Corner joins.
    pub stroke_linejoin: Option<StrokeLineJoin>,
}

impl PathProps {
    /// Properties with only a fill.
    #[must_use]
    pub fn filled(fill: Color) -> Self {
        Self {
            fill: Some(fill),
            ..Self::default()
        }
    }
}

impl fmt::Display for PathProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(fill) = &self.fill {
            write!(f, " fill=\"{fill}\"")?;
        }
        if let Some(stroke) = &self.stroke {
            write!(f, " stroke=\"{stroke}\"")?;
        }
        if let Some(width) = self.stroke_width {
            write!(f, " stroke-width=\"{}\"", Number(width))?;
        }
        if let Some(cap) = self.stroke_linecap {
            write!(f, " stroke-linecap=\"{cap}\"")?;
        }
        if let Some(join) = self.stroke_linejoin {
            write!(f, " stroke-linejoin=\"{join}\"")?;
        }
        Ok(())
    }
}

/// `<circle>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Centre on the canvas.
    pub center: Point,
    /// Radius in pixels.
    pub radius: f64,
    /// Paint, written after the geometry.
    pub props: PathProps,
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}/>",
            Number(self.center.x),
            Number(self.center.y),
            Number(self.radius),
            self.props
        )
    }
}

/// Open `<polyline>` element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    /// Vertices in drawing order.
    pub points: Vec<Point>,
    /// Paint, written after the points.
    pub props: PathProps,
}

impl fmt::Display for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<polyline points=\"")?;
        for (index, point) in self.points.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{},{}", Number(point.x), Number(point.y))?;
        }
        write!(f, "\"{}/>", self.props)
    }
}

/// `<text>` element anchored at `position` and shifted by `offset`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Text {
    /// Anchor on the canvas.
    pub position: Point,
    /// Shift applied to the anchor (`dx`, `dy`).
    pub offset: Point,
    /// Font size in pixels.
    pub font_size: u32,
    /// Optional `font-family`.
    pub font_family: Option<String>,
    /// Optional `font-weight`.
    pub font_weight: Option<String>,
    /// Text content, escaped on output.
    pub data: String,
    /// Paint, written before the geometry.
    pub props: PathProps,
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<text{} x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
            self.props,
            Number(self.position.x),
            Number(self.position.y),
            Number(self.offset.x),
            Number(self.offset.y),
            self.font_size
        )?;
        if let Some(family) = &self.font_family {
            write!(f, " font-family=\"{family}\"")?;
        }
        if let Some(weight) = &self.font_weight {
            write!(f, " font-weight=\"{weight}\"")?;
        }
        f.write_str(">")?;
        write_escaped(f, &self.data)?;
        f.write_str("</text>")
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, data: &str) -> fmt::Result {
    for ch in data.chars() {
        match ch {
            '"' => f.write_str("&quot;")?,
            '\'' => f.write_str("&apos;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '&' => f.write_str("&amp;")?,
            other => write!(f, "{other}")?,
        }
    }
    Ok(())
}

/// Any primitive a [`Document`](super::Document) can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A `<circle>`.
    Circle(Circle),
    /// A `<polyline>`.
    Polyline(Polyline),
    /// A `<text>`.
    Text(Text),
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Polyline> for Shape {
    fn from(polyline: Polyline) -> Self {
        Self::Polyline(polyline)
    }
}

impl From<Text> for Shape {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle(circle) => fmt::Display::fmt(circle, f),
            Self::Polyline(polyline) => fmt::Display::fmt(polyline, f),
            Self::Text(text) => fmt::Display::fmt(text, f),
        }
    }
}
