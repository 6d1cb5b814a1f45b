//! Paint values for fills and strokes.

use std::fmt;

use serde::Deserialize;

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

/// An RGB colour with opacity in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Opacity, written with two decimals.
    pub opacity: f64,
}

impl Default for Rgba {
    fn default() -> Self {
        Self {
            red: 0,
            green: 0,
            blue: 0,
            opacity: 1.0,
        }
    }
}

/// A paint value as written into `fill` and `stroke` attributes.
///
/// Deserialises from a colour name (`"red"`), an `[r, g, b]` triple or an
/// `[r, g, b, opacity]` quadruple.
///
/// # Examples
/// ```
/// use transit_render::svg::{Color, Rgb, Rgba};
///
/// assert_eq!(Color::None.to_string(), "none");
/// assert_eq!(Color::from("white").to_string(), "white");
/// assert_eq!(Color::Rgb(Rgb { red: 255, green: 16, blue: 12 }).to_string(), "rgb(255,16,12)");
/// let translucent = Rgba { red: 255, green: 200, blue: 23, opacity: 0.85 };
/// assert_eq!(Color::Rgba(translucent).to_string(), "rgba(255,200,23,0.85)");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "ColorRepr")]
pub enum Color {
    /// Explicitly no paint.
    #[default]
    None,
    /// A named colour such as `"green"`.
    Named(String),
    /// `rgb(r,g,b)`.
    Rgb(Rgb),
    /// `rgba(r,g,b,a)`.
    Rgba(Rgba),
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

impl From<String> for Color {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Named(name) => f.write_str(name),
            Self::Rgb(Rgb { red, green, blue }) => write!(f, "rgb({red},{green},{blue})"),
            Self::Rgba(Rgba {
                red,
                green,
                blue,
                opacity,
            }) => write!(f, "rgba({red},{green},{blue},{opacity:.2})"),
        }
    }
}

/// Wire shapes accepted for [`Color`].
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl From<ColorRepr> for Color {
    fn from(repr: ColorRepr) -> Self {
        match repr {
            ColorRepr::Named(name) => Self::Named(name),
            ColorRepr::Rgb(red, green, blue) => Self::Rgb(Rgb { red, green, blue }),
            ColorRepr::Rgba(red, green, blue, opacity) => Self::Rgba(Rgba {
                red,
                green,
                blue,
                opacity,
            }),
        }
    }
}
