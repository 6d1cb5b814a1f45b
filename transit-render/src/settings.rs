//! Style configuration for map rendering.

use serde::Deserialize;

use crate::svg::{Color, Point};

/// Canvas geometry and styling shared by every rendering pass.
///
/// Deserialises from the `render_settings` object of an input document.
/// Offsets are `[dx, dy]` pairs and colours accept every [`Color`] wire
/// shape.
///
/// # Examples
/// ```
/// use transit_render::RenderSettings;
///
/// let settings: RenderSettings = serde_json::from_str(r#"{
///     "width": 600, "height": 400, "padding": 50,
///     "line_width": 14, "stop_radius": 5,
///     "bus_label_font_size": 20, "bus_label_offset": [7, 15],
///     "stop_label_font_size": 20, "stop_label_offset": [7, -3],
///     "underlayer_color": [255, 255, 255, 0.85], "underlayer_width": 3,
///     "color_palette": ["green", [255, 160, 0], "red"]
/// }"#).expect("valid settings");
///
/// assert_eq!(settings.color_palette.len(), 3);
/// assert_eq!(settings.stop_label_offset.y, -3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RenderSettings {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Margin kept free on every side of the canvas.
    pub padding: f64,
    /// Stroke width of route lines.
    pub line_width: f64,
    /// Radius of stop markers.
    pub stop_radius: f64,
    /// Font size of route-name labels.
    pub bus_label_font_size: u32,
    /// Shift of route-name labels from their terminal stop.
    pub bus_label_offset: Point,
    /// Font size of stop-name labels.
    pub stop_label_font_size: u32,
    /// Shift of stop-name labels from their stop.
    pub stop_label_offset: Point,
    /// Paint behind labels that keeps them legible over route lines.
    pub underlayer_color: Color,
    /// Stroke width of the label underlay.
    pub underlayer_width: f64,
    /// Route colours, assigned cyclically in route-name order.
    pub color_palette: Vec<Color>,
}
