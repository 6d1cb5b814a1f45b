//! Turn a catalogue into a layered SVG map.
//!
//! Rendering runs four passes, each appending on top of the previous ones:
//! route lines, route labels, stop markers and stop labels. Routes and
//! stops are visited in name order so the output is deterministic whatever
//! the insertion order was.

use log::debug;
use transit_core::{Bus, Stop, TransportCatalogue};

use crate::svg::{
    Circle, Color, Document, PathProps, Point, Polyline, StrokeLineCap, StrokeLineJoin, Text,
};
use crate::{RenderError, RenderSettings, SphereProjector};

const LABEL_FONT_FAMILY: &str = "Verdana";
const ROUTE_LABEL_WEIGHT: &str = "bold";

/// Draws catalogue maps with a fixed style.
///
/// # Examples
/// ```
/// use transit_core::TransportCatalogue;
/// use transit_render::{MapRenderer, RenderSettings};
/// use transit_render::svg::Color;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut catalogue = TransportCatalogue::new();
/// catalogue.add_stop("A", 0.0, 0.0)?;
/// catalogue.add_stop("B", 0.0, 1.0)?;
/// catalogue.add_route("1", &["A", "B"], false)?;
///
/// let renderer = MapRenderer::new(RenderSettings {
///     width: 200.0,
///     height: 100.0,
///     padding: 10.0,
///     color_palette: vec![Color::from("green")],
///     ..RenderSettings::default()
/// });
/// let map = renderer.render(&catalogue)?;
///
/// // One line, two label pairs, two markers, two label pairs.
/// assert_eq!(map.len(), 1 + 4 + 2 + 4);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MapRenderer {
    settings: RenderSettings,
}

/// A route that is drawn, paired with its palette colour.
struct ColoredRoute<'a> {
    bus: &'a Bus,
    color: &'a Color,
}

impl MapRenderer {
    /// Renderer drawing with `settings`.
    #[must_use]
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    /// Style this renderer draws with.
    #[must_use]
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Check that `catalogue` can be drawn with these settings.
    ///
    /// # Errors
    /// Returns [`RenderError::EmptyPalette`] when the palette is empty and
    /// at least one route has stops.
    pub fn validate(&self, catalogue: &TransportCatalogue) -> Result<(), RenderError> {
        let has_drawable_route = catalogue.all_buses().iter().any(|bus| !bus.stops.is_empty());
        if has_drawable_route && self.settings.color_palette.is_empty() {
            return Err(RenderError::EmptyPalette);
        }
        Ok(())
    }

    /// Render the whole catalogue.
    ///
    /// Stops no route serves are neither drawn nor taken into account when
    /// fitting the map to the canvas.
    ///
    /// # Errors
    /// Returns [`RenderError::EmptyPalette`] before drawing anything when a
    /// route needs a colour and the palette is empty.
    pub fn render(&self, catalogue: &TransportCatalogue) -> Result<Document, RenderError> {
        let routes = self.colored_routes(catalogue)?;

        let mut stops: Vec<&Stop> = catalogue.served_stops().collect();
        stops.sort_by(|a, b| a.name.cmp(&b.name));

        let projector = SphereProjector::new(
            stops.iter().map(|stop| stop.location),
            self.settings.width,
            self.settings.height,
            self.settings.padding,
        );

        let mut document = Document::new();
        document.extend(self.route_lines(catalogue, &routes, &projector));
        document.extend(self.route_labels(catalogue, &routes, &projector));
        document.extend(self.stop_markers(&stops, &projector));
        document.extend(self.stop_labels(&stops, &projector));
        debug!(
            "rendered {} routes and {} stops into {} shapes",
            routes.len(),
            stops.len(),
            document.len()
        );
        Ok(document)
    }

    /// Routes with at least one stop in name order, each with the palette
    /// colour of its ordinal.
    fn colored_routes<'a>(
        &'a self,
        catalogue: &'a TransportCatalogue,
    ) -> Result<Vec<ColoredRoute<'a>>, RenderError> {
        self.validate(catalogue)?;
        let palette = &self.settings.color_palette;

        let mut buses: Vec<&Bus> = catalogue
            .all_buses()
            .iter()
            .filter(|bus| !bus.stops.is_empty())
            .collect();
        buses.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(buses
            .into_iter()
            .zip(palette.iter().cycle())
            .map(|(bus, color)| ColoredRoute { bus, color })
            .collect())
    }

    fn route_lines(
        &self,
        catalogue: &TransportCatalogue,
        routes: &[ColoredRoute<'_>],
        projector: &SphereProjector,
    ) -> Vec<Polyline> {
        routes
            .iter()
            .map(|route| Polyline {
                points: route
                    .bus
                    .logical_path()
                    .map(|id| projector.project(catalogue.stop(id).location))
                    .collect(),
                props: PathProps {
                    fill: Some(Color::None),
                    stroke: Some(route.color.clone()),
                    stroke_width: Some(self.settings.line_width),
                    stroke_linecap: Some(StrokeLineCap::Round),
                    stroke_linejoin: Some(StrokeLineJoin::Round),
                },
            })
            .collect()
    }

    fn route_labels(
        &self,
        catalogue: &TransportCatalogue,
        routes: &[ColoredRoute<'_>],
        projector: &SphereProjector,
    ) -> Vec<Text> {
        let mut labels = Vec::new();
        for route in routes {
            let (Some(first), Some(last)) = (route.bus.first_stop(), route.bus.last_stop()) else {
                continue;
            };
            let mut anchors = vec![first];
            if !(route.bus.is_roundtrip && first == last) {
                anchors.push(last);
            }
            for anchor in anchors {
                labels.extend(self.route_label(
                    &route.bus.name,
                    projector.project(catalogue.stop(anchor).location),
                    route.color,
                ));
            }
        }
        labels
    }

    fn stop_markers(&self, stops: &[&Stop], projector: &SphereProjector) -> Vec<Circle> {
        stops
            .iter()
            .map(|stop| Circle {
                center: projector.project(stop.location),
                radius: self.settings.stop_radius,
                props: PathProps::filled(Color::from("white")),
            })
            .collect()
    }

    fn stop_labels(&self, stops: &[&Stop], projector: &SphereProjector) -> Vec<Text> {
        stops
            .iter()
            .flat_map(|stop| self.stop_label(stop, projector.project(stop.location)))
            .collect()
    }

    fn route_label(&self, name: &str, position: Point, color: &Color) -> [Text; 2] {
        let text = Text {
            position,
            offset: self.settings.bus_label_offset,
            font_size: self.settings.bus_label_font_size,
            font_family: Some(LABEL_FONT_FAMILY.to_owned()),
            font_weight: Some(ROUTE_LABEL_WEIGHT.to_owned()),
            data: name.to_owned(),
            props: PathProps::default(),
        };
        self.with_underlay(text, color.clone())
    }

    fn stop_label(&self, stop: &Stop, position: Point) -> [Text; 2] {
        let text = Text {
            position,
            offset: self.settings.stop_label_offset,
            font_size: self.settings.stop_label_font_size,
            font_family: Some(LABEL_FONT_FAMILY.to_owned()),
            font_weight: None,
            data: stop.name.clone(),
            props: PathProps::default(),
        };
        self.with_underlay(text, Color::from("black"))
    }

    /// Underlay copy of `text` followed by the foreground in `fill`.
    fn with_underlay(&self, text: Text, fill: Color) -> [Text; 2] {
        let underlay = Text {
            props: PathProps {
                fill: Some(self.settings.underlayer_color.clone()),
                stroke: Some(self.settings.underlayer_color.clone()),
                stroke_width: Some(self.settings.underlayer_width),
                stroke_linecap: Some(StrokeLineCap::Round),
                stroke_linejoin: Some(StrokeLineJoin::Round),
            },
            ..text.clone()
        };
        let foreground = Text {
            props: PathProps::filled(fill),
            ..text
        };
        [underlay, foreground]
    }
}
