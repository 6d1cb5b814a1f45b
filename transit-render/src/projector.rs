//! Fit geographic coordinates onto a fixed-size canvas.
//!
//! The projector zooms to fit: both axes share one scale factor, the
//! smaller of the two that would make each axis fill the canvas between the
//! paddings. North is up, so latitude grows towards smaller `y`.

use geo::{BoundingRect, Coord, MultiPoint};

use crate::svg::Point;

/// Coordinate ranges narrower than this are treated as a single value.
const EPSILON: f64 = 1e-6;

/// Linear map from WGS84 degrees to canvas pixels.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use transit_render::SphereProjector;
/// use transit_render::svg::Point;
///
/// let coords = [Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 0.5 }];
/// let projector = SphereProjector::new(coords, 200.0, 100.0, 10.0);
///
/// assert_eq!(projector.project(Coord { x: 0.0, y: 0.0 }), Point::new(10.0, 90.0));
/// assert_eq!(projector.project(Coord { x: 1.0, y: 0.5 }), Point::new(170.0, 10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereProjector {
    padding: f64,
    min_lng: f64,
    max_lat: f64,
    zoom: f64,
}

impl SphereProjector {
    /// Build a projector that fits `coords` into `width x height` with
    /// `padding` pixels on every side.
    ///
    /// An axis whose coordinate range is degenerate does not constrain the
    /// zoom. When both axes are degenerate, or `coords` is empty, the zoom
    /// is zero and every coordinate lands on `(padding, padding)`.
    pub fn new<I>(coords: I, width: f64, height: f64, padding: f64) -> Self
    where
        I: IntoIterator<Item = Coord<f64>>,
    {
        let points: MultiPoint<f64> = coords.into_iter().collect();
        let Some(bounds) = points.bounding_rect() else {
            return Self {
                padding,
                min_lng: 0.0,
                max_lat: 0.0,
                zoom: 0.0,
            };
        };

        let width_zoom = axis_zoom(width, padding, bounds.width());
        let height_zoom = axis_zoom(height, padding, bounds.height());
        let zoom = match (width_zoom, height_zoom) {
            (Some(horizontal), Some(vertical)) => horizontal.min(vertical),
            (Some(only), None) | (None, Some(only)) => only,
            (None, None) => 0.0,
        };

        Self {
            padding,
            min_lng: bounds.min().x,
            max_lat: bounds.max().y,
            zoom,
        }
    }

    /// Canvas position of a geographic coordinate.
    #[must_use]
    pub fn project(&self, coord: Coord<f64>) -> Point {
        Point::new(
            (coord.x - self.min_lng) * self.zoom + self.padding,
            (self.max_lat - coord.y) * self.zoom + self.padding,
        )
    }

    /// Pixels per degree.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }
}

fn axis_zoom(extent: f64, padding: f64, range: f64) -> Option<f64> {
    (range.abs() >= EPSILON).then(|| (extent - 2.0 * padding) / range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn coord(lat: f64, lng: f64) -> Coord<f64> {
        Coord { x: lng, y: lat }
    }

    #[rstest]
    fn uses_the_tighter_axis() {
        // Width allows 180 px per degree, height only 160.
        let projector = SphereProjector::new(
            [coord(0.0, 0.0), coord(0.0, 1.0), coord(0.5, 0.5)],
            200.0,
            100.0,
            10.0,
        );
        assert_eq!(projector.zoom(), 160.0);
        assert_eq!(projector.project(coord(0.5, 0.5)), Point::new(90.0, 10.0));
        assert_eq!(projector.project(coord(0.0, 1.0)), Point::new(170.0, 90.0));
    }

    #[rstest]
    fn flat_latitude_uses_width_only() {
        let projector = SphereProjector::new([coord(0.0, 0.0), coord(0.0, 1.0)], 200.0, 100.0, 10.0);
        assert_eq!(projector.zoom(), 180.0);
        assert_eq!(projector.project(coord(0.0, 0.0)), Point::new(10.0, 10.0));
        assert_eq!(projector.project(coord(0.0, 1.0)), Point::new(190.0, 10.0));
    }

    #[rstest]
    fn flat_longitude_uses_height_only() {
        let projector = SphereProjector::new([coord(0.0, 3.0), coord(2.0, 3.0)], 200.0, 100.0, 10.0);
        assert_eq!(projector.zoom(), 40.0);
        assert_eq!(projector.project(coord(2.0, 3.0)), Point::new(10.0, 10.0));
        assert_eq!(projector.project(coord(0.0, 3.0)), Point::new(10.0, 90.0));
    }

    #[rstest]
    fn single_point_collapses_to_padding() {
        let projector = SphereProjector::new([coord(55.0, 37.0)], 600.0, 400.0, 50.0);
        assert_eq!(projector.zoom(), 0.0);
        assert_eq!(projector.project(coord(55.0, 37.0)), Point::new(50.0, 50.0));
    }

    #[rstest]
    fn empty_input_is_defined() {
        let projector = SphereProjector::new(std::iter::empty(), 600.0, 400.0, 50.0);
        assert_eq!(projector.zoom(), 0.0);
        assert_eq!(projector.project(coord(1.0, 1.0)), Point::new(50.0, 50.0));
    }
}
