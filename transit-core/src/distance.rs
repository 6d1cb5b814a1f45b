//! Great-circle distance between geographic coordinates.
//!
//! Coordinates use WGS84 degrees with `x = longitude` and `y = latitude`.
//! The Earth is approximated by a sphere of radius [`EARTH_RADIUS_M`].

use geo::Coord;

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

#[expect(
    clippy::approx_constant,
    reason = "reference outputs were produced with this truncated value of pi"
)]
const DEGREES_TO_RADIANS: f64 = 3.141_592_653_5 / 180.0;

/// Return the distance in metres between `from` and `to`.
///
/// Uses the spherical law of cosines. The longitude difference is taken as
/// the plain absolute difference, so two longitudes either side of the
/// antimeridian are treated as far apart rather than adjacent.
///
/// The function is total: identical points yield exactly `0.0` and the
/// cosine argument is clamped to `[-1, 1]`, so polar inputs never yield NaN.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use transit_core::compute_distance;
///
/// let a = Coord { x: 37.6, y: 55.7 };
/// let b = Coord { x: 37.7, y: 55.8 };
///
/// assert_eq!(compute_distance(a, a), 0.0);
/// assert_eq!(compute_distance(a, b), compute_distance(b, a));
/// ```
#[must_use]
pub fn compute_distance(from: Coord<f64>, to: Coord<f64>) -> f64 {
    if from == to {
        return 0.0;
    }
    let from_lat = from.y * DEGREES_TO_RADIANS;
    let to_lat = to.y * DEGREES_TO_RADIANS;
    let lng_delta = (from.x - to.x).abs() * DEGREES_TO_RADIANS;
    let cosine = from_lat.sin() * to_lat.sin() + from_lat.cos() * to_lat.cos() * lng_delta.cos();
    cosine.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_M
}
