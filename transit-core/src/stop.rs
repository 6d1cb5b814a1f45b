//! Named stops with geographic positions.

use geo::Coord;

/// Stable handle of a [`Stop`] inside a
/// [`TransportCatalogue`](crate::TransportCatalogue).
///
/// Handles index the catalogue's append-only arena and stay valid for the
/// catalogue's whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub(crate) usize);

impl StopId {
    /// Position of the stop in insertion order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named point where buses halt.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// Two stops compare equal when their coordinates match, regardless of
/// their names.
///
/// # Examples
/// ```
/// use transit_core::Stop;
///
/// let stop = Stop::new("Marushkino", 55.595884, 37.209755);
/// assert_eq!(stop.name, "Marushkino");
/// assert_eq!(stop.latitude(), 55.595884);
/// assert_eq!(stop.location.x, 37.209755);
///
/// assert_eq!(stop, Stop::new("Elsewhere", 55.595884, 37.209755));
/// ```
#[derive(Debug, Clone)]
pub struct Stop {
    /// Unique stop name.
    pub name: String,
    /// Geospatial position.
    pub location: Coord<f64>,
}

impl Stop {
    /// Construct a stop from its name, latitude and longitude in degrees.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            location: Coord {
                x: longitude,
                y: latitude,
            },
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.location.x
    }
}

impl PartialEq for Stop {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location
    }
}
