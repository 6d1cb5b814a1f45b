//! Bus routes and the metrics derived from their paths.
//!
//! A route is either a round trip, whose stored path already describes the
//! full loop, or a there-and-back line, whose stored path is driven forward
//! and then in reverse from the last stop.

use std::collections::HashSet;

use crate::StopId;

/// Stable handle of a [`Bus`] inside a
/// [`TransportCatalogue`](crate::TransportCatalogue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BusId(pub(crate) usize);

impl BusId {
    /// Position of the bus in insertion order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Metrics computed once when a route enters the catalogue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteStats {
    /// Stops visited along the logical path, counting repeats.
    pub stop_count: usize,
    /// Distinct stops named by the path.
    pub unique_stop_count: usize,
    /// Road length in metres, honouring distance overrides.
    pub route_length: f64,
    /// Great-circle length in metres over the same legs.
    pub straight_length: f64,
    /// `route_length / straight_length`, or [`f64::INFINITY`] when the
    /// straight length is zero.
    pub curvature: f64,
}

impl RouteStats {
    /// Measure a path given two per-leg distance functions.
    ///
    /// `straight` returns the great-circle length of a directed leg and
    /// `road` the override-aware length.
    ///
    /// # Examples
    /// ```
    /// use transit_core::RouteStats;
    ///
    /// let stats = RouteStats::measure(&[], true, |_, _| 1.0, |_, _| 1.0);
    /// assert_eq!(stats.stop_count, 0);
    /// assert!(stats.curvature.is_infinite());
    /// ```
    pub fn measure(
        path: &[StopId],
        is_roundtrip: bool,
        straight: impl Fn(StopId, StopId) -> f64,
        road: impl Fn(StopId, StopId) -> f64,
    ) -> Self {
        let stop_count = if is_roundtrip {
            path.len()
        } else {
            (2 * path.len()).saturating_sub(1)
        };
        let unique_stop_count = path.iter().collect::<HashSet<_>>().len();

        let (straight_length, route_length) = legs(path, is_roundtrip).fold(
            (0.0, 0.0),
            |(straight_sum, road_sum), (from, to)| {
                (straight_sum + straight(from, to), road_sum + road(from, to))
            },
        );
        let curvature = if straight_length == 0.0 {
            f64::INFINITY
        } else {
            route_length / straight_length
        };

        Self {
            stop_count,
            unique_stop_count,
            route_length,
            straight_length,
            curvature,
        }
    }
}

/// A named bus route over stops of the same catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct Bus {
    /// Unique route name.
    pub name: String,
    /// Stops in the order given at insertion.
    pub stops: Vec<StopId>,
    /// Whether `stops` already describes the full loop.
    pub is_roundtrip: bool,
    /// Metrics captured at insertion time.
    pub stats: RouteStats,
}

impl Bus {
    /// Directed legs of the logical path: forward over `stops`, then back
    /// again for a there-and-back route.
    pub fn legs(&self) -> impl Iterator<Item = (StopId, StopId)> + '_ {
        legs(&self.stops, self.is_roundtrip)
    }

    /// Stops of the logical path in driving order, the turnaround stop
    /// appearing once.
    pub fn logical_path(&self) -> impl Iterator<Item = StopId> + '_ {
        let return_trip = if self.is_roundtrip { 0 } else { self.stops.len() };
        self.stops
            .iter()
            .chain(self.stops.iter().rev().skip(1).take(return_trip))
            .copied()
    }

    /// First stop of the stored path.
    #[must_use]
    pub fn first_stop(&self) -> Option<StopId> {
        self.stops.first().copied()
    }

    /// Last stop of the stored path.
    #[must_use]
    pub fn last_stop(&self) -> Option<StopId> {
        self.stops.last().copied()
    }
}

fn legs(path: &[StopId], is_roundtrip: bool) -> impl Iterator<Item = (StopId, StopId)> + '_ {
    let return_legs = if is_roundtrip { 0 } else { path.len() };
    let forward = path.windows(2).map(|pair| (pair[0], pair[1]));
    let backward = path
        .windows(2)
        .rev()
        .map(|pair| (pair[1], pair[0]))
        .take(return_legs);
    forward.chain(backward)
}
