//! In-memory store of stops, bus routes and road distances.
//!
//! The catalogue owns every [`Stop`] and [`Bus`] in append-only arenas and
//! hands out [`StopId`] and [`BusId`] handles into them. Lookup indices are
//! derived on insertion and never mutated by callers.
//!
//! Entities are loaded in passes: all stops, then road distances, then
//! routes. Route metrics are measured once at insertion, so a road distance
//! added after a route that uses it does not change that route's metrics.

mod error;

use std::collections::{BTreeSet, HashMap};

use log::debug;

use crate::{Bus, BusId, RouteStats, Stop, StopId, compute_distance};

pub use error::CatalogueError;

/// Queryable model of a bus network.
///
/// # Examples
/// ```
/// use transit_core::TransportCatalogue;
///
/// # fn main() -> Result<(), transit_core::CatalogueError> {
/// let mut catalogue = TransportCatalogue::new();
/// catalogue.add_stop("A", 0.0, 0.0)?;
/// catalogue.add_stop("B", 0.0, 1.0)?;
/// catalogue.add_route("R", &["A", "B"], false)?;
///
/// let bus = catalogue.find_route("R").expect("route was added");
/// assert_eq!(bus.stats.stop_count, 3);
/// assert_eq!(bus.stats.unique_stop_count, 2);
///
/// let through_a: Vec<_> = catalogue.buses_through_stop("A").into_iter().flatten().collect();
/// assert_eq!(through_a, ["R"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stops_by_name: HashMap<String, StopId>,
    buses_by_name: HashMap<String, BusId>,
    /// Bus names serving each stop, indexed by `StopId`.
    buses_through: Vec<BTreeSet<String>>,
    road_distances: HashMap<(StopId, StopId), u32>,
}

impl TransportCatalogue {
    /// Create an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stop.
    ///
    /// # Errors
    /// Returns [`CatalogueError::DuplicateStop`] when the name is taken.
    pub fn add_stop(
        &mut self,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<StopId, CatalogueError> {
        let name = name.into();
        if self.stops_by_name.contains_key(&name) {
            return Err(CatalogueError::DuplicateStop { name });
        }
        let id = StopId(self.stops.len());
        debug!("adding stop '{name}' at ({latitude}, {longitude})");
        self.stops_by_name.insert(name.clone(), id);
        self.stops.push(Stop::new(name, latitude, longitude));
        self.buses_through.push(BTreeSet::new());
        Ok(id)
    }

    /// Record the road distance in metres from `from` to `to`.
    ///
    /// The distance is directional. Recording the same pair again replaces
    /// the earlier value.
    ///
    /// # Errors
    /// Returns [`CatalogueError::UnknownStop`] when either name is not a
    /// registered stop; nothing is recorded in that case.
    pub fn add_distance(&mut self, from: &str, to: &str, metres: u32) -> Result<(), CatalogueError> {
        let from_id = self.resolve(from)?;
        let to_id = self.resolve(to)?;
        debug!("road distance {from} -> {to}: {metres} m");
        self.road_distances.insert((from_id, to_id), metres);
        Ok(())
    }

    /// Register a bus route over already registered stops and measure it.
    ///
    /// # Errors
    /// Returns [`CatalogueError::DuplicateBus`] when the name is taken and
    /// [`CatalogueError::UnresolvedRouteStop`] when the path names an unknown
    /// stop. Either way the catalogue is left unchanged.
    pub fn add_route<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        stops: &[S],
        is_roundtrip: bool,
    ) -> Result<BusId, CatalogueError> {
        let name = name.into();
        if self.buses_by_name.contains_key(&name) {
            return Err(CatalogueError::DuplicateBus { name });
        }
        let path = stops
            .iter()
            .map(|stop| {
                let stop = stop.as_ref();
                self.find_stop_id(stop)
                    .ok_or_else(|| CatalogueError::UnresolvedRouteStop {
                        bus: name.clone(),
                        stop: stop.to_owned(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let stats = RouteStats::measure(
            &path,
            is_roundtrip,
            |from, to| self.great_circle(from, to),
            |from, to| self.distance_between(from, to),
        );
        debug!(
            "adding bus '{name}': {} stops, {} unique, {:.1} m",
            stats.stop_count, stats.unique_stop_count, stats.route_length
        );

        let id = BusId(self.buses.len());
        for stop in &path {
            self.buses_through[stop.0].insert(name.clone());
        }
        self.buses_by_name.insert(name.clone(), id);
        self.buses.push(Bus {
            name,
            stops: path,
            is_roundtrip,
            stats,
        });
        Ok(id)
    }

    /// Road length in metres of the directed leg `from -> to`.
    ///
    /// Prefers the distance recorded for `(from, to)`, then the one recorded
    /// for `(to, from)`, then falls back to the great-circle distance.
    #[must_use]
    pub fn distance_between(&self, from: StopId, to: StopId) -> f64 {
        self.road_distances
            .get(&(from, to))
            .or_else(|| self.road_distances.get(&(to, from)))
            .map_or_else(|| self.great_circle(from, to), |metres| f64::from(*metres))
    }

    fn great_circle(&self, from: StopId, to: StopId) -> f64 {
        compute_distance(self.stop(from).location, self.stop(to).location)
    }

    fn resolve(&self, name: &str) -> Result<StopId, CatalogueError> {
        self.find_stop_id(name)
            .ok_or_else(|| CatalogueError::UnknownStop {
                name: name.to_owned(),
            })
    }

    /// Look a stop up by name.
    #[must_use]
    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.find_stop_id(name).map(|id| self.stop(id))
    }

    /// Look a stop handle up by name.
    #[must_use]
    pub fn find_stop_id(&self, name: &str) -> Option<StopId> {
        self.stops_by_name.get(name).copied()
    }

    /// Look a bus up by name.
    #[must_use]
    pub fn find_route(&self, name: &str) -> Option<&Bus> {
        self.buses_by_name.get(name).map(|id| self.bus(*id))
    }

    /// Whether a bus with this name exists.
    #[must_use]
    pub fn is_bus(&self, name: &str) -> bool {
        self.buses_by_name.contains_key(name)
    }

    /// Whether a stop with this name exists.
    #[must_use]
    pub fn is_stop(&self, name: &str) -> bool {
        self.stops_by_name.contains_key(name)
    }

    /// Names of the buses serving a stop, in lexicographic order.
    ///
    /// Returns `None` for an unknown stop and an empty set for a known stop
    /// that no bus serves.
    #[must_use]
    pub fn buses_through_stop(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.find_stop_id(name).map(|id| &self.buses_through[id.0])
    }

    /// All stops in insertion order.
    #[must_use]
    pub fn all_stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All buses in insertion order.
    #[must_use]
    pub fn all_buses(&self) -> &[Bus] {
        &self.buses
    }

    /// Stops served by at least one bus, in insertion order.
    pub fn served_stops(&self) -> impl Iterator<Item = &Stop> + '_ {
        self.stops
            .iter()
            .zip(&self.buses_through)
            .filter(|(_, buses)| !buses.is_empty())
            .map(|(stop, _)| stop)
    }

    /// Resolve the stops of a bus path in stored order.
    pub fn route_stops<'a>(&'a self, bus: &'a Bus) -> impl Iterator<Item = &'a Stop> + 'a {
        bus.stops.iter().map(|id| self.stop(*id))
    }

    /// Stop behind a handle issued by this catalogue.
    ///
    /// # Panics
    /// Panics when `id` was issued by a different catalogue and is out of
    /// range here.
    #[must_use]
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.0]
    }

    /// Bus behind a handle issued by this catalogue.
    ///
    /// # Panics
    /// Panics when `id` was issued by a different catalogue and is out of
    /// range here.
    #[must_use]
    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id.0]
    }
}
