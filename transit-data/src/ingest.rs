//! Load base requests into a catalogue.
//!
//! Loading runs three passes so that every reference can resolve: all
//! stops first, then the road distances declared by the stops that were
//! accepted, then the buses. Each record is inserted on its own; a rejected
//! record is logged and reported but never stops the remaining ones from
//! loading.

use log::{debug, warn};
use transit_core::{CatalogueError, TransportCatalogue};

use crate::{BaseRequest, BusRecord, StopRecord};

/// What happened while loading a batch of base requests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngestReport {
    /// Stops added to the catalogue.
    pub stops: usize,
    /// Road distances recorded.
    pub distances: usize,
    /// Buses added to the catalogue.
    pub buses: usize,
    /// Every rejected record, in the order it was met.
    pub rejected: Vec<CatalogueError>,
}

impl IngestReport {
    /// Whether every record loaded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    fn record<T>(&mut self, outcome: Result<T, CatalogueError>) -> bool {
        match outcome {
            Ok(_) => true,
            Err(err) => {
                warn!("skipping record: {err}");
                self.rejected.push(err);
                false
            }
        }
    }
}

/// Build a new catalogue from `requests`.
///
/// # Examples
/// ```
/// use transit_data::{InputDocument, ingest};
///
/// # fn main() -> Result<(), transit_data::DocumentError> {
/// let document = InputDocument::from_json(r#"{"base_requests": [
///     {"type": "Bus", "name": "1", "stops": ["A", "B"], "is_roundtrip": false},
///     {"type": "Stop", "name": "A", "latitude": 0, "longitude": 0,
///      "road_distances": {"B": 1000}},
///     {"type": "Stop", "name": "B", "latitude": 0, "longitude": 1}
/// ]}"#)?;
///
/// let (catalogue, report) = ingest(&document.base_requests);
/// assert!(report.is_clean());
/// assert_eq!(catalogue.find_route("1").map(|bus| bus.stats.route_length), Some(2000.0));
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn ingest(requests: &[BaseRequest]) -> (TransportCatalogue, IngestReport) {
    let mut catalogue = TransportCatalogue::new();
    let report = load_into(&mut catalogue, requests);
    (catalogue, report)
}

/// Add `requests` to an existing catalogue.
pub fn load_into(catalogue: &mut TransportCatalogue, requests: &[BaseRequest]) -> IngestReport {
    let (stops, buses): (Vec<&BaseRequest>, Vec<&BaseRequest>) = requests
        .iter()
        .partition(|request| matches!(request, BaseRequest::Stop(_)));
    let stops: Vec<&StopRecord> = stops.into_iter().filter_map(as_stop).collect();
    let buses: Vec<&BusRecord> = buses.into_iter().filter_map(as_bus).collect();

    let mut report = IngestReport::default();
    let mut accepted: Vec<&StopRecord> = Vec::with_capacity(stops.len());
    for stop in stops {
        if report.record(catalogue.add_stop(stop.name.as_str(), stop.latitude, stop.longitude)) {
            report.stops += 1;
            accepted.push(stop);
        }
    }
    // A rejected duplicate must not leak its distances onto the first stop.
    for stop in &accepted {
        for (neighbour, metres) in &stop.road_distances {
            if report.record(catalogue.add_distance(&stop.name, neighbour, *metres)) {
                report.distances += 1;
            }
        }
    }
    for bus in &buses {
        if report.record(catalogue.add_route(bus.name.as_str(), &bus.stops, bus.is_roundtrip)) {
            report.buses += 1;
        }
    }

    debug!(
        "loaded {} stops, {} distances and {} buses; {} records rejected",
        report.stops,
        report.distances,
        report.buses,
        report.rejected.len()
    );
    report
}

fn as_stop(request: &BaseRequest) -> Option<&StopRecord> {
    match request {
        BaseRequest::Stop(stop) => Some(stop),
        BaseRequest::Bus(_) => None,
    }
}

fn as_bus(request: &BaseRequest) -> Option<&BusRecord> {
    match request {
        BaseRequest::Bus(bus) => Some(bus),
        BaseRequest::Stop(_) => None,
    }
}
