//! Response records written back for each stat request.
//!
//! Field names and their order follow the established output format, keys
//! sorted alphabetically within each record.

use serde::Serialize;
use transit_core::RouteStats;

const NOT_FOUND: &str = "not found";

/// Answer to one stat request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    /// Unknown route or stop.
    NotFound(NotFound),
    /// Answer to a bus request.
    Route(RouteInfo),
    /// Answer to a stop request.
    Stop(StopInfo),
    /// Answer to a map request.
    Map(MapInfo),
}

impl Response {
    /// Identifier of the request this answers.
    #[must_use]
    pub fn request_id(&self) -> i64 {
        match self {
            Self::NotFound(NotFound { request_id, .. })
            | Self::Route(RouteInfo { request_id, .. })
            | Self::Stop(StopInfo { request_id, .. })
            | Self::Map(MapInfo { request_id, .. }) => *request_id,
        }
    }
}

/// The named route or stop does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFound {
    /// Always `"not found"`.
    pub error_message: String,
    /// Identifier of the request.
    pub request_id: i64,
}

impl NotFound {
    /// Not-found record for `request_id`.
    #[must_use]
    pub fn new(request_id: i64) -> Self {
        Self {
            error_message: NOT_FOUND.to_owned(),
            request_id,
        }
    }
}

/// Metrics of a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteInfo {
    /// `None` when the route has no straight-line length.
    pub curvature: Option<f64>,
    /// Identifier of the request.
    pub request_id: i64,
    /// Road length in metres.
    pub route_length: f64,
    /// Stops visited along the logical path, repeats included.
    pub stop_count: usize,
    /// Distinct stops on the route.
    pub unique_stop_count: usize,
}

impl RouteInfo {
    /// Copy the metrics of `stats` into a response for `request_id`.
    #[must_use]
    pub fn new(request_id: i64, stats: &RouteStats) -> Self {
        Self {
            curvature: stats.curvature.is_finite().then_some(stats.curvature),
            request_id,
            route_length: stats.route_length,
            stop_count: stats.stop_count,
            unique_stop_count: stats.unique_stop_count,
        }
    }
}

/// Buses serving a stop, in name order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopInfo {
    /// Route names, sorted.
    pub buses: Vec<String>,
    /// Identifier of the request.
    pub request_id: i64,
}

/// The rendered map as SVG text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapInfo {
    /// Complete SVG document.
    pub map: String,
    /// Identifier of the request.
    pub request_id: i64,
}
