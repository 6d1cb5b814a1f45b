//! Typed model of the JSON input document.
//!
//! A document has three optional sections: `base_requests` describing stops
//! and buses, `render_settings` styling the map, and `stat_requests` to be
//! answered once the catalogue is built.

use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;
use transit_render::RenderSettings;

use crate::DocumentError;

/// A whole input document.
///
/// # Examples
/// ```
/// use transit_data::{BaseRequest, InputDocument, StatRequest};
///
/// # fn main() -> Result<(), transit_data::DocumentError> {
/// let document = InputDocument::from_json(r#"{
///     "base_requests": [
///         {"type": "Stop", "name": "A", "latitude": 55.6, "longitude": 37.2},
///         {"type": "Bus", "name": "14", "stops": ["A"], "is_roundtrip": true}
///     ],
///     "stat_requests": [{"id": 1, "type": "Bus", "name": "14"}]
/// }"#)?;
///
/// assert!(matches!(document.base_requests[0], BaseRequest::Stop(_)));
/// assert_eq!(document.stat_requests[0].id(), 1);
/// assert!(document.render_settings.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct InputDocument {
    /// Stops and buses to load, in any order.
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,
    /// Map style; map requests fail without it.
    #[serde(default)]
    pub render_settings: Option<RenderSettings>,
    /// Queries to answer, in order.
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

impl InputDocument {
    /// Decode a document from a JSON string.
    ///
    /// # Errors
    /// Returns [`DocumentError::Decode`] for malformed JSON or records.
    pub fn from_json(input: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Decode a document from a reader.
    ///
    /// # Errors
    /// Returns [`DocumentError::Decode`] for unreadable input, malformed
    /// JSON or malformed records.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DocumentError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// A stop or bus description, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    /// `"type": "Stop"`.
    Stop(StopRecord),
    /// `"type": "Bus"`.
    Bus(BusRecord),
}

/// A stop and the road distances measured from it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StopRecord {
    /// Unique stop name.
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Metres by road to neighbouring stops, keyed by their names.
    #[serde(default)]
    pub road_distances: BTreeMap<String, u32>,
}

/// A bus route over named stops.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusRecord {
    /// Unique route name.
    pub name: String,
    /// Stop names in travel order.
    pub stops: Vec<String>,
    /// Whether `stops` already describes the whole loop. Otherwise the bus
    /// travels the list out and back.
    pub is_roundtrip: bool,
}

/// A query against the built catalogue, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    /// Metrics of one route.
    Bus {
        /// Request identifier.
        id: i64,
        /// Route name.
        name: String,
    },
    /// Buses serving one stop.
    Stop {
        /// Request identifier.
        id: i64,
        /// Stop name.
        name: String,
    },
    /// The rendered network map.
    Map {
        /// Request identifier.
        id: i64,
    },
}

impl StatRequest {
    /// Caller-supplied identifier echoed in the response.
    #[must_use]
    pub fn id(&self) -> i64 {
        match self {
            Self::Bus { id, .. } | Self::Stop { id, .. } | Self::Map { id } => *id,
        }
    }
}
