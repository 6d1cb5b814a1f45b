//! Facade crate for the transit guide.
//!
//! Re-exports the catalogue engine, the map renderer and the query service
//! so applications can depend on a single crate.

#![forbid(unsafe_code)]

pub use transit_core::{
    Bus, BusId, CatalogueError, RouteStats, Stop, StopId, TransportCatalogue, compute_distance,
};
pub use transit_data::{
    BaseRequest, DocumentError, IngestReport, InputDocument, QueryError, RequestHandler, Response,
    StatRequest, ingest,
};
pub use transit_render::{MapRenderer, RenderError, RenderSettings, SphereProjector, svg};
