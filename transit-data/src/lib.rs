//! Input documents, catalogue ingestion and the query service.
//!
//! Responsibilities:
//! - Decode the JSON input document into typed records.
//! - Load stops, road distances and buses into a
//!   [`TransportCatalogue`](transit_core::TransportCatalogue), reporting
//!   rejected records without aborting the batch.
//! - Answer stat requests with serialisable response records.
//!
//! Boundaries:
//! - Route metrics and rendering live in `transit-core` and
//!   `transit-render`.
//! - No file or stream handling beyond decoding from a reader.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod document;
mod error;
mod handler;
mod ingest;
mod response;

pub use document::{BaseRequest, BusRecord, InputDocument, StatRequest, StopRecord};
pub use error::{DocumentError, QueryError};
pub use handler::RequestHandler;
pub use ingest::{IngestReport, ingest, load_into};
pub use response::{MapInfo, NotFound, Response, RouteInfo, StopInfo};
