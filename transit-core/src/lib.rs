//! Core domain types for the transit guide.
//!
//! The crate models named stops and the bus routes built from them. A
//! [`TransportCatalogue`] owns every entity, indexes them by name and
//! measures each route once, at insertion: stop counts, road length and
//! curvature relative to the great-circle path.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalogue;
mod distance;
mod route;
mod stop;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalogue::{CatalogueError, TransportCatalogue};
pub use distance::{EARTH_RADIUS_M, compute_distance};
pub use route::{Bus, BusId, RouteStats};
pub use stop::{Stop, StopId};
