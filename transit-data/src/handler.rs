//! Answer stat requests against a built catalogue.

use transit_core::{RouteStats, TransportCatalogue};
use transit_render::MapRenderer;
use transit_render::svg::Document;

use crate::{MapInfo, NotFound, QueryError, Response, RouteInfo, StatRequest, StopInfo};

/// Read-only query facade over a catalogue and an optional map renderer.
///
/// # Examples
/// ```
/// use transit_core::TransportCatalogue;
/// use transit_data::{RequestHandler, Response, StatRequest};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut catalogue = TransportCatalogue::new();
/// catalogue.add_stop("A", 0.0, 0.0)?;
/// let handler = RequestHandler::new(&catalogue, None)?;
///
/// let response = handler.handle(&StatRequest::Stop { id: 5, name: "A".into() })?;
/// assert!(matches!(response, Response::Stop(ref info) if info.buses.is_empty()));
///
/// let response = handler.handle(&StatRequest::Bus { id: 6, name: "X".into() })?;
/// assert!(matches!(response, Response::NotFound(_)));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RequestHandler<'a> {
    catalogue: &'a TransportCatalogue,
    renderer: Option<MapRenderer>,
}

impl<'a> RequestHandler<'a> {
    /// Create a handler, checking up front that the map can be drawn.
    ///
    /// # Errors
    /// Returns [`QueryError::Render`] when `renderer` cannot draw
    /// `catalogue`, such as an empty palette with routes to colour.
    pub fn new(
        catalogue: &'a TransportCatalogue,
        renderer: Option<MapRenderer>,
    ) -> Result<Self, QueryError> {
        if let Some(renderer) = &renderer {
            renderer.validate(catalogue)?;
        }
        Ok(Self {
            catalogue,
            renderer,
        })
    }

    /// Metrics of a route, or `None` for an unknown name.
    #[must_use]
    pub fn route_stats(&self, name: &str) -> Option<&'a RouteStats> {
        self.catalogue.find_route(name).map(|bus| &bus.stats)
    }

    /// Buses serving a stop in name order, or `None` for an unknown stop.
    #[must_use]
    pub fn buses_at_stop(&self, name: &str) -> Option<Vec<String>> {
        self.catalogue
            .buses_through_stop(name)
            .map(|buses| buses.iter().cloned().collect())
    }

    /// Render the network map.
    ///
    /// # Errors
    /// Returns [`QueryError::MissingRenderSettings`] without a renderer and
    /// [`QueryError::Render`] when drawing fails.
    pub fn render_map(&self, request_id: i64) -> Result<Document, QueryError> {
        let renderer = self
            .renderer
            .as_ref()
            .ok_or(QueryError::MissingRenderSettings { request_id })?;
        Ok(renderer.render(self.catalogue)?)
    }

    /// Answer one request.
    ///
    /// Unknown route and stop names produce a [`Response::NotFound`] record
    /// rather than an error.
    ///
    /// # Errors
    /// Map requests fail as described in [`RequestHandler::render_map`].
    pub fn handle(&self, request: &StatRequest) -> Result<Response, QueryError> {
        let response = match request {
            StatRequest::Bus { id, name } => self.route_stats(name).map_or_else(
                || Response::NotFound(NotFound::new(*id)),
                |stats| Response::Route(RouteInfo::new(*id, stats)),
            ),
            StatRequest::Stop { id, name } => self.buses_at_stop(name).map_or_else(
                || Response::NotFound(NotFound::new(*id)),
                |buses| {
                    Response::Stop(StopInfo {
                        buses,
                        request_id: *id,
                    })
                },
            ),
            StatRequest::Map { id } => Response::Map(MapInfo {
                map: self.render_map(*id)?.to_string(),
                request_id: *id,
            }),
        };
        Ok(response)
    }

    /// Answer requests in order.
    ///
    /// # Errors
    /// Stops at the first request that fails.
    pub fn handle_all(&self, requests: &[StatRequest]) -> Result<Vec<Response>, QueryError> {
        requests.iter().map(|request| self.handle(request)).collect()
    }
}
