//! Errors raised while decoding documents and answering requests.

use thiserror::Error;
use transit_render::RenderError;

/// Errors returned when an input document cannot be decoded.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The input is not valid JSON or does not match the document shape.
    #[error("failed to decode input document: {source}")]
    Decode {
        /// Underlying JSON error, carrying line and column.
        #[from]
        source: serde_json::Error,
    },
}

/// Errors returned by [`RequestHandler`](crate::RequestHandler).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The map cannot be drawn with the configured style.
    #[error(transparent)]
    Render(#[from] RenderError),
    /// A map was requested but the document carries no render settings.
    #[error("request {request_id} asks for a map but no render settings were given")]
    MissingRenderSettings {
        /// Identifier of the map request.
        request_id: i64,
    },
}
