//! Error types emitted by the transit guide CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use transit_data::{DocumentError, QueryError};
use transit_render::RenderError;

/// Errors emitted by the transit guide CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// Reading the input document from disk failed.
    #[error("failed to read input document at {path:?}: {source}")]
    ReadInput {
        /// Input path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The input document could not be decoded.
    #[error("invalid input document from {origin}: {source}")]
    Document {
        /// File path or `stdin`.
        origin: String,
        /// Decoding failure.
        #[source]
        source: DocumentError,
    },
    /// Answering the stat requests failed.
    #[error(transparent)]
    Query(#[from] QueryError),
    /// Drawing the map failed.
    #[error(transparent)]
    Render(#[from] RenderError),
    /// A map was requested from a document without render settings.
    #[error("the input document has no render_settings section")]
    MissingRenderSettings,
    /// Serialising the responses failed.
    #[error("failed to serialise responses: {0}")]
    SerialiseResponses(#[source] serde_json::Error),
    /// Writing the result to a file failed.
    #[error("failed to write output to {path:?}: {source}")]
    WriteOutput {
        /// Output path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Writing the result to standard output failed.
    #[error("failed to write to standard output: {0}")]
    WriteStdout(#[source] std::io::Error),
}
