//! `render` command: draw the network of an input document.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use transit_data::InputDocument;
use transit_render::MapRenderer;

use crate::document_io::{load_catalogue, read_document, write_output};
use crate::{ARG_OUTPUT, CliError};

/// CLI arguments for the `render` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Build the catalogue described by base_requests and draw it \
                 with render_settings. Only the SVG document is written; \
                 stat_requests are ignored.",
    about = "Draw the network of an input document as SVG"
)]
#[ortho_config(prefix = "TRANSIT")]
pub(crate) struct RenderArgs {
    /// Input document; read from standard input when omitted.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Write the map to this file instead of standard output.
    #[arg(long = ARG_OUTPUT, short = 'o', value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

pub(crate) fn run_render(args: RenderArgs) -> Result<(), CliError> {
    let config = args.load_and_merge().map_err(CliError::Configuration)?;
    let document = read_document(config.input.as_deref())?;
    let map = render_document(&document)?;
    write_output(config.output.as_deref(), &map)
}

/// Draw the network of `document` as an SVG document.
pub(crate) fn render_document(document: &InputDocument) -> Result<String, CliError> {
    let settings = document
        .render_settings
        .clone()
        .ok_or(CliError::MissingRenderSettings)?;
    let catalogue = load_catalogue(document);
    let map = MapRenderer::new(settings).render(&catalogue)?;
    Ok(map.to_string())
}
