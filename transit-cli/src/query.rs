//! `query` command: answer the stat requests of an input document.

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use transit_data::{InputDocument, RequestHandler};
use transit_render::MapRenderer;

use crate::document_io::{load_catalogue, read_document, write_output};
use crate::{ARG_OUTPUT, CliError};

/// CLI arguments for the `query` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Build the catalogue described by base_requests and answer \
                 every entry of stat_requests in order. The responses are \
                 written as a pretty-printed JSON array.",
    about = "Answer the stat requests of an input document"
)]
#[ortho_config(prefix = "TRANSIT")]
pub(crate) struct QueryArgs {
    /// Input document; read from standard input when omitted.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Write the responses to this file instead of standard output.
    #[arg(long = ARG_OUTPUT, short = 'o', value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

pub(crate) fn run_query(args: QueryArgs) -> Result<(), CliError> {
    let config = args.load_and_merge().map_err(CliError::Configuration)?;
    let document = read_document(config.input.as_deref())?;
    let answers = answer_document(&document)?;
    write_output(config.output.as_deref(), &answers)
}

/// Answer every stat request of `document` as a JSON array.
pub(crate) fn answer_document(document: &InputDocument) -> Result<String, CliError> {
    let catalogue = load_catalogue(document);
    let renderer = document.render_settings.clone().map(MapRenderer::new);
    let handler = RequestHandler::new(&catalogue, renderer)?;
    let responses = handler.handle_all(&document.stat_requests)?;
    info!("answered {} stat requests", responses.len());
    serde_json::to_string_pretty(&responses).map_err(CliError::SerialiseResponses)
}

#[cfg(test)]
pub(crate) fn query_args_from_layers(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<QueryArgs, CliError> {
    Ok(QueryArgs::merge_from_layers(layers)?)
}
