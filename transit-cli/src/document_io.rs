//! Reading input documents and writing command output.

use std::io::{self, Write};

use camino::Utf8Path;
use log::{info, warn};
use transit_core::TransportCatalogue;
use transit_data::{InputDocument, ingest};

use crate::CliError;

/// Decode the document at `input`, or from standard input when `None`.
pub(crate) fn read_document(input: Option<&Utf8Path>) -> Result<InputDocument, CliError> {
    match input {
        Some(path) => {
            let text = transit_fs::read_to_string(path).map_err(|source| CliError::ReadInput {
                path: path.to_path_buf(),
                source,
            })?;
            InputDocument::from_json(&text).map_err(|source| CliError::Document {
                origin: path.to_string(),
                source,
            })
        }
        None => InputDocument::from_reader(io::stdin().lock()).map_err(|source| {
            CliError::Document {
                origin: "stdin".to_owned(),
                source,
            }
        }),
    }
}

/// Build the catalogue of `document`, logging rejected records.
pub(crate) fn load_catalogue(document: &InputDocument) -> TransportCatalogue {
    let (catalogue, report) = ingest(&document.base_requests);
    if !report.is_clean() {
        warn!("{} input records were rejected", report.rejected.len());
    }
    info!(
        "catalogue holds {} stops and {} buses",
        catalogue.all_stops().len(),
        catalogue.all_buses().len()
    );
    catalogue
}

/// Write `contents` to `output` as is, or to standard output followed by a
/// newline when `None`.
pub(crate) fn write_output(output: Option<&Utf8Path>, contents: &str) -> Result<(), CliError> {
    match output {
        Some(path) => {
            transit_fs::write_string(path, contents).map_err(|source| CliError::WriteOutput {
                path: path.to_path_buf(),
                source,
            })
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .and_then(|()| stdout.flush())
                .map_err(CliError::WriteStdout)
        }
    }
}
