//! End-to-end command behaviour over documents on disk.

use super::*;
use crate::document_io::{read_document, write_output};
use crate::query::answer_document;
use crate::render::render_document;
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;
use transit_data::InputDocument;

const DOCUMENT: &str = r#"{
    "base_requests": [
        {"type": "Bus", "name": "114", "stops": ["Sea Station", "Riviera Bridge"], "is_roundtrip": false},
        {"type": "Stop", "name": "Riviera Bridge", "latitude": 43.587795, "longitude": 39.716901,
         "road_distances": {"Sea Station": 850}},
        {"type": "Stop", "name": "Sea Station", "latitude": 43.581969, "longitude": 39.719848,
         "road_distances": {"Riviera Bridge": 850}}
    ],
    "render_settings": {
        "width": 200, "height": 200, "padding": 30,
        "line_width": 14, "stop_radius": 5,
        "bus_label_font_size": 20, "bus_label_offset": [7, 15],
        "stop_label_font_size": 20, "stop_label_offset": [7, -3],
        "underlayer_color": [255, 255, 255, 0.85], "underlayer_width": 3,
        "color_palette": ["green", [255, 160, 0], "red"]
    },
    "stat_requests": [
        {"id": 1, "type": "Map"},
        {"id": 2, "type": "Bus", "name": "114"},
        {"id": 3, "type": "Stop", "name": "Riviera Bridge"},
        {"id": 4, "type": "Stop", "name": "Unknown"}
    ]
}"#;

#[fixture]
fn document() -> InputDocument {
    InputDocument::from_json(DOCUMENT).expect("fixture document is valid")
}

#[fixture]
fn workdir() -> (TempDir, Utf8PathBuf) {
    let dir = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
    (dir, root)
}

#[rstest]
fn query_answers_every_request_in_order(document: InputDocument) {
    let answers: Value =
        serde_json::from_str(&answer_document(&document).expect("answers")).expect("json");
    let answers = answers.as_array().expect("array of responses");

    let ids: Vec<i64> = answers
        .iter()
        .filter_map(|answer| answer["request_id"].as_i64())
        .collect();
    assert_eq!(ids, [1, 2, 3, 4]);

    let map = answers[0]["map"].as_str().expect("map text");
    assert!(map.contains(r#"<polyline points=""#));
    assert_eq!(answers[1]["route_length"], json!(1700.0));
    assert_eq!(answers[1]["stop_count"], json!(3));
    assert_eq!(answers[2]["buses"], json!(["114"]));
    assert_eq!(answers[3]["error_message"], json!("not found"));
}

#[rstest]
fn render_writes_only_the_map(document: InputDocument) {
    let map = render_document(&document).expect("map");
    assert!(map.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n"));
    assert!(map.ends_with("</svg>"));
    assert_eq!(map.matches("<polyline").count(), 1);
    assert_eq!(map.matches("<circle").count(), 2);
}

#[rstest]
fn render_without_settings_fails(mut document: InputDocument) {
    document.render_settings = None;
    match render_document(&document) {
        Err(CliError::MissingRenderSettings) => {}
        other => panic!("expected missing settings, found {other:?}"),
    }
}

#[rstest]
fn query_with_empty_palette_fails_before_answering(mut document: InputDocument) {
    if let Some(settings) = document.render_settings.as_mut() {
        settings.color_palette.clear();
    }
    match answer_document(&document) {
        Err(CliError::Query(_)) => {}
        other => panic!("expected a query error, found {other:?}"),
    }
}

#[rstest]
fn documents_round_trip_through_files(workdir: (TempDir, Utf8PathBuf)) {
    let (_guard, root) = workdir;
    let input = root.join("input.json");
    fs::write(&input, DOCUMENT).expect("write input");

    let document = read_document(Some(input.as_path())).expect("read input");
    let output = root.join("maps/network.svg");
    let map = render_document(&document).expect("map");
    write_output(Some(output.as_path()), &map).expect("write map");

    assert_eq!(fs::read_to_string(&output).expect("read map"), map);
}

#[rstest]
fn missing_input_reports_its_path(workdir: (TempDir, Utf8PathBuf)) {
    let (_guard, root) = workdir;
    let input = root.join("absent.json");
    match read_document(Some(input.as_path())) {
        Err(CliError::ReadInput { path, .. }) => assert_eq!(path, input),
        other => panic!("expected a read error, found {other:?}"),
    }
}

#[rstest]
fn malformed_input_names_its_origin(workdir: (TempDir, Utf8PathBuf)) {
    let (_guard, root) = workdir;
    let input = root.join("broken.json");
    fs::write(&input, "{\"base_requests\": 3}").expect("write input");
    match read_document(Some(input.as_path())) {
        Err(CliError::Document { origin, .. }) => assert_eq!(origin, input.as_str()),
        other => panic!("expected a document error, found {other:?}"),
    }
}
