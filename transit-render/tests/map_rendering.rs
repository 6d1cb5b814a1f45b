//! Byte-exact rendering of a small network.
//!
//! The grid fixture projects onto a 200x100 canvas with 10 px padding at
//! 160 px per degree, which keeps every coordinate integral:
//! `A -> (10, 90)`, `B -> (170, 90)`, `C -> (90, 10)`.

use rstest::{fixture, rstest};
use transit_core::test_support::{catalogue_with, grid_catalogue};
use transit_render::{MapRenderer, RenderSettings};

#[fixture]
fn settings() -> RenderSettings {
    serde_json::from_str(
        r#"{
            "width": 200, "height": 100, "padding": 10,
            "line_width": 4, "stop_radius": 3,
            "bus_label_font_size": 12, "bus_label_offset": [5, 10],
            "stop_label_font_size": 8, "stop_label_offset": [5, -2],
            "underlayer_color": [255, 255, 255, 0.85], "underlayer_width": 2,
            "color_palette": ["green", [255, 160, 0]]
        }"#,
    )
    .expect("settings fixture is valid")
}

const UNDERLAY: &str = r#"fill="rgba(255,255,255,0.85)" stroke="rgba(255,255,255,0.85)" stroke-width="2" stroke-linecap="round" stroke-linejoin="round""#;

fn route_label(x: u32, y: u32, fill: &str, name: &str) -> [String; 2] {
    let tail = format!(
        r#"x="{x}" y="{y}" dx="5" dy="10" font-size="12" font-family="Verdana" font-weight="bold">{name}</text>"#
    );
    [
        format!("<text {UNDERLAY} {tail}"),
        format!(r#"<text fill="{fill}" {tail}"#),
    ]
}

fn stop_label(x: u32, y: u32, name: &str) -> [String; 2] {
    let tail = format!(
        r#"x="{x}" y="{y}" dx="5" dy="-2" font-size="8" font-family="Verdana">{name}</text>"#
    );
    [
        format!("<text {UNDERLAY} {tail}"),
        format!(r#"<text fill="black" {tail}"#),
    ]
}

fn expected_grid_map() -> String {
    let mut lines = vec![
        r#"<polyline points="10,90 90,10 170,90 10,90" fill="none" stroke="green" stroke-width="4" stroke-linecap="round" stroke-linejoin="round"/>"#.to_owned(),
        r#"<polyline points="90,10 170,90 90,10" fill="none" stroke="rgb(255,160,0)" stroke-width="4" stroke-linecap="round" stroke-linejoin="round"/>"#.to_owned(),
    ];
    lines.extend(route_label(10, 90, "green", "14"));
    lines.extend(route_label(90, 10, "rgb(255,160,0)", "7"));
    lines.extend(route_label(170, 90, "rgb(255,160,0)", "7"));
    lines.push(r#"<circle cx="10" cy="90" r="3" fill="white"/>"#.to_owned());
    lines.push(r#"<circle cx="170" cy="90" r="3" fill="white"/>"#.to_owned());
    lines.push(r#"<circle cx="90" cy="10" r="3" fill="white"/>"#.to_owned());
    lines.extend(stop_label(10, 90, "A"));
    lines.extend(stop_label(170, 90, "B"));
    lines.extend(stop_label(90, 10, "C"));

    let body: String = lines.iter().map(|line| format!("  {line}\n")).collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n\
         {body}</svg>"
    )
}

#[rstest]
fn grid_map_matches_snapshot(settings: RenderSettings) {
    let catalogue = grid_catalogue().expect("fixture");
    let map = MapRenderer::new(settings)
        .render(&catalogue)
        .expect("palette is not empty");
    assert_eq!(map.to_string(), expected_grid_map());
}

#[rstest]
fn insertion_order_does_not_change_the_map(settings: RenderSettings) {
    let shuffled = catalogue_with(
        &[
            ("Depot", 5.0, 5.0),
            ("C", 0.5, 0.5),
            ("B", 0.0, 1.0),
            ("A", 0.0, 0.0),
        ],
        &[("7", &["C", "B"], false), ("14", &["A", "C", "B", "A"], true)],
    )
    .expect("catalogue");
    let renderer = MapRenderer::new(settings);

    let expected = renderer
        .render(&grid_catalogue().expect("fixture"))
        .expect("render");
    let actual = renderer.render(&shuffled).expect("render");
    assert_eq!(actual.to_string(), expected.to_string());
}

#[rstest]
fn rendering_twice_is_identical(settings: RenderSettings) {
    let catalogue = grid_catalogue().expect("fixture");
    let renderer = MapRenderer::new(settings);
    let first = renderer.render(&catalogue).expect("render").to_string();
    let second = renderer.render(&catalogue).expect("render").to_string();
    assert_eq!(first, second);
}

#[rstest]
fn empty_catalogue_renders_an_empty_document(settings: RenderSettings) {
    let catalogue = catalogue_with(&[], &[]).expect("catalogue");
    let map = MapRenderer::new(settings).render(&catalogue).expect("render");
    assert_eq!(
        map.to_string(),
        "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n\
         </svg>"
    );
}
