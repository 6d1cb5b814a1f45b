//! Precedence of CLI, environment and file configuration layers.

use super::*;
use crate::query::query_args_from_layers;
use camino::Utf8PathBuf;
use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn cli_overrides_environment_overrides_file() {
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({ "input": "from-file.json", "output": "from-file.out" }),
        None,
    );
    composer.push_environment(json!({ "input": "from-env.json", "output": "from-env.out" }));
    composer.push_cli(json!({ "output": "from-cli.out" }));

    let args = query_args_from_layers(composer.layers()).expect("layers merge");
    assert_eq!(args.input, Some(Utf8PathBuf::from("from-env.json")));
    assert_eq!(args.output, Some(Utf8PathBuf::from("from-cli.out")));
}

#[rstest]
fn unset_paths_leave_standard_streams() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({}));
    let args = query_args_from_layers(composer.layers()).expect("layers merge");
    assert_eq!(args.input, None);
    assert_eq!(args.output, None);
}

#[rstest]
fn malformed_layer_is_a_configuration_error() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "input": 42 }));

    match query_args_from_layers(composer.layers()) {
        Err(CliError::Configuration(_)) => {}
        other => panic!("expected a configuration error, found {other:?}"),
    }
}
