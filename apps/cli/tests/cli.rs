//! End-to-end tests running the built binary

use linfa::DatasetBase;
use linfa::traits::Fit;
use linfa_trees::DecisionTree;
use ndarray::{Array1, Array2};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use thyroid_verdict::ThyroidModel;
use thyroid_verdict::schema;

const EXAMPLE: &[&str] = &[
    "-t3", "1.5", "-t4", "80", "-fti", "90", "-tsh", "1.2", "-a", "45", "-r", "SVI", "-o", "t",
    "-m3", "1",
];

/// Splits on TSH only: up to 2.0 is Healthy, from 8.0 Sick
fn write_fixture_model(dir: &Path, file_name: &str) -> PathBuf {
    let n = schema::num_predictors();
    let tsh_values = [0.5, 1.0, 1.5, 2.0, 8.0, 10.0, 12.0, 15.0];
    let mut flat = Vec::with_capacity(tsh_values.len() * n);
    for tsh in tsh_values {
        let mut row = vec![0.0; n];
        row[schema::TSH] = tsh;
        flat.extend(row);
    }
    let records = Array2::from_shape_vec((tsh_values.len(), n), flat).unwrap();
    let targets = Array1::from(vec![0usize, 0, 0, 0, 1, 1, 1, 1]);
    let tree = DecisionTree::<f64, usize>::params()
        .fit(&DatasetBase::from(records).with_targets(targets))
        .unwrap();

    let path = dir.join(file_name);
    ThyroidModel::new(tree).save(&path).unwrap();
    path
}

fn run_cli(workdir: &Path, model: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_thyroid-verdict"))
        .args(args)
        .current_dir(workdir)
        .env("THYROID_MODEL_PATH", model)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn thyroid-verdict")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_example_invocation_prints_verdict() {
    let dir = tempfile::tempdir().unwrap();
    let model = write_fixture_model(dir.path(), "model.msgpack");

    let output = run_cli(dir.path(), &model, EXAMPLE);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "VERDICT: Healthy");
}

#[test]
fn test_high_tsh_is_sick_with_json_model() {
    let dir = tempfile::tempdir().unwrap();
    let model = write_fixture_model(dir.path(), "model.json");

    let mut args = EXAMPLE.to_vec();
    args[7] = "20";
    let output = run_cli(dir.path(), &model, &args);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "VERDICT: Sick");
}

#[test]
fn test_missing_flag_exits_without_verdict() {
    let dir = tempfile::tempdir().unwrap();
    let model = write_fixture_model(dir.path(), "model.msgpack");

    let output = run_cli(dir.path(), &model, &EXAMPLE[..EXAMPLE.len() - 2]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    assert!(!stdout(&output).contains("VERDICT"));
    assert!(stderr(&output).contains("Usage"), "{}", stderr(&output));
}

#[test]
fn test_invalid_value_exits_without_verdict() {
    let dir = tempfile::tempdir().unwrap();
    let model = write_fixture_model(dir.path(), "model.msgpack");

    let mut args = EXAMPLE.to_vec();
    args[9] = "0";
    let output = run_cli(dir.path(), &model, &args);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("impossible age"), "{}", stderr(&output));
}

#[test]
fn test_missing_model_reports_cause() {
    let dir = tempfile::tempdir().unwrap();
    let model = dir.path().join("absent.json");

    let output = run_cli(dir.path(), &model, EXAMPLE);
    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout(&output).contains("VERDICT"));
    let err = stderr(&output);
    assert!(err.contains("Something went wrong with the algorithm!"), "{err}");
    assert!(err.contains("absent.json"), "{err}");
}

#[test]
fn test_mismatched_model_reports_cause() {
    let dir = tempfile::tempdir().unwrap();
    let model = write_fixture_model(dir.path(), "model.json");
    let mut artifact: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&model).unwrap()).unwrap();
    artifact["attributes"].as_array_mut().unwrap().truncate(10);
    std::fs::write(&model, artifact.to_string()).unwrap();

    let output = run_cli(dir.path(), &model, EXAMPLE);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("schema mismatch"), "{}", stderr(&output));
}

#[test]
fn test_tree_outside_schema_reports_cause() {
    let dir = tempfile::tempdir().unwrap();
    let width = 40;
    let values = [0.5, 1.0, 1.5, 2.0, 8.0, 10.0, 12.0, 15.0];
    let mut flat = Vec::with_capacity(values.len() * width);
    for value in values {
        let mut row = vec![0.0; width];
        row[35] = value;
        flat.extend(row);
    }
    let records = Array2::from_shape_vec((values.len(), width), flat).unwrap();
    let targets = Array1::from(vec![0usize, 0, 0, 0, 1, 1, 1, 1]);
    let tree = DecisionTree::<f64, usize>::params()
        .fit(&DatasetBase::from(records).with_targets(targets))
        .unwrap();
    let model = dir.path().join("wide.msgpack");
    ThyroidModel::new(tree).save(&model).unwrap();

    let output = run_cli(dir.path(), &model, EXAMPLE);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.contains("Something went wrong with the algorithm!"), "{err}");
    assert!(err.contains("schema mismatch"), "{err}");
}
