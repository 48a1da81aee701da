//! CLI tests for `detsex`.
//!
//! Spawns the binary in a temporary lab and checks stdout, the history file
//! and exit codes.

use std::path::Path;
use std::process::{Command, Output};

use detsex::core::types::{DuctFate, ExperimentConfig, Genotype, Gonads, Phenotype};
use detsex::exit_codes;
use detsex::history::History;
use detsex::io::history_store::load_history;
use detsex::io::init::LabPaths;
use detsex::test_support::{lab_with_history, record, temp_lab};

fn detsex(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_detsex"))
        .current_dir(root)
        .args(args)
        .output()
        .expect("run detsex")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn init_scaffolds_lab() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = detsex(temp.path(), &["init"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let paths = LabPaths::new(temp.path());
    assert!(paths.config_path.exists());
    assert!(paths.history_path.exists());
}

#[test]
fn resolve_json_reports_castration_outcome() {
    let (temp, _paths) = temp_lab();
    let output = detsex(
        temp.path(),
        &["resolve", "--genotype", "XY", "--ablation", "--json"],
    );
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let payload: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(payload["config"]["genotype"], "XY");
    assert_eq!(payload["config"]["ablation"], true);
    assert_eq!(payload["outcome"]["wolffian"], "regresses");
    assert_eq!(payload["outcome"]["mullerian"], "persists");
    assert_eq!(payload["outcome"]["gonads"], "none");
    assert_eq!(payload["outcome"]["phenotype"], "female");
    assert!(payload.get("id").is_none());
}

#[test]
fn resolve_works_without_a_lab_directory() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = detsex(temp.path(), &["resolve", "--implant", "amh"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout(&output).contains("Canaux 'vides'"));
}

#[test]
fn resolve_rejects_unknown_values() {
    let (temp, _paths) = temp_lab();
    let output = detsex(temp.path(), &["resolve", "--graft", "kidney"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn recorded_experiment_can_be_shown_and_deleted() {
    let (temp, paths) = temp_lab();
    let output = detsex(
        temp.path(),
        &["resolve", "--graft", "testis", "--record", "--json"],
    );
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let payload: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    let id = payload["id"].as_str().expect("record id").to_string();

    let history = load_history(&paths.history_path).expect("history");
    assert_eq!(history.len(), 1);
    let stored = history.find(&id).expect("stored record");
    assert_eq!(stored.outcome.wolffian, DuctFate::Persists);
    assert_eq!(stored.outcome.mullerian, DuctFate::Regresses);
    assert_eq!(stored.outcome.gonads, Gonads::Mixed);
    assert_eq!(stored.outcome.phenotype, Phenotype::Male);

    let output = detsex(temp.path(), &["history", "show", &id]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout(&output).contains("Greffe : Testicule"));

    let output = detsex(temp.path(), &["history", "delete", &id]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(load_history(&paths.history_path).expect("history").is_empty());

    let output = detsex(temp.path(), &["history", "delete", &id]);
    assert_eq!(output.status.code(), Some(exit_codes::NOT_FOUND));
}

#[test]
fn compare_missing_id_exits_not_found() {
    let (temp, _paths) = temp_lab();
    let output = detsex(temp.path(), &["compare", "1", "2"]);
    assert_eq!(output.status.code(), Some(exit_codes::NOT_FOUND));
}

#[test]
fn compare_prints_both_experiments() {
    let temp = tempfile::tempdir().expect("tempdir");
    let mut history = History::default();
    history
        .records
        .push(record("100", ExperimentConfig::default()));
    history.records.push(record(
        "200",
        ExperimentConfig {
            genotype: Genotype::Xy,
            ..ExperimentConfig::default()
        },
    ));
    lab_with_history(temp.path(), &history);

    let output = detsex(temp.path(), &["compare", "100", "200"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let text = stdout(&output);
    assert!(text.contains("A = 100 / B = 200"));
    assert!(text.contains("Phénotype"));
}

#[test]
fn corrupt_history_is_invalid() {
    let (temp, paths) = temp_lab();
    std::fs::write(&paths.history_path, "{\"version\":1}").expect("corrupt history");
    let output = detsex(temp.path(), &["history", "list"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}
