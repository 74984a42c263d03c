use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

const CSV: &str = "Country,GDP,HDI\nA,100,0.7\nB,200,0.8\nC,50,\n";

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("panel").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("panel"));
}

#[test]
fn catalog_lists_all_codes() {
    let mut cmd = Command::cargo_bin("panel").unwrap();
    cmd.arg("catalog");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Tax/GDP"))
        .stdout(predicate::str::contains("Coeficiente de Gini"));
}

#[test]
fn missing_data_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("panel").unwrap();
    cmd.current_dir(dir.path()).arg("show");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("trabalho.csv"))
        .stderr(predicate::str::contains("não encontrado"));
}

#[test]
fn unknown_indicator_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("trabalho.csv"), CSV).unwrap();
    let mut cmd = Command::cargo_bin("panel").unwrap();
    cmd.current_dir(dir.path()).args(["show", "-i", "XYZ", "-c", "A"]);
    cmd.assert().failure().stderr(predicate::str::contains("XYZ"));
}

#[test]
fn show_writes_one_chart_per_indicator() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("trabalho.csv"), CSV).unwrap();
    let out = dir.path().join("out");

    let mut cmd = Command::cargo_bin("panel").unwrap();
    cmd.current_dir(dir.path()).args([
        "show",
        "-i",
        "GDP;CPI",
        "-c",
        "A,B",
        "--format",
        "svg",
        "--out-dir",
    ]);
    cmd.arg(&out);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Dados Específicos por País"))
        .stderr(predicate::str::contains("Coluna 'CPI'"));

    assert!(out.join("chart_01_gdp.svg").exists());
    assert_eq!(fs::read_dir(&out).unwrap().count(), 1);
}

#[test]
fn overview_needs_the_flag() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data.csv");
    fs::write(&data, CSV).unwrap();

    let mut cmd = Command::cargo_bin("panel").unwrap();
    cmd.args(["show", "--json", "--data"]).arg(&data);
    let output = cmd.assert().success().get_output().stdout.clone();
    let page: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let blocks = page["blocks"].as_array().unwrap();
    assert!(blocks.iter().all(|b| b["block"] != "chart"));

    let mut cmd = Command::cargo_bin("panel").unwrap();
    cmd.args(["show", "--json", "--overview", "--data"]).arg(&data);
    let output = cmd.assert().success().get_output().stdout.clone();
    let page: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let blocks = page["blocks"].as_array().unwrap();
    assert!(blocks.iter().any(|b| b["value"]["kind"] == "line"));
}

#[test]
fn stats_cover_selected_countries() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("trabalho.csv"), CSV).unwrap();
    let mut cmd = Command::cargo_bin("panel").unwrap();
    cmd.current_dir(dir.path())
        .args(["show", "-i", "GDP", "-c", "A,B", "--stats"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("GDP  count=2 missing=0  min=100 max=200 mean=150 median=150"))
        .stdout(predicate::str::contains("HDI  count=2 missing=0"));
}
