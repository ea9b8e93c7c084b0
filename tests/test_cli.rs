//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const RECIPE: &str = "Ingredients\n2 cups flour\n\nInstructions\nMix well.";

fn cli() -> Command {
    Command::cargo_bin("forage-import").unwrap()
}

#[test]
fn test_root_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Turn pasted recipe text"));
}

#[test]
fn test_parse_from_stdin_as_json() {
    let output = cli().arg("parse").write_stdin(RECIPE).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["title"], "Imported Recipe");
    assert_eq!(json["ingredients"][0]["name"], "flour");
    assert_eq!(json["ingredients"][0]["quantity"], "2 cups");
    assert_eq!(json["instructions"], "Mix well.");
}

#[test]
fn test_parse_file_as_markdown() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recipe.txt");
    fs::write(&path, "- 1 cup rice (jasmine preferred)").unwrap();

    cli()
        .args(["parse", "--format", "markdown"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("- 1 cup rice (jasmine preferred)"));
}

#[test]
fn test_parse_missing_file_fails() {
    cli()
        .args(["parse", "/definitely/not/here.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_draft_requires_ingredients() {
    let dir = tempfile::tempdir().unwrap();

    cli()
        .current_dir(dir.path())
        .args(["draft", "--title", "Stew"])
        .write_stdin("Method\nStir it. Serve.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No ingredients found"));
}

#[test]
fn test_draft_with_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("catalog.json");
    fs::write(&catalog, r#"["Flour", "Salt"]"#).unwrap();

    let output = cli()
        .current_dir(dir.path())
        .args(["draft", "--title", "Flatbread", "--catalog"])
        .arg(&catalog)
        .write_stdin("2 cups flour\n1 cup water\nKnead briefly. Cook in a hot pan.")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["draft"]["slug"], "flatbread");
    assert_eq!(json["ingredients"][0]["ingredient"]["name"], "Flour");
    assert_eq!(json["ingredients"][0]["created"], false);
    assert_eq!(json["ingredients"][1]["ingredient"]["name"], "water");
    assert_eq!(json["ingredients"][1]["quantity"], "1 cup");
    assert_eq!(json["ingredients"][1]["created"], true);
}

#[test]
fn test_slug() {
    cli()
        .args(["slug", "Wild Berry Chocolate Bark"])
        .assert()
        .success()
        .stdout("wild-berry-chocolate-bark\n");
}
