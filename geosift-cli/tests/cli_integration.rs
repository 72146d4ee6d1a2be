//! Integration tests for the geosift CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const ARTICLE: &str = "Introduction\n\nSome background.\n\n3. Materials and Methods\n\nField work took place near Rovaniemi in northern Finland.\n\nResults\n\nWe found things.";

fn write_file(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_sections_text_output() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "article.txt", ARTICLE);

    let mut cmd = Command::cargo_bin("geosift").unwrap();
    cmd.arg("sections").arg("-i").arg(&path).arg("--quiet");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("== 3. Materials and Methods"))
        .stdout(predicate::str::contains("Rovaniemi"));
}

#[test]
fn test_sections_headings_only() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "article.txt", ARTICLE);

    let mut cmd = Command::cargo_bin("geosift").unwrap();
    cmd.arg("sections")
        .arg("-i")
        .arg(&path)
        .arg("--headings-only")
        .arg("--quiet");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("== 3. Materials and Methods"))
        .stdout(predicate::str::contains("Rovaniemi").not());
}

#[test]
fn test_sections_json_output() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "article.txt", ARTICLE);

    let mut cmd = Command::cargo_bin("geosift").unwrap();
    cmd.arg("sections")
        .arg("-i")
        .arg(&path)
        .arg("-f")
        .arg("json")
        .arg("--quiet");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"methods\""))
        .stdout(predicate::str::contains("\"headings\""))
        .stdout(predicate::str::contains("3. Materials and Methods"));
}

#[test]
fn test_sections_structured_document() {
    let dir = TempDir::new().unwrap();
    let document = r#"{
        "sections": [
            {
                "children": [
                    {"title": "Study area"},
                    {"paragraph": {"text": "Three orchards in the Rhone valley.", "refs": []}}
                ]
            }
        ]
    }"#;
    let path = write_file(&dir, "article.json", document);

    let mut cmd = Command::cargo_bin("geosift").unwrap();
    cmd.arg("sections")
        .arg("-i")
        .arg(&path)
        .arg("--structured")
        .arg("--quiet");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("== Study area"))
        .stdout(predicate::str::contains("Rhone valley"));
}

#[test]
fn test_chunk_candidates() {
    let dir = TempDir::new().unwrap();
    let lines = concat!(
        r#"[["Samples","O"],["from","O"],["northern","O"],["Finland","LOCATION"],[".","O"]]"#,
        "\n",
        r#"[["Virtanen","PERSON"],["et","O"],["al.","O"],["reported","O"],["this","O"]]"#,
        "\n"
    );
    let path = write_file(&dir, "tagged.jsonl", lines);

    let mut cmd = Command::cargo_bin("geosift").unwrap();
    cmd.arg("chunk").arg("-i").arg(&path).arg("--quiet");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("northern Finland"))
        .stdout(predicate::str::contains("Virtanen").not());
}

#[test]
fn test_chunk_unfiltered_keeps_reference_fragments() {
    let dir = TempDir::new().unwrap();
    let lines = concat!(
        r#"[["Virtanen","PERSON"],["et","O"],["al.","O"],["reported","O"],["this","O"]]"#,
        "\n"
    );
    let path = write_file(&dir, "tagged.jsonl", lines);

    let mut cmd = Command::cargo_bin("geosift").unwrap();
    cmd.arg("chunk")
        .arg("-i")
        .arg(&path)
        .arg("--unfiltered")
        .arg("--quiet");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Virtanen et"));
}

#[test]
fn test_chunk_malformed_line_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "tagged.jsonl", "not a json line\n");

    let mut cmd = Command::cargo_bin("geosift").unwrap();
    cmd.arg("chunk").arg("-i").arg(&path).arg("--quiet");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not a tagged sentence"));
}

#[test]
fn test_output_to_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "article.txt", ARTICLE);
    let output_file = dir.path().join("output.txt");

    let mut cmd = Command::cargo_bin("geosift").unwrap();
    cmd.arg("sections")
        .arg("-i")
        .arg(&path)
        .arg("-o")
        .arg(&output_file)
        .arg("--quiet");

    cmd.assert().success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("3. Materials and Methods"));
}

#[test]
fn test_no_matching_files_fails() {
    let dir = TempDir::new().unwrap();
    let pattern = dir.path().join("*.txt").to_string_lossy().into_owned();

    let mut cmd = Command::cargo_bin("geosift").unwrap();
    cmd.arg("sections").arg("-i").arg(&pattern).arg("--quiet");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_config_file_respected() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "article.txt", ARTICLE);
    let config = write_file(&dir, "geosift.toml", "[section]\npar_range = 1\n");

    let mut cmd = Command::cargo_bin("geosift").unwrap();
    cmd.arg("sections")
        .arg("-i")
        .arg(&path)
        .arg("-c")
        .arg(&config)
        .arg("--quiet");

    // With a window of one paragraph only the heading block itself is kept
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3. Materials and Methods"))
        .stdout(predicate::str::contains("Rovaniemi").not());
}

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("geosift").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("sections"))
        .stdout(predicate::str::contains("chunk"));
}
