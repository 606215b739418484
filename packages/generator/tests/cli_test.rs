//! Tests for the `psgc-generator` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn generator() -> Command {
    let mut cmd = Command::cargo_bin("psgc-generator").unwrap();
    cmd.env_remove("PSGC_INPUT")
        .env_remove("PSGC_SHEET")
        .env_remove("PSGC_OUTPUT_DIR")
        .env_remove("PSGC_STRICT_LEVELS");
    cmd
}

#[test]
fn test_generate_command() {
    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("api");

    generator()
        .arg("generate")
        .arg("--input")
        .arg(fixture("psgc.json"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Records read: 11"))
        .stdout(predicate::str::contains("Unclassified"));

    assert!(output.join("regions.json").is_file());
    assert!(output.join("barangays/1380601001.json").is_file());
}

#[test]
fn test_generate_reads_environment() {
    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("env-api");

    generator()
        .arg("generate")
        .env("PSGC_INPUT", fixture("psgc.json"))
        .env("PSGC_OUTPUT_DIR", &output)
        .assert()
        .success();

    assert!(output.join("regions.json").is_file());
}

#[test]
fn test_generate_strict_rejects_unknown_level() {
    let temp_dir = tempdir().unwrap();

    generator()
        .arg("generate")
        .arg("--input")
        .arg(fixture("psgc.json"))
        .arg("--output")
        .arg(temp_dir.path().join("api"))
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized geographic level 'Dist'"));
}

#[test]
fn test_no_strict_flag_overrides_environment() {
    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("api");

    generator()
        .arg("generate")
        .arg("--input")
        .arg(fixture("psgc.json"))
        .arg("--output")
        .arg(&output)
        .env("PSGC_STRICT_LEVELS", "1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized geographic level 'Dist'"));

    generator()
        .arg("generate")
        .arg("--input")
        .arg(fixture("psgc.json"))
        .arg("--output")
        .arg(&output)
        .arg("--no-strict")
        .env("PSGC_STRICT_LEVELS", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unclassified"));

    assert!(output.join("regions.json").is_file());
}

#[test]
fn test_generate_invalid_code_fails() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("psgc.json");
    fs::write(
        &input,
        r#"[{"psgc10DigitCode": "102800000", "name": "Ilocos Norte", "geographicLevel": "Prov"}]"#,
    )
    .unwrap();

    generator()
        .arg("generate")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(temp_dir.path().join("api"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid PSGC code length"));
}

#[test]
fn test_convert_command() {
    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("psgc.json");

    generator()
        .arg("convert")
        .arg("--input")
        .arg(fixture("datafile.csv"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted"));

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("\"geographicLevel\": \"Brgy\""));
    assert!(content.contains("\"population2020\": 5301139"));
}

#[test]
fn test_convert_workbook() {
    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("psgc.json");

    generator()
        .arg("convert")
        .arg("--input")
        .arg(fixture("datafile.xlsx"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted 4 records"));

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("\"incomeClassification\": \"3rd\""));
    assert!(content.contains("\"population2020\": 5301139"));
}

#[test]
fn test_convert_workbook_missing_sheet() {
    let temp_dir = tempdir().unwrap();

    generator()
        .arg("convert")
        .arg("--input")
        .arg(fixture("datafile.xlsx"))
        .arg("--sheet")
        .arg("7")
        .arg("--output")
        .arg(temp_dir.path().join("psgc.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no sheet at index 7"));
}

#[test]
fn test_unsupported_input() {
    generator()
        .arg("generate")
        .arg("--input")
        .arg("psgc.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported input file"));
}
