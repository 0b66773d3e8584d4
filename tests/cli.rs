//! Integration tests for the dxf2svg binary

use assert_cmd::Command;
use dxf::entities::{Entity, EntityType, Line};
use dxf::{Drawing, Point};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dxf2svg"));
    // Keep a per-user config file out of the picture.
    cmd.env("XDG_CONFIG_HOME", env!("CARGO_TARGET_TMPDIR"))
        .env_remove("RUST_LOG");
    cmd
}

/// Writes a 2 x 2 square made of four loose LINE entities.
fn write_square(dir: &Path) -> PathBuf {
    let path = dir.join("square.dxf");
    let corners = [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
    let mut drawing = Drawing::new();
    for i in 0..corners.len() {
        let (ax, ay) = corners[i];
        let (bx, by) = corners[(i + 1) % corners.len()];
        drawing.add_entity(Entity::new(EntityType::Line(Line::new(
            Point::new(ax, ay, 0.0),
            Point::new(bx, by, 0.0),
        ))));
    }
    drawing.save_file(path.to_str().unwrap()).unwrap();
    path
}

#[test]
fn test_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert DXF drawings to SVG"))
        .stdout(predicate::str::contains("--fit"));
}

#[test]
fn test_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_default_output_next_to_input() {
    let dir = TempDir::new().unwrap();
    let input = write_square(dir.path());

    cli().arg(&input).assert().success().stdout("");

    let svg = fs::read_to_string(dir.path().join("square.svg")).unwrap();
    assert!(svg.starts_with("<?xml version=\"1.0\"?>"));
    assert_eq!(svg.matches("<path").count(), 1);
    assert!(svg.contains("\n  Z'/>"));
    assert!(svg.contains("viewBox=\"0.000000 -11.000000 19.500000 11.000000\""));
}

#[test]
fn test_stdout_output_with_fit() {
    let dir = TempDir::new().unwrap();
    let input = write_square(dir.path());

    cli()
        .arg(&input)
        .args(["-o", "-", "--fit", "--precision", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml"))
        .stdout(predicate::str::contains("viewBox=\"0.0 -2.0 2.0 2.0\""))
        .stdout(predicate::str::ends_with("</svg>\n"));

    assert!(!dir.path().join("square.svg").exists());
}

#[test]
fn test_report_json() {
    let dir = TempDir::new().unwrap();
    let input = write_square(dir.path());
    let output = dir.path().join("explicit.svg");

    let assert = cli()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--report")
        .assert()
        .success();

    let stats: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(stats["lines"], 4);
    assert_eq!(stats["segments"], 4);
    assert_eq!(stats["paths"], 1);
    assert_eq!(stats["closed_paths"], 1);
    assert!(output.exists());
}

#[test]
fn test_config_file_applies() {
    let dir = TempDir::new().unwrap();
    let input = write_square(dir.path());
    let config = dir.path().join("dxf2svg.toml");
    fs::write(
        &config,
        "[style]\npath = \"stroke: red\"\n\n[output]\nprecision = 2\n",
    )
    .unwrap();

    cli()
        .arg(&input)
        .args(["-o", "-", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("<path style='stroke: red' d='M"))
        .stdout(predicate::str::contains("viewBox=\"0.00 -11.00 19.50 11.00\""));
}

#[test]
fn test_invalid_precision_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_square(dir.path());

    cli()
        .arg(&input)
        .args(["--precision", "40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid settings"));
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.dxf");

    cli()
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to import"));
}

#[test]
fn test_verbose_conflicts_with_quiet() {
    cli()
        .args(["-v", "-q", "x.dxf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
