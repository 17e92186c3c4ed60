//! Integration tests for the command-line flow
//!
//! Drives `parse_args` and `run` with an in-memory output buffer.

use std::fs;

use grz::grammar::{codec, grz as tables};
use grz::runtime::cli::{parse_args, run};

fn run_args(list: &[&str]) -> (bool, String) {
    let args = std::iter::once("grz")
        .chain(list.iter().copied())
        .map(String::from)
        .collect();
    let config = parse_args(args).unwrap();
    let mut out = Vec::new();
    let passed = run(&config, &mut out).unwrap();
    (passed, String::from_utf8(out).unwrap())
}

#[test]
fn default_run_checks_built_in() {
    let (passed, out) = run_args(&[]);
    assert!(passed);
    assert!(out.contains("ok: grz"));
}

#[test]
fn mixed_artifacts_report_each() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.grza");
    let bad = dir.path().join("bad.grza");
    fs::write(&bad, b"GRZ\x01nonsense").unwrap();

    let (passed, out) = run_args(&[
        "--emit",
        good.to_str().unwrap(),
        good.to_str().unwrap(),
        bad.to_str().unwrap(),
    ]);
    assert!(!passed);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("good.grza: ok: grz"));
    assert!(lines[2].contains("bad.grza: Error loading Grz grammar: load failure: corrupt artifact"));
}

#[test]
fn no_verify_accepts_tampered_fingerprint() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tampered.grza");
    let mut artifact = tables::artifact().clone();
    artifact.fingerprint ^= 1;
    codec::save_to_file(&artifact, &path).unwrap();
    let path = path.to_str().unwrap();

    let (passed, out) = run_args(&[path]);
    assert!(!passed);
    assert!(out.contains("fingerprint mismatch"));

    let (passed, _) = run_args(&["--no-verify", path]);
    assert!(passed);
}
