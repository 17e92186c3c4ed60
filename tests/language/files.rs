//! Integration tests for artifact files
//!
//! Tests writing artifacts to disk and loading them back through the loader.

use std::fs;

use grz::LoadFailure;
use grz::grammar::{Loader, codec, grz as tables};

#[test]
fn saved_artifact_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grz.grza");
    codec::save_to_file(tables::artifact(), &path).unwrap();

    let language = Loader::default().load_file(&path).unwrap();
    assert_eq!(language, grz::language().unwrap());
}

#[test]
fn absent_file_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = Loader::default()
        .load_file(dir.path().join("absent.grza"))
        .unwrap_err();
    assert_eq!(err.load_failure_reason(), Some(&LoadFailure::Missing));
}

#[test]
fn text_file_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.grz");
    fs::write(&path, "slide: Size[0] ^ 1:2, 1:2 ]").unwrap();

    let err = Loader::default().load_file(&path).unwrap_err();
    assert!(matches!(
        err.load_failure_reason(),
        Some(LoadFailure::Corrupt(_))
    ));
    let source = err.context.and_then(|c| c.source).unwrap();
    assert!(source.ends_with("notes.grz"));
}

#[test]
fn truncated_file_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.grza");
    let bytes = codec::to_bytes(tables::artifact()).unwrap();
    fs::write(&path, &bytes[..bytes.len() - 8]).unwrap();

    let err = Loader::default().load_file(&path).unwrap_err();
    assert!(err.is_load_failure());
}

#[test]
fn directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Loader::default().load_file(dir.path()).unwrap_err();
    assert!(!err.is_load_failure());
    assert!(err.to_string().starts_with("I/O error"));
}
