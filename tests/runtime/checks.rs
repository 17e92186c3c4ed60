//! Integration tests for load checks
//!
//! A check passes with a handle or fails with the fixed load error message.

use grz::grammar::{LanguageFn, Loader, LoaderConfig, codec, grz as tables};
use grz::runtime::{LOAD_ERROR_MESSAGE, check_artifact, check_file, check_fn, check_grammar};

#[test]
fn built_in_grammar_loads() {
    let outcome = check_grammar(&Loader::default());
    assert!(outcome.passed(), "{LOAD_ERROR_MESSAGE}");
    assert!(outcome.to_string().starts_with("ok: grz (abi "));
}

#[test]
fn absent_grammar_reports_message() {
    let outcome = check_fn(&Loader::default(), LanguageFn::unset());
    assert_eq!(
        outcome.to_string(),
        "Error loading Grz grammar: load failure: grammar artifact is missing"
    );
}

#[test]
fn narrowed_abi_window_fails_check() {
    let loader = Loader::new(LoaderConfig::default().with_abi_range(16, 20));
    let outcome = check_artifact(&loader, Some(tables::artifact()));
    assert!(!outcome.passed());
    assert!(outcome.error().is_some_and(grz::Error::is_load_failure));
}

#[test]
fn file_check_passes_after_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grz.grza");
    codec::save_to_file(tables::artifact(), &path).unwrap();

    let language = check_file(&Loader::default(), &path).into_result().unwrap();
    assert_eq!(language.name(), "grz");
}
