//! Integration tests for grammar loading
//!
//! The known-good artifact loads; an absent or damaged one does not.

use grz::grammar::{GrammarArtifact, LanguageFn, Loader, LoaderConfig, grz as tables, load};
use grz::{LANGUAGE, LoadFailure};

// =============================================================================
// Known-good artifact
// =============================================================================

#[test]
fn can_load_grammar() {
    let language = load(LANGUAGE.artifact());
    assert!(language.is_ok(), "Error loading Grz grammar");
}

#[test]
fn repeated_loads_yield_equal_handles() {
    let first = grz::language().unwrap();
    let second = grz::language().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.fingerprint(), second.fingerprint());
}

#[test]
fn strict_loader_accepts_built_in() {
    let loader = Loader::new(LoaderConfig::strict());
    assert!(loader.load_fn(LANGUAGE).is_ok());
}

// =============================================================================
// Absent artifact
// =============================================================================

#[test]
fn unset_artifact_fails() {
    let err = Loader::default().load_fn(LanguageFn::unset()).unwrap_err();
    assert_eq!(err.load_failure_reason(), Some(&LoadFailure::Missing));
}

#[test]
fn none_artifact_fails() {
    assert!(load(None).is_err());
}

// =============================================================================
// Damaged artifact
// =============================================================================

fn damaged() -> GrammarArtifact {
    tables::artifact().clone()
}

#[test]
fn renamed_kind_fails_fingerprint() {
    let mut artifact = damaged();
    artifact.symbols[1].name = "ident".into();
    let err = load(Some(&artifact)).unwrap_err();
    assert!(matches!(
        err.load_failure_reason(),
        Some(LoadFailure::FingerprintMismatch { .. })
    ));
}

#[test]
fn resealed_change_is_accepted() {
    let mut artifact = damaged();
    artifact.metadata.file_types.push("grezi".into());
    let language = load(Some(&artifact.sealed())).unwrap();
    assert_eq!(language.file_types(), ["grz", "grezi"]);
}

#[test]
fn future_abi_is_rejected() {
    let mut artifact = damaged();
    artifact.abi_version = 99;
    let err = load(Some(&artifact.sealed())).unwrap_err();
    assert!(matches!(
        err.load_failure_reason(),
        Some(LoadFailure::IncompatibleVersion { version: 99, .. })
    ));
}

#[test]
fn dangling_external_token_is_rejected() {
    let mut artifact = damaged();
    artifact.external_tokens.push(grz::grammar::SymbolId(500));
    let err = load(Some(&artifact.sealed())).unwrap_err();
    assert_eq!(
        err.load_failure_reason(),
        Some(&LoadFailure::DanglingSymbol {
            id: 500,
            context: "external token table"
        })
    );
}
