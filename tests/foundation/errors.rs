//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use grz::foundation::{Error, ErrorContext, ErrorKind, LoadFailure};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_missing_artifact() {
    let err = Error::missing_artifact();
    assert!(matches!(err.kind, ErrorKind::LoadFailure(LoadFailure::Missing)));
    assert!(err.is_load_failure());
}

#[test]
fn error_corrupt() {
    let err = Error::corrupt("bad header");
    assert!(matches!(
        err.load_failure_reason(),
        Some(LoadFailure::Corrupt(msg)) if msg == "bad header"
    ));
}

#[test]
fn error_io_and_serialization_are_not_load_failures() {
    assert!(!Error::io("denied").is_load_failure());
    assert!(!Error::serialization("too big").is_load_failure());
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn error_display_dangling_symbol() {
    let err = Error::load_failure(LoadFailure::DanglingSymbol {
        id: 70,
        context: "word token",
    });
    assert_eq!(
        err.to_string(),
        "load failure: word token refers to unknown symbol 70"
    );
}

#[test]
fn error_display_invalid_tables() {
    let symbols = Error::load_failure(LoadFailure::InvalidSymbolTable("table is empty".into()));
    assert_eq!(
        symbols.to_string(),
        "load failure: invalid symbol table: table is empty"
    );

    let fields = Error::load_failure(LoadFailure::InvalidFieldTable("unsorted".into()));
    assert!(fields.to_string().contains("invalid field table"));
}

#[test]
fn error_display_io() {
    assert_eq!(Error::io("disk full").to_string(), "I/O error: disk full");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_display_variants() {
    assert_eq!(ErrorContext::new().to_string(), "");
    assert_eq!(
        ErrorContext::new().with_grammar("grz").to_string(),
        "grammar grz"
    );
    assert_eq!(
        ErrorContext::new().with_source("a.grza").to_string(),
        "from a.grza"
    );
}

#[test]
fn context_survives_with_context() {
    let err = Error::missing_artifact().with_context(ErrorContext::new().with_source("x.grza"));
    assert_eq!(
        err.context.as_ref().and_then(|c| c.source.as_deref()),
        Some("x.grza")
    );
    // Display shows the kind only.
    assert_eq!(err.to_string(), "load failure: grammar artifact is missing");
}
