//! Grz - grammar binding for the Grz slide-deck language
//!
//! This crate re-exports all layers of the workspace for convenient access
//! and exposes the Grz grammar entry point.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: grz_runtime     - Load checks, reports, `grz` CLI
//! Layer 1: grz_language    - Artifact, validation, codec, loader, Language
//! Layer 0: grz_foundation  - Error, ErrorKind, LoadFailure
//! ```
//!
//! # Example
//!
//! ```
//! let language = grz::language().expect("Error loading Grz grammar");
//! assert_eq!(language.name(), "grz");
//! ```

pub use grz_foundation as foundation;
pub use grz_language as grammar;
pub use grz_runtime as runtime;

pub use grz_foundation::{Error, LoadFailure, Result};
pub use grz_language::Language;
pub use grz_language::grz::{FILE_TYPES, LANGUAGE, NAME, SCOPE};

/// Loads the Grz grammar.
///
/// # Errors
/// Returns a load failure if the compiled artifact is rejected.
pub fn language() -> Result<Language> {
    grz_language::grz::language()
}
