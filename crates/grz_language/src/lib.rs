//! Grammar artifacts and language handle loading for Grz.
//!
//! This crate provides:
//! - [`GrammarArtifact`] - Compiled grammar tables
//! - [`Loader`] - Validation and loading of artifacts into handles
//! - [`Language`] - Handle to a loaded grammar
//! - [`grz`] - The compiled Grz grammar itself
//! - [`codec`] - Artifact files

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod artifact;
pub mod codec;
pub mod config;
pub mod grz;
pub mod language;
pub mod loader;
pub mod symbol;
pub mod validate;


pub use artifact::{
    ArtifactMetadata, GrammarArtifact, LANGUAGE_VERSION, LanguageFn,
    MIN_COMPATIBLE_LANGUAGE_VERSION,
};
pub use config::LoaderConfig;
pub use language::Language;
pub use loader::{Loader, load};
pub use symbol::{FieldId, SymbolEntry, SymbolId, SymbolKind, SymbolMetadata};
