//! Compiled grammar artifacts.
//!
//! A [`GrammarArtifact`] is the loadable description of a grammar: its
//! node-kind symbol table, field names, external tokens and extras, plus
//! file-type metadata. The loader turns one into a [`crate::Language`].

use std::fmt;
use std::hash::Hasher;

use fnv::FnvHasher;
use serde::{Deserialize, Serialize};

use crate::symbol::{SymbolEntry, SymbolId};

/// Newest artifact ABI version this crate produces and accepts.
pub const LANGUAGE_VERSION: u32 = 15;

/// Oldest artifact ABI version the loader accepts by default.
pub const MIN_COMPATIBLE_LANGUAGE_VERSION: u32 = 13;

/// Descriptive metadata carried alongside the tables.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// Grammar package version.
    pub version: String,
    /// TextMate-style scope, e.g. `source.grz`.
    pub scope: String,
    /// File extensions (without the dot) handled by this grammar.
    pub file_types: Vec<String>,
}

/// A compiled grammar, ready to be loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarArtifact {
    /// Grammar name, a C identifier such as `grz`.
    pub name: String,
    /// Layout version of the artifact.
    pub abi_version: u32,
    /// Node kinds, indexed by [`SymbolId`].
    pub symbols: Vec<SymbolEntry>,
    /// Field names, sorted; field id `n` names `fields[n - 1]`.
    pub fields: Vec<String>,
    /// Tokens produced by the grammar's external scanner.
    pub external_tokens: Vec<SymbolId>,
    /// Tokens allowed anywhere (whitespace, comments).
    pub extras: Vec<SymbolId>,
    /// Keyword-extraction token, if the grammar declares one.
    pub word_token: Option<SymbolId>,
    /// Descriptive metadata.
    pub metadata: ArtifactMetadata,
    /// FNV-1a fingerprint of everything above. Zero means unsealed.
    pub fingerprint: u64,
}

impl GrammarArtifact {
    /// Creates an unsealed artifact with empty tables.
    #[must_use]
    pub fn new(name: impl Into<String>, abi_version: u32) -> Self {
        Self {
            name: name.into(),
            abi_version,
            symbols: Vec::new(),
            fields: Vec::new(),
            external_tokens: Vec::new(),
            extras: Vec::new(),
            word_token: None,
            metadata: ArtifactMetadata::default(),
            fingerprint: 0,
        }
    }

    /// Returns the number of symbols.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Returns the symbol entry for an id.
    #[must_use]
    pub fn symbol(&self, id: SymbolId) -> Option<&SymbolEntry> {
        self.symbols.get(id.index())
    }

    /// Returns true if a fingerprint has been stored.
    #[must_use]
    pub const fn is_sealed(&self) -> bool {
        self.fingerprint != 0
    }

    /// Stores the fingerprint of the current content.
    #[must_use]
    pub fn sealed(mut self) -> Self {
        self.fingerprint = self.compute_fingerprint();
        self
    }

    /// Computes the FNV-1a fingerprint of the artifact content.
    ///
    /// Integers are fed little-endian and strings are length-prefixed so the
    /// value is the same on every platform.
    #[must_use]
    pub fn compute_fingerprint(&self) -> u64 {
        let mut hasher = FnvHasher::default();
        write_str(&mut hasher, &self.name);
        hasher.write(&self.abi_version.to_le_bytes());

        write_len(&mut hasher, self.symbols.len());
        for entry in &self.symbols {
            write_str(&mut hasher, &entry.name);
            let flags = u8::from(entry.metadata.visible)
                | u8::from(entry.metadata.named) << 1
                | u8::from(entry.metadata.supertype) << 2;
            hasher.write(&[flags]);
        }

        write_len(&mut hasher, self.fields.len());
        for field in &self.fields {
            write_str(&mut hasher, field);
        }

        write_ids(&mut hasher, &self.external_tokens);
        write_ids(&mut hasher, &self.extras);
        match self.word_token {
            Some(id) => {
                hasher.write(&[1]);
                hasher.write(&id.0.to_le_bytes());
            }
            None => hasher.write(&[0]),
        }

        write_str(&mut hasher, &self.metadata.version);
        write_str(&mut hasher, &self.metadata.scope);
        write_len(&mut hasher, self.metadata.file_types.len());
        for file_type in &self.metadata.file_types {
            write_str(&mut hasher, file_type);
        }

        // Zero is reserved for "unsealed".
        hasher.finish().max(1)
    }
}

fn write_len(hasher: &mut FnvHasher, len: usize) {
    hasher.write(&(len as u64).to_le_bytes());
}

fn write_str(hasher: &mut FnvHasher, s: &str) {
    write_len(hasher, s.len());
    hasher.write(s.as_bytes());
}

fn write_ids(hasher: &mut FnvHasher, ids: &[SymbolId]) {
    write_len(hasher, ids.len());
    for id in ids {
        hasher.write(&id.0.to_le_bytes());
    }
}

/// Entry point that yields a compiled grammar artifact.
///
/// This is the safe counterpart of a generated `tree_sitter_<name>()`
/// function: it returns `None` when no artifact is available.
#[derive(Clone, Copy)]
pub struct LanguageFn(fn() -> Option<&'static GrammarArtifact>);

impl LanguageFn {
    /// Wraps an artifact-producing function.
    #[must_use]
    pub const fn from_fn(f: fn() -> Option<&'static GrammarArtifact>) -> Self {
        Self(f)
    }

    /// An entry point that never yields an artifact.
    #[must_use]
    pub const fn unset() -> Self {
        Self(no_artifact)
    }

    /// Calls the entry point.
    #[must_use]
    pub fn artifact(&self) -> Option<&'static GrammarArtifact> {
        (self.0)()
    }
}

fn no_artifact() -> Option<&'static GrammarArtifact> {
    None
}

impl fmt::Debug for LanguageFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LanguageFn").finish_non_exhaustive()
    }
}
