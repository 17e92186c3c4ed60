//! The loaded language handle.
//!
//! A [`Language`] is only obtainable through the loader, so holding one
//! means the underlying artifact passed validation. Clones share the same
//! tables.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use fnv::FnvHashMap;

use crate::artifact::GrammarArtifact;
use crate::symbol::{FieldId, SymbolId, SymbolKind, SymbolMetadata};

/// Handle to a successfully loaded grammar.
#[derive(Clone)]
pub struct Language {
    inner: Arc<LanguageInner>,
}

struct LanguageInner {
    artifact: GrammarArtifact,
    kinds: FnvHashMap<String, KindIds>,
    fields: FnvHashMap<String, FieldId>,
}

/// First named and first anonymous visible symbol carrying one name.
#[derive(Default, Clone, Copy)]
struct KindIds {
    named: Option<SymbolId>,
    anonymous: Option<SymbolId>,
}

impl Language {
    /// Wraps an artifact that already passed validation.
    pub(crate) fn from_validated(artifact: GrammarArtifact) -> Self {
        let mut kinds: FnvHashMap<String, KindIds> = FnvHashMap::default();
        for (index, entry) in artifact.symbols.iter().enumerate() {
            let SymbolMetadata {
                visible,
                named,
                supertype,
            } = entry.metadata;
            if !visible && !supertype {
                continue;
            }
            // Validation bounds the table to the u16 id space.
            let id = SymbolId(u16::try_from(index).unwrap_or(u16::MAX));
            let ids = kinds.entry(entry.name.clone()).or_default();
            let slot = if named {
                &mut ids.named
            } else {
                &mut ids.anonymous
            };
            slot.get_or_insert(id);
        }

        let fields = artifact
            .fields
            .iter()
            .zip(1u16..)
            .filter_map(|(name, id)| FieldId::new(id).map(|id| (name.clone(), id)))
            .collect();

        Self {
            inner: Arc::new(LanguageInner {
                artifact,
                kinds,
                fields,
            }),
        }
    }

    /// Returns the artifact this handle was loaded from.
    #[must_use]
    pub fn artifact(&self) -> &GrammarArtifact {
        &self.inner.artifact
    }

    /// Returns the grammar name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.artifact.name
    }

    /// Returns the artifact ABI version.
    #[must_use]
    pub fn abi_version(&self) -> u32 {
        self.inner.artifact.abi_version
    }

    /// Returns the grammar package version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.inner.artifact.metadata.version
    }

    /// Returns the artifact fingerprint (zero if it was never sealed).
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        self.inner.artifact.fingerprint
    }

    /// Returns the number of node kinds, visible or not.
    #[must_use]
    pub fn node_kind_count(&self) -> usize {
        self.inner.artifact.symbols.len()
    }

    /// Returns the name of a node kind.
    #[must_use]
    pub fn node_kind_for_id(&self, id: SymbolId) -> Option<&str> {
        self.inner.artifact.symbol(id).map(|entry| entry.name.as_str())
    }

    /// Returns the id of a visible node kind by name.
    ///
    /// `named` selects between a rule (`identifier`) and a literal token of
    /// the same spelling.
    #[must_use]
    pub fn id_for_node_kind(&self, kind: &str, named: bool) -> Option<SymbolId> {
        let ids = self.inner.kinds.get(kind)?;
        if named { ids.named } else { ids.anonymous }
    }

    /// Returns true if the node kind is named.
    #[must_use]
    pub fn node_kind_is_named(&self, id: SymbolId) -> bool {
        self.metadata(id).is_some_and(|m| m.named)
    }

    /// Returns true if nodes of this kind appear in trees.
    #[must_use]
    pub fn node_kind_is_visible(&self, id: SymbolId) -> bool {
        self.metadata(id).is_some_and(|m| m.visible)
    }

    /// Returns true if the node kind is a supertype.
    #[must_use]
    pub fn node_kind_is_supertype(&self, id: SymbolId) -> bool {
        self.metadata(id).is_some_and(|m| m.supertype)
    }

    /// Classifies a node kind.
    #[must_use]
    pub fn symbol_kind(&self, id: SymbolId) -> Option<SymbolKind> {
        self.metadata(id).map(SymbolMetadata::kind)
    }

    fn metadata(&self, id: SymbolId) -> Option<SymbolMetadata> {
        self.inner.artifact.symbol(id).map(|entry| entry.metadata)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.inner.artifact.fields.len()
    }

    /// Returns the name of a field.
    #[must_use]
    pub fn field_name_for_id(&self, id: FieldId) -> Option<&str> {
        self.inner.artifact.fields.get(id.index()).map(String::as_str)
    }

    /// Returns the id of a field by name.
    #[must_use]
    pub fn field_id_for_name(&self, name: &str) -> Option<FieldId> {
        self.inner.fields.get(name).copied()
    }

    /// Returns the tokens produced by the external scanner.
    #[must_use]
    pub fn external_tokens(&self) -> &[SymbolId] {
        &self.inner.artifact.external_tokens
    }

    /// Returns the tokens allowed anywhere.
    #[must_use]
    pub fn extras(&self) -> &[SymbolId] {
        &self.inner.artifact.extras
    }

    /// Returns the keyword-extraction token.
    #[must_use]
    pub fn word_token(&self) -> Option<SymbolId> {
        self.inner.artifact.word_token
    }

    /// Returns the scope name, e.g. `source.grz`.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.inner.artifact.metadata.scope
    }

    /// Returns the file extensions handled by this grammar.
    #[must_use]
    pub fn file_types(&self) -> &[String] {
        &self.inner.artifact.metadata.file_types
    }

    /// Returns true if the path's extension is one of the grammar's file types.
    #[must_use]
    pub fn matches_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.file_types().iter().any(|ft| ft == ext))
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner.artifact == other.inner.artifact
    }
}

impl Eq for Language {}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Language")
            .field("name", &self.name())
            .field("abi_version", &self.abi_version())
            .field("node_kinds", &self.node_kind_count())
            .field("fields", &self.field_count())
            .finish()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (abi {})", self.name(), self.abi_version())
    }
}
