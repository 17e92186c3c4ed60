//! Symbol and field identifiers.
//!
//! Every node kind a grammar can produce is a symbol: an index into the
//! artifact's symbol table. Fields are named child slots, numbered from 1.

use std::fmt;
use std::num::NonZeroU16;

use serde::{Deserialize, Serialize};

/// Index into a grammar's symbol table.
///
/// Symbol 0 is always the builtin `end` symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolId(pub u16);

impl SymbolId {
    /// The builtin end-of-input symbol.
    pub const END: Self = Self(0);

    /// Returns the table index of this symbol.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 1-based index into a grammar's field table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(NonZeroU16);

impl FieldId {
    /// Creates a field id, returning `None` for 0.
    #[must_use]
    pub const fn new(id: u16) -> Option<Self> {
        match NonZeroU16::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// Returns the raw 1-based id.
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Returns the 0-based index into the field name table.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visibility flags for one symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SymbolMetadata {
    /// Nodes of this kind appear in the tree.
    pub visible: bool,
    /// The kind has a rule name rather than being a literal token.
    pub named: bool,
    /// The kind is a supertype grouping other kinds.
    pub supertype: bool,
}

impl SymbolMetadata {
    /// A visible, named rule such as `slide`.
    pub const NAMED: Self = Self {
        visible: true,
        named: true,
        supertype: false,
    };

    /// A visible literal token such as `"{"`.
    pub const ANONYMOUS: Self = Self {
        visible: true,
        named: false,
        supertype: false,
    };

    /// A hidden rule such as `_definition`.
    pub const HIDDEN: Self = Self {
        visible: false,
        named: true,
        supertype: false,
    };

    /// A generated helper such as `source_file_repeat1`.
    pub const AUXILIARY: Self = Self {
        visible: false,
        named: false,
        supertype: false,
    };

    /// Classifies these flags.
    #[must_use]
    pub const fn kind(self) -> SymbolKind {
        match (self.visible, self.named) {
            (true, true) => SymbolKind::Regular,
            (true, false) => SymbolKind::Anonymous,
            (false, true) => SymbolKind::Hidden,
            (false, false) => SymbolKind::Auxiliary,
        }
    }
}

/// Classification of a symbol by its visibility flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// Visible and named.
    Regular,
    /// Visible literal token.
    Anonymous,
    /// Named but hidden from the tree.
    Hidden,
    /// Neither visible nor named.
    Auxiliary,
}

impl SymbolKind {
    /// Returns a lowercase name for this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Anonymous => "anonymous",
            Self::Hidden => "hidden",
            Self::Auxiliary => "auxiliary",
        }
    }
}

/// One row of the symbol table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolEntry {
    /// The node kind name (`slide`, `"{"`, ...).
    pub name: String,
    /// Visibility flags.
    pub metadata: SymbolMetadata,
}

impl SymbolEntry {
    /// Creates a symbol entry.
    #[must_use]
    pub fn new(name: impl Into<String>, metadata: SymbolMetadata) -> Self {
        Self {
            name: name.into(),
            metadata,
        }
    }
}
