//! Error types for the Grz grammar workspace.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for Grz operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a load failure error.
    #[must_use]
    pub fn load_failure(reason: LoadFailure) -> Self {
        Self::new(ErrorKind::LoadFailure(reason))
    }

    /// Creates the error for an absent (null) grammar artifact.
    #[must_use]
    pub fn missing_artifact() -> Self {
        Self::load_failure(LoadFailure::Missing)
    }

    /// Creates the error for an artifact whose bytes cannot be decoded.
    #[must_use]
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::load_failure(LoadFailure::Corrupt(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Returns the load failure reason, if this is a load failure.
    #[must_use]
    pub const fn load_failure_reason(&self) -> Option<&LoadFailure> {
        match &self.kind {
            ErrorKind::LoadFailure(reason) => Some(reason),
            _ => None,
        }
    }

    /// Returns true if this error is a load failure.
    #[must_use]
    pub const fn is_load_failure(&self) -> bool {
        matches!(self.kind, ErrorKind::LoadFailure(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A grammar artifact could not be turned into a language handle.
    #[error("load failure: {0}")]
    LoadFailure(LoadFailure),

    /// Encoding an artifact failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Reading or writing an artifact file failed.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Why a grammar artifact was rejected by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadFailure {
    /// No artifact was supplied.
    #[error("grammar artifact is missing")]
    Missing,

    /// The artifact was built for an ABI the loader does not accept.
    #[error("incompatible ABI version {version}, expected {min}..={max}")]
    IncompatibleVersion {
        /// ABI version recorded in the artifact.
        version: u32,
        /// Oldest accepted version.
        min: u32,
        /// Newest accepted version.
        max: u32,
    },

    /// The grammar name is empty or not an identifier.
    #[error("invalid grammar name {0:?}")]
    InvalidName(String),

    /// The node-kind symbol table is malformed.
    #[error("invalid symbol table: {0}")]
    InvalidSymbolTable(String),

    /// The field-name table is malformed.
    #[error("invalid field table: {0}")]
    InvalidFieldTable(String),

    /// A table refers to a symbol id outside the symbol table.
    #[error("{context} refers to unknown symbol {id}")]
    DanglingSymbol {
        /// The offending symbol id.
        id: u16,
        /// Which table holds the reference.
        context: &'static str,
    },

    /// The stored fingerprint does not match the artifact content.
    #[error("fingerprint mismatch: stored {stored:#018x}, computed {computed:#018x}")]
    FingerprintMismatch {
        /// Fingerprint stored in the artifact.
        stored: u64,
        /// Fingerprint recomputed from the content.
        computed: u64,
    },

    /// The artifact bytes are not a valid encoded artifact.
    #[error("corrupt artifact: {0}")]
    Corrupt(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Artifact file path, or other description of the artifact source.
    pub source: Option<String>,
    /// Name of the grammar being loaded, when known.
    pub grammar: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the artifact source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the grammar name.
    #[must_use]
    pub fn with_grammar(mut self, grammar: impl Into<String>) -> Self {
        self.grammar = Some(grammar.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.grammar, &self.source) {
            (Some(grammar), Some(source)) => write!(f, "grammar {grammar} from {source}"),
            (Some(grammar), None) => write!(f, "grammar {grammar}"),
            (None, Some(source)) => write!(f, "from {source}"),
            (None, None) => Ok(()),
        }
    }
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;
