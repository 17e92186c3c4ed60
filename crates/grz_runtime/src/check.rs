//! Grammar load checks.
//!
//! A check invokes the loader once and reports whether a language handle
//! came back. There are no retries: the first failure is the result.

use std::fmt;
use std::path::Path;

use grz_foundation::Error;
use grz_language::{GrammarArtifact, Language, LanguageFn, Loader, grz};

/// Message reported when a grammar fails to load.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading Grz grammar";

/// Result of one load check.
#[derive(Debug)]
pub enum CheckOutcome {
    /// The loader produced a handle.
    Loaded(Language),
    /// The loader failed.
    Failed {
        /// Fixed failure message.
        message: &'static str,
        /// Why loading failed.
        error: Error,
    },
}

impl CheckOutcome {
    fn from_result(result: grz_foundation::Result<Language>) -> Self {
        match result {
            Ok(language) => Self::Loaded(language),
            Err(error) => Self::Failed {
                message: LOAD_ERROR_MESSAGE,
                error,
            },
        }
    }

    /// Returns true if the check passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Returns the loaded handle, if the check passed.
    #[must_use]
    pub const fn language(&self) -> Option<&Language> {
        match self {
            Self::Loaded(language) => Some(language),
            Self::Failed { .. } => None,
        }
    }

    /// Returns the failure cause, if the check failed.
    #[must_use]
    pub const fn error(&self) -> Option<&Error> {
        match self {
            Self::Loaded(_) => None,
            Self::Failed { error, .. } => Some(error),
        }
    }

    /// Converts into the loaded handle or the failure cause.
    ///
    /// # Errors
    /// Returns the load error if the check failed.
    pub fn into_result(self) -> grz_foundation::Result<Language> {
        match self {
            Self::Loaded(language) => Ok(language),
            Self::Failed { error, .. } => Err(error),
        }
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded(language) => write!(f, "ok: {language}"),
            Self::Failed { message, error } => {
                write!(f, "{message}: {error}")?;
                if let Some(context) = &error.context {
                    write!(f, " ({context})")?;
                }
                Ok(())
            }
        }
    }
}

/// Checks that the built-in Grz grammar loads.
#[must_use]
pub fn check_grammar(loader: &Loader) -> CheckOutcome {
    check_fn(loader, grz::LANGUAGE)
}

/// Checks the artifact yielded by an entry point.
#[must_use]
pub fn check_fn(loader: &Loader, language_fn: LanguageFn) -> CheckOutcome {
    CheckOutcome::from_result(loader.load_fn(language_fn))
}

/// Checks an artifact, or the absence of one.
#[must_use]
pub fn check_artifact(loader: &Loader, artifact: Option<&GrammarArtifact>) -> CheckOutcome {
    CheckOutcome::from_result(loader.load(artifact))
}

/// Checks an artifact file.
#[must_use]
pub fn check_file(loader: &Loader, path: &Path) -> CheckOutcome {
    CheckOutcome::from_result(loader.load_file(path))
}
