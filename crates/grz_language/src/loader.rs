//! Grammar loading.
//!
//! The loader is the single path from a compiled artifact to a
//! [`Language`]: every entry point funnels into [`Loader::load`], which
//! validates the artifact and builds the handle.

use std::path::Path;

use grz_foundation::{Error, ErrorContext, Result};

use crate::artifact::{GrammarArtifact, LanguageFn};
use crate::codec;
use crate::config::LoaderConfig;
use crate::language::Language;
use crate::validate::validate;

/// Turns grammar artifacts into language handles.
#[derive(Clone, Debug, Default)]
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    /// Creates a loader with the given configuration.
    #[must_use]
    pub const fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Loads an artifact.
    ///
    /// `None` stands for an absent artifact and always fails.
    ///
    /// # Errors
    /// Returns a load failure if the artifact is absent or invalid.
    pub fn load(&self, artifact: Option<&GrammarArtifact>) -> Result<Language> {
        let Some(artifact) = artifact else {
            tracing::warn!("grammar artifact is missing");
            return Err(Error::missing_artifact());
        };

        if let Err(err) = validate(artifact, &self.config) {
            tracing::warn!(grammar = %artifact.name, error = %err, "rejected grammar artifact");
            return Err(err.with_context(ErrorContext::new().with_grammar(artifact.name.clone())));
        }

        tracing::debug!(
            grammar = %artifact.name,
            abi = artifact.abi_version,
            symbols = artifact.symbols.len(),
            fields = artifact.fields.len(),
            "loaded grammar"
        );
        Ok(Language::from_validated(artifact.clone()))
    }

    /// Loads the artifact yielded by an entry point.
    ///
    /// # Errors
    /// Returns a load failure if the entry point yields nothing or the
    /// artifact is invalid.
    pub fn load_fn(&self, language_fn: LanguageFn) -> Result<Language> {
        self.load(language_fn.artifact())
    }

    /// Decodes and loads an encoded artifact.
    ///
    /// # Errors
    /// Returns a load failure if the bytes are corrupt or the artifact is
    /// invalid.
    pub fn load_bytes(&self, bytes: &[u8]) -> Result<Language> {
        let artifact = codec::from_bytes(bytes).inspect_err(|err| {
            tracing::warn!(error = %err, "could not decode grammar artifact");
        })?;
        self.load(Some(&artifact))
    }

    /// Reads, decodes and loads an artifact file.
    ///
    /// # Errors
    /// Returns a load failure if the file is absent or corrupt, or the
    /// artifact is invalid; returns an I/O error if the file cannot be read.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Language> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading grammar artifact file");
        let artifact = codec::load_from_file(path).inspect_err(|err| {
            tracing::warn!(path = %path.display(), error = %err, "could not read grammar artifact");
        })?;
        self.load(Some(&artifact)).map_err(|err| {
            let context = err
                .context
                .clone()
                .unwrap_or_default()
                .with_source(path.display().to_string());
            err.with_context(context)
        })
    }
}

/// Loads an artifact with the default configuration.
///
/// # Errors
/// Returns a load failure if the artifact is absent or invalid.
pub fn load(artifact: Option<&GrammarArtifact>) -> Result<Language> {
    Loader::default().load(artifact)
}
