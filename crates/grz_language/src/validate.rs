//! Load-time checks on grammar artifacts.
//!
//! An artifact must pass every check before the loader hands out a
//! [`crate::Language`]. Each violation maps to one [`LoadFailure`] reason.

use grz_foundation::{Error, LoadFailure, Result};

use crate::artifact::GrammarArtifact;
use crate::config::LoaderConfig;
use crate::symbol::SymbolId;

/// Name every symbol table must use for symbol 0.
pub const END_SYMBOL_NAME: &str = "end";

/// Checks an artifact against a loader configuration.
///
/// # Errors
/// Returns a [`LoadFailure`] error describing the first violation found.
pub fn validate(artifact: &GrammarArtifact, config: &LoaderConfig) -> Result<()> {
    check_name(&artifact.name)?;
    check_abi(artifact.abi_version, config)?;
    check_symbols(artifact)?;
    check_fields(&artifact.fields)?;
    check_references(artifact)?;
    check_fingerprint(artifact, config)
}

fn fail(reason: LoadFailure) -> Result<()> {
    Err(Error::load_failure(reason))
}

fn check_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        fail(LoadFailure::InvalidName(name.to_string()))
    }
}

fn check_abi(version: u32, config: &LoaderConfig) -> Result<()> {
    if config.accepts_abi(version) {
        Ok(())
    } else {
        fail(LoadFailure::IncompatibleVersion {
            version,
            min: config.min_abi_version,
            max: config.max_abi_version,
        })
    }
}

fn check_symbols(artifact: &GrammarArtifact) -> Result<()> {
    let symbols = &artifact.symbols;
    let Some(first) = symbols.first() else {
        return fail(LoadFailure::InvalidSymbolTable("table is empty".into()));
    };
    if first.name != END_SYMBOL_NAME {
        return fail(LoadFailure::InvalidSymbolTable(format!(
            "symbol 0 must be {END_SYMBOL_NAME:?}, found {:?}",
            first.name
        )));
    }
    if symbols.len() > usize::from(u16::MAX) + 1 {
        return fail(LoadFailure::InvalidSymbolTable(format!(
            "{} symbols exceed the id space",
            symbols.len()
        )));
    }
    if let Some(index) = symbols.iter().position(|entry| entry.name.is_empty()) {
        return fail(LoadFailure::InvalidSymbolTable(format!(
            "symbol {index} has an empty name"
        )));
    }
    Ok(())
}

fn check_fields(fields: &[String]) -> Result<()> {
    if fields.len() > usize::from(u16::MAX) {
        return fail(LoadFailure::InvalidFieldTable(format!(
            "{} fields exceed the id space",
            fields.len()
        )));
    }
    if let Some(index) = fields.iter().position(String::is_empty) {
        return fail(LoadFailure::InvalidFieldTable(format!(
            "field {} has an empty name",
            index + 1
        )));
    }
    for pair in fields.windows(2) {
        if pair[0] >= pair[1] {
            return fail(LoadFailure::InvalidFieldTable(format!(
                "{:?} must sort strictly before {:?}",
                pair[0], pair[1]
            )));
        }
    }
    Ok(())
}

fn check_references(artifact: &GrammarArtifact) -> Result<()> {
    let exists = |id: SymbolId| id.index() < artifact.symbols.len();

    for &id in &artifact.external_tokens {
        if !exists(id) {
            return fail(LoadFailure::DanglingSymbol {
                id: id.0,
                context: "external token table",
            });
        }
    }
    for &id in &artifact.extras {
        if !exists(id) {
            return fail(LoadFailure::DanglingSymbol {
                id: id.0,
                context: "extras",
            });
        }
    }
    if let Some(word) = artifact.word_token {
        match artifact.symbol(word) {
            None => {
                return fail(LoadFailure::DanglingSymbol {
                    id: word.0,
                    context: "word token",
                });
            }
            Some(entry) if !entry.metadata.named => {
                return fail(LoadFailure::InvalidSymbolTable(format!(
                    "word token {:?} is not a named symbol",
                    entry.name
                )));
            }
            Some(_) => {}
        }
    }
    Ok(())
}

fn check_fingerprint(artifact: &GrammarArtifact, config: &LoaderConfig) -> Result<()> {
    if !artifact.is_sealed() {
        if config.require_fingerprint {
            return fail(LoadFailure::FingerprintMismatch {
                stored: 0,
                computed: artifact.compute_fingerprint(),
            });
        }
        return Ok(());
    }
    if config.verify_fingerprint {
        let computed = artifact.compute_fingerprint();
        if computed != artifact.fingerprint {
            return fail(LoadFailure::FingerprintMismatch {
                stored: artifact.fingerprint,
                computed,
            });
        }
    }
    Ok(())
}
