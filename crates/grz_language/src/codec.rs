//! Artifact serialization using `MessagePack`.
//!
//! An encoded artifact is the 4-byte [`MAGIC`] header followed by the
//! artifact serialized with named fields. Anything else is reported as a
//! corrupt artifact.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use grz_foundation::{Error, ErrorContext, Result};
use serde::Deserialize;

use crate::artifact::GrammarArtifact;

/// Header that starts every encoded artifact.
pub const MAGIC: &[u8; 4] = b"GRZ\x01";

/// Nesting limit while decoding. The artifact schema is four levels deep.
const MAX_DEPTH: usize = 32;

/// Serializes an artifact to bytes.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(artifact: &GrammarArtifact) -> Result<Vec<u8>> {
    let body = rmp_serde::to_vec_named(artifact).map_err(|e| Error::serialization(e.to_string()))?;
    let mut bytes = Vec::with_capacity(MAGIC.len() + body.len());
    bytes.extend_from_slice(MAGIC);
    bytes.extend_from_slice(&body);
    Ok(bytes)
}

/// Deserializes an artifact from bytes.
///
/// # Errors
///
/// Returns a corrupt-artifact load failure if the header is wrong, the
/// body does not decode, or bytes follow the encoded artifact.
pub fn from_bytes(bytes: &[u8]) -> Result<GrammarArtifact> {
    let Some(body) = bytes.strip_prefix(MAGIC.as_slice()) else {
        return Err(Error::corrupt(if bytes.len() < MAGIC.len() {
            format!("{} bytes is too short for an artifact", bytes.len())
        } else {
            "missing GRZ artifact header".to_string()
        }));
    };
    let mut deserializer = rmp_serde::Deserializer::new(body);
    deserializer.set_max_depth(MAX_DEPTH);
    let artifact = GrammarArtifact::deserialize(&mut deserializer)
        .map_err(|e| Error::corrupt(e.to_string()))?;

    let rest = deserializer.into_inner();
    if !rest.is_empty() {
        return Err(Error::corrupt(format!(
            "{} trailing bytes after artifact",
            rest.len()
        )));
    }
    Ok(artifact)
}

/// Saves an artifact to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(artifact: &GrammarArtifact, path: P) -> Result<()> {
    let path = path.as_ref();
    let context = || ErrorContext::new().with_source(path.display().to_string());

    let file = File::create(path).map_err(|e| {
        Error::io(format!("failed to create file '{}': {e}", path.display())).with_context(context())
    })?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(artifact)?;

    writer.write_all(&bytes).map_err(|e| {
        Error::io(format!("failed to write to file '{}': {e}", path.display()))
            .with_context(context())
    })?;

    writer.flush().map_err(|e| {
        Error::io(format!("failed to flush file '{}': {e}", path.display())).with_context(context())
    })?;

    Ok(())
}

/// Loads an artifact from a file.
///
/// A file that does not exist is a missing artifact, not an I/O error.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if decoding fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<GrammarArtifact> {
    let path = path.as_ref();
    let context = || ErrorContext::new().with_source(path.display().to_string());

    let file = File::open(path).map_err(|e| {
        let err = if e.kind() == io::ErrorKind::NotFound {
            Error::missing_artifact()
        } else {
            Error::io(format!("failed to open file '{}': {e}", path.display()))
        };
        err.with_context(context())
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();

    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::io(format!("failed to read file '{}': {e}", path.display())).with_context(context())
    })?;

    from_bytes(&bytes).map_err(|e| e.with_context(context()))
}
