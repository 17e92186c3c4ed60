//! Configuration for the grammar loader.

use crate::artifact::{LANGUAGE_VERSION, MIN_COMPATIBLE_LANGUAGE_VERSION};

/// Configuration for the grammar loader.
///
/// Controls which artifact ABI versions are accepted and how strictly
/// artifacts are checked before a handle is produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Oldest accepted artifact ABI version.
    pub min_abi_version: u32,

    /// Newest accepted artifact ABI version.
    pub max_abi_version: u32,

    /// Reject artifacts whose stored fingerprint does not match their content.
    pub verify_fingerprint: bool,

    /// Reject artifacts that were never sealed with a fingerprint.
    pub require_fingerprint: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            min_abi_version: MIN_COMPATIBLE_LANGUAGE_VERSION,
            max_abi_version: LANGUAGE_VERSION,
            verify_fingerprint: true,
            require_fingerprint: false,
        }
    }
}

impl LoaderConfig {
    /// Creates a configuration that only accepts sealed, current-ABI artifacts.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            min_abi_version: LANGUAGE_VERSION,
            max_abi_version: LANGUAGE_VERSION,
            verify_fingerprint: true,
            require_fingerprint: true,
        }
    }

    /// Creates a configuration that skips integrity checks.
    ///
    /// Table consistency and the ABI window are still enforced.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            verify_fingerprint: false,
            require_fingerprint: false,
            ..Self::default()
        }
    }

    /// Builder method to set the accepted ABI window.
    #[must_use]
    pub fn with_abi_range(mut self, min: u32, max: u32) -> Self {
        self.min_abi_version = min;
        self.max_abi_version = max;
        self
    }

    /// Builder method to set fingerprint verification.
    #[must_use]
    pub fn with_verify_fingerprint(mut self, verify: bool) -> Self {
        self.verify_fingerprint = verify;
        self
    }

    /// Builder method to require sealed artifacts.
    #[must_use]
    pub fn with_require_fingerprint(mut self, require: bool) -> Self {
        self.require_fingerprint = require;
        self
    }

    /// Returns true if `version` falls inside the accepted ABI window.
    #[must_use]
    pub const fn accepts_abi(&self, version: u32) -> bool {
        version >= self.min_abi_version && version <= self.max_abi_version
    }
}
