//! Integration tests for Layer 1: Language
//!
//! Tests for artifact loading, artifact files, and handle lookups.

mod files;
mod handle;
mod load;
