//! Integration tests for Layer 2: Runtime
//!
//! Tests for load checks and the command-line flow.

mod checks;
mod cli;
