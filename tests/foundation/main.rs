//! Integration tests for Layer 0: Foundation
//!
//! Tests for error construction, display, and context.

mod errors;
