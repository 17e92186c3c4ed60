//! Core error types for the Grz grammar workspace.
//!
//! This crate provides:
//! - [`Error`] - Rich error type with context
//! - [`ErrorKind`] - Categorized error kinds
//! - [`LoadFailure`] - Why a grammar artifact was rejected

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;

pub use error::{Error, ErrorContext, ErrorKind, LoadFailure, Result};
