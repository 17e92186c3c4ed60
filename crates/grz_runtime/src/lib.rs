//! Load checks, reports, and the `grz` CLI.
//!
//! This crate provides:
//! - [`check`] - One-shot grammar load checks
//! - [`report`] - Human-readable grammar summaries
//! - [`cli`] - Argument parsing and execution for the `grz` binary
//! - [`logging`] - Tracing subscriber setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod check;
pub mod cli;
pub mod logging;
pub mod report;

pub use check::{CheckOutcome, LOAD_ERROR_MESSAGE, check_artifact, check_file, check_fn, check_grammar};
pub use cli::{CliConfig, CliError};
