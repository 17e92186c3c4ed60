//! Command-line interface for `grz`.
//!
//! Arguments are parsed into a [`CliConfig`], which [`run`] executes
//! against an output writer so the whole flow is testable.

use std::io::{self, Write};
use std::path::PathBuf;

use grz_language::{Loader, LoaderConfig, codec, grz};
use thiserror::Error;

use crate::check::{CheckOutcome, check_file, check_grammar};
use crate::report;

/// Errors from argument parsing or from writing output.
#[derive(Debug, Error)]
pub enum CliError {
    /// An argument was not understood.
    #[error("{0}")]
    Usage(String),
    /// Emitting the built-in artifact failed.
    #[error(transparent)]
    Grammar(#[from] grz_foundation::Error),
    /// Writing to the output failed.
    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

/// CLI configuration parsed from arguments.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Artifact files to check; empty means the built-in grammar.
    pub artifacts: Vec<PathBuf>,
    /// Print node-kind and field tables of loaded grammars.
    pub info: bool,
    /// Write the built-in artifact here.
    pub emit: Option<PathBuf>,
    /// Override the oldest accepted ABI version.
    pub min_abi: Option<u32>,
    /// Override the newest accepted ABI version.
    pub max_abi: Option<u32>,
    /// Skip fingerprint verification.
    pub no_verify: bool,
    /// Enable debug logging.
    pub verbose: bool,
    /// Print help and exit.
    pub show_help: bool,
    /// Print the version and exit.
    pub show_version: bool,
}

impl CliConfig {
    /// Builds the loader configuration these flags describe.
    #[must_use]
    pub fn loader_config(&self) -> LoaderConfig {
        let defaults = LoaderConfig::default();
        LoaderConfig::default()
            .with_abi_range(
                self.min_abi.unwrap_or(defaults.min_abi_version),
                self.max_abi.unwrap_or(defaults.max_abi_version),
            )
            .with_verify_fingerprint(!self.no_verify)
    }
}

/// Parses command-line arguments (including the program name).
///
/// # Errors
/// Returns a usage error for unknown options or missing values.
pub fn parse_args(args: Vec<String>) -> Result<CliConfig, CliError> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-v" | "--verbose" => config.verbose = true,
            "--info" => config.info = true,
            "--no-verify" => config.no_verify = true,
            "--emit" => config.emit = Some(PathBuf::from(value(&mut args, "--emit")?)),
            "--min-abi" => config.min_abi = Some(number(&mut args, "--min-abi")?),
            "--max-abi" => config.max_abi = Some(number(&mut args, "--max-abi")?),
            arg if arg.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown option: {arg}")));
            }
            path => config.artifacts.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, CliError> {
    args.next()
        .ok_or_else(|| CliError::Usage(format!("{flag} requires a value")))
}

fn number(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<u32, CliError> {
    let raw = value(args, flag)?;
    raw.parse()
        .map_err(|_| CliError::Usage(format!("invalid {flag} value: {raw}")))
}

/// Executes a parsed configuration, writing results to `out`.
///
/// Returns `Ok(true)` when every check passed.
///
/// # Errors
/// Returns an error if emitting the artifact or writing output fails.
pub fn run(config: &CliConfig, out: &mut dyn Write) -> Result<bool, CliError> {
    if config.show_help {
        out.write_all(HELP.as_bytes())?;
        return Ok(true);
    }

    if config.show_version {
        writeln!(out, "grz {}", env!("CARGO_PKG_VERSION"))?;
        return Ok(true);
    }

    if let Some(path) = &config.emit {
        codec::save_to_file(grz::artifact(), path)?;
        writeln!(out, "wrote {}", path.display())?;
        if config.artifacts.is_empty() {
            return Ok(true);
        }
    }

    let loader = Loader::new(config.loader_config());
    let outcomes: Vec<(String, CheckOutcome)> = if config.artifacts.is_empty() {
        vec![("<built-in>".to_string(), check_grammar(&loader))]
    } else {
        config
            .artifacts
            .iter()
            .map(|path| (path.display().to_string(), check_file(&loader, path)))
            .collect()
    };

    let mut all_passed = true;
    for (source, outcome) in &outcomes {
        match outcome.language() {
            Some(language) => {
                writeln!(out, "{source}: ok: {}", report::summary(language))?;
                if config.info {
                    writeln!(out, "{}", report::tables(language))?;
                }
            }
            None => {
                all_passed = false;
                writeln!(out, "{source}: {outcome}")?;
            }
        }
    }

    Ok(all_passed)
}

const HELP: &str = "grz - load and check Grz grammar artifacts

USAGE:
    grz [OPTIONS] [ARTIFACTS...]

ARGUMENTS:
    [ARTIFACTS...]    Artifact files to check (default: the built-in grammar)

OPTIONS:
    -h, --help         Print help information
    -V, --version      Print version information
    -v, --verbose      Enable debug logging (RUST_LOG overrides)
    --info             Print node-kind and field tables
    --emit PATH        Write the built-in artifact to PATH
    --min-abi N        Oldest accepted artifact ABI version
    --max-abi N        Newest accepted artifact ABI version
    --no-verify        Skip fingerprint verification

EXAMPLES:
    grz                          Check the built-in grammar
    grz --info                   Check it and print its tables
    grz --emit grz.grza          Write the built-in artifact
    grz --min-abi 14 grz.grza    Check an artifact file
";
