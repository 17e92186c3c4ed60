//! Tracing setup for the `grz` binary.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("grz_language=debug,grz_runtime=debug,info")
    } else {
        EnvFilter::new("warn")
    }
}

/// Installs a stderr subscriber honouring `RUST_LOG`.
///
/// Does nothing if a global subscriber is already set.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init()
        .ok();
}
