//! Log output setup.

use eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";
/// Filter used with `--verbose`.
const VERBOSE_FILTER: &str = "warn,copy_sqlc_params=debug,sqlcparams_core=debug,sqlcparams_extract=debug";

/// Install a stderr subscriber.
///
/// `RUST_LOG` takes precedence unless `--verbose` was given.
pub fn init(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("failed to install logger: {e}"))
}
