//! Diagnostic logging.
//!
//! The library emits `tracing` events (load/save, mutations, rolled-back saves) and
//! never installs a subscriber itself. Front ends call [`init_logging`] once at
//! startup. Output goes to stderr so it never mixes with command output.

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "bookshelf=debug"
    } else {
        "warn"
    }
}

/// Installs a stderr subscriber. `RUST_LOG` takes precedence over `verbose`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
