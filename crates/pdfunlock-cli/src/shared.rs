use std::path::Path;

use pdfunlock::PasswordStore;
use tracing_subscriber::EnvFilter;

/// Resolve the password store from `--store` / `PDFUNLOCK_STORE`, falling
/// back to the home directory.
///
/// Returns `Err(1)` with a message printed to stderr if no location can be
/// determined.
pub fn open_store(path: Option<&Path>) -> Result<PasswordStore, i32> {
    match path {
        Some(path) => Ok(PasswordStore::new(path)),
        None => PasswordStore::open_default().ok_or_else(|| {
            eprintln!("Error: cannot determine home directory; pass --store PATH");
            1
        }),
    }
}

/// Log filter directive for a `-v` count.
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr tracing subscriber. `RUST_LOG` wins over `-v`.
pub fn init_logging(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
