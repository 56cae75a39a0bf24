use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Installs the global `tracing` subscriber. `RUST_LOG` wins over `level`
/// when set. Output goes to stderr so one-shot query results on stdout
/// stay clean.
pub fn init(level: &str, ansi: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
