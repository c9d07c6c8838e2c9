#![forbid(unsafe_code)]

//! JSON logging bootstrap.
//!
//! Installs a global `tracing` subscriber that writes one JSON object per
//! event. Only one subscriber can be installed per process; later calls
//! report [`LoggingError::AlreadyInstalled`].

use tracing_subscriber::EnvFilter;

/// Error type for logging setup.
#[derive(Debug)]
pub enum LoggingError {
    /// A global subscriber is already installed.
    AlreadyInstalled,
}

impl std::fmt::Display for LoggingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyInstalled => write!(f, "a global tracing subscriber is already installed"),
        }
    }
}

impl std::error::Error for LoggingError {}

/// Install a JSON subscriber.
///
/// `default_directives` (e.g. `"docsearch_text=debug"`) is used when the
/// `RUST_LOG` environment variable is unset or unparsable.
pub fn init_json(default_directives: &str) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)
}
