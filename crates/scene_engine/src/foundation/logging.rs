//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Reads the filter from `RUST_LOG`. Safe to call more than once; later calls
/// are ignored.
pub fn init() {
    if let Err(err) = env_logger::try_init() {
        debug!("Logger already initialized: {}", err);
    }
}

/// Initialize logging with a default filter used when `RUST_LOG` is unset
pub fn init_with_default(filter: &str) {
    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .try_init();
    if let Err(err) = result {
        debug!("Logger already initialized: {}", err);
    }
}
