//! Logger setup for native and browser builds.

use crate::config::LogLevel;

/// Install the platform logger at `level`.
///
/// Native builds log through `env_logger`, WASM builds log to the browser console.
/// Calling this twice keeps the first logger.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: LogLevel) {
    let result = env_logger::Builder::from_default_env()
        .filter_level(level.to_level_filter())
        .try_init();
    if result.is_err() {
        log::debug!("Logger already initialized");
    }
}

#[cfg(target_arch = "wasm32")]
pub fn init(level: LogLevel) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level.to_level()).is_err() {
        log::debug!("Logger already initialized");
    }
}
