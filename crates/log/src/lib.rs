//! # fieldward-log
//!
//! `tracing` subscriber bootstrap shared by fieldward binaries. Libraries in
//! the workspace only emit events; binaries install a subscriber here.
//!
//! All output goes to stderr so stdout stays machine-readable.
//!
//! ```rust,no_run
//! fn main() -> Result<(), fieldward_log::LogError> {
//!     let _guard = fieldward_log::init_with(fieldward_log::Config::from_env())?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

mod builder;
mod config;
mod error;

// Public API
pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format};
pub use error::{LogError, LogResult};

/// Picks a configuration from the environment or the build profile
///
/// `FIELDWARD_LOG` / `RUST_LOG` select [`Config::from_env`]; otherwise debug
/// builds get [`Config::development`] and release builds
/// [`Config::production`].
pub fn auto_init() -> LogResult<LoggerGuard> {
    if std::env::var_os("FIELDWARD_LOG").is_some() || std::env::var_os("RUST_LOG").is_some() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
