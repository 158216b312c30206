//! # Castellan Log
//!
//! Logging setup shared by Castellan binaries, built on `tracing`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use castellan_log::prelude::*;
//!
//! fn main() -> Result<(), castellan_log::LogError> {
//!     let _guard = castellan_log::auto_init()?;
//!
//!     info!(port = 8080, "Server starting");
//!     Ok(())
//! }
//! ```
//!
//! ## Environment
//!
//! | Variable | Effect |
//! |---|---|
//! | `CASTELLAN_LOG` / `RUST_LOG` | filter directives, e.g. `debug,hyper=warn` |
//! | `CASTELLAN_LOG_FORMAT` | `pretty`, `compact` or `json` |
//! | `CASTELLAN_LOG_TIME` / `_SOURCE` / `_COLORS` | `0` or `false` disables |
//! | `CASTELLAN_SERVICE` / `_ENV` / `_VERSION` / `_INSTANCE` | fields on the root span |

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;
mod error;
mod format;
mod writer;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Fields, Format, WriterConfig};
pub use error::{LogError, LogResult};

/// Common imports for logging call sites.
pub mod prelude {
    pub use crate::{auto_init, auto_init_with, debug, error, info, init, init_with, trace, warn};

    pub use tracing::{Span, field};
}

pub use tracing::{Level, debug, error, info, instrument, span, trace, warn};

/// Pick a configuration from the environment and install it.
///
/// See [`Config::auto`]. If a global subscriber is already installed this
/// is a no-op.
pub fn auto_init() -> LogResult<LoggerGuard> {
    auto_init_with(|config| config)
}

/// Like [`auto_init`], letting the caller adjust the chosen configuration
/// first (e.g. to record its own version on the root span).
pub fn auto_init_with<F>(adjust: F) -> LogResult<LoggerGuard>
where
    F: FnOnce(Config) -> Config,
{
    if tracing::dispatcher::has_been_set() {
        return Ok(LoggerGuard::noop());
    }
    init_with(adjust(Config::auto()))
}

/// Install the default configuration.
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Install a custom configuration.
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
