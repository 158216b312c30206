//! # Castellan Config
//!
//! Layered configuration: defaults, files, environment variables and
//! command-line overrides are loaded as JSON documents and deep-merged in
//! a fixed precedence order into one immutable [`Config`].
//!
//! ```rust,no_run
//! use castellan_config::{ConfigBuilder, ConfigSource};
//! use serde_json::json;
//!
//! # async fn run() -> castellan_config::ConfigResult<()> {
//! let config = ConfigBuilder::new()
//!     .with_defaults_json(json!({"dashboard": {"port": 80}}))
//!     .with_source(ConfigSource::discover(".", "config"))
//!     .with_source(ConfigSource::EnvWithPrefix("CASTELLAN".into()))
//!     .build()
//!     .await?;
//!
//! let port: u16 = config.get("dashboard.port")?;
//! # let _ = port;
//! # Ok(())
//! # }
//! ```
//!
//! Precedence, lowest first: defaults, files, environment, command line,
//! inline documents. Objects merge key by key; anything else replaces.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod core;
pub mod loaders;

pub use crate::core::{
    Config, ConfigBuilder, ConfigError, ConfigFormat, ConfigLoader, ConfigResult, ConfigSource,
    merge_values,
};
pub use loaders::{CompositeLoader, EnvLoader, FileLoader};
