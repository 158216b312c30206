//! Core configuration functionality

pub mod builder;
pub mod config;
pub mod error;
pub mod source;
pub mod traits;

pub use builder::ConfigBuilder;
pub use config::{Config, merge_values};
pub use error::{ConfigError, ConfigResult};
pub use source::{ConfigFormat, ConfigSource};
pub use traits::ConfigLoader;
