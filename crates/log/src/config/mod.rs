//! Configuration types
//!
//! - `base`: `Config` and `Format`
//! - `writer`: output target and display toggles
//! - `fields`: global fields on the root span
//! - `presets`: environment, development and production setups

mod base;
mod fields;
mod presets;
mod writer;

pub use base::{Config, Format};
pub use fields::Fields;
pub use writer::{DisplayConfig, WriterConfig};

/// Reads `0` and `false` as off, anything else as on.
pub(crate) fn parse_toggle(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "0" | "false")
}
