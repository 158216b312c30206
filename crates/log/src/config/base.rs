use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{DisplayConfig, Fields, WriterConfig};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter directives (e.g. "info", "debug,hyper=warn")
    pub level: String,
    /// Output format
    pub format: Format,
    /// Output target
    pub writer: WriterConfig,
    /// Display toggles
    pub display: DisplayConfig,
    /// Global fields attached to the root span
    pub fields: Fields,
}

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Multi-line, human-readable
    Pretty,
    /// Single-line text
    #[default]
    Compact,
    /// One JSON object per event
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" | "text" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Compact,
            writer: WriterConfig::Stderr,
            display: DisplayConfig::default(),
            fields: Fields::default(),
        }
    }
}
