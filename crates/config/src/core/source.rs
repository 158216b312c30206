//! Configuration source definitions

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where a configuration layer comes from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Builder-supplied defaults
    Default,

    /// An explicit file; a missing file is an error
    File(PathBuf),

    /// First existing `name.<ext>` in `dir`, for each supported extension
    Discover {
        /// Directory to search
        dir: PathBuf,
        /// File stem to look for
        name: String,
    },

    /// All environment variables
    Env,

    /// Environment variables starting with the prefix
    EnvWithPrefix(String),

    /// Overrides from command-line flags
    CommandLine,

    /// A JSON document given as text
    Inline(String),
}

impl ConfigSource {
    /// Shorthand for [`ConfigSource::Discover`].
    pub fn discover(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self::Discover {
            dir: dir.into(),
            name: name.into(),
        }
    }

    /// Whether a missing source may be skipped during a build.
    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            Self::Default | Self::Discover { .. } | Self::Env | Self::EnvWithPrefix(_)
        )
    }

    /// Merge precedence; a higher value overrides a lower one.
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Default => 0,
            Self::File(_) | Self::Discover { .. } => 10,
            Self::Env | Self::EnvWithPrefix(_) => 20,
            Self::CommandLine => 30,
            Self::Inline(_) => 40,
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::File(_) => "file",
            Self::Discover { .. } => "file (discovered)",
            Self::Env => "environment",
            Self::EnvWithPrefix(_) => "environment (prefixed)",
            Self::CommandLine => "command line",
            Self::Inline(_) => "inline",
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default values"),
            Self::File(path) => write!(f, "file: {}", path.display()),
            Self::Discover { dir, name } => {
                write!(f, "discovered file: {}/{name}.*", dir.display())
            }
            Self::Env => write!(f, "environment variables"),
            Self::EnvWithPrefix(prefix) => {
                write!(f, "environment variables (prefix: {prefix})")
            }
            Self::CommandLine => write!(f, "command line arguments"),
            Self::Inline(data) => {
                let preview: String = data.chars().take(50).collect();
                if preview.len() < data.len() {
                    write!(f, "inline: {preview}...")
                } else {
                    write!(f, "inline: {preview}")
                }
            }
        }
    }
}

/// Document format
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfigFormat {
    /// JSON format
    Json,
    /// TOML format
    Toml,
    /// YAML format
    Yaml,
    /// Unknown format
    Unknown(String),
}

impl ConfigFormat {
    /// Extensions tried by discovery, in order.
    pub const DISCOVERY_EXTENSIONS: [&'static str; 4] = ["json", "toml", "yaml", "yml"];

    /// Get file extension for this format
    pub fn extension(&self) -> &str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
            Self::Yaml => "yaml",
            Self::Unknown(ext) => ext,
        }
    }

    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "toml" => Self::Toml,
            "yml" | "yaml" => Self::Yaml,
            _ => Self::Unknown(ext.to_string()),
        }
    }

    /// Detect format from file path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or_else(|| Self::Unknown(String::new()), Self::from_extension)
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Toml => write!(f, "TOML"),
            Self::Yaml => write!(f, "YAML"),
            Self::Unknown(ext) if ext.is_empty() => write!(f, "unknown"),
            Self::Unknown(ext) => write!(f, "unknown ({ext})"),
        }
    }
}
