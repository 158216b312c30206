//! File-based configuration loader

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use crate::core::config::json_type_name;
use crate::core::{ConfigError, ConfigFormat, ConfigLoader, ConfigResult, ConfigSource};

/// Loads files, discovered files and inline JSON documents
#[derive(Debug, Clone, Default)]
pub struct FileLoader {
    /// Base directory for relative paths
    pub base_dir: Option<PathBuf>,
}

impl FileLoader {
    /// Create a new file loader
    pub fn new() -> Self {
        Self { base_dir: None }
    }

    /// Create a new file loader with base directory
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base_dir) if path.is_relative() => base_dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    async fn load_file(&self, path: &Path) -> ConfigResult<Value> {
        let path = self.resolve_path(path);
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ConfigError::file_not_found(&path),
                _ => ConfigError::file_read_error(&path, e.to_string()),
            })?;

        castellan_log::debug!(path = %path.display(), "Read configuration file");
        parse_content(&content, &ConfigFormat::from_path(&path), &path)
    }

    /// Try `dir/name.<ext>` for each discovery extension; the first file
    /// that exists is loaded.
    async fn discover(&self, dir: &Path, name: &str) -> ConfigResult<Value> {
        let dir = self.resolve_path(dir);
        for ext in ConfigFormat::DISCOVERY_EXTENSIONS {
            let candidate = dir.join(format!("{name}.{ext}"));
            let exists = tokio::fs::try_exists(&candidate)
                .await
                .map_err(|e| ConfigError::file_read_error(&candidate, e.to_string()))?;
            if exists {
                return self.load_file(&candidate).await;
            }
        }
        Err(ConfigError::file_not_found(dir.join(name)))
    }
}

#[async_trait]
impl ConfigLoader for FileLoader {
    async fn load(&self, source: &ConfigSource) -> ConfigResult<Value> {
        match source {
            ConfigSource::File(path) => self.load_file(path).await,
            ConfigSource::Discover { dir, name } => self.discover(dir, name).await,
            ConfigSource::Inline(text) => {
                parse_content(text, &ConfigFormat::Json, Path::new("inline"))
            }
            _ => Err(ConfigError::source_error(
                "FileLoader does not support this source type",
                source.name(),
            )),
        }
    }

    fn supports(&self, source: &ConfigSource) -> bool {
        matches!(
            source,
            ConfigSource::File(_) | ConfigSource::Discover { .. } | ConfigSource::Inline(_)
        )
    }
}

/// Parse a document into JSON. The top level must be a table; an empty
/// document reads as an empty table.
pub fn parse_content(content: &str, format: &ConfigFormat, path: &Path) -> ConfigResult<Value> {
    if let ConfigFormat::Unknown(_) = format {
        return Err(ConfigError::format_not_supported(format.to_string()));
    }
    if content.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    let value = match format {
        ConfigFormat::Json => serde_json::from_str::<Value>(content)
            .map_err(|e| ConfigError::parse_error(path, format!("JSON parse error: {e}")))?,
        ConfigFormat::Toml => toml::from_str::<Value>(content)
            .map_err(|e| ConfigError::parse_error(path, format!("TOML parse error: {e}")))?,
        ConfigFormat::Yaml => serde_yaml::from_str::<Value>(content)
            .map_err(|e| ConfigError::parse_error(path, format!("YAML parse error: {e}")))?,
        ConfigFormat::Unknown(_) => {
            return Err(ConfigError::format_not_supported(format.to_string()));
        }
    };

    match value {
        Value::Object(_) => Ok(value),
        other => Err(ConfigError::parse_error(
            path,
            format!("expected a table at the top level, found {}", json_type_name(&other)),
        )),
    }
}
