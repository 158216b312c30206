//! Configuration builder

use std::sync::Arc;

use serde_json::Value;

use super::{Config, ConfigError, ConfigLoader, ConfigResult, ConfigSource, merge_values};
use crate::loaders::CompositeLoader;

/// Collects sources and merges them into a [`Config`].
pub struct ConfigBuilder {
    sources: Vec<ConfigSource>,
    defaults: Option<Value>,
    overrides: Option<Value>,
    loader: Option<Arc<dyn ConfigLoader>>,
}

impl ConfigBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            defaults: None,
            overrides: None,
            loader: None,
        }
    }

    /// Add a configuration source
    #[must_use = "builder methods must be chained or built"]
    pub fn with_source(mut self, source: ConfigSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Set default values from any serializable value
    pub fn with_defaults<T>(mut self, defaults: T) -> ConfigResult<Self>
    where
        T: serde::Serialize,
    {
        let value = serde_json::to_value(defaults)
            .map_err(|e| ConfigError::source_error(e.to_string(), "default"))?;
        self.defaults = Some(value);
        Ok(self)
    }

    /// Set default values from JSON
    #[must_use = "builder methods must be chained or built"]
    pub fn with_defaults_json(mut self, defaults: Value) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Set the command-line layer.
    ///
    /// Only values that were explicitly given belong here; defaults of the
    /// flags go into [`with_defaults_json`](Self::with_defaults_json).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_overrides(mut self, overrides: Value) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Replace the default [`CompositeLoader`]
    #[must_use = "builder methods must be chained or built"]
    pub fn with_loader(mut self, loader: Arc<dyn ConfigLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.sources.is_empty() && self.defaults.is_none() && self.overrides.is_none() {
            return Err(ConfigError::validation_error(
                "No configuration sources or defaults provided",
                None,
            ));
        }
        Ok(())
    }

    /// Load every source and merge them, lowest precedence first.
    ///
    /// An optional source that reports [`ConfigError::FileNotFound`] is
    /// skipped. Any other failure aborts the build.
    pub async fn build(self) -> ConfigResult<Config> {
        self.validate()?;

        let loader = self
            .loader
            .unwrap_or_else(|| Arc::new(CompositeLoader::default()));

        let mut sources = self.sources;
        if self.defaults.is_some() {
            sources.insert(0, ConfigSource::Default);
        }
        if self.overrides.is_some() {
            sources.push(ConfigSource::CommandLine);
        }
        sources.sort_by_key(ConfigSource::precedence);

        let mut defaults = self.defaults;
        let mut overrides = self.overrides;
        let mut merged = Value::Object(serde_json::Map::new());
        let mut loaded = Vec::with_capacity(sources.len());

        for source in sources {
            let data = match source {
                ConfigSource::Default => defaults.take(),
                ConfigSource::CommandLine => overrides.take(),
                _ => match loader.load(&source).await {
                    Ok(data) => Some(data),
                    Err(e) if e.is_not_found() && source.is_optional() => {
                        castellan_log::info!(
                            source = %source,
                            "No configuration files found."
                        );
                        None
                    }
                    Err(e) => return Err(e),
                },
            };

            let Some(data) = data else { continue };
            castellan_log::debug!(
                source = %source,
                keys = data.as_object().map_or(0, serde_json::Map::len),
                "Loaded configuration source"
            );
            merge_values(&mut merged, data);
            loaded.push(source);
        }

        Ok(Config::new(merged, loaded))
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConfigBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigBuilder")
            .field("sources", &self.sources)
            .field("has_defaults", &self.defaults.is_some())
            .field("has_overrides", &self.overrides.is_some())
            .field("has_loader", &self.loader.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn empty_builder_is_rejected() {
        let err = ConfigBuilder::new().build().await.unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn overrides_beat_defaults_regardless_of_call_order() {
        let config = ConfigBuilder::new()
            .with_overrides(json!({"dashboard": {"port": 9000}}))
            .with_defaults_json(json!({"dashboard": {"port": 80, "host": "0.0.0.0"}}))
            .build()
            .await
            .unwrap();

        assert_eq!(config.get::<u16>("dashboard.port"), Ok(9000));
        assert_eq!(config.get::<String>("dashboard.host").unwrap(), "0.0.0.0");
        assert_eq!(
            config.sources(),
            &[ConfigSource::Default, ConfigSource::CommandLine]
        );
    }

    #[tokio::test]
    async fn inline_beats_command_line() {
        let config = ConfigBuilder::new()
            .with_source(ConfigSource::Inline(r#"{"level": "inline"}"#.into()))
            .with_overrides(json!({"level": "flag"}))
            .build()
            .await
            .unwrap();
        assert_eq!(config.get::<String>("level").unwrap(), "inline");
    }

    #[tokio::test]
    async fn missing_discovered_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigBuilder::new()
            .with_defaults_json(json!({"a": 1}))
            .with_source(ConfigSource::discover(dir.path(), "config"))
            .build()
            .await
            .unwrap();
        assert_eq!(config.get::<i64>("a"), Ok(1));
        assert_eq!(config.sources(), &[ConfigSource::Default]);
    }

    #[tokio::test]
    async fn missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = ConfigBuilder::new()
            .with_source(ConfigSource::File(path.clone()))
            .build()
            .await
            .unwrap_err();
        assert_eq!(err, ConfigError::file_not_found(path));
    }

    #[tokio::test]
    async fn with_defaults_serializes() {
        #[derive(serde::Serialize)]
        struct Defaults {
            port: u16,
        }

        let config = ConfigBuilder::new()
            .with_defaults(Defaults { port: 80 })
            .unwrap()
            .build()
            .await
            .unwrap();
        assert_eq!(config.get::<u16>("port"), Ok(80));
    }
}
