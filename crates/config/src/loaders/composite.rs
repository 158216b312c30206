//! Composite loader that dispatches to the first supporting loader

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::{ConfigError, ConfigLoader, ConfigResult, ConfigSource};

/// Composite configuration loader
pub struct CompositeLoader {
    loaders: Vec<Arc<dyn ConfigLoader>>,
}

impl std::fmt::Debug for CompositeLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeLoader")
            .field("loaders", &format!("{} loaders", self.loaders.len()))
            .finish()
    }
}

impl CompositeLoader {
    /// Create a composite with no loaders
    pub fn new() -> Self {
        Self {
            loaders: Vec::new(),
        }
    }

    /// Add a loader
    #[must_use = "builder methods must be chained or built"]
    pub fn add_loader<L: ConfigLoader + 'static>(mut self, loader: L) -> Self {
        self.loaders.push(Arc::new(loader));
        self
    }

    /// File and environment loaders
    pub fn default_loaders() -> Self {
        use super::{EnvLoader, FileLoader};

        Self::new()
            .add_loader(FileLoader::new())
            .add_loader(EnvLoader::new())
    }

    fn get_loader_for(&self, source: &ConfigSource) -> Option<&Arc<dyn ConfigLoader>> {
        self.loaders.iter().find(|loader| loader.supports(source))
    }
}

impl Default for CompositeLoader {
    fn default() -> Self {
        Self::default_loaders()
    }
}

#[async_trait]
impl ConfigLoader for CompositeLoader {
    async fn load(&self, source: &ConfigSource) -> ConfigResult<serde_json::Value> {
        match self.get_loader_for(source) {
            Some(loader) => loader.load(source).await,
            None => Err(ConfigError::source_error(
                format!("No loader supports source type: {}", source.name()),
                source.name(),
            )),
        }
    }

    fn supports(&self, source: &ConfigSource) -> bool {
        self.loaders.iter().any(|loader| loader.supports(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::{EnvLoader, FileLoader};

    #[test]
    fn default_loaders_cover_every_loadable_source() {
        let loader = CompositeLoader::default();

        assert!(loader.supports(&ConfigSource::File("config.json".into())));
        assert!(loader.supports(&ConfigSource::discover(".", "config")));
        assert!(loader.supports(&ConfigSource::Inline("{}".into())));
        assert!(loader.supports(&ConfigSource::Env));
        assert!(loader.supports(&ConfigSource::EnvWithPrefix("APP".to_string())));
        assert!(!loader.supports(&ConfigSource::CommandLine));
        assert!(!loader.supports(&ConfigSource::Default));
    }

    #[tokio::test]
    async fn unsupported_source_is_source_error() {
        let loader = CompositeLoader::new().add_loader(FileLoader::new());
        let err = loader.load(&ConfigSource::Env).await.unwrap_err();
        assert!(matches!(err, ConfigError::SourceError { .. }));
    }

    #[tokio::test]
    async fn dispatches_to_env_loader() {
        let loader = CompositeLoader::new()
            .add_loader(FileLoader::new())
            .add_loader(EnvLoader::from_vars([("T_KEY", "v")]));
        let value = loader
            .load(&ConfigSource::EnvWithPrefix("T".into()))
            .await
            .unwrap();
        assert_eq!(value, serde_json::json!({"key": "v"}));
    }
}
