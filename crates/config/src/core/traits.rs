//! Loader trait

use async_trait::async_trait;

use super::{ConfigResult, ConfigSource};

/// Turns a [`ConfigSource`] into a JSON document.
#[async_trait]
pub trait ConfigLoader: Send + Sync {
    /// Load the source. Implementations return an object at the top level.
    async fn load(&self, source: &ConfigSource) -> ConfigResult<serde_json::Value>;

    /// Whether this loader handles the given source kind.
    fn supports(&self, source: &ConfigSource) -> bool;
}
