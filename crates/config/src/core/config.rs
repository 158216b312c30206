//! Main configuration container

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{ConfigError, ConfigResult, ConfigSource};

/// Merged, read-only configuration.
///
/// Cloning is cheap; clones share the same document.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    data: Arc<Value>,
    sources: Vec<ConfigSource>,
}

impl Config {
    pub(crate) fn new(data: Value, sources: Vec<ConfigSource>) -> Self {
        Self {
            data: Arc::new(data),
            sources,
        }
    }

    /// Wrap an already merged document.
    pub fn from_value(data: Value) -> Self {
        Self::new(data, vec![ConfigSource::Default])
    }

    /// Deserialize the value at a dot path (`""` is the whole document).
    ///
    /// Path segments index objects by key and arrays by position, e.g.
    /// `actions.0.name`.
    pub fn get<T>(&self, path: &str) -> ConfigResult<T>
    where
        T: DeserializeOwned,
    {
        let value = get_nested_value(&self.data, path)?;
        T::deserialize(value).map_err(|e| {
            ConfigError::type_error(
                format!("'{path}': {e}"),
                std::any::type_name::<T>(),
                json_type_name(value),
            )
        })
    }

    /// Like [`get`](Self::get), falling back to `default` on any error.
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: DeserializeOwned,
    {
        self.get(path).unwrap_or(default)
    }

    /// Like [`get`](Self::get), returning `None` on any error.
    pub fn get_opt<T>(&self, path: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        self.get(path).ok()
    }

    /// Whether a value exists at the path
    pub fn has(&self, path: &str) -> bool {
        get_nested_value(&self.data, path).is_ok()
    }

    /// Keys of the object at `path`, or of the root when `None`.
    pub fn keys(&self, path: Option<&str>) -> ConfigResult<Vec<String>> {
        let value = get_nested_value(&self.data, path.unwrap_or(""))?;
        match value {
            Value::Object(obj) => Ok(obj.keys().cloned().collect()),
            other => Err(ConfigError::type_error(
                "Path does not point to an object",
                "object",
                json_type_name(other),
            )),
        }
    }

    /// The merged document.
    pub fn as_value(&self) -> &Value {
        &self.data
    }

    /// Sources in the order they were merged.
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }
}

/// Deep-merge `source` into `target`.
///
/// Objects merge key by key; any other combination replaces `target`.
pub fn merge_values(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target_obj), Value::Object(source_obj)) => {
            for (key, value) in source_obj {
                match target_obj.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        target_obj.insert(key, value);
                    }
                }
            }
        }
        (target, source) => *target = source,
    }
}

fn get_nested_value<'a>(value: &'a Value, path: &str) -> ConfigResult<&'a Value> {
    if path.is_empty() {
        return Ok(value);
    }

    let mut current = value;
    for (i, part) in path.split('.').enumerate() {
        current = match current {
            Value::Object(obj) => obj.get(part).ok_or_else(|| {
                ConfigError::path_error(format!("Key '{part}' not found"), path)
            })?,
            Value::Array(arr) => {
                let index: usize = part.parse().map_err(|_| {
                    ConfigError::path_error(format!("Invalid array index '{part}'"), path)
                })?;
                arr.get(index).ok_or_else(|| {
                    ConfigError::path_error(
                        format!("Array index {index} out of bounds (size: {})", arr.len()),
                        path,
                    )
                })?
            }
            other => {
                let remaining: Vec<&str> = path.split('.').skip(i).collect();
                return Err(ConfigError::path_error(
                    format!(
                        "Cannot index into {} with '{}'",
                        json_type_name(other),
                        remaining.join(".")
                    ),
                    path,
                ));
            }
        };
    }

    Ok(current)
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn sample() -> Config {
        Config::from_value(json!({
            "dashboard": {"host": "0.0.0.0", "port": 80},
            "actions": [{"name": "svc1", "type": "restart"}],
            "debug": false
        }))
    }

    #[test]
    fn get_by_dot_path() {
        let config = sample();
        assert_eq!(config.get::<u16>("dashboard.port"), Ok(80));
        assert_eq!(config.get::<String>("dashboard.host").unwrap(), "0.0.0.0");
        assert_eq!(config.get::<String>("actions.0.name").unwrap(), "svc1");
        assert_eq!(config.get::<bool>("debug"), Ok(false));
    }

    #[test]
    fn missing_key_is_path_error() {
        let err = sample().get::<u16>("dashboard.tls").unwrap_err();
        assert!(matches!(err, ConfigError::PathError { ref path, .. } if path == "dashboard.tls"));
    }

    #[test]
    fn indexing_a_scalar_is_path_error() {
        let err = sample().get::<u16>("debug.level").unwrap_err();
        assert_eq!(
            err,
            ConfigError::path_error("Cannot index into boolean with 'level'", "debug.level")
        );
    }

    #[test]
    fn wrong_type_is_type_error() {
        let err = sample().get::<u16>("dashboard.host").unwrap_err();
        assert!(matches!(err, ConfigError::TypeError { ref actual, .. } if actual == "string"));
    }

    #[test]
    fn fallbacks() {
        let config = sample();
        assert_eq!(config.get_or("dashboard.port", 8080_u16), 80);
        assert_eq!(config.get_or("dashboard.missing", 8080_u16), 8080);
        assert_eq!(config.get_opt::<u16>("nope"), None);
        assert!(config.has("actions.0"));
        assert!(!config.has("actions.1"));
    }

    #[test]
    fn keys_at_root_and_path() {
        let config = sample();
        let mut root = config.keys(None).unwrap();
        root.sort();
        assert_eq!(root, vec!["actions", "dashboard", "debug"]);

        let mut dashboard = config.keys(Some("dashboard")).unwrap();
        dashboard.sort();
        assert_eq!(dashboard, vec!["host", "port"]);

        assert!(config.keys(Some("debug")).is_err());
    }

    #[test]
    fn merge_is_deep_for_objects_only() {
        let mut target = json!({"a": {"x": 1, "y": 2}, "list": [1, 2], "s": "old"});
        merge_values(
            &mut target,
            json!({"a": {"y": 20, "z": 30}, "list": [3], "s": {"now": "object"}}),
        );
        assert_eq!(
            target,
            json!({"a": {"x": 1, "y": 20, "z": 30}, "list": [3], "s": {"now": "object"}})
        );
    }
}
