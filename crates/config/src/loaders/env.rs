//! Environment variable configuration loader

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::core::{ConfigError, ConfigLoader, ConfigResult, ConfigSource};

/// Separator between the prefix and each nested key segment.
const SEPARATOR: char = '_';

/// Environment variable loader
///
/// `PREFIX_DASHBOARD_PORT=8080` becomes `{"dashboard": {"port": 8080}}`:
/// the prefix and its `_` are stripped, the rest is split on `_` and
/// lower-cased.
#[derive(Debug, Clone, Default)]
pub struct EnvLoader {
    /// Fixed variable set used instead of the process environment
    vars: Option<Vec<(String, String)>>,
}

impl EnvLoader {
    /// Create a loader over the process environment
    pub fn new() -> Self {
        Self { vars: None }
    }

    /// Create a loader over a fixed set of variables.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    fn snapshot(&self) -> Vec<(String, String)> {
        let mut vars = self
            .vars
            .clone()
            .unwrap_or_else(|| std::env::vars().collect());
        vars.sort();
        vars
    }

    /// Variables whose name starts with `prefix` + `_` (case-insensitive),
    /// with that part stripped.
    fn filter_vars(&self, prefix: &str) -> Vec<(String, String)> {
        let wanted = format!("{}{SEPARATOR}", prefix.to_uppercase());
        self.snapshot()
            .into_iter()
            .filter_map(|(key, value)| {
                let upper = key.to_uppercase();
                let stripped = upper.strip_prefix(&wanted)?;
                (!stripped.is_empty()).then(|| (stripped.to_string(), value))
            })
            .collect()
    }

    fn env_to_json(vars: Vec<(String, String)>) -> Value {
        let mut result = Map::new();
        for (key, value) in vars {
            castellan_log::trace!(key = %key, "Loading env config");
            let parts: Vec<String> = key
                .split(SEPARATOR)
                .filter(|p| !p.is_empty())
                .map(str::to_lowercase)
                .collect();
            insert_nested(&mut result, &parts, parse_env_value(&value));
        }
        Value::Object(result)
    }
}

#[async_trait]
impl ConfigLoader for EnvLoader {
    async fn load(&self, source: &ConfigSource) -> ConfigResult<Value> {
        let vars = match source {
            ConfigSource::Env => self.snapshot(),
            ConfigSource::EnvWithPrefix(prefix) => self.filter_vars(prefix),
            _ => {
                return Err(ConfigError::source_error(
                    "EnvLoader does not support this source type",
                    source.name(),
                ));
            }
        };

        castellan_log::debug!(count = vars.len(), source = %source, "Loaded environment variables");
        Ok(Self::env_to_json(vars))
    }

    fn supports(&self, source: &ConfigSource) -> bool {
        matches!(source, ConfigSource::Env | ConfigSource::EnvWithPrefix(_))
    }
}

/// Insert at a nested key path. A scalar already sitting on an
/// intermediate segment wins and the new value is dropped.
fn insert_nested(obj: &mut Map<String, Value>, parts: &[String], value: Value) {
    match parts {
        [] => {}
        [last] => {
            obj.insert(last.clone(), value);
        }
        [first, rest @ ..] => {
            let nested = obj
                .entry(first.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(nested_obj) = nested {
                insert_nested(nested_obj, rest, value);
            }
        }
    }
}

/// Parse an environment value: bool, integer, float, JSON array/object,
/// comma-separated list, then plain string.
pub(crate) fn parse_env_value(value: &str) -> Value {
    if value.is_empty() {
        return Value::String(String::new());
    }

    if value.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if value.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    if let Ok(int_val) = value.parse::<i64>() {
        return Value::from(int_val);
    }

    if let Some(num) = value
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
    {
        return Value::Number(num);
    }

    if (value.starts_with('{') && value.ends_with('}'))
        || (value.starts_with('[') && value.ends_with(']'))
    {
        if let Ok(json_val) = serde_json::from_str(value) {
            return json_val;
        }
    }

    if value.contains(',') && !value.starts_with('"') {
        return Value::Array(
            value
                .split(',')
                .map(|s| parse_env_value(s.trim()))
                .collect(),
        );
    }

    Value::String(value.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case("true", json!(true))]
    #[case("FALSE", json!(false))]
    #[case("42", json!(42))]
    #[case("-7", json!(-7))]
    #[case("2.5", json!(2.5))]
    #[case("0.0.0.0", json!("0.0.0.0"))]
    #[case("one,two", json!(["one", "two"]))]
    #[case("1, 2", json!([1, 2]))]
    #[case(r#"{"k":"v"}"#, json!({"k": "v"}))]
    #[case("hello world", json!("hello world"))]
    #[case("", json!(""))]
    fn env_values(#[case] raw: &str, #[case] expected: Value) {
        assert_eq!(parse_env_value(raw), expected);
    }

    #[tokio::test]
    async fn prefixed_vars_become_nested_keys() {
        let loader = EnvLoader::from_vars([
            ("CASTELLAN_DASHBOARD_PORT", "8080"),
            ("castellan_dashboard_host", "127.0.0.1"),
            ("CASTELLAN_DEBUG", "true"),
            ("CASTELLANX_IGNORED", "1"),
            ("OTHER_DASHBOARD_PORT", "1"),
        ]);

        let value = loader
            .load(&ConfigSource::EnvWithPrefix("castellan".into()))
            .await
            .unwrap();
        assert_eq!(
            value,
            json!({"dashboard": {"port": 8080, "host": "127.0.0.1"}, "debug": true})
        );
    }

    #[tokio::test]
    async fn bare_prefix_is_skipped() {
        let loader = EnvLoader::from_vars([("CASTELLAN_", "x")]);
        let value = loader
            .load(&ConfigSource::EnvWithPrefix("CASTELLAN".into()))
            .await
            .unwrap();
        assert_eq!(value, json!({}));
    }

    #[tokio::test]
    async fn scalar_blocks_deeper_key() {
        let loader = EnvLoader::from_vars([("APP_DASHBOARD", "on"), ("APP_DASHBOARD_PORT", "1")]);
        let value = loader
            .load(&ConfigSource::EnvWithPrefix("APP".into()))
            .await
            .unwrap();
        assert_eq!(value, json!({"dashboard": "on"}));
    }

    #[tokio::test]
    async fn rejects_file_sources() {
        let err = EnvLoader::new()
            .load(&ConfigSource::File("config.toml".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::SourceError { .. }));
    }
}
