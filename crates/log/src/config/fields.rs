//! Global fields configuration

use serde::{Deserialize, Serialize};

/// Fields recorded on the root span for every event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fields {
    /// Service name
    pub service: Option<String>,
    /// Deployment environment (dev/staging/prod)
    pub env: Option<String>,
    /// Version
    pub version: Option<String>,
    /// Instance ID
    pub instance: Option<String>,
}

impl Fields {
    /// Read fields from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            service: lookup("CASTELLAN_SERVICE"),
            env: lookup("CASTELLAN_ENV"),
            version: lookup("CASTELLAN_VERSION"),
            instance: lookup("CASTELLAN_INSTANCE"),
        }
    }

    /// Fill `version` unless it is already set.
    #[must_use]
    pub fn or_version(mut self, version: impl Into<String>) -> Self {
        if self.version.is_none() {
            self.version = Some(version.into());
        }
        self
    }

    /// Whether no field is set
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.service.is_none()
            && self.env.is_none()
            && self.version.is_none()
            && self.instance.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_comes_only_from_environment() {
        let fields = Fields::from_lookup(&|_| None);
        assert!(fields.is_empty());

        let fields = Fields::from_lookup(&|key| (key == "CASTELLAN_VERSION").then(|| "2.0.0".into()));
        assert_eq!(fields.version.as_deref(), Some("2.0.0"));
    }

    #[test]
    fn or_version_keeps_explicit_version() {
        let fields = Fields::default().or_version("0.1.0");
        assert_eq!(fields.version.as_deref(), Some("0.1.0"));

        let fields = Fields {
            version: Some("2.0.0".into()),
            ..Fields::default()
        }
        .or_version("0.1.0");
        assert_eq!(fields.version.as_deref(), Some("2.0.0"));
    }
}
