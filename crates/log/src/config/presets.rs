//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Fields, Format};

impl Config {
    /// Build a configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// `CASTELLAN_LOG` wins over `RUST_LOG`. An unknown
    /// `CASTELLAN_LOG_FORMAT` falls back to compact.
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup("CASTELLAN_LOG").or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = lookup("CASTELLAN_LOG_FORMAT") {
            config.format = format.parse().unwrap_or(Format::Compact);
        }

        config.display.apply_env(lookup);
        config.fields = Fields::from_lookup(lookup);

        config
    }

    /// [`from_env`](Self::from_env) when `CASTELLAN_LOG` or `RUST_LOG` is
    /// set, otherwise [`development`](Self::development) in debug builds and
    /// [`production`](Self::production) in release builds.
    #[must_use]
    pub fn auto() -> Self {
        Self::auto_from_lookup(&|key| std::env::var(key).ok())
    }

    fn auto_from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if lookup("CASTELLAN_LOG").is_some() || lookup("RUST_LOG").is_some() {
            Self::from_lookup(lookup)
        } else if cfg!(debug_assertions) {
            Self::development()
        } else {
            Self::production()
        }
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                flatten: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Quiet, deterministic configuration for tests
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: "trace".to_string(),
            format: Format::Compact,
            display: DisplayConfig {
                colors: false,
                time: false,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }
}
