//! Logger builder

use tracing::{Span, field};
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Fields, Format};
use crate::error::{LogError, LogResult};
use crate::format::{create_fmt_layer, create_json_layer};
use crate::writer;

/// Logger builder
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    config: Config,
}

/// Keeps the root span entered for as long as it lives.
///
/// Hold it for the lifetime of the process (typically bound in `main`).
#[must_use = "dropping the guard exits the root span"]
pub struct LoggerGuard {
    root_span: Option<tracing::span::EnteredSpan>,
}

impl std::fmt::Debug for LoggerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerGuard")
            .field("root_span", &self.root_span.is_some())
            .finish()
    }
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// The configuration this builder will install.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the filter without installing anything.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Filter`] if `level` is not a valid directive list.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level).map_err(|e| LogError::filter(&self.config.level, e))
    }

    /// Install the subscriber as the global default.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.filter()?;
        let writer = writer::make_writer(self.config.writer);
        let display = &self.config.display;
        let registry = Registry::default().with(filter);

        match self.config.format {
            Format::Pretty => registry
                .with(create_fmt_layer!(pretty, display, writer))
                .try_init(),
            Format::Compact => registry
                .with(create_fmt_layer!(compact, display, writer))
                .try_init(),
            Format::Json => registry.with(create_json_layer!(display, writer)).try_init(),
        }
        .map_err(LogError::init)?;

        let root_span = root_span(&self.config.fields).map(Span::entered);

        Ok(LoggerGuard { root_span })
    }
}

/// The `app` span carrying whichever global fields are set; `None` when
/// there are none.
fn root_span(fields: &Fields) -> Option<Span> {
    if fields.is_empty() {
        return None;
    }

    let span = tracing::info_span!(
        "app",
        service = field::Empty,
        env = field::Empty,
        version = field::Empty,
        instance = field::Empty
    );
    let present = [
        ("service", &fields.service),
        ("env", &fields.env),
        ("version", &fields.version),
        ("instance", &fields.instance),
    ];
    for (name, value) in present {
        if let Some(value) = value {
            span.record(name, value.as_str());
        }
    }
    Some(span)
}

impl LoggerGuard {
    pub(crate) const fn noop() -> Self {
        Self { root_span: None }
    }

    /// Whether this guard owns an entered root span.
    #[must_use]
    pub fn has_root_span(&self) -> bool {
        self.root_span.is_some()
    }
}
