//! Writer and display configuration

use serde::{Deserialize, Serialize};

use super::parse_toggle;

/// Output target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum WriterConfig {
    /// Write to stderr
    #[default]
    Stderr,
    /// Write to stdout
    Stdout,
}

/// Display configuration
///
/// Independent toggles that map one-to-one onto `tracing_subscriber::fmt`
/// layer options.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show timestamps
    pub time: bool,
    /// Show source location (`file:line`)
    pub source: bool,
    /// Show target module
    pub target: bool,
    /// Show thread IDs
    pub thread_ids: bool,
    /// Show thread names
    pub thread_names: bool,
    /// Use ANSI colors
    pub colors: bool,
    /// Include the span list in JSON output
    pub span_list: bool,
    /// Flatten event fields into the top-level JSON object
    pub flatten: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            source: cfg!(debug_assertions),
            target: true,
            thread_ids: false,
            thread_names: false,
            colors: std::io::IsTerminal::is_terminal(&std::io::stderr()),
            span_list: true,
            flatten: true,
        }
    }
}

impl DisplayConfig {
    /// Apply `CASTELLAN_LOG_TIME`, `CASTELLAN_LOG_SOURCE` and
    /// `CASTELLAN_LOG_COLORS` from `lookup`.
    pub(super) fn apply_env<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("CASTELLAN_LOG_TIME") {
            self.time = parse_toggle(&v);
        }
        if let Some(v) = lookup("CASTELLAN_LOG_SOURCE") {
            self.source = parse_toggle(&v);
        }
        if let Some(v) = lookup("CASTELLAN_LOG_COLORS") {
            self.colors = parse_toggle(&v);
        }
    }
}
