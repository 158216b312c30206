//! Errors raised while installing the logger.

/// Result alias for logger setup.
pub type LogResult<T> = Result<T, LogError>;

/// Logger setup failure.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// The filter directives could not be parsed.
    #[error("invalid filter '{filter}': {reason}")]
    Filter {
        /// The directive string as configured.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber could not be installed.
    #[error("failed to install subscriber: {0}")]
    Init(String),
}

impl LogError {
    /// Create a filter parsing error.
    pub fn filter(filter: impl Into<String>, reason: impl ToString) -> Self {
        Self::Filter {
            filter: filter.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an installation error.
    pub fn init(reason: impl ToString) -> Self {
        Self::Init(reason.to_string())
    }
}
