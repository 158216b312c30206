use std::num::{ParseFloatError, ParseIntError};

use crate::param::ParamType;

/// Error type for parameter lookup and coercion.
///
/// Every variant is deterministic: the same action and the same request
/// always produce the same error, so nothing here is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParamError {
    /// No parameter with the given key exists on the action.
    #[error("could not find param `{key}`")]
    NotFound {
        /// The requested parameter key.
        key: String,
    },

    /// The parameter's type tag is not one of the supported scalar kinds.
    #[error("unsupported param type {type_name} for `{key}`")]
    UnsupportedType {
        /// The parameter key.
        key: String,
        /// Name of the offending type.
        type_name: String,
    },

    /// A string parameter could not be parsed as the requested number type.
    #[error("failed to parse `{key}` as {target}: {source}")]
    Parse {
        /// The parameter key.
        key: String,
        /// The requested type.
        target: ParamType,
        /// The underlying parse failure.
        #[source]
        source: NumberParseError,
    },

    /// An explicitly tagged value does not fit its declared type.
    #[error("param `{key}` declared as {expected} but holds {found}")]
    Mismatch {
        /// The parameter key.
        key: String,
        /// The declared type.
        expected: ParamType,
        /// Description of what was actually supplied.
        found: String,
    },
}

/// The parse failure wrapped by [`ParamError::Parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumberParseError {
    /// Integer literal parse failure.
    #[error(transparent)]
    Int(#[from] ParseIntError),
    /// Floating-point literal parse failure.
    #[error(transparent)]
    Float(#[from] ParseFloatError),
}

impl ParamError {
    /// Create a not-found error.
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Create an unsupported-type error.
    pub fn unsupported_type(key: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            key: key.into(),
            type_name: type_name.into(),
        }
    }

    /// Create a parse error for a string that is not a valid `target` literal.
    pub fn parse(
        key: impl Into<String>,
        target: ParamType,
        source: impl Into<NumberParseError>,
    ) -> Self {
        Self::Parse {
            key: key.into(),
            target,
            source: source.into(),
        }
    }

    /// Create a declared-type mismatch error.
    pub fn mismatch(key: impl Into<String>, expected: ParamType, found: impl Into<String>) -> Self {
        Self::Mismatch {
            key: key.into(),
            expected,
            found: found.into(),
        }
    }

    /// The parameter key this error refers to.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::NotFound { key }
            | Self::UnsupportedType { key, .. }
            | Self::Parse { key, .. }
            | Self::Mismatch { key, .. } => key,
        }
    }

    /// Whether this error reports a missing parameter.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "lookup",
            Self::UnsupportedType { .. } | Self::Mismatch { .. } => "type",
            Self::Parse { .. } => "parse",
        }
    }

    /// Machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "PARAM_NOT_FOUND",
            Self::UnsupportedType { .. } => "PARAM_UNSUPPORTED_TYPE",
            Self::Parse { .. } => "PARAM_PARSE",
            Self::Mismatch { .. } => "PARAM_MISMATCH",
        }
    }

    /// Always `false`: coercion either succeeds or fails for a given input.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}
