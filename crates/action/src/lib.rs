//! # Castellan Action
//!
//! Typed action descriptors for the Castellan service.
//!
//! An [`Action`] names a kind of work (`action_type`), an instance (`name`)
//! and carries a bag of typed [`Param`]s. Parameters are read through
//! coercing accessors: a value stored as one scalar type can be requested
//! as another, following a fixed conversion table.
//!
//! ## Core Types
//!
//! - [`Action`]: named, typed container with coercing getters
//! - [`Param`]: one named scalar value
//! - [`ParamValue`]: the scalar payload (`Int`, `Float`, `Str`, `Bool`)
//! - [`ParamType`]: the logical type tag of a payload
//! - [`ParamError`]: lookup, type and parse failures
//!
//! ## Quick Start
//!
//! ```rust
//! use castellan_action::{Action, Param};
//!
//! let action = Action::new("svc1", "restart")
//!     .with_param(Param::int("retries", 3))
//!     .with_param(Param::string("force", "on"));
//!
//! assert_eq!(action.get_string("retries").unwrap(), "3");
//! assert!(action.get_boolean("force").unwrap());
//! assert_eq!(action.get_float_with_default("delay", 1.5).unwrap(), 1.5);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// The action container and its typed accessors.
pub mod action;
/// Error types for parameter lookup and coercion.
pub mod error;
/// Parameter values and their type tags.
pub mod param;

mod serde_impl;

pub use action::Action;
pub use error::{NumberParseError, ParamError};
pub use param::{Param, ParamType, ParamValue};

/// Result type for parameter accessors.
pub type ParamResult<T> = Result<T, ParamError>;
