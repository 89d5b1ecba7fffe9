//! Error types for form encoding.
//!
//! Form encoding is total over well-formed input, so every variant here
//! describes a caller defect rather than an operational failure: a value with
//! no form representation, a map keyed by something other than a string, or a
//! structure nested deeper than the configured limit.
//!
//! ## Error Categories
//!
//! - **Unsupported data**: byte blobs, enum variants carrying tuples or structs,
//!   non-finite floats
//! - **Shape errors**: non-string map keys, a top-level value that is not a map,
//!   declared fields that collide after a [`FieldCase`](crate::FieldCase) transform
//! - **Depth errors**: nesting beyond [`FormOptions::max_depth`](crate::FormOptions)
//! - **I/O errors**: writer failures in [`to_writer`](crate::to_writer)
//!
//! ## Examples
//!
//! ```rust
//! use serde_form::{to_string, Error};
//!
//! let result = to_string(&vec![1, 2, 3]);
//! assert!(matches!(result, Err(Error::TopLevelNotMap(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while form encoding.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// Value type with no form-encoded representation
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Value of a supported type that has no canonical string form
    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),

    /// Map key that cannot be rendered as a string
    #[error("Map keys must be strings, found {0}")]
    KeyMustBeAString(String),

    /// Serde entry points need a map or struct at the top level
    #[error("Top-level value must be a map or struct, found {0}")]
    TopLevelNotMap(String),

    /// Two declared fields produced the same wire key
    #[error("Duplicate wire key `{0}`")]
    DuplicateKey(String),

    /// Nesting exceeded the configured limit
    #[error("Nesting depth exceeded the limit of {limit} at key `{key}`")]
    DepthLimitExceeded { limit: usize, key: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error for types that cannot be form encoded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_form::Error;
    ///
    /// let err = Error::unsupported_type("byte arrays");
    /// assert!(err.to_string().contains("byte arrays"));
    /// ```
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates an unsupported value error, e.g. for `NaN`.
    pub fn unsupported_value(msg: &str) -> Self {
        Error::UnsupportedValue(msg.to_string())
    }

    /// Creates a key error naming the kind of key that was rejected.
    pub fn key_must_be_a_string(found: &str) -> Self {
        Error::KeyMustBeAString(found.to_string())
    }

    /// Creates a top-level shape error naming what was found instead of a map.
    pub fn top_level_not_map(found: &str) -> Self {
        Error::TopLevelNotMap(found.to_string())
    }

    /// Creates a duplicate key error for a wire key produced twice.
    pub fn duplicate_key(key: &str) -> Self {
        Error::DuplicateKey(key.to_string())
    }

    /// Creates a depth error for the composite key at which the limit was hit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_form::Error;
    ///
    /// let err = Error::depth_limit_exceeded(2, "a[b][c]");
    /// assert!(err.to_string().contains("a[b][c]"));
    /// ```
    pub fn depth_limit_exceeded(limit: usize, key: &str) -> Self {
        Error::DepthLimitExceeded {
            limit,
            key: key.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
