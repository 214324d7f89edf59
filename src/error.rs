//! Error types for building, reading and encoding JSON trees.
//!
//! Every fallible operation in this crate returns [`Result`], and every failure
//! is one of the [`Error`] variants below. Nothing is logged or retried
//! internally: building and encoding are deterministic, so the same input
//! always produces the same error.
//!
//! ## Error Categories
//!
//! - **Accessor errors**: [`Error::KeyNotFound`], [`Error::IndexOutOfRange`] and
//!   [`Error::TypeMismatch`] come from the typed accessors on
//!   [`JsonObject`](crate::JsonObject) and [`JsonArray`](crate::JsonArray)
//! - **Encoding errors**: [`Error::UnsupportedType`] and
//!   [`Error::DepthLimitExceeded`] come from the encoder
//! - **Sink errors**: [`Error::SinkOperationUnsupported`], [`Error::StreamEnded`]
//!   and [`Error::Io`] come from [`Sink`](crate::Sink) implementations
//!
//! ## Examples
//!
//! ```rust
//! use json_dsl::{obj, Error};
//!
//! let object = obj! { "k" => "v" };
//! let err = object.get_as::<i64>("missing").unwrap_err();
//! assert!(matches!(err, Error::KeyNotFound(ref key) if key == "missing"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents every failure this crate can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The requested key is not present in the object.
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// The requested position is outside `[0, len)`.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The stored value is not of the type the caller asked for.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The tree contains a value JSON text cannot represent.
    #[error("unsupported value type: {0}")]
    UnsupportedType(String),

    /// The tree is nested deeper than the configured limit.
    #[error("nesting depth exceeds the limit of {0}")]
    DepthLimitExceeded(usize),

    /// The sink does not implement the requested operation.
    #[error("sink does not support `{0}`")]
    SinkOperationUnsupported(String),

    /// A write was attempted after the stream was ended.
    #[error("write after end of stream")]
    StreamEnded,

    /// IO error while writing to an underlying writer
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a missing-key error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_dsl::Error;
    ///
    /// let err = Error::key_not_found("name");
    /// assert_eq!(err.to_string(), "key not found: \"name\"");
    /// ```
    pub fn key_not_found(key: &str) -> Self {
        Error::KeyNotFound(key.to_string())
    }

    /// Creates an out-of-range error for `index` in a sequence of `len` elements.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_dsl::Error;
    ///
    /// let err = Error::type_mismatch("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Error::TypeMismatch { expected, found }
    }

    /// Creates an unsupported type error for values that cannot be encoded as JSON.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates an error for a sink that lacks `operation`.
    pub fn sink_unsupported(operation: &str) -> Self {
        Error::SinkOperationUnsupported(operation.to_string())
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

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::index_out_of_range(3, 1).to_string(),
            "index 3 out of range for array of length 1"
        );
        assert_eq!(
            Error::sink_unsupported("end").to_string(),
            "sink does not support `end`"
        );
        assert_eq!(
            Error::unsupported_type("NaN").to_string(),
            "unsupported value type: NaN"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = Error::from(io);
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("pipe closed")));
    }
}
