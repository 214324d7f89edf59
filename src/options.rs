//! Configuration options for JSON encoding.
//!
//! [`EncodeOptions`] selects between compact and pretty output and carries the
//! optional nesting guard.
//!
//! ## Examples
//!
//! ```rust
//! use json_dsl::{array, to_string_with_options, EncodeOptions};
//!
//! let values = array![1, 2];
//!
//! let options = EncodeOptions::pretty().with_indent(4);
//! let text = to_string_with_options(&values, options).unwrap();
//! assert_eq!(text, "[\n    1,\n    2\n]");
//! ```

/// Output settings for the encoder.
///
/// Compact mode emits no insignificant whitespace. Pretty mode puts one member
/// per line, indents each level by `indent` spaces and writes `": "` after
/// object keys; empty containers stay `{}` and `[]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    pub pretty: bool,
    pub indent: usize,
    /// Maximum container nesting; `None` disables the check.
    pub max_depth: Option<usize>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            pretty: false,
            indent: 2,
            max_depth: None,
        }
    }
}

impl EncodeOptions {
    /// Compact output, no depth limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretty output with two-space indentation.
    #[must_use]
    pub fn pretty() -> Self {
        EncodeOptions {
            pretty: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn from_pretty(pretty: bool) -> Self {
        EncodeOptions {
            pretty,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Rejects trees nested deeper than `max_depth` containers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_dsl::{array, to_string_with_options, EncodeOptions, Error};
    ///
    /// let nested = array![array![array![1]]];
    /// let options = EncodeOptions::new().with_max_depth(2);
    /// assert_eq!(
    ///     to_string_with_options(&nested, options),
    ///     Err(Error::DepthLimitExceeded(2))
    /// );
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
