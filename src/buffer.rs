//! Growable byte buffer handed to sinks.

use crate::{EncodeOptions, Error, Result};
use serde::Serialize;

/// A growable byte buffer.
///
/// [`Buffer::append_json`] encodes a value and appends its UTF-8 bytes; the
/// accumulated contents are then delivered to a [`Sink`](crate::Sink) in a
/// single write.
///
/// # Examples
///
/// ```rust
/// use json_dsl::{obj, Buffer};
///
/// let mut buffer = Buffer::new();
/// buffer
///     .append_str("data: ")
///     .append_json(&obj! { "k" => "v" }, false)
///     .unwrap()
///     .append_str("\n");
///
/// assert_eq!(buffer.to_str().unwrap(), "data: {\"k\":\"v\"}\n");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Buffer(Vec<u8>);

impl Buffer {
    #[must_use]
    pub fn new() -> Self {
        Buffer(Vec::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Buffer(Vec::with_capacity(capacity))
    }

    /// Appends the UTF-8 bytes of `s`.
    pub fn append_str(&mut self, s: &str) -> &mut Self {
        self.0.extend_from_slice(s.as_bytes());
        self
    }

    pub fn append_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.0.extend_from_slice(bytes);
        self
    }

    /// Encodes `value` as JSON and appends it.
    ///
    /// The buffer is left untouched when encoding fails.
    ///
    /// # Errors
    ///
    /// Fails when `value` holds something JSON cannot represent.
    pub fn append_json<T>(&mut self, value: &T, pretty: bool) -> Result<&mut Self>
    where
        T: ?Sized + Serialize,
    {
        self.append_json_with_options(value, EncodeOptions::from_pretty(pretty))
    }

    /// Like [`Buffer::append_json`], with explicit encoder options.
    ///
    /// # Errors
    ///
    /// Fails when `value` holds something JSON cannot represent or exceeds the
    /// configured depth.
    pub fn append_json_with_options<T>(
        &mut self,
        value: &T,
        options: EncodeOptions,
    ) -> Result<&mut Self>
    where
        T: ?Sized + Serialize,
    {
        let encoded = crate::to_string_with_options(value, options)?;
        Ok(self.append_str(&encoded))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Views the contents as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Fails when raw bytes appended with [`Buffer::append_bytes`] are not
    /// valid UTF-8.
    pub fn to_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.0).map_err(Error::custom)
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Buffer(bytes)
    }
}

impl From<&str> for Buffer {
    fn from(s: &str) -> Self {
        Buffer(s.as_bytes().to_vec())
    }
}

impl From<String> for Buffer {
    fn from(s: String) -> Self {
        Buffer(s.into_bytes())
    }
}
