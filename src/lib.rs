//! # json_dsl
//!
//! A small builder DSL for JSON documents, plus an encoder that writes them
//! as text into buffers and output sinks.
//!
//! ## Key Features
//!
//! - **Literal-style builders**: [`obj!`], [`array!`] and [`json!`] macros, and
//!   the [`Json`] facade for pairs, iterables, maps and mutation blocks
//! - **Insertion order**: objects keep the order keys were first inserted
//! - **Checked access**: typed getters report missing keys, out-of-range
//!   indices and type mismatches as errors instead of panicking
//! - **Serde compatible**: any `T: Serialize` can be encoded or turned into a
//!   [`Value`]
//! - **Sinks**: encoded output reaches a [`Sink`] in exactly one write
//!
//! ## Quick Start
//!
//! ```rust
//! use json_dsl::{array, json, obj, Value};
//!
//! let document = json(|j| {
//!     j.obj([
//!         ("a", Value::from(array![1, 2, 3])),
//!         ("obj", Value::from(obj! { "b1" => 1, "b2" => "2" })),
//!         ("d", Value::from("d")),
//!     ])
//! });
//!
//! assert_eq!(
//!     document.encode().unwrap(),
//!     r#"{"a":[1,2,3],"obj":{"b1":1,"b2":"2"},"d":"d"}"#
//! );
//! assert_eq!(document.get_as::<&str>("d").unwrap(), "d");
//! ```
//!
//! ### Encoding Rust types
//!
//! ```rust
//! use serde::Serialize;
//! use json_dsl::to_string;
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     tags: Vec<String>,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     tags: vec!["admin".to_string()],
//! };
//!
//! assert_eq!(
//!     to_string(&user).unwrap(),
//!     r#"{"id":123,"name":"Alice","tags":["admin"]}"#
//! );
//! ```
//!
//! ### Writing to a sink
//!
//! ```rust
//! use json_dsl::{obj, SinkExt, WriterSink};
//!
//! let mut sink = WriterSink::new(Vec::new());
//! sink.end_json(&obj! { "status" => "ok" }, true).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(sink.into_inner()).unwrap(),
//!     "{\n  \"status\": \"ok\"\n}"
//! );
//! ```
//!
//! ## Output Format
//!
//! Compact output has no insignificant whitespace. Pretty output puts one
//! member per line with two-space indentation and `": "` after keys. Strings
//! are escaped per RFC 8259. Dates are RFC 3339 strings in UTC, big integers
//! are bare numbers and binary data is a standard base64 string.
//!
//! Values JSON cannot represent (non-finite floats, enum variants carrying
//! data, non-scalar map keys) fail at encode time and nothing is written.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Building and encoding a document
//! - **`macro.rs`** - The `obj!`, `array!` and `json!` macros
//! - **`dynamic_values.rs`** - Reading values back with checked accessors
//! - **`sink_writer.rs`** - Streaming encoded values to an output sink
//!
//! Run any of them with: `cargo run --example <name>`

#[macro_use]
pub mod macros;

pub mod array;
mod base64;
pub mod buffer;
pub mod builder;
pub mod error;
pub mod map;
pub mod options;
pub mod ser;
pub mod sink;
pub mod value;

pub use array::JsonArray;
pub use buffer::Buffer;
pub use builder::{json, Json};
pub use error::{Error, Result};
pub use map::JsonObject;
pub use options::EncodeOptions;
pub use ser::{Serializer, ValueSerializer};
pub use sink::{Sink, SinkExt, WriterSink};
pub use value::{FromValue, Number, Value};

use serde::Serialize;
use std::io;

/// Encode any `T: Serialize` as JSON text, compact or pretty.
///
/// # Examples
///
/// ```rust
/// use json_dsl::{array, encode};
///
/// let values = array![1, 2];
/// assert_eq!(encode(&values, false).unwrap(), "[1,2]");
/// assert_eq!(encode(&values, true).unwrap(), "[\n  1,\n  2\n]");
/// ```
///
/// # Errors
///
/// Returns an error if the value holds something JSON cannot represent.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode<T>(value: &T, pretty: bool) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, EncodeOptions::from_pretty(pretty))
}

/// Serialize any `T: Serialize` to a compact JSON string.
///
/// # Examples
///
/// ```rust
/// use json_dsl::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(to_string(&point).unwrap(), r#"{"x":1,"y":2}"#);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized (e.g., `NaN`).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, EncodeOptions::default())
}

/// Serialize any `T: Serialize` to a pretty-printed JSON string.
///
/// # Examples
///
/// ```rust
/// use json_dsl::to_string_pretty;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(
///     to_string_pretty(&point).unwrap(),
///     "{\n  \"x\": 1,\n  \"y\": 2\n}"
/// );
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, EncodeOptions::pretty())
}

/// Serialize any `T: Serialize` to a JSON string with custom options.
///
/// # Examples
///
/// ```rust
/// use json_dsl::{obj, to_string_with_options, EncodeOptions};
///
/// let object = obj! { "k" => 1 };
/// let options = EncodeOptions::pretty().with_indent(4);
/// assert_eq!(
///     to_string_with_options(&object, options).unwrap(),
///     "{\n    \"k\": 1\n}"
/// );
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized or nests deeper than
/// the configured limit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(options);
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Serialize any `T: Serialize` to compact JSON bytes.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    to_string(value).map(String::into_bytes)
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use json_dsl::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let value: Value = to_value(&point).unwrap();
/// assert!(value.is_object());
/// assert_eq!(value.as_object().unwrap().get_as::<i32>("y").unwrap(), 2);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a JSON tree.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` as compact JSON into a writer.
///
/// The value is fully encoded before anything is written.
///
/// # Examples
///
/// ```rust
/// use json_dsl::{array, to_writer};
///
/// let mut out = Vec::new();
/// to_writer(&mut out, &array![true, false]).unwrap();
/// assert_eq!(out, b"[true,false]");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, EncodeOptions::default())
}

/// Serialize any `T: Serialize` as JSON into a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: EncodeOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let json = to_string_with_options(value, options)?;
    writer.write_all(json.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    #[derive(Serialize)]
    struct TestStruct {
        id: u32,
        name: String,
        active: bool,
        score: Option<f64>,
    }

    #[derive(Serialize)]
    enum Status {
        Active,
        Suspended { days: u32 },
    }

    #[test]
    fn test_struct_round() {
        let value = TestStruct {
            id: 1,
            name: "test".to_string(),
            active: true,
            score: None,
        };
        assert_eq!(
            to_string(&value).unwrap(),
            r#"{"id":1,"name":"test","active":true,"score":null}"#
        );
    }

    #[test]
    fn test_unit_variant_is_string() {
        assert_eq!(to_string(&Status::Active).unwrap(), r#""Active""#);
    }

    #[test]
    fn test_variant_with_data_rejected() {
        let err = to_string(&Status::Suspended { days: 3 }).unwrap_err();
        assert!(matches!(err, Error::UnsupportedType(_)));
        assert!(matches!(
            to_value(&Status::Suspended { days: 3 }),
            Err(Error::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_integer_map_keys_stringified() {
        let mut map = BTreeMap::new();
        map.insert(2, "two");
        map.insert(1, "one");
        assert_eq!(to_string(&map).unwrap(), r#"{"1":"one","2":"two"}"#);
    }

    #[test]
    fn test_composite_map_keys_rejected() {
        let mut map = HashMap::new();
        map.insert((1, 2), "pair");
        assert!(matches!(to_string(&map), Err(Error::UnsupportedType(_))));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(to_string(&f64::NAN), Err(Error::UnsupportedType(_))));
        assert!(matches!(
            to_string(&vec![1.0, f64::INFINITY]),
            Err(Error::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_to_writer_failure_writes_nothing() {
        let mut out = Vec::new();
        let result = to_writer(&mut out, &vec![1.0, f64::NEG_INFINITY]);
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_to_vec() {
        assert_eq!(to_vec(&vec!["a", "b"]).unwrap(), br#"["a","b"]"#.to_vec());
    }

    #[test]
    fn test_encode_pretty_empty_containers() {
        let object = obj! { "a" => JsonArray::new(), "b" => JsonObject::new() };
        assert_eq!(
            encode(&object, true).unwrap(),
            "{\n  \"a\": [],\n  \"b\": {}\n}"
        );
    }
}
