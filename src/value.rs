//! Dynamic value representation for JSON trees.
//!
//! This module provides the [`Value`] enum, the closed set of values a tree may
//! hold, together with [`Number`] and the [`FromValue`] trait behind the typed
//! accessors.
//!
//! ## Core Types
//!
//! - [`Value`]: null, bool, number, string, array, object, plus the scalars the
//!   encoder knows how to render (date, big integer, binary)
//! - [`Number`]: keeps the caller's numeric kind so `3.0` stays a float and an
//!   `f32` keeps its own shortest rendering
//! - [`FromValue`]: checked conversion out of a `&Value`
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use json_dsl::{json, Value};
//!
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//! let missing = Value::from(None::<i32>);
//! assert!(missing.is_null());
//!
//! let object = json!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! assert!(object.is_object());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use json_dsl::{Error, Value};
//!
//! let value = Value::from(42);
//! assert_eq!(value.extract::<i64>().unwrap(), 42);
//! assert!(matches!(value.extract::<&str>(), Err(Error::TypeMismatch { .. })));
//! ```

use crate::{Error, JsonArray, JsonObject, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Newtype-struct name that marks a big integer for the text encoder.
///
/// The encoder writes the wrapped decimal string as a bare JSON number; other
/// serializers see an ordinary newtype struct around a string.
pub(crate) const BIGINT_TOKEN: &str = "$json_dsl::private::BigInt";

/// Any value a JSON tree may hold.
///
/// # Examples
///
/// ```rust
/// use json_dsl::{Number, Value};
///
/// let null = Value::Null;
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(JsonArray),
    Object(JsonObject),
    /// Encoded as an RFC 3339 string, e.g. `"2024-01-15T10:30:00Z"`.
    Date(DateTime<Utc>),
    /// Encoded as a bare JSON number of arbitrary length.
    BigInt(BigInt),
    /// Encoded as a standard base64 string with padding.
    Binary(Vec<u8>),
}

/// A numeric value in the form the caller supplied it.
///
/// `Unsigned` only holds values above `i64::MAX`; smaller unsigned inputs are
/// stored as `Integer`.
///
/// # Examples
///
/// ```rust
/// use json_dsl::Number;
///
/// assert_eq!(Number::from(42u64), Number::Integer(42));
/// assert_eq!(Number::from(u64::MAX), Number::Unsigned(u64::MAX));
/// assert!(Number::from(3.0).is_float());
/// assert!(Number::from(f64::NAN).is_special());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Float32(f32),
}

impl Number {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_) | Number::Unsigned(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_) | Number::Float32(_))
    }

    /// Returns `true` for `NaN` and the infinities, which JSON cannot represent.
    #[inline]
    #[must_use]
    pub fn is_special(&self) -> bool {
        match self {
            Number::Float(f) => !f.is_finite(),
            Number::Float32(f) => !f.is_finite(),
            _ => false,
        }
    }

    /// Converts this number to an `i64` if it is an integer in range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_dsl::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Unsigned(u64::MAX).as_i64(), None);
    /// assert_eq!(Number::Float(42.0).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Unsigned(u) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    /// Converts this number to a `u64` if it is a non-negative integer.
    #[inline]
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Number::Integer(i) => u64::try_from(*i).ok(),
            Number::Unsigned(u) => Some(*u),
            _ => None,
        }
    }

    /// Converts this number to an `f64`, possibly losing precision.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Unsigned(u) => *u as f64,
            Number::Float(f) => *f,
            Number::Float32(f) => f64::from(*f),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Unsigned(u) => write!(f, "{}", u),
            Number::Float(fl) => write!(f, "{}", fl),
            Number::Float32(fl) => write!(f, "{}", fl),
        }
    }
}

macro_rules! number_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(i64::from(value))
                }
            }
        )*
    };
}

number_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<isize> for Number {
    fn from(value: isize) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::Unsigned(value),
        }
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Number::from(value as u64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float32(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bigint(&self) -> bool {
        matches!(self, Value::BigInt(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(self, Value::Binary(_))
    }

    /// Name of the variant, as used in [`Error::TypeMismatch`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_dsl::{array, Value};
    ///
    /// assert_eq!(Value::from("x").type_name(), "string");
    /// assert_eq!(Value::from(array![]).type_name(), "array");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Date(_) => "date",
            Value::BigInt(_) => "bigint",
            Value::Binary(_) => "binary",
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Date(dt) => Some(dt),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Value::BigInt(bi) => Some(bi),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Value::Binary(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Reads this value as a `T`, failing with [`Error::TypeMismatch`].
    ///
    /// # Errors
    ///
    /// Fails when the value is not a `T`.
    pub fn extract<'a, T: FromValue<'a>>(&'a self) -> Result<T> {
        T::from_value(self)
    }

    /// Encodes the value as compact JSON text.
    ///
    /// # Errors
    ///
    /// Fails when the tree holds a value JSON cannot represent.
    pub fn encode(&self) -> Result<String> {
        crate::encode(self, false)
    }

    /// Encodes the value as indented JSON text.
    ///
    /// # Errors
    ///
    /// Fails when the tree holds a value JSON cannot represent.
    pub fn encode_pretty(&self) -> Result<String> {
        crate::encode(self, true)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Unsigned(u)) => serializer.serialize_u64(*u),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::Number(Number::Float32(f)) => serializer.serialize_f32(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => arr.serialize(serializer),
            Value::Object(obj) => obj.serialize(serializer),
            Value::Date(dt) => {
                serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Value::BigInt(bi) => serializer.serialize_newtype_struct(BIGINT_TOKEN, &bi.to_string()),
            Value::Binary(bytes) => serializer.serialize_bytes(bytes),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Value, E> {
                Ok(Value::String(value))
            }

            fn visit_bytes<E>(self, value: &[u8]) -> std::result::Result<Value, E> {
                Ok(Value::Binary(value.to_vec()))
            }

            fn visit_unit<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut array = JsonArray::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element::<Value>()? {
                    array.push(elem);
                }
                Ok(Value::Array(array))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut object = JsonObject::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    object.insert(key, value);
                }
                Ok(Value::Object(object))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

/// Checked conversion out of a borrowed [`Value`].
///
/// This is what [`JsonObject::get_as`] and [`JsonArray::get_as`] use: the
/// caller names the type it expects and gets [`Error::TypeMismatch`] instead of
/// a wrongly typed result when the stored value disagrees.
///
/// `Option<T>` maps `null` to `None` and everything else through `T`.
pub trait FromValue<'a>: Sized {
    /// # Errors
    ///
    /// Fails with [`Error::TypeMismatch`] when `value` is not a `Self`.
    fn from_value(value: &'a Value) -> Result<Self>;
}

fn mismatch<T>(expected: &'static str, value: &Value) -> Result<T> {
    Err(Error::type_mismatch(expected, value.type_name()))
}

impl<'a> FromValue<'a> for &'a Value {
    fn from_value(value: &'a Value) -> Result<Self> {
        Ok(value)
    }
}

impl<'a> FromValue<'a> for Value {
    fn from_value(value: &'a Value) -> Result<Self> {
        Ok(value.clone())
    }
}

impl<'a> FromValue<'a> for bool {
    fn from_value(value: &'a Value) -> Result<Self> {
        value.as_bool().map_or_else(|| mismatch("bool", value), Ok)
    }
}

macro_rules! from_value_integer {
    ($($ty:ident),*) => {
        $(
            impl<'a> FromValue<'a> for $ty {
                fn from_value(value: &'a Value) -> Result<Self> {
                    let converted = match value {
                        Value::Number(Number::Integer(i)) => $ty::try_from(*i).ok(),
                        Value::Number(Number::Unsigned(u)) => $ty::try_from(*u).ok(),
                        _ => None,
                    };
                    converted.map_or_else(|| mismatch(stringify!($ty), value), Ok)
                }
            }
        )*
    };
}

from_value_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<'a> FromValue<'a> for f64 {
    fn from_value(value: &'a Value) -> Result<Self> {
        value.as_f64().map_or_else(|| mismatch("f64", value), Ok)
    }
}

impl<'a> FromValue<'a> for f32 {
    fn from_value(value: &'a Value) -> Result<Self> {
        match value {
            Value::Number(Number::Float32(f)) => Ok(*f),
            Value::Number(n) => Ok(n.as_f64() as f32),
            _ => mismatch("f32", value),
        }
    }
}

impl<'a> FromValue<'a> for &'a str {
    fn from_value(value: &'a Value) -> Result<Self> {
        value.as_str().map_or_else(|| mismatch("string", value), Ok)
    }
}

impl<'a> FromValue<'a> for String {
    fn from_value(value: &'a Value) -> Result<Self> {
        <&str>::from_value(value).map(str::to_string)
    }
}

impl<'a> FromValue<'a> for &'a JsonObject {
    fn from_value(value: &'a Value) -> Result<Self> {
        value.as_object().map_or_else(|| mismatch("object", value), Ok)
    }
}

impl<'a> FromValue<'a> for JsonObject {
    fn from_value(value: &'a Value) -> Result<Self> {
        <&JsonObject>::from_value(value).map(Clone::clone)
    }
}

impl<'a> FromValue<'a> for &'a JsonArray {
    fn from_value(value: &'a Value) -> Result<Self> {
        value.as_array().map_or_else(|| mismatch("array", value), Ok)
    }
}

impl<'a> FromValue<'a> for JsonArray {
    fn from_value(value: &'a Value) -> Result<Self> {
        <&JsonArray>::from_value(value).map(Clone::clone)
    }
}

impl<'a> FromValue<'a> for DateTime<Utc> {
    fn from_value(value: &'a Value) -> Result<Self> {
        value.as_date().copied().map_or_else(|| mismatch("date", value), Ok)
    }
}

impl<'a> FromValue<'a> for &'a BigInt {
    fn from_value(value: &'a Value) -> Result<Self> {
        value.as_bigint().map_or_else(|| mismatch("bigint", value), Ok)
    }
}

impl<'a> FromValue<'a> for BigInt {
    fn from_value(value: &'a Value) -> Result<Self> {
        match value {
            Value::BigInt(bi) => Ok(bi.clone()),
            Value::Number(Number::Integer(i)) => Ok(BigInt::from(*i)),
            Value::Number(Number::Unsigned(u)) => Ok(BigInt::from(*u)),
            _ => mismatch("bigint", value),
        }
    }
}

impl<'a> FromValue<'a> for &'a [u8] {
    fn from_value(value: &'a Value) -> Result<Self> {
        value.as_binary().map_or_else(|| mismatch("binary", value), Ok)
    }
}

impl<'a, T: FromValue<'a>> FromValue<'a> for Option<T> {
    fn from_value(value: &'a Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

// From implementations for creating Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.to_string())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(JsonArray::from(value))
    }
}

impl From<JsonArray> for Value {
    fn from(value: JsonArray) -> Self {
        Value::Array(value)
    }
}

impl From<JsonObject> for Value {
    fn from(value: JsonObject) -> Self {
        Value::Object(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Binary(value.to_vec())
    }
}
