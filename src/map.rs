//! Ordered object type.
//!
//! This module provides [`JsonObject`], a wrapper around [`IndexMap`] that keeps
//! fields in insertion order. The encoder writes fields in exactly that order,
//! so an object always encodes the way it was built.
//!
//! Re-inserting an existing key replaces its value in place: the key keeps the
//! position of its first insertion.
//!
//! ## Examples
//!
//! ```rust
//! use json_dsl::{JsonObject, Value};
//!
//! let mut object = JsonObject::new();
//! object.insert("a", 1);
//! object.insert("b", 2);
//! object.insert("a", 3);
//!
//! let keys: Vec<_> = object.keys().cloned().collect();
//! assert_eq!(keys, vec!["a", "b"]);
//! assert_eq!(object.get("a"), Some(&Value::from(3)));
//! ```

use crate::value::FromValue;
use crate::{Error, Result, Value};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

/// An ordered map of string keys to JSON values.
///
/// # Examples
///
/// ```rust
/// use json_dsl::JsonObject;
///
/// let mut object = JsonObject::new();
/// object.put("first", 1).put("second", 2);
///
/// let keys: Vec<_> = object.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonObject(IndexMap<String, Value>);

impl JsonObject {
    /// Creates an empty `JsonObject`.
    #[must_use]
    pub fn new() -> Self {
        JsonObject(IndexMap::new())
    }

    /// Creates an empty `JsonObject` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JsonObject(IndexMap::with_capacity(capacity))
    }

    /// Inserts a field, returning the previous value stored under `key`.
    ///
    /// An existing key keeps its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_dsl::JsonObject;
    ///
    /// let mut object = JsonObject::new();
    /// assert!(object.insert("key", 42).is_none());
    /// assert!(object.insert("key", 43).is_some());
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Inserts a field and returns `self` so calls can be chained.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.insert(key, value);
        self
    }

    /// Inserts a `null` field and returns `self`.
    pub fn put_null(&mut self, key: impl Into<String>) -> &mut Self {
        self.insert(key, Value::Null);
        self
    }

    /// Returns a reference to the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Returns the value stored under `key`, or [`Error::KeyNotFound`].
    ///
    /// # Errors
    ///
    /// Fails when `key` is absent.
    pub fn value(&self, key: &str) -> Result<&Value> {
        self.0.get(key).ok_or_else(|| Error::key_not_found(key))
    }

    /// Reads the value stored under `key` as a `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_dsl::{obj, Error};
    ///
    /// let object = obj! { "name" => "Alice", "age" => 30 };
    /// assert_eq!(object.get_as::<&str>("name").unwrap(), "Alice");
    /// assert_eq!(object.get_as::<i64>("age").unwrap(), 30);
    /// assert!(matches!(
    ///     object.get_as::<bool>("age"),
    ///     Err(Error::TypeMismatch { expected: "bool", found: "number" })
    /// ));
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] when `key` is absent, [`Error::TypeMismatch`] when
    /// the stored value is not a `T`.
    pub fn get_as<'a, T: FromValue<'a>>(&'a self, key: &str) -> Result<T> {
        T::from_value(self.value(key)?)
    }

    /// Returns `true` if the object contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes `key` and returns its value; the remaining fields keep their order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Copies every field of `other` into this object.
    ///
    /// With `deep` set, a field holding an object on both sides is merged
    /// recursively instead of being replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_dsl::obj;
    ///
    /// let mut base = obj! { "db" => obj! { "host" => "localhost", "port" => 5432 } };
    /// base.merge_in(obj! { "db" => obj! { "port" => 6543 } }, true);
    ///
    /// assert_eq!(base.encode().unwrap(), r#"{"db":{"host":"localhost","port":6543}}"#);
    /// ```
    pub fn merge_in(&mut self, other: JsonObject, deep: bool) -> &mut Self {
        for (key, value) in other {
            match value {
                Value::Object(incoming) if deep => match self.0.get_mut(&key) {
                    Some(Value::Object(existing)) => {
                        existing.merge_in(incoming, true);
                    }
                    _ => {
                        self.0.insert(key, Value::Object(incoming));
                    }
                },
                value => {
                    self.0.insert(key, value);
                }
            }
        }
        self
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the object has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Removes every field.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the fields, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Returns a mutable iterator over the fields, in insertion order.
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value> {
        self.0.iter_mut()
    }

    /// Encodes the object as compact JSON text.
    ///
    /// # Errors
    ///
    /// Fails when the object holds a value JSON cannot represent.
    pub fn encode(&self) -> Result<String> {
        crate::encode(self, false)
    }

    /// Encodes the object as indented JSON text.
    ///
    /// # Errors
    ///
    /// Fails when the object holds a value JSON cannot represent.
    pub fn encode_pretty(&self) -> Result<String> {
        crate::encode(self, true)
    }
}

impl Serialize for JsonObject {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter())
    }
}

impl<V: Into<Value>> From<HashMap<String, V>> for JsonObject {
    fn from(map: HashMap<String, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<V: Into<Value>> From<BTreeMap<String, V>> for JsonObject {
    fn from(map: BTreeMap<String, V>) -> Self {
        map.into_iter().collect()
    }
}

impl From<IndexMap<String, Value>> for JsonObject {
    fn from(map: IndexMap<String, Value>) -> Self {
        JsonObject(map)
    }
}

impl From<JsonObject> for IndexMap<String, Value> {
    fn from(object: JsonObject) -> Self {
        object.0
    }
}

impl IntoIterator for JsonObject {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonObject {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for JsonObject {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut object = JsonObject::new();
        object.extend(iter);
        object
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for JsonObject {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.0.insert(key.into(), value.into());
        }
    }
}
