//! Ordered array type.
//!
//! [`JsonArray`] is a thin wrapper around `Vec<Value>`. Elements keep the
//! order they were added in; duplicates and `null` entries are allowed.

use crate::value::FromValue;
use crate::{Error, Result, Value};
use serde::{Serialize, Serializer};

/// An ordered sequence of JSON values.
///
/// # Examples
///
/// ```rust
/// use json_dsl::{JsonArray, Value};
///
/// let mut array = JsonArray::new();
/// array.add(1).add("two").add_null();
///
/// assert_eq!(array.len(), 3);
/// assert_eq!(array.get(2), Some(&Value::Null));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonArray(Vec<Value>);

impl JsonArray {
    /// Creates an empty `JsonArray`.
    #[must_use]
    pub fn new() -> Self {
        JsonArray(Vec::new())
    }

    /// Creates an empty `JsonArray` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JsonArray(Vec::with_capacity(capacity))
    }

    /// Appends an element.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.0.push(value.into());
    }

    /// Appends an element and returns `self` so calls can be chained.
    pub fn add(&mut self, value: impl Into<Value>) -> &mut Self {
        self.push(value);
        self
    }

    /// Appends `null` and returns `self`.
    pub fn add_null(&mut self) -> &mut Self {
        self.0.push(Value::Null);
        self
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.0.get_mut(index)
    }

    /// Returns the element at `index`, or [`Error::IndexOutOfRange`].
    ///
    /// # Errors
    ///
    /// Fails when `index >= len`.
    pub fn value(&self, index: usize) -> Result<&Value> {
        self.0
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, self.0.len()))
    }

    /// Reads the element at `index` as a `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_dsl::{array, Error};
    ///
    /// let values = array![1, "two"];
    /// assert_eq!(values.get_as::<i64>(0).unwrap(), 1);
    /// assert_eq!(values.get_as::<String>(1).unwrap(), "two");
    /// assert_eq!(
    ///     values.get_as::<i64>(5),
    ///     Err(Error::IndexOutOfRange { index: 5, len: 2 })
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index >= len`, [`Error::TypeMismatch`]
    /// when the element is not a `T`.
    pub fn get_as<'a, T: FromValue<'a>>(&'a self, index: usize) -> Result<T> {
        T::from_value(self.value(index)?)
    }

    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.0.contains(value)
    }

    /// Removes and returns the element at `index`, shifting later elements down.
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.0.iter_mut()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    /// Encodes the array as compact JSON text.
    ///
    /// # Errors
    ///
    /// Fails when the array holds a value JSON cannot represent.
    pub fn encode(&self) -> Result<String> {
        crate::encode(self, false)
    }

    /// Encodes the array as indented JSON text.
    ///
    /// # Errors
    ///
    /// Fails when the array holds a value JSON cannot represent.
    pub fn encode_pretty(&self) -> Result<String> {
        crate::encode(self, true)
    }
}

impl Serialize for JsonArray {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.iter())
    }
}

impl From<Vec<Value>> for JsonArray {
    fn from(values: Vec<Value>) -> Self {
        JsonArray(values)
    }
}

impl From<JsonArray> for Vec<Value> {
    fn from(array: JsonArray) -> Self {
        array.0
    }
}

impl IntoIterator for JsonArray {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonArray {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<V: Into<Value>> FromIterator<V> for JsonArray {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        JsonArray(iter.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<Value>> Extend<V> for JsonArray {
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_and_nulls_are_kept() {
        let array: JsonArray = vec![Value::from(1), Value::Null, Value::from(1)]
            .into_iter()
            .collect();
        assert_eq!(array.len(), 3);
        assert_eq!(array.get(1), Some(&Value::Null));
        assert_eq!(array.get(0), array.get(2));
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut array = JsonArray::new();
        array.push(true);
        assert!(array.remove(1).is_none());
        assert_eq!(array.remove(0), Some(Value::Bool(true)));
        assert!(array.is_empty());
    }

    #[test]
    fn test_value_out_of_range() {
        let array = JsonArray::new();
        assert_eq!(array.value(0), Err(Error::index_out_of_range(0, 0)));
    }
}
