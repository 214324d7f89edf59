//! Builder entry points for object and array literals.
//!
//! [`Json`] is a stateless facade; [`json`] hands it to a closure so a whole
//! tree can be written as one expression.
//!
//! ## Examples
//!
//! ```rust
//! use json_dsl::{json, obj, Value};
//!
//! let document = json(|j| {
//!     j.obj([
//!         ("a", Value::from(j.array([1, 2, 3]))),
//!         ("obj", Value::from(obj! { "b1" => 1, "b2" => "2" })),
//!         (
//!             "loop",
//!             Value::from(j.obj_with(|o| {
//!                 for i in 1..=3 {
//!                     o.insert(format!("k_{}", i), i);
//!                 }
//!             })),
//!         ),
//!     ])
//! });
//!
//! assert_eq!(
//!     document.encode().unwrap(),
//!     r#"{"a":[1,2,3],"obj":{"b1":1,"b2":"2"},"loop":{"k_1":1,"k_2":2,"k_3":3}}"#
//! );
//! ```

use crate::{JsonArray, JsonObject, Value};

/// Stateless builder facade.
///
/// Every method returns a fresh node; nothing is shared between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Json;

impl Json {
    /// Builds an object from key/value pairs.
    ///
    /// Accepts an array literal of pairs, any iterator of pairs, or an
    /// existing map. Later duplicates overwrite earlier ones while the key
    /// keeps its first position.
    ///
    /// ```rust
    /// use json_dsl::Json;
    /// use std::collections::BTreeMap;
    ///
    /// let from_pairs = Json.obj([("b", 2), ("a", 1)]);
    /// let from_map = Json.obj(BTreeMap::from([("b", 2), ("a", 1)]));
    ///
    /// assert_eq!(from_pairs.encode().unwrap(), r#"{"b":2,"a":1}"#);
    /// assert_eq!(from_map.encode().unwrap(), r#"{"a":1,"b":2}"#);
    /// ```
    pub fn obj<I, K, V>(&self, pairs: I) -> JsonObject
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        pairs.into_iter().collect()
    }

    /// Runs `block` against a fresh empty object and returns it.
    pub fn obj_with<F>(&self, block: F) -> JsonObject
    where
        F: FnOnce(&mut JsonObject),
    {
        let mut object = JsonObject::new();
        block(&mut object);
        object
    }

    /// Builds an array preserving the iteration order of `values`.
    pub fn array<I, V>(&self, values: I) -> JsonArray
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        values.into_iter().collect()
    }

    /// Wraps a single node in a one-element array.
    ///
    /// An array argument becomes a nested element, never the array itself.
    ///
    /// ```rust
    /// use json_dsl::{array, Json};
    ///
    /// let nested = Json.array_of(array![1, 2]);
    /// assert_eq!(nested.encode().unwrap(), "[[1,2]]");
    /// ```
    pub fn array_of(&self, node: impl Into<Value>) -> JsonArray {
        let mut array = JsonArray::with_capacity(1);
        array.push(node);
        array
    }

    /// Runs `block` against a fresh empty array and returns it.
    pub fn array_with<F>(&self, block: F) -> JsonArray
    where
        F: FnOnce(&mut JsonArray),
    {
        let mut array = JsonArray::new();
        block(&mut array);
        array
    }
}

/// Evaluates `block` with the [`Json`] facade and returns its result.
pub fn json<T, F>(block: F) -> T
where
    F: FnOnce(&Json) -> T,
{
    block(&Json)
}
