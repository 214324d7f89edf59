/// Builds a [`JsonObject`](crate::JsonObject) from `key => value` pairs.
///
/// Values of different types may be mixed; each goes through `Value::from`.
///
/// ```rust
/// use json_dsl::obj;
///
/// let object = obj! { "b1" => 1, "b2" => "2", "none" => () };
/// assert_eq!(object.encode().unwrap(), r#"{"b1":1,"b2":"2","none":null}"#);
/// ```
#[macro_export]
macro_rules! obj {
    () => {
        $crate::JsonObject::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut object = $crate::JsonObject::new();
        $(
            object.insert($key, $value);
        )+
        object
    }};
}

/// Builds a [`JsonArray`](crate::JsonArray) from a list of values.
///
/// ```rust
/// use json_dsl::{array, obj};
///
/// let list = array![1, "two", obj! { "three" => 3 }];
/// assert_eq!(list.encode().unwrap(), r#"[1,"two",{"three":3}]"#);
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::JsonArray::new()
    };

    ($($value:expr),+ $(,)?) => {{
        let mut array = $crate::JsonArray::new();
        $(
            array.push($value);
        )+
        array
    }};
}

/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Nested elements must be single tokens; wrap anything else (negative
/// numbers, method calls) in parentheses.
///
/// ```rust
/// use json_dsl::json;
///
/// let name = "Alice";
/// let value = json!({
///     "name": (name),
///     "scores": [1, 2, (-3)],
///     "admin": false,
///     "manager": null
/// });
/// assert_eq!(
///     value.encode().unwrap(),
///     r#"{"name":"Alice","scores":[1,2,-3],"admin":false,"manager":null}"#
/// );
/// ```
#[macro_export]
macro_rules! json {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array($crate::JsonArray::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array($crate::array![$($crate::json!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::JsonObject::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::JsonObject::new();
        $(
            object.insert($key, $crate::json!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Any other expression, including parenthesized ones.
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
