use json_dsl::{array, json, obj, JsonArray, JsonObject, Number, Value};

#[test]
fn test_json_macro_null() {
    let value = json!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_json_macro_booleans() {
    assert_eq!(json!(true), Value::Bool(true));
    assert_eq!(json!(false), Value::Bool(false));
}

#[test]
fn test_json_macro_numbers() {
    let int_val = json!(42);
    assert_eq!(int_val, Value::Number(Number::Integer(42)));

    let float_val = json!(3.5);
    assert_eq!(float_val, Value::Number(Number::Float(3.5)));

    let negative_val = json!(-123);
    assert_eq!(negative_val, Value::Number(Number::Integer(-123)));
}

#[test]
fn test_json_macro_strings() {
    assert_eq!(json!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(json!(""), Value::String(String::new()));
}

#[test]
fn test_json_macro_arrays() {
    assert_eq!(json!([]), Value::Array(JsonArray::new()));

    let mixed_array = json!([1, "hello", true, null, (-2)]);
    assert_eq!(
        mixed_array,
        Value::Array(JsonArray::from(vec![
            Value::Number(Number::Integer(1)),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
            Value::Number(Number::Integer(-2)),
        ]))
    );
}

#[test]
fn test_json_macro_objects() {
    assert_eq!(json!({}), Value::Object(JsonObject::new()));

    let simple_object = json!({
        "name": "Alice",
        "age": 30,
    });

    let obj = simple_object.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(obj.get("name"), Some(&Value::String("Alice".to_string())));
    assert_eq!(obj.get("age"), Some(&Value::Number(Number::Integer(30))));
}

#[test]
fn test_json_macro_nested() {
    let nested = json!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", "developer"],
        "count": 42
    });

    assert_eq!(
        nested.encode().unwrap(),
        r#"{"user":{"id":123,"name":"Bob","active":true},"tags":["admin","developer"],"count":42}"#
    );

    let obj = nested.as_object().unwrap();
    let user = obj.get_as::<&JsonObject>("user").unwrap();
    assert_eq!(user.get_as::<u32>("id").unwrap(), 123);
    assert!(user.get_as::<bool>("active").unwrap());

    let tags = obj.get_as::<&JsonArray>("tags").unwrap();
    assert_eq!(tags.get_as::<&str>(1).unwrap(), "developer");
}

#[test]
fn test_json_macro_interpolation() {
    let name = String::from("Carol");
    let scores = array![90, 85];

    let value = json!({
        "name": (name.as_str()),
        "scores": (scores.clone()),
        "total": (scores.len())
    });

    assert_eq!(
        value.encode().unwrap(),
        r#"{"name":"Carol","scores":[90,85],"total":2}"#
    );
}

#[test]
fn test_obj_macro() {
    let object = obj! {
        "string" => "v",
        "int" => 1,
        "float" => 1.5,
        "bool" => false,
        "null" => (),
        "nested" => obj! { "inner" => array![1] },
    };

    assert_eq!(
        object.encode().unwrap(),
        r#"{"string":"v","int":1,"float":1.5,"bool":false,"null":null,"nested":{"inner":[1]}}"#
    );
}

#[test]
fn test_obj_macro_computed_keys() {
    let prefix = "k";
    let object = obj! {
        format!("{}_1", prefix) => 1,
        format!("{}_2", prefix) => 2,
    };
    assert_eq!(object.keys().collect::<Vec<_>>(), ["k_1", "k_2"]);
}

#[test]
fn test_array_macro() {
    assert!(array![].is_empty());

    let list = array![array![1, 2], obj! {}, "x"];
    assert_eq!(list.len(), 3);
    assert_eq!(list.encode().unwrap(), r#"[[1,2],{},"x"]"#);
}

#[test]
fn test_value_methods() {
    let null_val = json!(null);
    assert!(null_val.is_null());
    assert!(!null_val.is_bool());
    assert!(!null_val.is_number());
    assert!(!null_val.is_string());
    assert!(!null_val.is_array());
    assert!(!null_val.is_object());
    assert_eq!(null_val.type_name(), "null");

    let bool_val = json!(true);
    assert!(bool_val.is_bool());
    assert_eq!(bool_val.as_bool(), Some(true));

    let str_val = json!("hello");
    assert!(str_val.is_string());
    assert_eq!(str_val.as_str(), Some("hello"));

    let array_val = json!([1, 2, 3]);
    assert!(array_val.is_array());
    assert_eq!(array_val.as_array().unwrap().len(), 3);

    let obj_val = json!({"key": "value"});
    assert!(obj_val.is_object());
    assert_eq!(obj_val.as_object().unwrap().len(), 1);
    assert_eq!(obj_val.type_name(), "object");
}
