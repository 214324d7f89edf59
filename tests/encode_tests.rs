use chrono::{TimeZone, Utc};
use json_dsl::{
    array, encode, obj, to_string, to_string_pretty, to_string_with_options, to_value, to_vec,
    EncodeOptions, Error, JsonObject, Number, Value,
};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    total: f64,
}

fn sample_order() -> Order {
    Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["vip".to_string()],
        },
        items: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                price: 49.99,
                quantity: 1,
            },
        ],
        total: 109.97,
    }
}

#[test]
fn test_simple_struct() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    };

    let json = to_string(&user).unwrap();
    assert_eq!(
        json,
        r#"{"id":123,"name":"Alice","active":true,"tags":["admin","developer"]}"#
    );

    let user_back: User = serde_json::from_str(&json).unwrap();
    assert_eq!(user, user_back);
}

#[test]
fn test_nested_struct_matches_serde_json() {
    let order = sample_order();

    assert_eq!(
        to_string(&order).unwrap(),
        serde_json::to_string(&order).unwrap()
    );
    assert_eq!(
        to_string_pretty(&order).unwrap(),
        serde_json::to_string_pretty(&order).unwrap()
    );
}

#[test]
fn test_pretty_layout() {
    let object = obj! {
        "a" => array![1, 2],
        "b" => obj! { "c" => "d" },
        "e" => array![],
    };

    assert_eq!(
        encode(&object, true).unwrap(),
        "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": {\n    \"c\": \"d\"\n  },\n  \"e\": []\n}"
    );
}

#[test]
fn test_compact_has_no_whitespace() {
    let object = obj! { "a b" => array!["c d", 1] };
    assert_eq!(encode(&object, false).unwrap(), r#"{"a b":["c d",1]}"#);
}

#[test]
fn test_custom_indent() {
    let options = EncodeOptions::pretty().with_indent(4);
    assert_eq!(
        to_string_with_options(&array![array![1]], options).unwrap(),
        "[\n    [\n        1\n    ]\n]"
    );
}

#[test]
fn test_string_escaping() {
    let value = Value::from("quote\" backslash\\ newline\n tab\t bell\u{7} unicode é 🚀");
    assert_eq!(
        value.encode().unwrap(),
        r#""quote\" backslash\\ newline\n tab\t bell\u0007 unicode é 🚀""#
    );
    assert_eq!(
        value.encode().unwrap(),
        serde_json::to_string(&value).unwrap()
    );
}

#[test]
fn test_key_escaping() {
    let object = obj! { "line\nbreak" => 1 };
    assert_eq!(object.encode().unwrap(), r#"{"line\nbreak":1}"#);
}

#[test]
fn test_insertion_order_preserved() {
    let mut object = JsonObject::new();
    for key in ["zeta", "alpha", "mid"] {
        object.insert(key, key.len());
    }
    object.insert("alpha", 0);

    assert_eq!(
        object.encode().unwrap(),
        r#"{"zeta":4,"alpha":0,"mid":3}"#
    );
}

#[test]
fn test_numbers() {
    let array = array![
        0,
        -1,
        i64::MIN,
        u64::MAX,
        1.5,
        1.0,
        -0.25f32,
        1e21,
    ];
    assert_eq!(
        array.encode().unwrap(),
        format!("[0,-1,{},{},1.5,1.0,-0.25,1e21]", i64::MIN, u64::MAX)
    );
}

#[test]
fn test_non_finite_float_rejected_at_encode() {
    let object = obj! { "ok" => 1, "bad" => f64::NAN };
    assert!(matches!(object.encode(), Err(Error::UnsupportedType(_))));
    assert!(matches!(
        encode(&array![f32::INFINITY], true),
        Err(Error::UnsupportedType(_))
    ));
}

#[test]
fn test_date_bigint_binary() {
    let date = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let big: BigInt = "123456789012345678901234567890".parse().unwrap();

    let object = obj! {
        "date" => date,
        "big" => big,
        "bytes" => &b"hello"[..],
    };

    assert_eq!(
        object.encode().unwrap(),
        r#"{"date":"2024-01-02T03:04:05Z","big":123456789012345678901234567890,"bytes":"aGVsbG8="}"#
    );
    assert_eq!(object.get_as::<chrono::DateTime<Utc>>("date").unwrap(), date);
}

#[test]
fn test_depth_limit() {
    let nested = array![array![array![1]]];

    assert_eq!(
        to_string_with_options(&nested, EncodeOptions::new().with_max_depth(3)).unwrap(),
        "[[[1]]]"
    );
    assert_eq!(
        to_string_with_options(&nested, EncodeOptions::new().with_max_depth(2)),
        Err(Error::DepthLimitExceeded(2))
    );
}

#[test]
fn test_to_value_struct() {
    let order = sample_order();
    let value = to_value(&order).unwrap();

    let object = value.as_object().unwrap();
    assert_eq!(object.get_as::<u32>("order_id").unwrap(), 12345);
    assert_eq!(
        object.get("total"),
        Some(&Value::Number(Number::Float(109.97)))
    );
    assert_eq!(value.encode().unwrap(), to_string(&order).unwrap());
}

#[test]
fn test_to_value_map_and_option() {
    let mut map = BTreeMap::new();
    map.insert("b", Some(2));
    map.insert("a", None);

    let value = to_value(&map).unwrap();
    assert_eq!(value.encode().unwrap(), r#"{"a":null,"b":2}"#);
}

#[test]
fn test_value_deserializes_from_serde_json() {
    let value: Value = serde_json::from_str(r#"{"z":[1,2.5,"s",null,true],"a":{}}"#).unwrap();
    assert_eq!(
        value.encode().unwrap(),
        r#"{"z":[1,2.5,"s",null,true],"a":{}}"#
    );
}

#[test]
fn test_to_vec_matches_to_string() {
    let order = sample_order();
    assert_eq!(
        to_vec(&order).unwrap(),
        to_string(&order).unwrap().into_bytes()
    );
}

#[test]
fn test_unit_and_newtype_structs() {
    #[derive(Serialize)]
    struct Unit;

    #[derive(Serialize)]
    struct Meters(f64);

    #[derive(Serialize)]
    struct Pair(i32, &'static str);

    assert_eq!(to_string(&Unit).unwrap(), "null");
    assert_eq!(to_string(&Meters(2.5)).unwrap(), "2.5");
    assert_eq!(to_string(&Pair(1, "x")).unwrap(), r#"[1,"x"]"#);
}
