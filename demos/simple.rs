//! Building a document with the builder facade and encoding it.
//!
//! Run with: cargo run --example simple

use json_dsl::{json, obj, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let document = json(|j| {
        j.obj([
            ("a", Value::from(j.array([1, 2, 3]))),
            ("obj", Value::from(obj! { "b1" => 1, "b2" => "2" })),
            (
                "imperative-loop",
                Value::from(j.obj_with(|o| {
                    for i in 1..=3 {
                        o.put(format!("k_{}", i), i);
                    }
                })),
            ),
            (
                "map",
                Value::from(j.obj((1..=3).map(|i| (format!("k_{}", i), i)))),
            ),
            ("d", Value::from("d")),
        ])
    });

    println!("Compact:\n{}\n", document.encode()?);
    println!("Pretty:\n{}\n", document.encode_pretty()?);

    let matrix = json(|j| {
        j.array([
            j.array([1, 2, 3]),
            j.array(vec![4, 5, 6]),
            j.array_of(7),
            j.array_with(|a| {
                for i in 8..=10 {
                    a.add(i);
                }
            }),
        ])
    });
    println!("Nested arrays: {}", matrix.encode()?);

    Ok(())
}
