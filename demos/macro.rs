//! Using the obj!, array! and json! macros.
//!
//! Run with: cargo run --example macro

use json_dsl::{array, json, obj, to_string_pretty};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let user = obj! {
        "id" => 123,
        "name" => "Alice",
        "email" => "alice@example.com",
        "active" => true,
        "manager" => (),
    };
    println!("obj!:\n{}\n", user.encode_pretty()?);

    let mixed = array![1, "two", true, (), obj! { "five" => 5 }];
    println!("array!: {}\n", mixed.encode()?);

    let version = "1.0.0";
    let config = json!({
        "app": {
            "name": "MyApp",
            "version": (version)
        },
        "ports": [8080, 8443],
        "offset": (-3),
        "debug": false,
        "owner": null
    });
    println!("json!:\n{}", to_string_pretty(&config)?);

    Ok(())
}
