//! Reading values back out of a tree with checked accessors.
//!
//! Run with: cargo run --example dynamic_values

use json_dsl::{json, to_value, Error as JsonError, JsonArray, JsonObject};
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = json!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "metrics"],
        "debug": true
    });
    let config = config
        .as_object()
        .ok_or("config should be an object")?;

    let host: &str = config.get_as("host")?;
    let port: u16 = config.get_as("port")?;
    let features: &JsonArray = config.get_as("features")?;
    println!("host={} port={} features={}", host, port, features.len());
    println!("first feature: {}", features.get_as::<&str>(0)?);

    // Accessor failures are values, not panics.
    match config.get_as::<u16>("host") {
        Err(JsonError::TypeMismatch { expected, found }) => {
            println!("host is a {}, not a {}", found, expected);
        }
        other => println!("unexpected: {:?}", other),
    }
    if let Err(err) = features.get_as::<&str>(5) {
        println!("{}", err);
    }
    let timeout: Option<u32> = config.get_as::<Option<u32>>("timeout").unwrap_or(None);
    println!("timeout: {:?}\n", timeout);

    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };
    let user_value = to_value(&user)?;
    let user_object: &JsonObject = user_value.extract()?;
    println!("User as Value:\n{}", user_value.encode_pretty()?);
    println!("roles: {}", user_object.get_as::<&JsonArray>("roles")?.encode()?);

    Ok(())
}
