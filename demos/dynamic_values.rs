//! Building parameters at runtime with the form! macro.
//!
//! Run with: cargo run --example dynamic_values

use serde_form::{flatten, form, query_string, FormValue};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let params = form!({
        "amount": 2000,
        "currency": "usd",
        "payment_method_types": ["card"],
        "metadata": { "order_id": "6735", "note": null },
        "description": "Order #6735"
    });

    let map = params
        .as_object()
        .ok_or("parameters must be a map")?;

    // Raw pairs, before percent-encoding
    for (key, value) in flatten(map)? {
        println!("  {} = {}", key, value);
    }

    println!("\nQuery string:\n{}", query_string(map)?);

    if let Some(FormValue::Object(metadata)) = map.get("metadata") {
        println!("\nmetadata has {} declared keys", metadata.len());
    }

    Ok(())
}
