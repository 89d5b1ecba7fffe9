//! Customizing the wire format with FormOptions.
//!
//! Run with: cargo run --example custom_options

use serde::Serialize;
use serde_form::{to_string, to_string_with_options, FormOptions, SpaceEncoding};
use std::error::Error;

#[derive(Debug, Serialize)]
struct SearchParams {
    query: String,
    limit: u32,
    expand: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let params = SearchParams {
        query: "email:'jenny rosen'".to_string(),
        limit: 10,
        expand: vec!["data.customer".to_string()],
    };

    println!("Default (RFC 3986):\n{}\n", to_string(&params)?);

    let plus = FormOptions::new().with_space_encoding(SpaceEncoding::Plus);
    println!("Plus spaces:\n{}\n", to_string_with_options(&params, &plus)?);

    let strict = FormOptions::new().encode_brackets(true).with_sort_keys(true);
    println!("Escaped brackets, sorted keys:\n{}", to_string_with_options(&params, &strict)?);

    Ok(())
}
