//! # serde_form
//!
//! Encodes typed request parameters as `application/x-www-form-urlencoded`
//! bodies and query strings, with bracket notation for nested data.
//!
//! ## What it does
//!
//! REST APIs such as payment gateways take flat `key=value` bodies but model
//! nested parameters (`card[number]`, `expand[0]`). This crate is the
//! boundary between typed application state and those raw bytes:
//!
//! 1. **Introspection**: a [`FormEncodable`] object lists its wire fields,
//!    an optional root key, and its key naming convention.
//! 2. **Flattening**: nested maps and sequences become composite keys,
//!    `parent[child]` and `parent[0]`, in input order.
//! 3. **Percent-encoding**: keys and values are escaped with the RFC 3986
//!    unreserved set; spaces become `%20` unless configured otherwise.
//! 4. **Joining**: `k=v` pairs joined with `&`.
//!
//! Every step is a pure function; there is no shared state, so encoders may
//! run concurrently on any thread and produce byte-identical output for the
//! same input.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Serialize;
//! use serde_form::{encode, to_map, FormEncodable, FormMap, Result};
//!
//! #[derive(Serialize)]
//! struct CardParams {
//!     number: String,
//!     exp_month: u8,
//!     name: Option<String>,
//! }
//!
//! impl FormEncodable for CardParams {
//!     fn root_object_name(&self) -> Option<&str> {
//!         Some("card")
//!     }
//!
//!     fn form_fields(&self) -> Result<FormMap> {
//!         to_map(self)
//!     }
//! }
//!
//! let card = CardParams {
//!     number: "4242424242424242".to_string(),
//!     exp_month: 12,
//!     name: None,
//! };
//!
//! let body = encode(&card).unwrap();
//! assert_eq!(&body[..], b"card[number]=4242424242424242&card[exp_month]=12");
//! ```
//!
//! ### Plain serde types
//!
//! Anything whose top level serializes as a map or struct can be encoded
//! directly:
//!
//! ```rust
//! use serde::Serialize;
//! use serde_form::to_string;
//!
//! #[derive(Serialize)]
//! struct ListParams { limit: u32, expand: Vec<&'static str> }
//!
//! let query = to_string(&ListParams { limit: 3, expand: vec!["data.customer"] }).unwrap();
//! assert_eq!(query, "limit=3&expand[0]=data.customer");
//! ```
//!
//! ### Dynamic values with the `form!` macro
//!
//! ```rust
//! use serde_form::{form, query_string};
//!
//! let params = form!({
//!     "amount": 2000,
//!     "metadata": { "order id": "6735" }
//! });
//!
//! let query = query_string(params.as_object().unwrap()).unwrap();
//! assert_eq!(query, "amount=2000&metadata[order%20id]=6735");
//! ```
//!
//! ## Errors
//!
//! Encoding either fully succeeds or returns an [`Error`]; there is no partial
//! output. Errors only arise from caller defects: values with no form
//! representation (byte blobs, `NaN`), non-string map keys, or nesting deeper
//! than [`FormOptions::max_depth`].
//!
//! See the [`format`] module for the wire format in detail.

pub mod case;
pub mod encodable;
pub mod encode;
pub mod error;
pub mod flatten;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use case::FieldCase;
pub use encodable::{fields_for, to_form_map, FormEncodable};
pub use encode::{percent_encode, percent_encode_key, percent_encode_with};
pub use error::{Error, Result};
pub use flatten::{flatten, flatten_with_options};
pub use map::FormMap;
pub use options::{FormOptions, SpaceEncoding};
pub use ser::FormValueSerializer;
pub use value::{FormValue, Number};

use bytes::Bytes;
use serde::Serialize;
use std::io;

/// MIME type of the bodies produced by this crate.
pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Encodes an object as a form body with default options.
///
/// # Errors
///
/// Returns an error if the object's fields cannot be produced or flattened.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode<E>(object: &E) -> Result<Bytes>
where
    E: FormEncodable + ?Sized,
{
    encode_with_options(object, &FormOptions::default())
}

/// Encodes an object as a form body.
///
/// # Errors
///
/// Returns an error if the object's fields cannot be produced or flattened.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_with_options<E>(object: &E, options: &FormOptions) -> Result<Bytes>
where
    E: FormEncodable + ?Sized,
{
    let map = to_form_map(object)?;
    tracing::debug!(
        root = object.root_object_name().unwrap_or(""),
        fields = map.len(),
        "encoding form object"
    );
    encode_map_with_options(&map, options)
}

/// Encodes a map as a form body with default options.
///
/// # Errors
///
/// Returns an error if the map cannot be flattened.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_map(map: &FormMap) -> Result<Bytes> {
    encode_map_with_options(map, &FormOptions::default())
}

/// Encodes a map as a form body.
///
/// # Errors
///
/// Returns an error if the map cannot be flattened.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_map_with_options(map: &FormMap, options: &FormOptions) -> Result<Bytes> {
    let body = query_string_with_options(map, options)?;
    Ok(Bytes::from(body.into_bytes()))
}

/// Builds a query string from a map with default options.
///
/// The result has no leading `?`.
///
/// # Errors
///
/// Returns an error if the map cannot be flattened.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn query_string(map: &FormMap) -> Result<String> {
    query_string_with_options(map, &FormOptions::default())
}

/// Builds a query string from a map.
///
/// # Errors
///
/// Returns an error if the map cannot be flattened.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn query_string_with_options(map: &FormMap, options: &FormOptions) -> Result<String> {
    let pairs = flatten::flatten_encoded(map, options)?;
    let count = pairs.len();
    let query = join_pairs(
        pairs
            .into_iter()
            .map(|(key, value)| (key, percent_encode_with(&value, options))),
    );
    tracing::debug!(pairs = count, bytes = query.len(), "form encoded");
    Ok(query)
}

/// Percent-encodes flattened pairs and joins them as `k=v&k=v`.
///
/// Keys are taken as already composed: every `[` and `]` in them is treated
/// as nesting syntax (see [`percent_encode_key`]). Build from a [`FormMap`]
/// with [`query_string`] when map keys may contain brackets themselves.
///
/// # Examples
///
/// ```rust
/// use serde_form::{query_string_from_pairs, FormOptions};
///
/// let pairs = vec![
///     ("q".to_string(), "a&b".to_string()),
///     ("page[size]".to_string(), "10".to_string()),
/// ];
/// assert_eq!(
///     query_string_from_pairs(&pairs, &FormOptions::new()),
///     "q=a%26b&page[size]=10"
/// );
/// ```
#[must_use]
pub fn query_string_from_pairs<K, V>(pairs: &[(K, V)], options: &FormOptions) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    join_pairs(pairs.iter().map(|(key, value)| {
        (
            percent_encode_key(key.as_ref(), options),
            percent_encode_with(value.as_ref(), options),
        )
    }))
}

fn join_pairs<I>(pairs: I) -> String
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut output = String::new();
    for (i, (key, value)) in pairs.into_iter().enumerate() {
        if i > 0 {
            output.push('&');
        }
        output.push_str(&key);
        output.push('=');
        output.push_str(&value);
    }
    output
}

/// Convert any `T: Serialize` to a [`FormValue`].
///
/// # Errors
///
/// Returns an error if the value contains types with no form representation.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<FormValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(FormValueSerializer)
}

/// Convert any `T: Serialize` whose top level is a map or struct to a [`FormMap`].
///
/// This is the usual body of [`FormEncodable::form_fields`] for types that
/// derive `Serialize`.
///
/// # Errors
///
/// Returns [`Error::TopLevelNotMap`] if `value` serializes as anything other
/// than a map or struct.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_map<T>(value: &T) -> Result<FormMap>
where
    T: ?Sized + Serialize,
{
    match to_value(value)? {
        FormValue::Object(map) => Ok(map),
        other => Err(Error::top_level_not_map(other.kind())),
    }
}

/// Serialize any `T: Serialize` to a form-encoded string.
///
/// # Examples
///
/// ```rust
/// use serde_form::to_string;
/// use std::collections::BTreeMap;
///
/// let mut params = BTreeMap::new();
/// params.insert("email", "jenny rosen@example.com");
/// assert_eq!(to_string(&params).unwrap(), "email=jenny%20rosen%40example.com");
/// ```
///
/// # Errors
///
/// Returns an error if the value is not a map or struct or cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &FormOptions::default())
}

/// Serialize any `T: Serialize` to a form-encoded string with custom options.
///
/// # Errors
///
/// Returns an error if the value is not a map or struct or cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &FormOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    query_string_with_options(&to_map(value)?, options)
}

/// Serialize any `T: Serialize` to a form-encoded body.
///
/// # Errors
///
/// Returns an error if the value is not a map or struct or cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_bytes<T>(value: &T) -> Result<Bytes>
where
    T: ?Sized + Serialize,
{
    to_string(value).map(|s| Bytes::from(s.into_bytes()))
}

/// Serialize any `T: Serialize` to a writer as a form-encoded body.
///
/// # Examples
///
/// ```rust
/// use serde_form::to_writer;
/// use std::collections::BTreeMap;
///
/// let mut params = BTreeMap::new();
/// params.insert("limit", 10);
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &params).unwrap();
/// assert_eq!(buffer, b"limit=10");
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let body = to_string(value)?;
    writer
        .write_all(body.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
