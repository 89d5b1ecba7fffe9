//! Flattening nested form values into bracket-notation pairs.
//!
//! Form bodies are flat, so nested maps and sequences are spelled out in the
//! keys: a map entry `child` under `parent` becomes `parent[child]` and the
//! element at index `i` of a sequence becomes `parent[i]`. Traversal is depth
//! first and keeps map insertion order and sequence order.
//!
//! [`flatten`] returns raw strings for inspection. The encoding entry points
//! flatten with each key segment percent-encoded as it is composed, so a `[`
//! or `]` inside a map key is escaped while the nesting brackets stay
//! structural.
//!
//! ```rust
//! use serde_form::{flatten, form};
//!
//! let value = form!({
//!     "card": { "number": "4242424242424242", "exp_month": 12 },
//!     "expand": ["customer", "invoice"]
//! });
//! let pairs = flatten(value.as_object().unwrap()).unwrap();
//!
//! assert_eq!(pairs, vec![
//!     ("card[number]".to_string(), "4242424242424242".to_string()),
//!     ("card[exp_month]".to_string(), "12".to_string()),
//!     ("expand[0]".to_string(), "customer".to_string()),
//!     ("expand[1]".to_string(), "invoice".to_string()),
//! ]);
//! ```
//!
//! ## Edge cases
//!
//! - `Null` is skipped wherever it occurs. Inside a sequence the index is
//!   still consumed, so later elements keep their source positions.
//! - Empty maps and empty sequences contribute no pairs.
//! - `NaN` and infinite floats fail with [`Error::UnsupportedValue`].
//! - Nesting deeper than [`FormOptions::max_depth`] fails with
//!   [`Error::DepthLimitExceeded`].

use crate::{percent_encode_with, Error, FormMap, FormOptions, FormValue, Result};

/// How composite keys are spelled while flattening.
#[derive(Clone, Copy)]
enum KeyStyle {
    /// Segments joined verbatim, for inspection.
    Raw,
    /// Each segment percent-encoded before the structural brackets are added.
    Encoded,
}

impl KeyStyle {
    fn root(self, key: &str, options: &FormOptions) -> String {
        match self {
            KeyStyle::Raw => key.to_string(),
            KeyStyle::Encoded => percent_encode_with(key, options),
        }
    }

    fn child(self, parent: &str, segment: &str, options: &FormOptions) -> String {
        match self {
            KeyStyle::Raw => format!("{}[{}]", parent, segment),
            KeyStyle::Encoded => {
                let (open, close) = if options.encode_brackets {
                    ("%5B", "%5D")
                } else {
                    ("[", "]")
                };
                format!(
                    "{}{}{}{}",
                    parent,
                    open,
                    percent_encode_with(segment, options),
                    close
                )
            }
        }
    }
}

/// Flattens a map into `(composite key, raw value)` pairs with default options.
///
/// # Errors
///
/// Returns an error for non-finite numbers or nesting beyond the default
/// depth limit.
pub fn flatten(map: &FormMap) -> Result<Vec<(String, String)>> {
    flatten_with_options(map, &FormOptions::default())
}

/// Flattens a map into `(composite key, raw value)` pairs.
///
/// Keys are joined verbatim, so a map key that itself contains `[` or `]`
/// cannot be told apart from nesting here. The encoding entry points escape
/// such brackets segment by segment.
///
/// # Errors
///
/// Returns an error for non-finite numbers or nesting beyond
/// `options.max_depth`.
///
/// # Examples
///
/// ```rust
/// use serde_form::{flatten_with_options, form, FormOptions};
///
/// let value = form!({ "b": 2, "a": 1 });
/// let options = FormOptions::new().with_sort_keys(true);
/// let pairs = flatten_with_options(value.as_object().unwrap(), &options).unwrap();
/// assert_eq!(pairs[0].0, "a");
/// ```
pub fn flatten_with_options(
    map: &FormMap,
    options: &FormOptions,
) -> Result<Vec<(String, String)>> {
    flatten_keyed(map, options, KeyStyle::Raw)
}

/// Flattens a map into `(encoded composite key, raw value)` pairs.
///
/// Each key segment is percent-encoded on its own; only the brackets added
/// for nesting are left literal (or become `%5B`/`%5D` with
/// [`FormOptions::encode_brackets`]).
pub(crate) fn flatten_encoded(
    map: &FormMap,
    options: &FormOptions,
) -> Result<Vec<(String, String)>> {
    flatten_keyed(map, options, KeyStyle::Encoded)
}

fn flatten_keyed(
    map: &FormMap,
    options: &FormOptions,
    style: KeyStyle,
) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in entries(map, options) {
        flatten_value(style.root(key, options), value, 0, options, style, &mut pairs)?;
    }
    Ok(pairs)
}

fn entries<'a>(map: &'a FormMap, options: &FormOptions) -> Vec<(&'a String, &'a FormValue)> {
    let mut entries: Vec<_> = map.iter().collect();
    if options.sort_keys {
        entries.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));
    }
    entries
}

fn flatten_value(
    key: String,
    value: &FormValue,
    depth: usize,
    options: &FormOptions,
    style: KeyStyle,
    pairs: &mut Vec<(String, String)>,
) -> Result<()> {
    if value.is_null() {
        return Ok(());
    }

    if depth > options.max_depth {
        tracing::trace!(key = %key, limit = options.max_depth, "form nesting limit exceeded");
        return Err(Error::depth_limit_exceeded(options.max_depth, &key));
    }

    match value {
        FormValue::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let child = style.child(&key, &index.to_string(), options);
                flatten_value(child, item, depth + 1, options, style, pairs)?;
            }
        }
        FormValue::Object(nested) => {
            for (nested_key, item) in entries(nested, options) {
                let child = style.child(&key, nested_key, options);
                flatten_value(child, item, depth + 1, options, style, pairs)?;
            }
        }
        scalar => {
            if let Some(rendered) = scalar.to_scalar_string()? {
                pairs.push((key, rendered));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{form, SpaceEncoding};

    fn pairs_of(value: FormValue) -> Vec<(String, String)> {
        match value {
            FormValue::Object(map) => flatten(&map).unwrap(),
            other => panic!("expected map, found {}", other.kind()),
        }
    }

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn test_flat_map_keeps_order() {
        let pairs = pairs_of(form!({ "z": "last", "a": "first", "m": true }));
        assert_eq!(
            pairs,
            vec![pair("z", "last"), pair("a", "first"), pair("m", "true")]
        );
    }

    #[test]
    fn test_nested_maps_chain_brackets() {
        let pairs = pairs_of(form!({ "a": { "b": { "c": 1 } } }));
        assert_eq!(pairs, vec![pair("a[b][c]", "1")]);
    }

    #[test]
    fn test_sequences_use_explicit_indices() {
        let pairs = pairs_of(form!({ "a": [10, 20] }));
        assert_eq!(pairs, vec![pair("a[0]", "10"), pair("a[1]", "20")]);
    }

    #[test]
    fn test_sequence_of_maps() {
        let pairs = pairs_of(form!({
            "items": [
                { "price": "price_1", "quantity": 2 },
                { "price": "price_2" }
            ]
        }));
        assert_eq!(
            pairs,
            vec![
                pair("items[0][price]", "price_1"),
                pair("items[0][quantity]", "2"),
                pair("items[1][price]", "price_2"),
            ]
        );
    }

    #[test]
    fn test_nulls_are_omitted_at_every_depth() {
        let pairs = pairs_of(form!({
            "name": null,
            "address": { "line1": "1 Main St", "line2": null },
            "tags": ["a", null, "c"]
        }));
        assert_eq!(
            pairs,
            vec![
                pair("address[line1]", "1 Main St"),
                pair("tags[0]", "a"),
                pair("tags[2]", "c"),
            ]
        );
    }

    #[test]
    fn test_empty_containers_contribute_nothing() {
        let pairs = pairs_of(form!({ "metadata": {}, "expand": [], "id": "tok_1" }));
        assert_eq!(pairs, vec![pair("id", "tok_1")]);
    }

    #[test]
    fn test_empty_string_is_kept() {
        let pairs = pairs_of(form!({ "description": "" }));
        assert_eq!(pairs, vec![pair("description", "")]);
    }

    #[test]
    fn test_number_rendering() {
        let mut map = FormMap::new();
        map.insert("i".to_string(), FormValue::from(-7));
        map.insert("f".to_string(), FormValue::from(1.5));
        map.insert("whole".to_string(), FormValue::from(3.0));
        let pairs = pairs_of(FormValue::Object(map));
        assert_eq!(
            pairs,
            vec![pair("i", "-7"), pair("f", "1.5"), pair("whole", "3")]
        );
    }

    #[test]
    fn test_non_finite_number_fails() {
        let mut map = FormMap::new();
        map.insert("amount".to_string(), FormValue::from(f64::NAN));
        assert!(matches!(flatten(&map), Err(Error::UnsupportedValue(_))));
    }

    #[test]
    fn test_raw_values_are_not_encoded() {
        let pairs = pairs_of(form!({ "q": "a b&c" }));
        assert_eq!(pairs, vec![pair("q", "a b&c")]);
    }

    #[test]
    fn test_sort_keys_applies_at_every_level() {
        let value = form!({ "b": { "y": 1, "x": 2 }, "a": [3, 1] });
        let options = FormOptions::new().with_sort_keys(true);
        let pairs = flatten_with_options(value.as_object().unwrap(), &options).unwrap();
        assert_eq!(
            pairs,
            vec![
                pair("a[0]", "3"),
                pair("a[1]", "1"),
                pair("b[x]", "2"),
                pair("b[y]", "1"),
            ]
        );
    }

    #[test]
    fn test_encoded_keys_escape_brackets_inside_segments() {
        let value = form!({ "metadata": { "x][admin": "1" }, "metadata[x]": "2" });
        let pairs = flatten_encoded(value.as_object().unwrap(), &FormOptions::new()).unwrap();
        assert_eq!(
            pairs,
            vec![pair("metadata[x%5D%5Badmin]", "1"), pair("metadata%5Bx%5D", "2")]
        );
    }

    #[test]
    fn test_encoded_keys_follow_options() {
        let value = form!({ "a b": { "c d": [true] } });
        let options = FormOptions::new()
            .with_space_encoding(SpaceEncoding::Plus)
            .encode_brackets(true);
        let pairs = flatten_encoded(value.as_object().unwrap(), &options).unwrap();
        assert_eq!(pairs, vec![pair("a+b%5Bc+d%5D%5B0%5D", "true")]);
    }

    #[test]
    fn test_depth_limit() {
        let value = form!({ "a": { "b": { "c": 1 } } });
        let map = value.as_object().unwrap();

        let options = FormOptions::new().with_max_depth(2);
        assert!(flatten_with_options(map, &options).is_ok());

        let options = FormOptions::new().with_max_depth(1);
        match flatten_with_options(map, &options) {
            Err(Error::DepthLimitExceeded { limit, key }) => {
                assert_eq!(limit, 1);
                assert_eq!(key, "a[b][c]");
            }
            other => panic!("expected depth error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_depth_allows_flat_maps_only() {
        let options = FormOptions::new().with_max_depth(0);

        let flat = form!({ "a": 1, "b": {} });
        assert!(flatten_with_options(flat.as_object().unwrap(), &options).is_ok());

        let nested = form!({ "a": [1] });
        assert!(flatten_with_options(nested.as_object().unwrap(), &options).is_err());
    }
}
