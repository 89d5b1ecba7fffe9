//! Percent-encoding for form keys and values.
//!
//! Everything outside the RFC 3986 unreserved set (ASCII letters, digits,
//! `-`, `.`, `_`, `~`) is written as `%XX` over its UTF-8 bytes with
//! uppercase hex digits. Spaces follow [`SpaceEncoding`]; brackets in keys
//! follow [`FormOptions::encode_brackets`].
//!
//! Encoding is not idempotent: `%` itself is escaped, so encode exactly once.
//!
//! ```rust
//! use serde_form::percent_encode;
//!
//! assert_eq!(percent_encode("a b"), "a%20b");
//! assert_eq!(percent_encode("a&b"), "a%26b");
//! assert_eq!(percent_encode("100%"), "100%25");
//! ```

use crate::{FormOptions, SpaceEncoding};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped in values: everything but the unreserved set.
const VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Caller-composed keys keep every bracket as nesting syntax.
const KEY_ENCODE_SET: &AsciiSet = &VALUE_ENCODE_SET.remove(b'[').remove(b']');

// Plus mode leaves spaces alone in the escape pass and swaps them afterwards.
const VALUE_ENCODE_SET_PLUS: &AsciiSet = &VALUE_ENCODE_SET.remove(b' ');
const KEY_ENCODE_SET_PLUS: &AsciiSet = &KEY_ENCODE_SET.remove(b' ');

/// Percent-encodes a value with the default options.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    percent_encode_with(input, &FormOptions::default())
}

/// Percent-encodes a value.
///
/// # Examples
///
/// ```rust
/// use serde_form::{percent_encode_with, FormOptions, SpaceEncoding};
///
/// let options = FormOptions::new().with_space_encoding(SpaceEncoding::Plus);
/// assert_eq!(percent_encode_with("1 + 1", &options), "1+%2B+1");
/// assert_eq!(percent_encode_with("[x]", &options), "%5Bx%5D");
/// ```
#[must_use]
pub fn percent_encode_with(input: &str, options: &FormOptions) -> String {
    match options.space_encoding {
        SpaceEncoding::Percent => utf8_percent_encode(input, VALUE_ENCODE_SET).to_string(),
        SpaceEncoding::Plus => encode_plus(input, VALUE_ENCODE_SET_PLUS),
    }
}

/// Percent-encodes a composite key such as `card[number]`.
///
/// The key is taken as already composed, so every `[` and `]` in it counts as
/// nesting syntax. Maps encoded through [`query_string`](crate::query_string)
/// escape brackets that belong to a key segment instead.
///
/// # Examples
///
/// ```rust
/// use serde_form::{percent_encode_key, FormOptions};
///
/// let options = FormOptions::new();
/// assert_eq!(percent_encode_key("card[number]", &options), "card[number]");
///
/// let strict = FormOptions::new().encode_brackets(true);
/// assert_eq!(percent_encode_key("card[number]", &strict), "card%5Bnumber%5D");
/// ```
#[must_use]
pub fn percent_encode_key(key: &str, options: &FormOptions) -> String {
    match (options.encode_brackets, options.space_encoding) {
        (true, SpaceEncoding::Percent) => utf8_percent_encode(key, VALUE_ENCODE_SET).to_string(),
        (true, SpaceEncoding::Plus) => encode_plus(key, VALUE_ENCODE_SET_PLUS),
        (false, SpaceEncoding::Percent) => utf8_percent_encode(key, KEY_ENCODE_SET).to_string(),
        (false, SpaceEncoding::Plus) => encode_plus(key, KEY_ENCODE_SET_PLUS),
    }
}

// A literal `+` is still in `set`, so it has already become `%2B` when the
// spaces are swapped.
fn encode_plus(input: &str, set: &'static AsciiSet) -> String {
    let mut output = String::with_capacity(input.len());
    for chunk in utf8_percent_encode(input, set) {
        if chunk.contains(' ') {
            output.push_str(&chunk.replace(' ', SpaceEncoding::Plus.as_str()));
        } else {
            output.push_str(chunk);
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved_pass_through() {
        let unreserved = "AZaz09-._~";
        assert_eq!(percent_encode(unreserved), unreserved);
    }

    #[test]
    fn test_reserved_characters() {
        assert_eq!(percent_encode(":/?#[]@"), "%3A%2F%3F%23%5B%5D%40");
        assert_eq!(percent_encode("!$&'()*+,;="), "%21%24%26%27%28%29%2A%2B%2C%3B%3D");
    }

    #[test]
    fn test_utf8_multibyte() {
        assert_eq!(percent_encode("é"), "%C3%A9");
        assert_eq!(percent_encode("€5"), "%E2%82%AC5");
    }

    #[test]
    fn test_plus_mode() {
        let options = FormOptions::new().with_space_encoding(SpaceEncoding::Plus);
        assert_eq!(percent_encode_with("a b", &options), "a+b");
        assert_eq!(percent_encode_with("a+b", &options), "a%2Bb");
        assert_eq!(percent_encode_with("  ", &options), "++");
    }

    #[test]
    fn test_key_brackets() {
        let options = FormOptions::new();
        assert_eq!(
            percent_encode_key("metadata[order id]", &options),
            "metadata[order%20id]"
        );
        assert_eq!(percent_encode_key("a&b[c]", &options), "a%26b[c]");
    }

    #[test]
    fn test_not_idempotent() {
        let once = percent_encode("a b");
        assert_eq!(percent_encode(&once), "a%2520b");
    }
}
