//! Wire format reference.
//!
//! This module documents the `application/x-www-form-urlencoded` dialect
//! produced by this crate. It contains no code.
//!
//! # Pairs
//!
//! A body or query string is a sequence of `key=value` pairs joined by `&`,
//! with no leading `?` and no trailing separator. An empty map encodes to the
//! empty string.
//!
//! ```text
//! amount=2000&currency=usd
//! ```
//!
//! Order is the input order: top-level keys as inserted, nested keys depth
//! first. [`FormOptions::with_sort_keys`](crate::FormOptions::with_sort_keys)
//! sorts map keys at every level instead; sequences keep their order either
//! way.
//!
//! # Nesting
//!
//! | Input | Pairs |
//! |---|---|
//! | `{"card": {"number": "4242"}}` | `card[number]=4242` |
//! | `{"a": {"b": {"c": 1}}}` | `a[b][c]=1` |
//! | `{"expand": ["customer", "invoice"]}` | `expand[0]=customer&expand[1]=invoice` |
//! | `{"items": [{"price": "p_1"}]}` | `items[0][price]=p_1` |
//! | `{"metadata": {}}` or `{"tags": []}` | *(nothing)* |
//! | `{"name": null}` | *(nothing)* |
//!
//! Sequence indices are always written, so the receiver can rebuild order
//! and tell a one-element list from a scalar. A `null` inside a sequence
//! is skipped but still consumes its index.
//!
//! # Scalars
//!
//! | Value | Wire text |
//! |---|---|
//! | `true` / `false` | `true` / `false` |
//! | integers | decimal, `-` for negatives |
//! | floats | shortest round-trip decimal, no exponent, `3.0` as `3` |
//! | strings | as-is, then percent-encoded |
//! | `NaN`, `inf` | rejected |
//!
//! Formatting never depends on locale.
//!
//! # Percent-encoding
//!
//! Unreserved characters pass through: `A-Z a-z 0-9 - . _ ~`. Every other
//! byte of the UTF-8 encoding is written as `%XX` with uppercase hex.
//!
//! | Input | Default | `SpaceEncoding::Plus` |
//! |---|---|---|
//! | `a b` | `a%20b` | `a+b` |
//! | `a+b` | `a%2Bb` | `a%2Bb` |
//! | `a&b` | `a%26b` | `a%26b` |
//! | `é` | `%C3%A9` | `%C3%A9` |
//!
//! The brackets that compose keys are left literal (`card[number]`). Key
//! segments are escaped one by one before those brackets are added, so a map
//! key containing brackets keeps them escaped (`metadata[x%5D%5Badmin]`).
//! [`FormOptions::encode_brackets`](crate::FormOptions::encode_brackets)
//! escapes them as `%5B`/`%5D` for servers that insist on strict RFC 3986
//! keys. Brackets inside values are always escaped.
//!
//! Bodies and query strings use the same rules, so a map encodes to the same
//! bytes on both channels.
