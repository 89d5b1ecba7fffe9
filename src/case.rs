//! Naming-convention transforms between snake_case and camelCase keys.
//!
//! Domain types name their fields the Rust way while some endpoints expect
//! camelCase wire keys (and vice versa). [`FieldCase`] lets a
//! [`FormEncodable`](crate::FormEncodable) declare which transform its keys
//! need; the free functions are exposed for callers building keys by hand.
//!
//! Both transforms are total: every input string produces an output.
//!
//! ```rust
//! use serde_form::case::{camel_case_to_snake_case, snake_case_to_camel_case};
//!
//! assert_eq!(snake_case_to_camel_case("address_line1"), "addressLine1");
//! assert_eq!(camel_case_to_snake_case("addressLine1"), "address_line1");
//! ```

/// How an object's declared keys relate to the keys the wire expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FieldCase {
    /// Keys are already wire keys.
    #[default]
    Preserve,
    /// Keys are snake_case, the wire wants camelCase.
    SnakeToCamel,
    /// Keys are camelCase, the wire wants snake_case.
    CamelToSnake,
}

impl FieldCase {
    /// Applies the transform to a single key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_form::FieldCase;
    ///
    /// assert_eq!(FieldCase::Preserve.apply("exp_month"), "exp_month");
    /// assert_eq!(FieldCase::SnakeToCamel.apply("exp_month"), "expMonth");
    /// assert_eq!(FieldCase::CamelToSnake.apply("expMonth"), "exp_month");
    /// ```
    #[must_use]
    pub fn apply(&self, key: &str) -> String {
        match self {
            FieldCase::Preserve => key.to_string(),
            FieldCase::SnakeToCamel => snake_case_to_camel_case(key),
            FieldCase::CamelToSnake => camel_case_to_snake_case(key),
        }
    }
}

/// Converts `snake_case` to `camelCase`.
///
/// The first segment keeps its case and every later segment has its first
/// character uppercased. Runs of inner underscores collapse; leading and
/// trailing underscores are kept as they are.
///
/// # Examples
///
/// ```rust
/// use serde_form::case::snake_case_to_camel_case;
///
/// assert_eq!(snake_case_to_camel_case("snake_case_key"), "snakeCaseKey");
/// assert_eq!(snake_case_to_camel_case("already"), "already");
/// assert_eq!(snake_case_to_camel_case(""), "");
/// assert_eq!(snake_case_to_camel_case("a__b"), "aB");
/// assert_eq!(snake_case_to_camel_case("_id_"), "_id_");
/// ```
#[must_use]
pub fn snake_case_to_camel_case(input: &str) -> String {
    let core = input.trim_matches('_');
    if core.is_empty() {
        return input.to_string();
    }

    // Underscores are ASCII, so these byte offsets sit on char boundaries.
    let leading = input.len() - input.trim_start_matches('_').len();
    let trailing = input.len() - input.trim_end_matches('_').len();

    let mut output = String::with_capacity(input.len());
    output.push_str(&input[..leading]);

    for (i, segment) in core.split('_').enumerate() {
        if i == 0 {
            output.push_str(segment);
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            output.extend(first.to_uppercase());
            output.push_str(chars.as_str());
        }
    }

    output.push_str(&input[input.len() - trailing..]);
    output
}

/// Converts `camelCase` to `snake_case`.
///
/// Every uppercase character becomes `_` followed by its lowercase form; an
/// uppercase first character is lowercased without a separator. Acronyms are
/// split per letter (`cardURL` becomes `card_u_r_l`).
///
/// # Examples
///
/// ```rust
/// use serde_form::case::camel_case_to_snake_case;
///
/// assert_eq!(camel_case_to_snake_case("expMonth"), "exp_month");
/// assert_eq!(camel_case_to_snake_case("ExpMonth"), "exp_month");
/// assert_eq!(camel_case_to_snake_case("number"), "number");
/// ```
#[must_use]
pub fn camel_case_to_snake_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len() + 4);

    for (i, ch) in input.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 && !output.ends_with('_') {
                output.push('_');
            }
            output.extend(ch.to_lowercase());
        } else {
            output.push(ch);
        }
    }

    output
}
