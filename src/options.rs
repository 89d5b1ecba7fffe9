//! Configuration options for form encoding.
//!
//! - [`FormOptions`]: main configuration struct
//! - [`SpaceEncoding`]: how a space character goes on the wire
//!
//! The defaults follow RFC 3986: spaces become `%20`, and the bracket
//! characters that compose nested keys stay literal.
//!
//! ## Examples
//!
//! ```rust
//! use serde_form::{form, query_string_with_options, FormOptions, SpaceEncoding};
//!
//! let params = form!({ "q": "red shoes" });
//! let map = params.as_object().unwrap();
//!
//! let options = FormOptions::new().with_space_encoding(SpaceEncoding::Plus);
//! assert_eq!(query_string_with_options(map, &options).unwrap(), "q=red+shoes");
//! ```

/// Nesting limit applied when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Wire representation of the space character.
///
/// # Examples
///
/// ```rust
/// use serde_form::SpaceEncoding;
///
/// assert_eq!(SpaceEncoding::Percent.as_str(), "%20");
/// assert_eq!(SpaceEncoding::Plus.as_str(), "+");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SpaceEncoding {
    /// `%20`, as RFC 3986 percent-encoding produces.
    #[default]
    Percent,
    /// `+`, the HTML form convention. Literal `+` is then always `%2B`.
    Plus,
}

impl SpaceEncoding {
    /// Returns the string a space is replaced with.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SpaceEncoding::Percent => "%20",
            SpaceEncoding::Plus => "+",
        }
    }
}

/// Configuration options for form encoding.
///
/// Both output channels (request bodies and query strings) read the same
/// options, so a body and a query string built from one map always agree.
///
/// # Examples
///
/// ```rust
/// use serde_form::{FormOptions, SpaceEncoding};
///
/// let options = FormOptions::new()
///     .with_space_encoding(SpaceEncoding::Plus)
///     .encode_brackets(true)
///     .with_sort_keys(true)
///     .with_max_depth(8);
/// assert_eq!(options.max_depth, 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormOptions {
    pub space_encoding: SpaceEncoding,
    /// Escape `[` and `]` in composite keys as `%5B`/`%5D`.
    pub encode_brackets: bool,
    /// Sort map keys at every level before flattening.
    pub sort_keys: bool,
    pub max_depth: usize,
}

impl Default for FormOptions {
    fn default() -> Self {
        FormOptions {
            space_encoding: SpaceEncoding::default(),
            encode_brackets: false,
            sort_keys: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl FormOptions {
    /// Creates default options (`%20` spaces, literal brackets, input order).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_form::{FormOptions, SpaceEncoding};
    ///
    /// let options = FormOptions::new();
    /// assert_eq!(options.space_encoding, SpaceEncoding::Percent);
    /// assert!(!options.encode_brackets);
    /// assert!(!options.sort_keys);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how spaces are written.
    #[must_use]
    pub fn with_space_encoding(mut self, space_encoding: SpaceEncoding) -> Self {
        self.space_encoding = space_encoding;
        self
    }

    /// Escapes the brackets of composite keys (`card%5Bnumber%5D`).
    ///
    /// Some servers only accept strictly RFC 3986 keys. Brackets inside
    /// values are escaped regardless of this setting.
    #[must_use]
    pub fn encode_brackets(mut self, encode: bool) -> Self {
        self.encode_brackets = encode;
        self
    }

    /// Sorts map keys lexicographically at every nesting level.
    ///
    /// Sequence order is never changed.
    #[must_use]
    pub fn with_sort_keys(mut self, sort: bool) -> Self {
        self.sort_keys = sort;
        self
    }

    /// Sets the maximum nesting depth below the top-level map.
    ///
    /// A top-level scalar has depth 0; `a[b]=1` has depth 1.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
