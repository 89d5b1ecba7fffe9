//! Ordered map type for form parameters.
//!
//! [`FormMap`] wraps an [`IndexMap`] so parameters are flattened in the order
//! they were inserted. Form bodies are compared byte-for-byte in request
//! signing and test fixtures, so iteration order must never depend on hashing.
//!
//! ## Examples
//!
//! ```rust
//! use serde_form::{FormMap, FormValue};
//!
//! let mut map = FormMap::new();
//! map.insert("number".to_string(), FormValue::from("4242424242424242"));
//! map.insert("exp_month".to_string(), FormValue::from(12));
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["number", "exp_month"]);
//! ```

use crate::FormValue;
use indexmap::IndexMap;

/// An insertion-ordered map of wire keys to form values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormMap(IndexMap<String, FormValue>);

impl FormMap {
    /// Creates an empty `FormMap`.
    #[must_use]
    pub fn new() -> Self {
        FormMap(IndexMap::new())
    }

    /// Creates an empty `FormMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        FormMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the key is already present its value is replaced in place, keeping
    /// the original position, and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_form::{FormMap, FormValue};
    ///
    /// let mut map = FormMap::new();
    /// map.insert("a".to_string(), FormValue::from(1));
    /// map.insert("b".to_string(), FormValue::from(2));
    /// assert!(map.insert("a".to_string(), FormValue::from(3)).is_some());
    ///
    /// let keys: Vec<_> = map.keys().cloned().collect();
    /// assert_eq!(keys, vec!["a", "b"]);
    /// ```
    pub fn insert(&mut self, key: String, value: FormValue) -> Option<FormValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FormValue> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, shifting later entries down so the remaining order is kept.
    pub fn remove(&mut self, key: &str) -> Option<FormValue> {
        self.0.shift_remove(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, FormValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, FormValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, FormValue> {
        self.0.iter()
    }
}

impl From<IndexMap<String, FormValue>> for FormMap {
    fn from(map: IndexMap<String, FormValue>) -> Self {
        FormMap(map)
    }
}

impl IntoIterator for FormMap {
    type Item = (String, FormValue);
    type IntoIter = indexmap::map::IntoIter<String, FormValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FormMap {
    type Item = (&'a String, &'a FormValue);
    type IntoIter = indexmap::map::Iter<'a, String, FormValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, FormValue)> for FormMap {
    fn from_iter<T: IntoIterator<Item = (String, FormValue)>>(iter: T) -> Self {
        FormMap(IndexMap::from_iter(iter))
    }
}

impl Extend<(String, FormValue)> for FormMap {
    fn extend<T: IntoIterator<Item = (String, FormValue)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
