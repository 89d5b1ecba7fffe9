//! Dynamic value representation for form parameters.
//!
//! [`FormValue`] is the intermediate representation between domain objects and
//! the flat `key=value` pairs on the wire. It is a closed sum type, so the
//! flattener matches it exhaustively instead of probing types at runtime.
//!
//! ## Core Types
//!
//! - [`FormValue`]: null, bool, number, string, sequence, or nested map
//! - [`Number`]: signed, unsigned, or floating-point numbers
//!
//! ## Creating Values
//!
//! ```rust
//! use serde_form::{form, FormValue};
//!
//! let number = FormValue::from(12);
//! let text = FormValue::from("4242424242424242");
//! let absent = FormValue::from(None::<String>);
//! assert!(absent.is_null());
//!
//! let card = form!({
//!     "number": "4242424242424242",
//!     "exp_month": 12
//! });
//! assert!(card.is_object());
//! ```

use crate::{Error, FormMap, Result};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// A dynamically-typed form parameter value.
///
/// `Null` marks an absent parameter: it is dropped by the introspector and
/// the flattener and never reaches the wire as an empty value.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum FormValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<FormValue>),
    Object(FormMap),
}

/// A numeric form value.
///
/// Unsigned values above `i64::MAX` keep their own variant so they render
/// exactly instead of being widened to a float.
///
/// # Examples
///
/// ```rust
/// use serde_form::Number;
///
/// assert_eq!(Number::Integer(-3).to_string(), "-3");
/// assert_eq!(Number::Unsigned(u64::MAX).to_string(), "18446744073709551615");
/// assert_eq!(Number::Float(2.5).to_string(), "2.5");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is a signed or unsigned integer.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_) | Number::Unsigned(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `false` only for `NaN` and infinite floats.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Number::Float(f) => f.is_finite(),
            _ => true,
        }
    }

    /// Converts this number to an `i64` if it fits without loss.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_form::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Unsigned(7).as_i64(), Some(7));
    /// assert_eq!(Number::Unsigned(u64::MAX).as_i64(), None);
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Unsigned(u) => i64::try_from(*u).ok(),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Unsigned(u) => *u as f64,
            Number::Float(f) => *f,
        }
    }

    /// Renders the canonical decimal form sent on the wire.
    ///
    /// Formatting goes through `Display`, which is locale independent, so the
    /// same number always yields the same bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedValue`] for `NaN` and infinities, which have
    /// no decimal form.
    pub fn to_form_string(&self) -> Result<String> {
        if self.is_finite() {
            Ok(self.to_string())
        } else {
            Err(Error::unsupported_value(&format!(
                "non-finite number {}",
                self
            )))
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Unsigned(u) => write!(f, "{}", u),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl FormValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, FormValue::Null)
    }

    /// Returns `true` if the value is a boolean, number, or string.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            FormValue::Bool(_) | FormValue::Number(_) | FormValue::String(_)
        )
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, FormValue::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, FormValue::String(_))
    }

    /// Returns `true` if the value is a sequence.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, FormValue::Array(_))
    }

    /// Returns `true` if the value is a nested map.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, FormValue::Object(_))
    }

    /// Short name of the variant, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            FormValue::Null => "null",
            FormValue::Bool(_) => "boolean",
            FormValue::Number(_) => "number",
            FormValue::String(_) => "string",
            FormValue::Array(_) => "sequence",
            FormValue::Object(_) => "map",
        }
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FormValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FormValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a number that fits in an `i64`, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FormValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a sequence, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<FormValue>> {
        match self {
            FormValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is a nested map, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&FormMap> {
        match self {
            FormValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Renders a scalar as the raw, not yet percent-encoded wire string.
    ///
    /// Returns `Ok(None)` for nulls and containers, which have no single
    /// string form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedValue`] for non-finite numbers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_form::FormValue;
    ///
    /// assert_eq!(FormValue::from(true).to_scalar_string().unwrap(), Some("true".to_string()));
    /// assert_eq!(FormValue::from(12).to_scalar_string().unwrap(), Some("12".to_string()));
    /// assert_eq!(FormValue::Null.to_scalar_string().unwrap(), None);
    /// ```
    pub fn to_scalar_string(&self) -> Result<Option<String>> {
        match self {
            FormValue::Bool(b) => Ok(Some(if *b { "true" } else { "false" }.to_string())),
            FormValue::Number(n) => n.to_form_string().map(Some),
            FormValue::String(s) => Ok(Some(s.clone())),
            FormValue::Null | FormValue::Array(_) | FormValue::Object(_) => Ok(None),
        }
    }
}

impl Serialize for FormValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FormValue::Null => serializer.serialize_unit(),
            FormValue::Bool(b) => serializer.serialize_bool(*b),
            FormValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            FormValue::Number(Number::Unsigned(u)) => serializer.serialize_u64(*u),
            FormValue::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            FormValue::String(s) => serializer.serialize_str(s),
            FormValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            FormValue::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl From<bool> for FormValue {
    fn from(value: bool) -> Self {
        FormValue::Bool(value)
    }
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FormValue {
                fn from(value: $ty) -> Self {
                    FormValue::Number(Number::Integer(i64::from(value)))
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FormValue {
                fn from(value: $ty) -> Self {
                    FormValue::Number(Number::Unsigned(u64::from(value)))
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64);

impl From<f32> for FormValue {
    fn from(value: f32) -> Self {
        FormValue::Number(Number::Float(f64::from(value)))
    }
}

impl From<f64> for FormValue {
    fn from(value: f64) -> Self {
        FormValue::Number(Number::Float(value))
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        FormValue::String(value)
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::String(value.to_string())
    }
}

/// Timestamps go on the wire as Unix seconds.
impl From<DateTime<Utc>> for FormValue {
    fn from(value: DateTime<Utc>) -> Self {
        FormValue::Number(Number::Integer(value.timestamp()))
    }
}

impl<T: Into<FormValue>> From<Option<T>> for FormValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FormValue::Null, Into::into)
    }
}

impl From<Vec<FormValue>> for FormValue {
    fn from(value: Vec<FormValue>) -> Self {
        FormValue::Array(value)
    }
}

impl From<FormMap> for FormValue {
    fn from(value: FormMap) -> Self {
        FormValue::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_primitives() {
        assert_eq!(FormValue::from(true), FormValue::Bool(true));
        assert_eq!(
            FormValue::from(42i32),
            FormValue::Number(Number::Integer(42))
        );
        assert_eq!(
            FormValue::from(42u64),
            FormValue::Number(Number::Unsigned(42))
        );
        assert_eq!(
            FormValue::from(3.5f64),
            FormValue::Number(Number::Float(3.5))
        );
        assert_eq!(
            FormValue::from("test"),
            FormValue::String("test".to_string())
        );
    }

    #[test]
    fn test_from_option() {
        assert_eq!(FormValue::from(Some("x")), FormValue::from("x"));
        assert_eq!(FormValue::from(None::<u32>), FormValue::Null);
    }

    #[test]
    fn test_from_datetime() {
        let dt = Utc.with_ymd_and_hms(2015, 1, 8, 0, 0, 0).unwrap();
        assert_eq!(FormValue::from(dt).as_i64(), Some(1_420_675_200));
    }

    #[test]
    fn test_scalar_strings() {
        assert_eq!(
            FormValue::from(false).to_scalar_string().unwrap().as_deref(),
            Some("false")
        );
        assert_eq!(
            FormValue::from(0.1f64).to_scalar_string().unwrap().as_deref(),
            Some("0.1")
        );
        assert_eq!(
            FormValue::from(100.0f64)
                .to_scalar_string()
                .unwrap()
                .as_deref(),
            Some("100")
        );
        assert_eq!(
            FormValue::Array(vec![]).to_scalar_string().unwrap(),
            None
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            FormValue::from(f64::NAN).to_scalar_string(),
            Err(Error::UnsupportedValue(_))
        ));
        assert!(Number::Float(f64::INFINITY).to_form_string().is_err());
        assert!(!Number::Float(f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_kind() {
        assert_eq!(FormValue::Null.kind(), "null");
        assert_eq!(FormValue::Array(vec![]).kind(), "sequence");
        assert_eq!(FormValue::Object(FormMap::new()).kind(), "map");
    }
}
