//! The [`FormEncodable`] capability and the object introspector.
//!
//! A domain object opts into form encoding by implementing [`FormEncodable`]:
//! it lists its wire fields in order, and may name a root key that nests them
//! (`card[number]`), a naming-convention transform for its keys, and extra
//! parameters to send verbatim.
//!
//! ```rust
//! use serde::Serialize;
//! use serde_form::{to_form_map, to_map, FormEncodable, FormMap, Result};
//!
//! #[derive(Serialize)]
//! struct CardParams {
//!     number: String,
//!     exp_month: u8,
//!     cvc: Option<String>,
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
//! let card = CardParams { number: "4242424242424242".to_string(), exp_month: 12, cvc: None };
//! let map = to_form_map(&card).unwrap();
//! let fields = map.get("card").and_then(|v| v.as_object()).unwrap();
//! assert_eq!(fields.len(), 2);
//! ```

use crate::{Error, FieldCase, FormMap, FormValue, Result};

/// A domain object that can be sent as form parameters.
pub trait FormEncodable {
    /// Key under which every field is nested, e.g. `card`.
    fn root_object_name(&self) -> Option<&str> {
        None
    }

    /// The object's fields, keyed by their declared names, in wire order.
    ///
    /// `Null` values mark absent fields and are dropped.
    fn form_fields(&self) -> Result<FormMap>;

    /// Transform turning declared field names into wire keys.
    ///
    /// Declared keys that map to the same wire key (`exp_month` and
    /// `expMonth` under [`FieldCase::SnakeToCamel`]) make encoding fail with
    /// [`Error::DuplicateKey`](crate::Error::DuplicateKey).
    fn field_case(&self) -> FieldCase {
        FieldCase::Preserve
    }

    /// Extra parameters appended after the declared fields.
    ///
    /// Keys are wire keys already; no case transform is applied. A key that
    /// matches a declared field replaces its value in place.
    fn additional_api_parameters(&self) -> Option<&FormMap> {
        None
    }
}

impl<T: FormEncodable + ?Sized> FormEncodable for &T {
    fn root_object_name(&self) -> Option<&str> {
        (**self).root_object_name()
    }

    fn form_fields(&self) -> Result<FormMap> {
        (**self).form_fields()
    }

    fn field_case(&self) -> FieldCase {
        (**self).field_case()
    }

    fn additional_api_parameters(&self) -> Option<&FormMap> {
        (**self).additional_api_parameters()
    }
}

/// Builds the map sent for `object`, nested under its root key if it has one.
///
/// # Errors
///
/// Propagates errors from [`FormEncodable::form_fields`].
///
/// # Examples
///
/// ```rust
/// use serde_form::{form, to_form_map, FormEncodable, FormMap, Result};
///
/// struct Token;
///
/// impl FormEncodable for Token {
///     fn root_object_name(&self) -> Option<&str> { Some("pii") }
///     fn form_fields(&self) -> Result<FormMap> {
///         Ok(form!({ "id_number": "000000000" }).as_object().cloned().unwrap_or_default())
///     }
/// }
///
/// let map = to_form_map(&Token).unwrap();
/// assert!(map.get("pii").unwrap().is_object());
/// ```
pub fn to_form_map<E>(object: &E) -> Result<FormMap>
where
    E: FormEncodable + ?Sized,
{
    let fields = fields_for(object)?;

    match object.root_object_name() {
        Some(root) => {
            let mut map = FormMap::with_capacity(1);
            map.insert(root.to_string(), FormValue::Object(fields));
            Ok(map)
        }
        None => Ok(fields),
    }
}

/// Builds the key/value map of `object` without root nesting.
///
/// Use this (or [`FormValue::from_encodable`]) to nest one encodable object
/// inside another's fields.
///
/// # Errors
///
/// Propagates errors from [`FormEncodable::form_fields`], and returns
/// [`Error::DuplicateKey`] when two declared fields share a wire key after
/// the case transform.
pub fn fields_for<E>(object: &E) -> Result<FormMap>
where
    E: FormEncodable + ?Sized,
{
    let declared = object.form_fields()?;
    let case = object.field_case();

    let mut fields = FormMap::with_capacity(declared.len());
    for (key, value) in declared {
        if value.is_null() {
            continue;
        }
        let wire_key = case.apply(&key);
        if fields.contains_key(&wire_key) {
            return Err(Error::duplicate_key(&wire_key));
        }
        fields.insert(wire_key, value);
    }

    if let Some(extra) = object.additional_api_parameters() {
        for (key, value) in extra.iter() {
            if value.is_null() {
                continue;
            }
            fields.insert(key.clone(), value.clone());
        }
    }

    Ok(fields)
}

impl FormValue {
    /// Wraps an encodable object's fields as a nested map value.
    ///
    /// The nested object's root key is ignored; the field it is stored under
    /// in the parent plays that role.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`FormEncodable::form_fields`].
    pub fn from_encodable<E>(object: &E) -> Result<FormValue>
    where
        E: FormEncodable + ?Sized,
    {
        fields_for(object).map(FormValue::Object)
    }
}
