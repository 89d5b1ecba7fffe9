//! Serde bridge into [`FormValue`].
//!
//! [`FormValueSerializer`] turns any `T: Serialize` into the intermediate
//! representation the flattener consumes, so domain types can derive
//! `Serialize` instead of listing their fields by hand.
//!
//! ## Mapping
//!
//! | Serde data model | `FormValue` |
//! |---|---|
//! | `bool` | `Bool` |
//! | signed / unsigned integers, floats | `Number` |
//! | `char`, `str`, unit variants | `String` |
//! | `None`, `()`, unit structs | `Null` (omitted on the wire) |
//! | sequences, tuples, tuple structs | `Array` |
//! | maps, structs | `Object` |
//! | newtype variants | `Object` with a single entry keyed by the variant |
//! | byte slices, tuple and struct variants | [`Error::UnsupportedType`] |
//!
//! Map keys must be string-like: strings, chars, integers, bools, and unit
//! variants are accepted and rendered as strings.
//!
//! ```rust
//! use serde::Serialize;
//! use serde_form::{to_value, FormValue};
//!
//! #[derive(Serialize)]
//! struct BankAccount { country: String, routing_number: Option<String> }
//!
//! let account = BankAccount { country: "US".to_string(), routing_number: None };
//! let value = to_value(&account).unwrap();
//! let map = value.as_object().unwrap();
//! assert_eq!(map.get("country"), Some(&FormValue::from("US")));
//! assert_eq!(map.get("routing_number"), Some(&FormValue::Null));
//! ```

use crate::{Error, FormMap, FormValue, Number, Result};
use serde::{ser, Serialize};

/// Serializer producing a [`FormValue`] tree.
pub struct FormValueSerializer;

pub struct SerializeVec {
    vec: Vec<FormValue>,
}

pub struct SerializeMap {
    map: FormMap,
    current_key: Option<String>,
}

impl ser::Serializer for FormValueSerializer {
    type Ok = FormValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = ser::Impossible<FormValue, Error>;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = ser::Impossible<FormValue, Error>;

    fn serialize_bool(self, v: bool) -> Result<FormValue> {
        Ok(FormValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<FormValue> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<FormValue> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<FormValue> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<FormValue> {
        Ok(FormValue::Number(Number::Integer(v)))
    }

    fn serialize_i128(self, v: i128) -> Result<FormValue> {
        i64::try_from(v)
            .map(|i| FormValue::Number(Number::Integer(i)))
            .map_err(|_| Error::unsupported_value(&format!("integer {} out of range", v)))
    }

    fn serialize_u8(self, v: u8) -> Result<FormValue> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<FormValue> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<FormValue> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<FormValue> {
        Ok(FormValue::Number(Number::Unsigned(v)))
    }

    fn serialize_u128(self, v: u128) -> Result<FormValue> {
        u64::try_from(v)
            .map(|u| FormValue::Number(Number::Unsigned(u)))
            .map_err(|_| Error::unsupported_value(&format!("integer {} out of range", v)))
    }

    fn serialize_f32(self, v: f32) -> Result<FormValue> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<FormValue> {
        Ok(FormValue::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<FormValue> {
        Ok(FormValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<FormValue> {
        Ok(FormValue::String(v.to_string()))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<FormValue> {
        Err(Error::unsupported_type("byte arrays"))
    }

    fn serialize_none(self) -> Result<FormValue> {
        Ok(FormValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<FormValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<FormValue> {
        Ok(FormValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<FormValue> {
        Ok(FormValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<FormValue> {
        Ok(FormValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<FormValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<FormValue>
    where
        T: ?Sized + Serialize,
    {
        let mut map = FormMap::with_capacity(1);
        map.insert(variant.to_string(), to_form_value(value)?);
        Ok(FormValue::Object(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type("tuple variants"))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type("struct variants"))
    }
}

impl SerializeVec {
    fn new(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn new(capacity: usize) -> Self {
        SerializeMap {
            map: FormMap::with_capacity(capacity),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = FormValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_form_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<FormValue> {
        Ok(FormValue::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = FormValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<FormValue> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = FormValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<FormValue> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = FormValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key.serialize(MapKeySerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_form_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<FormValue> {
        Ok(FormValue::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = FormValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_form_value(value)?);
        Ok(())
    }

    fn skip_field(&mut self, _key: &'static str) -> Result<()> {
        Ok(())
    }

    fn end(self) -> Result<FormValue> {
        Ok(FormValue::Object(self.map))
    }
}

/// Renders map keys as strings, rejecting anything that has no single
/// string form.
struct MapKeySerializer;

fn key_must_be_a_string(found: &str) -> Error {
    Error::key_must_be_a_string(found)
}

impl ser::Serializer for MapKeySerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = ser::Impossible<String, Error>;
    type SerializeTuple = ser::Impossible<String, Error>;
    type SerializeTupleStruct = ser::Impossible<String, Error>;
    type SerializeTupleVariant = ser::Impossible<String, Error>;
    type SerializeMap = ser::Impossible<String, Error>;
    type SerializeStruct = ser::Impossible<String, Error>;
    type SerializeStructVariant = ser::Impossible<String, Error>;

    fn serialize_bool(self, v: bool) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_f32(self, _v: f32) -> Result<String> {
        Err(key_must_be_a_string("float"))
    }

    fn serialize_f64(self, _v: f64) -> Result<String> {
        Err(key_must_be_a_string("float"))
    }

    fn serialize_char(self, v: char) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(key_must_be_a_string("bytes"))
    }

    fn serialize_none(self) -> Result<String> {
        Err(key_must_be_a_string("none"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String> {
        Err(key_must_be_a_string("unit"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        Err(key_must_be_a_string("unit struct"))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(key_must_be_a_string("newtype variant"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(key_must_be_a_string("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(key_must_be_a_string("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(key_must_be_a_string("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(key_must_be_a_string("tuple variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(key_must_be_a_string("map"))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(key_must_be_a_string("struct"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(key_must_be_a_string("struct variant"))
    }
}

pub(crate) fn to_form_value<T: Serialize + ?Sized>(value: &T) -> Result<FormValue> {
    value.serialize(FormValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    #[serde(rename_all = "snake_case")]
    enum AccountHolderType {
        Individual,
        Company,
    }

    #[derive(Serialize)]
    enum Source {
        Token(String),
        Tuple(u8, u8),
    }

    #[derive(Serialize)]
    struct Params {
        holder: AccountHolderType,
        other: AccountHolderType,
        #[serde(skip_serializing_if = "Option::is_none")]
        nickname: Option<String>,
        pair: (u8, bool),
    }

    #[test]
    fn test_struct_to_object() {
        let params = Params {
            holder: AccountHolderType::Individual,
            other: AccountHolderType::Company,
            nickname: None,
            pair: (1, false),
        };
        let value = to_form_value(&params).unwrap();
        let map = value.as_object().unwrap();

        assert_eq!(map.get("holder"), Some(&FormValue::from("individual")));
        assert_eq!(map.get("other"), Some(&FormValue::from("company")));
        assert!(!map.contains_key("nickname"));
        assert_eq!(
            map.get("pair"),
            Some(&FormValue::Array(vec![
                FormValue::Number(Number::Unsigned(1)),
                FormValue::Bool(false)
            ]))
        );
    }

    #[test]
    fn test_newtype_variant_nests_under_variant_name() {
        let value = to_form_value(&Source::Token("tok_visa".to_string())).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.get("Token"), Some(&FormValue::from("tok_visa")));
    }

    #[test]
    fn test_unsupported_shapes() {
        assert!(matches!(
            to_form_value(&Source::Tuple(1, 2)),
            Err(Error::UnsupportedType(_))
        ));
        assert!(matches!(
            to_form_value(&Bytes(&[1, 2, 3])),
            Err(Error::UnsupportedType(_))
        ));
    }

    struct Bytes<'a>(&'a [u8]);

    impl Serialize for Bytes<'_> {
        fn serialize<S: ser::Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
            s.serialize_bytes(self.0)
        }
    }

    #[test]
    fn test_map_keys() {
        let mut numeric = BTreeMap::new();
        numeric.insert(2u32, "b");
        numeric.insert(1u32, "a");
        let value = to_form_value(&numeric).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["1", "2"]);

        let mut bad = BTreeMap::new();
        bad.insert(vec![1u8], "x");
        assert!(matches!(
            to_form_value(&bad),
            Err(Error::KeyMustBeAString(ref found)) if found == "sequence"
        ));
    }

    #[test]
    fn test_wide_integers() {
        assert_eq!(
            to_form_value(&(i64::MAX as i128)).unwrap(),
            FormValue::Number(Number::Integer(i64::MAX))
        );
        assert!(to_form_value(&u128::MAX).is_err());
    }
}
