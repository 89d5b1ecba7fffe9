/// Builds a [`FormValue`](crate::FormValue) from a JSON-like literal.
///
/// Object keys must be string literals. Values are `null`, `true`, `false`,
/// nested `[...]`/`{...}` literals, or a single-token expression implementing
/// `Serialize` (wrap negative numbers in parentheses) that [`to_value`]
/// accepts.
///
/// # Panics
///
/// Panics if an interpolated expression has no form representation, such as
/// a byte blob or a `u128` beyond `u64::MAX`. Use [`to_value`] on such values
/// to get the [`Error`](crate::Error) instead.
///
/// [`to_value`]: crate::to_value
///
/// ```rust
/// use serde_form::{form, FormValue};
///
/// let params = form!({
///     "amount": 2000,
///     "refund": (-1),
///     "metadata": { "order_id": "6735" },
///     "expand": ["customer"],
///     "description": null
/// });
/// assert!(params.is_object());
/// ```
#[macro_export]
macro_rules! form {
    (null) => {
        $crate::FormValue::Null
    };

    (true) => {
        $crate::FormValue::Bool(true)
    };

    (false) => {
        $crate::FormValue::Bool(false)
    };

    ([]) => {
        $crate::FormValue::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::FormValue::Array(vec![$($crate::form!($elem)),*])
    };

    ({}) => {
        $crate::FormValue::Object($crate::FormMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::FormMap::new();
        $(
            object.insert($key.to_string(), $crate::form!($value));
        )*
        $crate::FormValue::Object(object)
    }};

    // Any other expression goes through the serde bridge.
    ($s:expr) => {
        match $crate::to_value(&$s) {
            Ok(value) => value,
            Err(err) => panic!("form! value cannot be form encoded: {}", err),
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{FormMap, FormValue, Number};

    #[test]
    fn test_form_macro_primitives() {
        assert_eq!(form!(null), FormValue::Null);
        assert_eq!(form!(true), FormValue::Bool(true));
        assert_eq!(form!(42), FormValue::Number(Number::Integer(42)));
        assert_eq!(form!((-42)), FormValue::Number(Number::Integer(-42)));
        assert_eq!(form!(3.5), FormValue::Number(Number::Float(3.5)));
        assert_eq!(form!("hello"), FormValue::String("hello".to_string()));
    }

    #[test]
    #[should_panic(expected = "Unsupported type: byte arrays")]
    fn test_form_macro_rejects_unencodable_values() {
        struct Blob;

        impl serde::Serialize for Blob {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_bytes(&[1, 2, 3])
            }
        }

        let _ = form!({ "a": 1, "blob": Blob });
    }

    #[test]
    fn test_form_macro_collections() {
        assert_eq!(form!([]), FormValue::Array(vec![]));
        assert_eq!(form!({}), FormValue::Object(FormMap::new()));

        let obj = form!({
            "number": "4242424242424242",
            "exp_month": 12,
            "tags": [1, null]
        });

        let map = obj.as_object().unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(
            map.get("tags"),
            Some(&FormValue::Array(vec![
                FormValue::Number(Number::Integer(1)),
                FormValue::Null
            ]))
        );
    }
}
