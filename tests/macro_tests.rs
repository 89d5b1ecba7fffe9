use serde_form::{form, query_string, FormMap, FormValue, Number};

#[test]
fn test_form_macro_null() {
    let value = form!(null);
    assert_eq!(value, FormValue::Null);
}

#[test]
fn test_form_macro_booleans() {
    assert_eq!(form!(true), FormValue::Bool(true));
    assert_eq!(form!(false), FormValue::Bool(false));
}

#[test]
fn test_form_macro_numbers() {
    assert_eq!(form!(42), FormValue::Number(Number::Integer(42)));
    assert_eq!(form!(3.5), FormValue::Number(Number::Float(3.5)));
    assert_eq!(form!(-123), FormValue::Number(Number::Integer(-123)));
    assert_eq!(form!(7u64), FormValue::Number(Number::Unsigned(7)));
}

#[test]
fn test_form_macro_strings() {
    assert_eq!(form!("hello world"), FormValue::String("hello world".to_string()));
    assert_eq!(form!(""), FormValue::String(String::new()));
}

#[test]
fn test_form_macro_arrays() {
    assert_eq!(form!([]), FormValue::Array(vec![]));
    assert_eq!(
        form!(["card", null, (-1)]),
        FormValue::Array(vec![
            FormValue::from("card"),
            FormValue::Null,
            FormValue::Number(Number::Integer(-1)),
        ])
    );
}

#[test]
fn test_form_macro_objects_keep_order() {
    let value = form!({
        "zeta": 1,
        "alpha": 2,
        "mid": { "b": true, "a": false }
    });

    let map = value.as_object().unwrap();
    let keys: Vec<_> = map.keys().cloned().collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);

    let nested = map.get("mid").and_then(FormValue::as_object).unwrap();
    let nested_keys: Vec<_> = nested.keys().cloned().collect();
    assert_eq!(nested_keys, vec!["b", "a"]);
}

#[test]
fn test_form_macro_empty_object() {
    assert_eq!(form!({}), FormValue::Object(FormMap::new()));
}

#[test]
fn test_form_macro_expressions() {
    let amount = 2000u32;
    let currency = String::from("usd");
    let value = form!({ "amount": amount, "currency": currency });

    assert_eq!(
        query_string(value.as_object().unwrap()).unwrap(),
        "amount=2000&currency=usd"
    );
}

#[test]
#[should_panic(expected = "form! value cannot be form encoded")]
fn test_form_macro_panics_on_out_of_range_integer() {
    let balance = u128::MAX;
    let _ = form!({ "balance": balance });
}
