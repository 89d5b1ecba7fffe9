use serde::Serialize;
use serde_form::{
    encode_map, flatten, form, percent_encode, query_string, query_string_with_options,
    to_string, to_string_with_options, FormOptions, SpaceEncoding, CONTENT_TYPE,
};

fn query(value: serde_form::FormValue) -> String {
    query_string(value.as_object().unwrap()).unwrap()
}

#[test]
fn test_flat_keys_in_input_order() {
    assert_eq!(
        query(form!({ "currency": "usd", "amount": 500, "confirm": true })),
        "currency=usd&amount=500&confirm=true"
    );
}

#[test]
fn test_deep_nesting_chains_brackets() {
    assert_eq!(query(form!({ "a": { "b": { "c": 1 } } })), "a[b][c]=1");
}

#[test]
fn test_sequence_indices_are_explicit() {
    assert_eq!(query(form!({ "a": [10, 20] })), "a[0]=10&a[1]=20");
}

#[test]
fn test_nulls_never_reach_the_wire() {
    let encoded = query(form!({
        "name": null,
        "card": { "cvc": null, "number": "4242" },
        "tags": [null]
    }));
    assert_eq!(encoded, "card[number]=4242");
    assert!(!encoded.contains("name"));
    assert!(!encoded.contains("cvc"));
    assert!(!encoded.contains("tags"));
}

#[test]
fn test_reserved_characters_in_keys_and_values() {
    assert_eq!(percent_encode("a b"), "a%20b");
    assert_eq!(percent_encode("a&b"), "a%26b");
    assert_eq!(query(form!({ "a&b": "c=d" })), "a%26b=c%3Dd");
    assert_eq!(query(form!({ "a b": "c d" })), "a%20b=c%20d");
}

#[test]
fn test_plus_spaces_apply_to_keys_and_values() {
    let value = form!({ "a b": "c d" });
    let options = FormOptions::new().with_space_encoding(SpaceEncoding::Plus);
    assert_eq!(
        query_string_with_options(value.as_object().unwrap(), &options).unwrap(),
        "a+b=c+d"
    );
}

#[test]
fn test_card_example() {
    let value = form!({ "card": { "number": "4242424242424242", "exp_month": 12 } });
    assert_eq!(
        query(value),
        "card[number]=4242424242424242&card[exp_month]=12"
    );
}

#[test]
fn test_flattened_pairs_are_raw() {
    let value = form!({ "q": { "text": "a b" } });
    let pairs = flatten(value.as_object().unwrap()).unwrap();
    assert_eq!(pairs, vec![("q[text]".to_string(), "a b".to_string())]);
}

#[test]
fn test_brackets_in_map_keys_do_not_forge_nesting() {
    assert_eq!(
        query(form!({ "metadata": { "x][admin": "1" } })),
        "metadata[x%5D%5Badmin]=1"
    );
    assert_ne!(
        query(form!({ "metadata": { "x": "1" } })),
        query(form!({ "metadata[x]": "1" }))
    );
}

#[test]
fn test_values_with_brackets_are_escaped() {
    assert_eq!(query(form!({ "q": "[x]" })), "q=%5Bx%5D");
}

#[test]
fn test_body_bytes_match_query_string() {
    let value = form!({ "amount": 100, "description": "T-shirt (large)" });
    let map = value.as_object().unwrap();
    let body = encode_map(map).unwrap();
    assert_eq!(&body[..], query_string(map).unwrap().as_bytes());
    assert_eq!(&body[..], b"amount=100&description=T-shirt%20%28large%29");
}

#[test]
fn test_float_rendering_is_plain_decimal() {
    #[derive(Serialize)]
    struct Rates {
        small: f64,
        large: f64,
        whole: f32,
    }

    let rates = Rates {
        small: 0.000_001,
        large: 1e21,
        whole: 2.0,
    };
    assert_eq!(
        to_string(&rates).unwrap(),
        "small=0.000001&large=1000000000000000000000&whole=2"
    );
}

#[test]
fn test_sorted_keys_option() {
    #[derive(Serialize)]
    struct Params {
        zip: &'static str,
        city: &'static str,
    }

    let options = FormOptions::new().with_sort_keys(true);
    assert_eq!(
        to_string_with_options(&Params { zip: "94107", city: "SF" }, &options).unwrap(),
        "city=SF&zip=94107"
    );
}

#[test]
fn test_content_type() {
    assert_eq!(CONTENT_TYPE, "application/x-www-form-urlencoded");
}
