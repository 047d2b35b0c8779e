//! Typed conversion tests.

use proptest::prelude::*;
use serde::Deserialize;
use serde_json::json;

use crate::resolver::convert::{parse_bool, parse_json, parse_number};

#[test]
fn test_number_literals() {
    assert_eq!(parse_number("9000"), Some(9000.0));
    assert_eq!(parse_number("3.5"), Some(3.5));
    assert_eq!(parse_number("-12"), Some(-12.0));
    assert_eq!(parse_number("1e3"), Some(1000.0));
}

#[test]
fn test_non_finite_numbers_rejected() {
    assert_eq!(parse_number("NaN"), None);
    assert_eq!(parse_number("inf"), None);
    assert_eq!(parse_number("-infinity"), None);
    // Overflows to infinity during parsing.
    assert_eq!(parse_number("1e400"), None);
}

#[test]
fn test_non_numeric_text_rejected() {
    assert_eq!(parse_number("not-a-number"), None);
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("0x10"), None);
}

#[test]
fn test_boolean_spellings() {
    for raw in ["true", "1", "yes", "on", "TRUE", "Yes", "ON"] {
        assert_eq!(parse_bool(raw), Some(true), "expected {raw:?} to be true");
    }
    for raw in ["false", "0", "no", "off", "FALSE", "No", "Off"] {
        assert_eq!(parse_bool(raw), Some(false), "expected {raw:?} to be false");
    }
}

#[test]
fn test_unknown_boolean_spelling_rejected() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
    assert_eq!(parse_bool("10"), None);
}

#[test]
fn test_json_object_and_array() {
    let value: serde_json::Value = parse_json(r#"{"host":"db","replicas":[1,2,3]}"#).unwrap();
    assert_eq!(value, json!({"host": "db", "replicas": [1, 2, 3]}));

    let value: Vec<u32> = parse_json("[1,2,3]").unwrap();
    assert_eq!(value, vec![1, 2, 3]);
}

#[test]
fn test_json_scalars() {
    assert_eq!(parse_json::<u16>("8080"), Some(8080));
    assert_eq!(parse_json::<String>(r#""hello""#), Some("hello".to_string()));
    // Bare text is not a JSON string literal.
    assert_eq!(parse_json::<String>("hello"), None);
}

#[test]
fn test_json_into_struct() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Endpoint {
        host: String,
        port: u16,
    }

    let endpoint: Endpoint = parse_json(r#"{"host":"db.internal","port":5432}"#).unwrap();
    assert_eq!(
        endpoint,
        Endpoint {
            host: "db.internal".to_string(),
            port: 5432
        }
    );
}

#[test]
fn test_malformed_json_rejected() {
    assert_eq!(parse_json::<serde_json::Value>("{not json"), None);
    assert_eq!(parse_json::<serde_json::Value>(""), None);
}

proptest! {
    #[test]
    fn prop_boolean_spellings_parse_in_any_casing(
        index in 0usize..4,
        mask in proptest::collection::vec(any::<bool>(), 8),
    ) {
        let spellings = [("true", "false"), ("1", "0"), ("yes", "no"), ("on", "off")];
        let (truthy, falsy) = spellings[index];

        let recase = |word: &str| -> String {
            word.chars()
                .zip(mask.iter().cycle())
                .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
                .collect()
        };

        prop_assert_eq!(parse_bool(&recase(truthy)), Some(true));
        prop_assert_eq!(parse_bool(&recase(falsy)), Some(false));
    }

    #[test]
    fn prop_finite_numbers_round_trip_through_display(value in proptest::num::f64::NORMAL) {
        let raw = format!("{value}");
        prop_assert_eq!(parse_number(&raw), Some(value));
    }
}
