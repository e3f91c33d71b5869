//! Tests for the model codec module

use super::*;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::json;
use test_case::test_case;

#[derive(Debug, Deserialize, PartialEq)]
struct Swatch {
    id: i64,
    name: String,
    is_trans: bool,
}

#[derive(Debug, Serialize, Default)]
struct Query {
    search: Option<String>,
    page_size: Option<u32>,
    inc_part_details: Option<bool>,
    part_nums: Option<Vec<String>>,
}

#[test]
fn test_decode_ignores_unknown_fields() {
    let body = r#"{"id": 0, "name": "Black", "is_trans": false, "rgb": "05131D", "extra": [1, 2]}"#;
    let swatch: Swatch = decode_json("get_color", body).unwrap();
    pretty_assertions::assert_eq!(
        swatch,
        Swatch {
            id: 0,
            name: "Black".to_string(),
            is_trans: false
        }
    );
}

#[test]
fn test_decode_missing_field_is_named() {
    let body = r#"{"id": 0, "is_trans": false}"#;
    let err = decode_json::<Swatch>("get_color", body).unwrap_err();

    match err {
        Error::Decode {
            operation,
            entity,
            message,
            body: raw,
        } => {
            pretty_assertions::assert_eq!(operation, "get_color");
            pretty_assertions::assert_eq!(entity, "Swatch");
            assert!(message.contains("name"), "message was: {message}");
            pretty_assertions::assert_eq!(raw, body);
        }
        other => panic!("Expected Decode, got {other:?}"),
    }
}

#[test]
fn test_decode_type_mismatch() {
    let body = r#"{"id": "zero", "name": "x", "is_trans": false}"#;
    let err = decode_json::<Swatch>("get_color", body).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn test_decode_non_json_body() {
    let err = decode_json::<Swatch>("get_color", "<html>maintenance</html>").unwrap_err();
    assert!(matches!(err, Error::Decode { ref body, .. } if body.contains("maintenance")));
}

#[test]
fn test_entity_name() {
    pretty_assertions::assert_eq!(entity_name::<Swatch>(), "Swatch");
    pretty_assertions::assert_eq!(entity_name::<Vec<Swatch>>(), "Vec<Swatch>");
    pretty_assertions::assert_eq!(entity_name::<Option<String>>(), "Option<String>");
}

#[test]
fn test_encode_omits_none() {
    let pairs = encode_pairs("list_parts", &Query::default()).unwrap();
    assert!(pairs.is_empty());
}

#[test]
fn test_encode_renders_values() {
    let query = Query {
        search: Some("brick 2 x 4".to_string()),
        page_size: Some(100),
        inc_part_details: Some(true),
        part_nums: Some(vec!["3001".to_string(), "3003".to_string()]),
    };
    let mut pairs = encode_pairs("list_parts", &query).unwrap();
    pairs.sort();

    pretty_assertions::assert_eq!(
        pairs,
        vec![
            ("inc_part_details".to_string(), "1".to_string()),
            ("page_size".to_string(), "100".to_string()),
            ("part_nums".to_string(), "3001,3003".to_string()),
            ("search".to_string(), "brick 2 x 4".to_string()),
        ]
    );
}

#[test_case(json!(true) => Some("1".to_string()) ; "true")]
#[test_case(json!(false) => Some("0".to_string()) ; "false")]
#[test_case(json!(null) => None ; "null")]
#[test_case(json!(-1) => Some("-1".to_string()) ; "negative")]
#[test_case(json!("3065pr0006") => Some("3065pr0006".to_string()) ; "string")]
#[test_case(json!([1, null, 3]) => Some("1,3".to_string()) ; "array skips nulls")]
fn test_render_scalar(value: serde_json::Value) -> Option<String> {
    render_scalar(&value)
}

#[test]
fn test_encode_unit_is_empty() {
    let pairs = encode_pairs("list_colors", &()).unwrap();
    assert!(pairs.is_empty());
}

#[test]
fn test_encode_rejects_scalars() {
    let err = encode_pairs("list_colors", &42).unwrap_err();
    match err {
        Error::Encode { operation, message } => {
            pretty_assertions::assert_eq!(operation, "list_colors");
            assert!(message.contains("number"));
        }
        other => panic!("Expected Encode, got {other:?}"),
    }
}

#[test]
fn test_form_body() {
    let pairs = vec![
        ("name".to_string(), "Red & Blue".to_string()),
        ("is_buildable".to_string(), "1".to_string()),
    ];
    pretty_assertions::assert_eq!(form_body(&pairs), "name=Red+%26+Blue&is_buildable=1");
    pretty_assertions::assert_eq!(form_body(&[]), "");
}
