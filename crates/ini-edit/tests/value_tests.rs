//! Tests for typed value access

use ini_edit::{ConversionKind, Error, Ini};

#[test]
fn test_read_integer() {
    let mut doc = Ini::parse("[General]\nfontsize=9\n").unwrap();
    assert_eq!(doc.get("General").get_value_as::<i32>("fontsize").unwrap(), 9);
}

#[test]
fn test_read_raw_string() {
    let mut doc = Ini::parse("[General]\nfontsize=9\n").unwrap();
    assert_eq!(doc.get("General").get_value("fontsize").unwrap(), "9");
}

#[test]
fn test_empty_value_reads_as_empty_string() {
    let doc = Ini::parse("Age=\n").unwrap();
    assert_eq!(doc.global().get_value("Age").unwrap(), "");
}

#[test]
fn test_missing_key_is_key_not_found() {
    let mut doc = Ini::parse("[General]\nfontsize=9\n").unwrap();

    let err = doc.get("General").get_value("Missing").unwrap_err();
    assert!(matches!(err, Error::KeyNotFound { key } if key == "Missing"));

    let err = doc.get("General").get_value_as::<i32>("Missing").unwrap_err();
    assert!(matches!(err, Error::KeyNotFound { .. }));
}

#[test]
fn test_non_numeric_string_is_a_format_error() {
    let mut doc = Ini::parse("[User]\nName=John Doe\n").unwrap();

    let err = doc.get("User").get_value_as::<i32>("Name").unwrap_err();
    match err {
        Error::TypeConversion { key, value, kind, .. } => {
            assert_eq!(key, "Name");
            assert_eq!(value, "John Doe");
            assert_eq!(kind, ConversionKind::InvalidFormat);
        }
        other => panic!("expected TypeConversion, got {other:?}"),
    }
}

#[test]
fn test_numeric_overflow_is_distinguished() {
    let mut doc = Ini::parse("[General]\nbig=300\n").unwrap();

    let err = doc.get("General").get_value_as::<i8>("big").unwrap_err();
    assert!(matches!(
        err,
        Error::TypeConversion {
            kind: ConversionKind::Overflow,
            ..
        }
    ));

    // The same value fits a wider type.
    assert_eq!(doc.get("General").get_value_as::<i32>("big").unwrap(), 300);
}

#[test]
fn test_bool_and_float_values() {
    let mut doc = Ini::parse("[Flags]\nenabled=True\nratio=1.25\n").unwrap();

    assert!(doc.get("Flags").get_value_as::<bool>("enabled").unwrap());
    assert_eq!(doc.get("Flags").get_value_as::<f64>("ratio").unwrap(), 1.25);
}

#[test]
fn test_defaults_for_absent_keys() {
    let mut doc = Ini::parse("[General]\nfontsize=9\n").unwrap();
    let section = doc.get("General");

    assert_eq!(section.get_value_or("fontname", "Consolas"), "Consolas");
    assert_eq!(section.get_value_or("fontsize", "12"), "9");

    assert_eq!(section.get_value_as_or::<i32>("missing", 42).unwrap(), 42);
    assert_eq!(section.get_value_as_or::<i32>("fontsize", 42).unwrap(), 9);
}

#[test]
fn test_default_does_not_mask_a_bad_value() {
    let mut doc = Ini::parse("[General]\nfontsize=huge\n").unwrap();

    let err = doc
        .get("General")
        .get_value_as_or::<i32>("fontsize", 42)
        .unwrap_err();
    assert!(matches!(err, Error::TypeConversion { .. }));
}
