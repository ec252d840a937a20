use crate::input::RawValueGroup;
use crate::number::*;
use crate::*;
use serde_json::json;

#[test]
fn parse_float_reads_the_longest_numeric_prefix() {
    assert_eq!(parse_float("12abc"), 12.0);
    assert_eq!(parse_float("  3.5"), 3.5);
    assert_eq!(parse_float("-.5"), -0.5);
    assert_eq!(parse_float("+2"), 2.0);
    assert_eq!(parse_float("1e3"), 1000.0);
    assert_eq!(parse_float("1e"), 1.0);
    assert_eq!(parse_float("7."), 7.0);
    assert_eq!(parse_float("Infinity"), f64::INFINITY);
    assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
    assert!(parse_float("abc").is_nan());
    assert!(parse_float("").is_nan());
    assert!(parse_float(".").is_nan());
    assert!(parse_float("-").is_nan());
}

#[test]
fn parse_int_reads_integer_prefixes() {
    assert_eq!(parse_int("42px"), 42.0);
    assert_eq!(parse_int("-7.9"), -7.0);
    assert_eq!(parse_int("0x1F"), 31.0);
    assert!(parse_int("x").is_nan());
    assert!(parse_int("").is_nan());
}

#[test]
fn coerce_float_stringifies_non_scalar_values() {
    assert_eq!(coerce_float(&json!(4)), 4.0);
    assert_eq!(coerce_float(&json!("4.25")), 4.25);
    assert_eq!(coerce_float(&json!([5])), 5.0);
    assert_eq!(coerce_float(&json!(["1", 2])), 1.0);
    assert!(coerce_float(&json!(null)).is_nan());
    assert!(coerce_float(&json!(true)).is_nan());
    assert!(coerce_float(&json!({ "v": 1 })).is_nan());
    assert!(coerce_float(&json!([null, 1])).is_nan());
}

#[test]
fn sum_values_propagates_nan() {
    assert_eq!(sum_values(&[]), 0.0);
    assert_eq!(sum_values(&[json!(1), json!("2"), json!(3.5)]), 6.5);
    assert!(sum_values(&[json!(1), json!("two")]).is_nan());
}

#[test]
fn js_round_rounds_half_toward_positive_infinity() {
    assert_eq!(js_round(2.5), 3.0);
    assert_eq!(js_round(-2.5), -2.0);
    assert_eq!(js_round(1.4), 1.0);
    assert_eq!(js_round(-1.6), -2.0);
    assert!(js_round(f64::NAN).is_nan());
}

#[test]
fn format_number_uses_shortest_form() {
    assert_eq!(format_number(1.0), "1");
    assert_eq!(format_number(0.5), "0.5");
    assert_eq!(format_number(f64::NAN), "NaN");
    assert_eq!(js_to_string(&json!([1, null, "a"])), "1,,a");
}

#[test]
fn pick_label_handles_every_label_shape() {
    assert_eq!(pick_label(None), "undefined");
    assert_eq!(pick_label(Some(&json!(null))), "undefined");
    assert_eq!(pick_label(Some(&json!(""))), "undefined");
    assert_eq!(pick_label(Some(&json!([]))), "undefined");
    assert_eq!(pick_label(Some(&json!([""]))), "undefined");
    assert_eq!(pick_label(Some(&json!(0))), "undefined");
    assert_eq!(pick_label(Some(&json!("A"))), "A");
    assert_eq!(pick_label(Some(&json!(["B", "C"]))), "B");
    assert_eq!(pick_label(Some(&json!({ "label": "D" }))), "D");
    assert_eq!(pick_label(Some(&json!(3))), "3");
    assert_eq!(pick_label(Some(&json!(1.5))), "1.5");
}

#[test]
fn pick_value_label_prefers_literal_labels() {
    let group = RawValueGroup::from_value(&json!({
        "values": [1, 2],
        "valuelabels": ["one", null]
    }));
    assert_eq!(pick_value_label(&group, 0), Some(json!("one")));
    assert_eq!(pick_value_label(&group, 1), Some(json!(2)));
    assert_eq!(pick_value_label(&group, 2), None);
}
