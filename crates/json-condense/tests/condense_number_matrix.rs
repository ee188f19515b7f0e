//! Number coverage: category boundaries, float tiers, extremes, and
//! the canonical integer form.

use json_condense::{compress_json, decompress_json};
use serde_json::{json, Number, Value};

fn roundtrip(value: &Value) -> Value {
    decompress_json(&compress_json(value)).expect("in-alphabet output decodes")
}

fn assert_exact(value: Value) {
    assert_eq!(roundtrip(&value), value, "value {value} drifted");
}

#[test]
fn integer_category_boundaries() {
    // Edges of each exact-integer band, inside and one step outside.
    for i in [
        0i64, 1, -1, 9, -9, -10, -11, 10, 99, 100, 101, 102, 9_999, 10_000, 10_001, 10_002,
        -9_999, -10_000, -10_001, -10_002, 999_999, 1_000_000, -999_999, -1_000_000,
    ] {
        assert_exact(json!(i));
    }
}

#[test]
fn integers_beyond_the_exact_bands() {
    for i in [
        1_000_001i64,
        -1_000_001,
        123_456_789,
        -987_654_321,
        1_000_000_000_000,
        9_007_199_254_740_991,
        -9_007_199_254_740_991,
    ] {
        assert_exact(json!(i));
    }
}

#[test]
fn common_fractions() {
    for x in [
        0.5, -0.5, 0.25, 0.1, 0.2, 0.3, 1.5, -2.75, 3.14, 99.99, 123.456, 0.001, -0.0625,
    ] {
        assert_exact(json!(x));
    }
}

#[test]
fn scientific_range_floats() {
    for x in [
        1e-7,
        -1e-7,
        2.5e-10,
        6.02214076e23,
        -1.602e-19,
        1.5e20,
        3.3333333333333335e-1,
        4.9e-12,
    ] {
        assert_exact(json!(x));
    }
}

#[test]
fn f64_extremes_survive() {
    for x in [
        f64::MAX,
        -f64::MAX,
        f64::MIN_POSITIVE,
        -f64::MIN_POSITIVE,
        5e-324,
        -5e-324,
        2.2250738585072011e-308,
        1.7976931348623155e308,
    ] {
        assert_exact(json!(x));
    }
}

#[test]
fn full_precision_mantissas_survive() {
    for x in [
        std::f64::consts::PI,
        std::f64::consts::E,
        std::f64::consts::SQRT_2,
        0.123456789012345678,
        1.0000000000000002,
        0.9999999999999999,
    ] {
        assert_exact(json!(x));
    }
}

#[test]
fn integral_floats_come_back_as_integers() {
    for (input, expected) in [
        (3.0f64, json!(3)),
        (-3.0, json!(-3)),
        (1e6, json!(1_000_000)),
        (1e15, json!(1_000_000_000_000_000i64)),
        (-0.0, json!(0)),
    ] {
        let n = Number::from_f64(input).expect("finite");
        assert_eq!(roundtrip(&Value::Number(n)), expected);
    }
}

#[test]
fn dense_number_streams_keep_the_models_in_lockstep() {
    // Mixes every category repeatedly so adaptive counts climb and the
    // decode side must track each bump.
    let mut values = Vec::new();
    for i in 0..400i64 {
        values.push(json!(i % 90 - 20));
        values.push(json!((i * i) as f64 * 0.125 + 0.0625));
        values.push(json!((i + 1) as f64 * 1e-9));
        values.push(json!(-i * 3_700));
    }
    assert_exact(Value::Array(values));
}
