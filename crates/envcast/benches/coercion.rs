//! Performance benchmarks for the coercion engine.
//!
//! Run with: `cargo bench -p envcast`

#![allow(clippy::pedantic)]

use envcast::{Kind, VarSpec, check, coerce};

fn main() {
    divan::main();
}

// ============================================================================
// Individual conversions
// ============================================================================

#[divan::bench]
fn boolean() -> bool {
    envcast::to_boolean(divan::black_box("TRUE")).unwrap()
}

#[divan::bench]
fn integer() -> i64 {
    envcast::to_integer(divan::black_box(" 123456 ")).unwrap()
}

#[divan::bench]
fn array_with_escapes() -> Vec<String> {
    envcast::to_array(divan::black_box(r"alpha,beta\,gamma,delta,epsilon"))
}

#[divan::bench]
fn hash_query_form() -> usize {
    envcast::to_hash(divan::black_box("a=1&b=2&c=3&a=dup&path=%2Ftmp")).len()
}

#[divan::bench]
fn uuid() -> String {
    envcast::to_uuid(divan::black_box("550e8400-e29b-41d4-a716-446655440000")).unwrap()
}

#[divan::bench]
fn json_object() -> serde_json::Value {
    envcast::to_json(divan::black_box(r#"{"retries": 3, "hosts": ["a", "b"]}"#)).unwrap()
}

#[divan::bench]
fn time_rfc3339() {
    envcast::to_time(divan::black_box("2024-05-31T12:30:00+02:00")).unwrap();
}

// ============================================================================
// Dispatch and batch checking
// ============================================================================

#[divan::bench]
fn dispatch_all_kinds() {
    const SAMPLES: [(Kind, &str); 12] = [
        (Kind::Array, "a,b,c"),
        (Kind::Boolean, "yes"),
        (Kind::Date, "2024-05-31"),
        (Kind::Float, "1.5"),
        (Kind::Hash, "a=1&b=2"),
        (Kind::Integer, "7"),
        (Kind::Json, r#"{"k":"v"}"#),
        (Kind::String, "plain"),
        (Kind::Symbol, "sym"),
        (Kind::Time, "2024-05-31T00:00:00Z"),
        (Kind::Uri, "https://example.com"),
        (Kind::Uuid, "550e8400-e29b-41d4-a716-446655440000"),
    ];

    for (kind, raw) in divan::black_box(SAMPLES) {
        coerce(raw, kind).unwrap();
    }
}

#[divan::bench]
fn check_ten_specs() {
    let specs: Vec<VarSpec> = (0..10)
        .map(|i| VarSpec::new(format!("VAR_{i}"), Kind::Integer))
        .collect();

    check(divan::black_box(&specs), |_| Some("42".to_string())).unwrap();
}
