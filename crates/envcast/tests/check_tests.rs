//! Batch checking tests, including against the real process environment.

#![allow(clippy::pedantic)]

use envcast::{Error, Kind, VarSpec, check, check_env};
use serial_test::serial;

fn with_env<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    unsafe {
        for (k, v) in vars {
            std::env::set_var(*k, *v);
        }
    }

    let result = f();

    unsafe {
        for (k, _) in vars {
            std::env::remove_var(*k);
        }
    }

    result
}

fn cleanup_vars(vars: &[&str]) {
    unsafe {
        for k in vars {
            std::env::remove_var(*k);
        }
    }
}

// ============================================================================
// Accumulation across a spec set
// ============================================================================

#[test]
fn all_failures_are_reported_together() {
    let specs = [
        VarSpec::new("CHK_A", Kind::Integer),
        VarSpec::new("CHK_B", Kind::Boolean),
        VarSpec::new("CHK_C", Kind::Uuid),
    ];
    let error = check(&specs, |name| match name {
        "CHK_B" => Some("nope".to_string()),
        _ => None,
    })
    .unwrap_err();

    let Error::Multiple { errors } = error else {
        panic!("expected Multiple");
    };
    assert_eq!(errors.len(), 3);
    assert!(matches!(&errors[0], Error::Missing { var, .. } if var == "CHK_A"));
    assert!(matches!(&errors[1], Error::Coercion { var, .. } if var == "CHK_B"));
    assert!(matches!(&errors[2], Error::Missing { var, .. } if var == "CHK_C"));
}

#[test]
fn multiple_error_message_counts_failures() {
    let specs = [
        VarSpec::new("CHK_X", Kind::Integer),
        VarSpec::new("CHK_Y", Kind::Integer),
    ];
    let error = check(&specs, |_| None).unwrap_err();
    assert!(error.to_string().contains("2 configuration error(s)"));
}

#[test]
fn coercion_failure_keeps_the_raw_value_visible() {
    let specs = [VarSpec::new("CHK_PORT", Kind::Integer)];
    let error = check(&specs, |_| Some("eight-thousand".to_string())).unwrap_err();

    let display = format!("{error}");
    assert!(display.contains("CHK_PORT"));
    assert!(display.contains("eight-thousand"));
    assert!(display.contains("integer"));
}

// ============================================================================
// Process environment
// ============================================================================

#[test]
#[serial]
fn check_env_reads_and_coerces_real_variables() {
    with_env(
        &[
            ("ENVCAST_PORT", "8080"),
            ("ENVCAST_DEBUG", "on"),
            ("ENVCAST_TAGS", "web,api"),
        ],
        || {
            let specs = [
                VarSpec::new("ENVCAST_PORT", Kind::Integer),
                VarSpec::new("ENVCAST_DEBUG", Kind::Boolean),
                VarSpec::new("ENVCAST_TAGS", Kind::Array),
            ];
            let snapshot = check_env(&specs).unwrap();

            assert_eq!(
                snapshot.get("ENVCAST_PORT").and_then(|v| v.as_integer()),
                Some(8080)
            );
            assert_eq!(
                snapshot.get("ENVCAST_DEBUG").and_then(|v| v.as_boolean()),
                Some(true)
            );
            assert_eq!(
                snapshot
                    .get("ENVCAST_TAGS")
                    .and_then(|v| v.as_array())
                    .map(<[String]>::len),
                Some(2)
            );
        },
    );
}

#[test]
#[serial]
fn check_env_reports_missing_required_variable() {
    cleanup_vars(&["ENVCAST_ABSENT"]);

    let specs = [VarSpec::new("ENVCAST_ABSENT", Kind::String)];
    let error = check_env(&specs).unwrap_err();
    assert!(matches!(error, Error::Missing { var, .. } if var == "ENVCAST_ABSENT"));
}

#[test]
#[serial]
fn check_env_falls_back_to_defaults() {
    cleanup_vars(&["ENVCAST_WORKERS"]);

    let specs = [VarSpec::new("ENVCAST_WORKERS", Kind::Integer).with_default("4")];
    let snapshot = check_env(&specs).unwrap();
    assert_eq!(
        snapshot.get("ENVCAST_WORKERS").and_then(|v| v.as_integer()),
        Some(4)
    );
}

#[cfg(unix)]
#[test]
#[serial]
fn check_env_flags_non_utf8_values() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    unsafe {
        std::env::set_var("ENVCAST_BYTES", OsStr::from_bytes(&[0xFF, 0xFE]));
    }

    let specs = [VarSpec::new("ENVCAST_BYTES", Kind::String)];
    let error = check_env(&specs).unwrap_err();

    cleanup_vars(&["ENVCAST_BYTES"]);

    assert!(matches!(error, Error::InvalidUtf8 { var } if var == "ENVCAST_BYTES"));
}
