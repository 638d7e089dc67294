//! Example: error accumulation across a broken variable set.
//!
//! Every missing and malformed variable is reported in one pass, so a broken
//! deployment shows the whole fix list instead of one error per restart.
//!
//! Run with:
//!   `cargo run --example error_demo`

use envcast::{Kind, VarSpec, check};

fn main() {
    let specs = [
        VarSpec::new("DEMO_DATABASE_URL", Kind::Uri),
        VarSpec::new("DEMO_PORT", Kind::Integer),
        VarSpec::new("DEMO_DEBUG", Kind::Boolean),
        VarSpec::new("DEMO_API_UUID", Kind::Uuid),
    ];

    // A deliberately broken "environment".
    let result = check(&specs, |name| match name {
        "DEMO_PORT" => Some("not_a_number".to_string()),
        "DEMO_DEBUG" => Some("maybe".to_string()),
        "DEMO_API_UUID" => Some("not-a-uuid".to_string()),
        _ => None,
    });

    match result {
        Ok(snapshot) => println!("unexpectedly fine: {} values", snapshot.len()),
        Err(error) => {
            // miette renders the accumulated errors as related diagnostics.
            eprintln!("{:?}", miette::Report::from(error));
        }
    }
}
