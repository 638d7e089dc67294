//! Example: declaring a variable set and checking it at startup.
//!
//! Run with:
//!   `ENVCAST_DATABASE_URL=postgres://localhost/app cargo run --example basic`

use envcast::{Kind, VarSpec, Value, check_env};

fn main() -> envcast::Result<()> {
    let specs = [
        VarSpec::new("ENVCAST_DATABASE_URL", Kind::Uri),
        VarSpec::new("ENVCAST_PORT", Kind::Integer).with_default("8080"),
        VarSpec::new("ENVCAST_DEBUG", Kind::Boolean).with_default("false"),
        VarSpec::new("ENVCAST_FEATURES", Kind::Array).optional(),
    ];

    let config = check_env(&specs)?;

    for (name, value) in config.iter() {
        match value {
            Value::Uri(uri) => println!("{name} -> {uri} (uri)"),
            Value::Integer(n) => println!("{name} -> {n} (integer)"),
            Value::Boolean(b) => println!("{name} -> {b} (boolean)"),
            Value::Array(items) => println!("{name} -> {items:?} (array)"),
            other => println!("{name} -> {other:?}"),
        }
    }

    Ok(())
}
