//! # envcast
//!
//! Coerce environment-variable strings into typed values, and fail fast at
//! application startup when required configuration is absent or malformed.
//!
//! The core is a **coercion engine**: one pure conversion per target kind,
//! from a raw string into a boolean, integer, float, date, time, string,
//! symbol, array, hash, URI, UUID, or JSON object. On top of it sits a thin
//! batch checker that walks a declared variable set and accumulates every
//! failure instead of stopping at the first one.
//!
//! ## What Makes envcast Strict Where It Counts
//!
//! - **Whitelisted booleans** - `1`/`on`/`t`/`true`/`y`/`yes` and their
//!   negatives, nothing else, so the mapping is deterministic across locales
//! - **Object-only JSON** - `to_json` rejects bare arrays and scalars,
//!   preventing silent type confusion with the `array` and `string` kinds
//! - **Canonical UUIDs** - only the hyphenated `8-4-4-4-12` hexadecimal form
//! - **Loose where the data is loose** - `to_array` and `to_hash` are total;
//!   malformed input degrades to a plausible structure instead of erroring
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use envcast::{Kind, VarSpec, check_env};
//!
//! let specs = [
//!     VarSpec::new("DATABASE_URL", Kind::Uri),
//!     VarSpec::new("PORT", Kind::Integer).with_default("8080"),
//!     VarSpec::new("FEATURES", Kind::Array).optional(),
//! ];
//!
//! let config = check_env(&specs)?;
//! println!("listening on {:?}", config.get("PORT"));
//! # Ok::<(), envcast::Error>(())
//! ```
//!
//! Or call the conversions directly when the target type is known at compile
//! time:
//!
//! ```rust
//! use envcast::{to_array, to_boolean, to_integer};
//!
//! assert_eq!(to_boolean("YES").unwrap(), true);
//! assert_eq!(to_integer(" 42 ").unwrap(), 42);
//! assert_eq!(to_array(r"a,b\,c"), vec!["a", "b,c"]);
//! ```
//!
//! ## Error Output Example
//!
//! When several variables are wrong, they are all reported together:
//!
//! ```text
//! envcast::multiple_errors
//!
//!   × 2 configuration error(s) occurred
//!
//! Error: envcast::missing_var
//!   × missing required environment variable: DATABASE_URL
//!   help: set DATABASE_URL in your environment
//!
//! Error: envcast::coercion_error
//!   × failed to coerce PORT: cannot coerce "not_a_number" into integer
//!   help: expected a integer value
//! ```
//!
//! ## Coercion Kinds
//!
//! | Kind | Produces | Fails when |
//! |------|----------|------------|
//! | `array` | `Vec<String>` | never |
//! | `boolean` | `bool` | spelling not whitelisted |
//! | `date` | `chrono::NaiveDate` | no accepted format matches |
//! | `float` | `f64` | not a float literal |
//! | `hash` | `IndexMap<String, String>` | never |
//! | `integer` | `i64` | not an integer literal |
//! | `json` | `serde_json::Value` | not a JSON object literal |
//! | `string` | `String` | never |
//! | `symbol` | [`Symbol`] | never |
//! | `time` | `chrono::DateTime<FixedOffset>` | no accepted format matches |
//! | `uri` | `url::Url` | not an absolute URI |
//! | `uuid` | `String` | not canonical hyphenated form |
//!
//! ## Error Handling
//!
//! Every failed conversion raises [`UnsupportedCoercion`] with the raw value
//! and attempted kind. The batch layer wraps it in [`Error`] variants that
//! integrate with [`miette`] for rich terminal diagnostics:
//!
//! ```rust,ignore
//! fn main() -> envcast::Result<()> {
//!     let config = check_env(&specs)?;
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Re-export miette for error handling.
/// Users can use `envcast::miette` instead of adding miette as a dependency.
pub use miette;

// ============================================================================
// Core Modules
// ============================================================================

mod check;
mod coerce;
mod error;
mod kind;
mod value;

pub use check::{Snapshot, VarSpec, check, check_env};
pub use coerce::{
    coerce, coercible, to_array, to_boolean, to_date, to_float, to_hash, to_integer, to_json,
    to_string, to_symbol, to_time, to_uri, to_uuid,
};
pub use error::{Error, UnsupportedCoercion};
pub use kind::{Kind, UnknownKind};
pub use value::{Symbol, Value};

/// A Result type that displays errors with miette's fancy formatting.
///
/// Use this as your main function return type for pretty error output:
///
/// ```rust,ignore
/// fn main() -> envcast::Result<()> {
///     let config = check_env(&specs)?;
///     Ok(())
/// }
/// ```
pub type Result<T> = miette::Result<T>;
