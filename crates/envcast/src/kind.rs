//! The closed set of coercion target kinds.
//!
//! [`Kind`] is the registry a schema-loading caller resolves declared type
//! names against. Every kind round-trips through its lower-case name:
//!
//! ```rust
//! use envcast::Kind;
//!
//! let kind: Kind = "integer".parse().unwrap();
//! assert_eq!(kind, Kind::Integer);
//! assert_eq!(kind.to_string(), "integer");
//! ```

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use miette::Diagnostic;
use thiserror::Error;

/// A coercion target kind.
///
/// This is the complete set of types a raw environment-variable string can be
/// coerced into. Dispatching by kind goes through [`coerce()`](crate::coerce())
/// (or the [`Kind::coerce`] convenience), which maps each variant to its
/// conversion rather than looking conversions up by name at runtime.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// Comma-separated list of strings (`a,b,c`; `\,` escapes a comma).
    Array,

    /// Boolean in any of the accepted spellings (`1`/`on`/`t`/`true`/`y`/`yes`
    /// and their negatives, case-insensitive).
    Boolean,

    /// Calendar date (`2024-05-31`).
    Date,

    /// 64-bit floating-point number.
    Float,

    /// URL-query-form mapping (`key=value&key2=value2`), first value per key.
    Hash,

    /// 64-bit signed integer.
    Integer,

    /// JSON object literal (`{"a": 1}`); arrays and scalars are rejected.
    Json,

    /// The string itself, unchanged.
    String,

    /// An interned-name token equal to the string.
    Symbol,

    /// Timestamp with date and time (RFC 3339, RFC 2822, or ISO-ish naive).
    Time,

    /// Parsed absolute URI.
    Uri,

    /// Canonical hyphenated UUID, validated but kept as a string.
    Uuid,
}

impl Kind {
    /// Every supported kind, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Array,
        Self::Boolean,
        Self::Date,
        Self::Float,
        Self::Hash,
        Self::Integer,
        Self::Json,
        Self::String,
        Self::Symbol,
        Self::Time,
        Self::Uri,
        Self::Uuid,
    ];

    /// Returns the lower-case name of this kind (`"integer"`, `"uuid"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Float => "float",
            Self::Hash => "hash",
            Self::Integer => "integer",
            Self::Json => "json",
            Self::String => "string",
            Self::Symbol => "symbol",
            Self::Time => "time",
            Self::Uri => "uri",
            Self::Uuid => "uuid",
        }
    }

    /// Checks whether `name` is the lower-case name of a supported kind.
    #[must_use]
    pub fn is_supported(name: &str) -> bool {
        name.parse::<Self>().is_ok()
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a declared type name matches no supported [`Kind`].
#[derive(Clone, Debug, Diagnostic, Eq, Error, PartialEq)]
#[error("unsupported coercion kind: {name:?}")]
#[diagnostic(
    code(envcast::unknown_kind),
    help("supported kinds are: array, boolean, date, float, hash, integer, json, string, symbol, time, uri, uuid")
)]
pub struct UnknownKind {
    /// The unrecognized type name.
    pub name: String,
}

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "array" => Ok(Self::Array),
            "boolean" => Ok(Self::Boolean),
            "date" => Ok(Self::Date),
            "float" => Ok(Self::Float),
            "hash" => Ok(Self::Hash),
            "integer" => Ok(Self::Integer),
            "json" => Ok(Self::Json),
            "string" => Ok(Self::String),
            "symbol" => Ok(Self::Symbol),
            "time" => Ok(Self::Time),
            "uri" => Ok(Self::Uri),
            "uuid" => Ok(Self::Uuid),
            _ => Err(UnknownKind {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_round_trips_through_its_name() {
        for kind in Kind::ALL {
            let parsed: Kind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "duration".parse::<Kind>().unwrap_err();
        assert_eq!(err.name, "duration");
        assert!(err.to_string().contains("duration"));
    }

    #[test]
    fn test_names_are_lower_case_only() {
        assert!("Integer".parse::<Kind>().is_err());
        assert!(Kind::is_supported("integer"));
        assert!(!Kind::is_supported("Integer"));
    }

    #[test]
    fn test_all_lists_each_kind_once() {
        let mut names: Vec<_> = Kind::ALL.iter().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Kind::ALL.len());
    }
}
