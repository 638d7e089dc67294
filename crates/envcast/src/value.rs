//! Typed coercion results.
//!
//! [`Value`] is the type-erased result of coercing a raw string by a [`Kind`]
//! tag picked at runtime, as a schema-driven caller does. Code that knows the
//! target type at compile time can call the individual `to_*` conversions in
//! [`coerce()`](crate::coerce()) instead and skip the enum entirely.
//!
//! # Example
//!
//! ```rust
//! use envcast::{Kind, Value, coerce};
//!
//! let value = coerce("8080", Kind::Integer).unwrap();
//! assert_eq!(value, Value::Integer(8080));
//! assert_eq!(value.as_integer(), Some(8080));
//! ```

use chrono::{DateTime, FixedOffset, NaiveDate};
use indexmap::IndexMap;
use url::Url;

use crate::kind::Kind;

/// An interned-name token produced by the `symbol` coercion.
///
/// Two symbols are equal exactly when their names are equal, so the token is
/// interchangeable with its name for lookup purposes.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a symbol from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the symbol's name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A typed coercion result.
///
/// Each variant corresponds to one [`Kind`]. Values are plain data: they own
/// their contents, compare by value, and hold no handles back to the input
/// they were coerced from.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Elements split out of a comma-separated list.
    Array(Vec<String>),

    /// A boolean.
    Boolean(bool),

    /// A calendar date.
    Date(NaiveDate),

    /// A 64-bit float.
    Float(f64),

    /// A query-form mapping, keyed in insertion order of first occurrence.
    Hash(IndexMap<String, String>),

    /// A 64-bit signed integer.
    Integer(i64),

    /// A decoded JSON object.
    Json(serde_json::Value),

    /// A plain string.
    String(String),

    /// An interned-name token.
    Symbol(Symbol),

    /// A timestamp with offset.
    Time(DateTime<FixedOffset>),

    /// A parsed URI.
    Uri(Url),

    /// A validated canonical UUID, kept in its textual form.
    Uuid(String),
}

impl Value {
    /// Returns the [`Kind`] this value was coerced into.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Array(_) => Kind::Array,
            Self::Boolean(_) => Kind::Boolean,
            Self::Date(_) => Kind::Date,
            Self::Float(_) => Kind::Float,
            Self::Hash(_) => Kind::Hash,
            Self::Integer(_) => Kind::Integer,
            Self::Json(_) => Kind::Json,
            Self::String(_) => Kind::String,
            Self::Symbol(_) => Kind::Symbol,
            Self::Time(_) => Kind::Time,
            Self::Uri(_) => Kind::Uri,
            Self::Uuid(_) => Kind::Uuid,
        }
    }

    /// Returns the elements if this is an array value.
    #[must_use]
    pub fn as_array(&self) -> Option<&[String]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean value.
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the date if this is a date value.
    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the float if this is a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the mapping if this is a hash value.
    #[must_use]
    pub const fn as_hash(&self) -> Option<&IndexMap<String, String>> {
        match self {
            Self::Hash(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer value.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the JSON document if this is a JSON value.
    #[must_use]
    pub const fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(doc) => Some(doc),
            _ => None,
        }
    }

    /// Returns the string if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the symbol if this is a symbol value.
    #[must_use]
    pub const fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    /// Returns the timestamp if this is a time value.
    #[must_use]
    pub const fn as_time(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Time(t) => Some(*t),
            _ => None,
        }
    }

    /// Returns the URI if this is a URI value.
    #[must_use]
    pub const fn as_uri(&self) -> Option<&Url> {
        match self {
            Self::Uri(uri) => Some(uri),
            _ => None,
        }
    }

    /// Returns the UUID text if this is a UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Option<&str> {
        match self {
            Self::Uuid(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Self::Array(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(Value::Boolean(true).kind(), Kind::Boolean);
        assert_eq!(Value::Integer(1).kind(), Kind::Integer);
        assert_eq!(Value::String("x".into()).kind(), Kind::String);
        assert_eq!(Value::Uuid("x".into()).kind(), Kind::Uuid);
    }

    #[test]
    fn test_accessors_are_variant_guarded() {
        let value = Value::Integer(42);
        assert_eq!(value.as_integer(), Some(42));
        assert_eq!(value.as_boolean(), None);
        assert_eq!(value.as_str(), None);
    }

    #[test]
    fn test_symbol_equality_is_by_name() {
        assert_eq!(Symbol::new("db"), Symbol::from("db"));
        assert_ne!(Symbol::new("db"), Symbol::new("cache"));
        assert_eq!(Symbol::new("db").to_string(), "db");
    }

    #[test]
    fn test_from_impls_pick_the_matching_variant() {
        assert_eq!(Value::from(true), Value::Boolean(true));
        assert_eq!(Value::from(3i64), Value::Integer(3));
        assert_eq!(Value::from("s"), Value::String("s".into()));
    }
}
