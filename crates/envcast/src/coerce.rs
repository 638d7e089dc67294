//! The coercion engine: string-to-typed-value conversions.
//!
//! One conversion per target [`Kind`], each a pure function of the raw string:
//! no state, no I/O, safe to call concurrently. Every fallible conversion
//! reports failure through the same [`UnsupportedCoercion`] error so a caller
//! can collect failures across a whole variable set before reporting.
//!
//! | Conversion | Result | Fails when |
//! |------------|--------|------------|
//! | [`to_array`] | `Vec<String>` | never (`""` yields `[""]`) |
//! | [`to_boolean`] | `bool` | value not in the accepted spellings |
//! | [`to_date`] | [`NaiveDate`] | not a parseable date |
//! | [`to_float`] | `f64` | not a parseable float literal |
//! | [`to_hash`] | [`IndexMap`] | never (malformed pairs degrade) |
//! | [`to_integer`] | `i64` | not a parseable integer literal |
//! | [`to_json`] | [`serde_json::Value`] | not a JSON object literal |
//! | [`to_string`] | `String` | never |
//! | [`to_symbol`] | [`Symbol`] | never |
//! | [`to_time`] | [`DateTime<FixedOffset>`] | not a parseable timestamp |
//! | [`to_uri`] | [`Url`] | not an absolute URI |
//! | [`to_uuid`] | `String` | not a canonical hyphenated UUID |
//!
//! Callers that select the conversion from a declared type tag go through
//! [`coerce`], which dispatches on [`Kind`] and boxes the result as a
//! [`Value`].

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use indexmap::IndexMap;
use regex::Regex;
use url::{Url, form_urlencoded};

use crate::error::UnsupportedCoercion;
use crate::kind::Kind;
use crate::value::{Symbol, Value};

/// Lower-cased spellings that coerce to `true`.
const TRUE_VALUES: [&str; 6] = ["1", "on", "t", "true", "y", "yes"];

/// Lower-cased spellings that coerce to `false`.
const FALSE_VALUES: [&str; 6] = ["0", "off", "f", "false", "n", "no"];

/// Canonical hyphenated UUID form, case-insensitive.
static UUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-(?:[0-9a-f]{4}-){3}[0-9a-f]{12}$")
        .expect("UUID pattern is a valid regex")
});

/// Date formats accepted by [`to_date`]: numeric-only, locale-independent.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y"];

/// Offset-less timestamp formats accepted by [`to_time`], taken as UTC.
const NAIVE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Splits a comma-separated list into its elements.
///
/// A comma immediately preceded by a backslash does not split; the `\,`
/// sequence is unescaped to a literal comma inside the element. Any other
/// backslash is kept as-is. This conversion is total: the empty string
/// yields a single empty element.
///
/// ```rust
/// use envcast::to_array;
///
/// assert_eq!(to_array(r"a,b\,c,d"), vec!["a", "b,c", "d"]);
/// assert_eq!(to_array(""), vec![""]);
/// ```
#[must_use]
pub fn to_array(raw: &str) -> Vec<String> {
    let mut elements = Vec::new();
    let mut current = String::new();
    let mut prev_backslash = false;

    for c in raw.chars() {
        if c == ',' && !prev_backslash {
            elements.push(std::mem::take(&mut current));
            prev_backslash = false;
        } else {
            current.push(c);
            prev_backslash = c == '\\';
        }
    }
    elements.push(current);

    elements
        .into_iter()
        .map(|element| element.replace("\\,", ","))
        .collect()
}

/// Converts a boolean spelling into a `bool`, case-insensitively.
///
/// Accepts `1`/`on`/`t`/`true`/`y`/`yes` as `true` and
/// `0`/`off`/`f`/`false`/`n`/`no` as `false`. Anything else fails; the
/// whitelist keeps the mapping deterministic across locales.
///
/// # Errors
///
/// Returns [`UnsupportedCoercion`] when the lower-cased value is in neither
/// whitelist.
pub fn to_boolean(raw: &str) -> Result<bool, UnsupportedCoercion> {
    let lowered = raw.to_lowercase();
    if TRUE_VALUES.contains(&lowered.as_str()) {
        Ok(true)
    } else if FALSE_VALUES.contains(&lowered.as_str()) {
        Ok(false)
    } else {
        Err(UnsupportedCoercion::new(raw, Kind::Boolean))
    }
}

/// Parses a calendar date.
///
/// Accepts `2024-05-31`, `2024/05/31`, and `31-05-2024`.
///
/// # Errors
///
/// Returns [`UnsupportedCoercion`] when no accepted format matches.
pub fn to_date(raw: &str) -> Result<NaiveDate, UnsupportedCoercion> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| UnsupportedCoercion::new(raw, Kind::Date))
}

/// Parses a float literal, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`UnsupportedCoercion`] when the trimmed value is not an `f64`
/// literal.
pub fn to_float(raw: &str) -> Result<f64, UnsupportedCoercion> {
    raw.trim()
        .parse()
        .map_err(|_| UnsupportedCoercion::new(raw, Kind::Float))
}

/// Decodes a URL-query-form string (`key=value&key2=value2`) into a mapping.
///
/// Percent-escapes and `+` are decoded. When a key repeats, the first value
/// wins; keys keep the order of their first occurrence. This conversion is
/// total: pairs that don't parse degrade to empty keys or values instead of
/// erroring.
///
/// ```rust
/// use envcast::to_hash;
///
/// let map = to_hash("a=1&b=2&a=3");
/// assert_eq!(map.get("a").map(String::as_str), Some("1"));
/// assert_eq!(map.get("b").map(String::as_str), Some("2"));
/// ```
#[must_use]
pub fn to_hash(raw: &str) -> IndexMap<String, String> {
    let mut map = IndexMap::new();
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        map.entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    map
}

/// Parses a trimmed integer literal with standard sign handling.
///
/// # Errors
///
/// Returns [`UnsupportedCoercion`] when the trimmed value is not an `i64`
/// literal (so `"4.2"` fails rather than truncating).
pub fn to_integer(raw: &str) -> Result<i64, UnsupportedCoercion> {
    raw.trim()
        .parse()
        .map_err(|_| UnsupportedCoercion::new(raw, Kind::Integer))
}

/// Decodes a JSON object literal.
///
/// Only object-shaped input is accepted: the first and last characters must
/// be `{` and `}`. The config-loading callers only ever expect mapping
/// values here; rejecting bare arrays and scalars prevents silent type
/// confusion with the `array` and `string` kinds.
///
/// # Errors
///
/// Returns [`UnsupportedCoercion`] when the input is not brace-delimited or
/// the content is not valid JSON.
pub fn to_json(raw: &str) -> Result<serde_json::Value, UnsupportedCoercion> {
    if !(raw.starts_with('{') && raw.ends_with('}')) {
        return Err(UnsupportedCoercion::new(raw, Kind::Json));
    }
    serde_json::from_str(raw).map_err(|_| UnsupportedCoercion::new(raw, Kind::Json))
}

/// Returns the string unchanged.
///
/// The conversion exists so every kind has an entry point; for `&str` input
/// it is total.
#[must_use]
pub fn to_string(raw: &str) -> String {
    raw.to_owned()
}

/// Creates an interned-name token equal to the string. Never fails.
#[must_use]
pub fn to_symbol(raw: &str) -> Symbol {
    Symbol::new(raw)
}

/// Parses a timestamp.
///
/// Accepts RFC 3339 (`2024-05-31T12:30:00+02:00`), RFC 2822, and offset-less
/// `%Y-%m-%d %H:%M:%S` / `%Y-%m-%dT%H:%M:%S` taken as UTC. A bare date in an
/// accepted [`to_date`] format yields midnight UTC.
///
/// # Errors
///
/// Returns [`UnsupportedCoercion`] when no accepted format matches.
pub fn to_time(raw: &str) -> Result<DateTime<FixedOffset>, UnsupportedCoercion> {
    let trimmed = raw.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(timestamp);
    }
    for format in NAIVE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }
    if let Ok(date) = to_date(trimmed) {
        return Ok(date.and_time(NaiveTime::MIN).and_utc().fixed_offset());
    }

    Err(UnsupportedCoercion::new(raw, Kind::Time))
}

/// Parses an absolute URI.
///
/// Relative references and free-form text are rejected: a degenerate "URI"
/// parsed out of garbage defers the failure to first use, which defeats a
/// startup check.
///
/// # Errors
///
/// Returns [`UnsupportedCoercion`] when [`Url::parse`] rejects the input.
pub fn to_uri(raw: &str) -> Result<Url, UnsupportedCoercion> {
    Url::parse(raw).map_err(|_| UnsupportedCoercion::new(raw, Kind::Uri))
}

/// Validates a canonical hyphenated UUID, returning the input unchanged.
///
/// Only the `8-4-4-4-12` hexadecimal form is accepted, case-insensitively.
/// Braced, URN-prefixed, and unhyphenated spellings all fail.
///
/// # Errors
///
/// Returns [`UnsupportedCoercion`] when the input does not match the
/// canonical form.
pub fn to_uuid(raw: &str) -> Result<String, UnsupportedCoercion> {
    if UUID_PATTERN.is_match(raw) {
        Ok(raw.to_owned())
    } else {
        Err(UnsupportedCoercion::new(raw, Kind::Uuid))
    }
}

/// Coerces a raw string into the given [`Kind`].
///
/// This is the dispatch table callers use when the target type is a runtime
/// tag from a declared schema. Each arm delegates to the corresponding `to_*`
/// conversion and wraps the result as a [`Value`].
///
/// # Errors
///
/// Returns [`UnsupportedCoercion`] whenever the underlying conversion fails;
/// the total conversions (`array`, `hash`, `string`, `symbol`) never do.
pub fn coerce(raw: &str, kind: Kind) -> Result<Value, UnsupportedCoercion> {
    match kind {
        Kind::Array => Ok(Value::Array(to_array(raw))),
        Kind::Boolean => to_boolean(raw).map(Value::Boolean),
        Kind::Date => to_date(raw).map(Value::Date),
        Kind::Float => to_float(raw).map(Value::Float),
        Kind::Hash => Ok(Value::Hash(to_hash(raw))),
        Kind::Integer => to_integer(raw).map(Value::Integer),
        Kind::Json => to_json(raw).map(Value::Json),
        Kind::String => Ok(Value::String(to_string(raw))),
        Kind::Symbol => Ok(Value::Symbol(to_symbol(raw))),
        Kind::Time => to_time(raw).map(Value::Time),
        Kind::Uri => to_uri(raw).map(Value::Uri),
        Kind::Uuid => to_uuid(raw).map(Value::Uuid),
    }
}

/// Checks whether `raw` would coerce into `kind`.
#[must_use]
pub fn coercible(raw: &str, kind: Kind) -> bool {
    coerce(raw, kind).is_ok()
}

impl Kind {
    /// Coerces `raw` into this kind. Convenience for [`coerce`].
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedCoercion`] when the conversion fails.
    pub fn coerce(self, raw: &str) -> Result<Value, UnsupportedCoercion> {
        coerce(raw, self)
    }
}
