//! Batch checking of a declared variable set.
//!
//! A caller that has loaded a schema declares each variable as a [`VarSpec`]
//! and hands the whole set to [`check`] (with any lookup) or [`check_env`]
//! (reading the process environment). The walk never stops at the first
//! problem: every missing required variable and every uncoercible value is
//! collected, then folded into a single error so startup output shows all of
//! them at once.
//!
//! # Example
//!
//! ```rust
//! use envcast::{Kind, VarSpec, check};
//!
//! let specs = [
//!     VarSpec::new("PORT", Kind::Integer),
//!     VarSpec::new("DEBUG", Kind::Boolean).with_default("false"),
//!     VarSpec::new("REDIS_URL", Kind::Uri).optional(),
//! ];
//!
//! let snapshot = check(&specs, |name| match name {
//!     "PORT" => Some("8080".to_string()),
//!     _ => None,
//! })?;
//!
//! assert_eq!(snapshot.get("PORT").and_then(|v| v.as_integer()), Some(8080));
//! assert_eq!(snapshot.get("DEBUG").and_then(|v| v.as_boolean()), Some(false));
//! assert!(snapshot.get("REDIS_URL").is_none());
//! # Ok::<(), envcast::Error>(())
//! ```

use indexmap::IndexMap;

use crate::coerce;
use crate::error::Error;
use crate::kind::Kind;
use crate::value::Value;

/// A declared environment variable: its name, target kind, and presence rules.
#[derive(Clone, Debug)]
pub struct VarSpec {
    name: String,
    kind: Kind,
    optional: bool,
    default: Option<String>,
}

impl VarSpec {
    /// Declares a required variable of the given kind.
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            kind,
            optional: false,
            default: None,
        }
    }

    /// Marks the variable optional: absence is not an error, and the
    /// snapshot simply has no entry for it.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Sets a raw default used when no value is found. The default goes
    /// through the same coercion as a real value.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// The variable's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared target kind.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Whether absence is tolerated.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    /// The declared raw default, if any.
    #[must_use]
    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }
}

/// The typed values produced by a successful check, keyed by variable name
/// in spec order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    entries: IndexMap<String, Value>,
}

impl Snapshot {
    /// Looks up a variable's coerced value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Checks whether the snapshot holds a value for `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of coerced values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in spec order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// Checks a spec set against an arbitrary raw-value lookup.
///
/// For each spec, the lookup is consulted once; a `None` falls back to the
/// spec's default. Missing required variables and failed coercions are
/// accumulated across the entire set.
///
/// # Errors
///
/// Returns the single error when exactly one spec fails, or
/// [`Error::Multiple`] listing every failure in spec order.
pub fn check<F>(specs: &[VarSpec], mut lookup: F) -> Result<Snapshot, Error>
where
    F: FnMut(&str) -> Option<String>,
{
    check_inner(specs, |name| Ok(lookup(name)))
}

/// Checks a spec set against the process environment.
///
/// Reads each variable with [`std::env::var`]. A variable holding non-UTF-8
/// bytes is reported as [`Error::InvalidUtf8`] for that variable; the walk
/// continues either way.
///
/// # Errors
///
/// Returns the single error when exactly one spec fails, or
/// [`Error::Multiple`] listing every failure in spec order.
pub fn check_env(specs: &[VarSpec]) -> Result<Snapshot, Error> {
    check_inner(specs, |name| match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(Error::InvalidUtf8 {
            var: name.to_string(),
        }),
    })
}

fn check_inner<F>(specs: &[VarSpec], mut lookup: F) -> Result<Snapshot, Error>
where
    F: FnMut(&str) -> Result<Option<String>, Error>,
{
    let mut entries = IndexMap::new();
    let mut errors = Vec::new();

    for spec in specs {
        let raw = match lookup(&spec.name) {
            Ok(found) => found.or_else(|| spec.default.clone()),
            Err(error) => {
                errors.push(error);
                continue;
            }
        };

        match raw {
            None if spec.optional => {}
            None => errors.push(Error::missing(&spec.name)),
            Some(raw) => match coerce::coerce(&raw, spec.kind) {
                Ok(value) => {
                    entries.insert(spec.name.clone(), value);
                }
                Err(source) => errors.push(Error::coercion(&spec.name, source)),
            },
        }
    }

    match Error::multiple(errors) {
        None => Ok(Snapshot { entries }),
        Some(error) => Err(error),
    }
}
