//! Error types for coercion and batch checking.
//!
//! The coercion engine raises exactly one error kind, [`UnsupportedCoercion`],
//! carrying the raw value and the kind it was being converted into. The batch
//! checking layer wraps it with variable context and accumulates every failure
//! across a spec set before reporting, via [`miette`] diagnostics.
//!
//! # Diagnostic Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | `envcast::unsupported_coercion` | A raw value could not be converted |
//! | `envcast::missing_var` | Required environment variable not set |
//! | `envcast::invalid_utf8` | Variable contains non-UTF8 bytes |
//! | `envcast::coercion_error` | A variable's value failed coercion |
//! | `envcast::multiple_errors` | Multiple check errors accumulated |
//!
//! # Error Accumulation
//!
//! Conversions are deterministic, so there are no retries: a failed coercion
//! stays failed for the same input. Instead of stopping at the first failure,
//! [`check()`](crate::check()) keeps walking the spec set and folds everything
//! it collected through [`Error::multiple`]:
//!
//! ```rust,ignore
//! match check_env(&specs) {
//!     Ok(snapshot) => { /* use snapshot */ }
//!     Err(Error::Multiple { errors }) => {
//!         for error in errors {
//!             eprintln!("{error}");
//!         }
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

use miette::Diagnostic;
use thiserror::Error as ThisError;

use crate::kind::Kind;

/// The single error the coercion engine raises.
///
/// Carries the original raw value and the attempted target kind, and nothing
/// else: coercion is a pure function of those two inputs, so they are the
/// entire failure context.
#[derive(Clone, Debug, Diagnostic, PartialEq, ThisError)]
#[error("cannot coerce {value:?} into {kind}")]
#[diagnostic(code(envcast::unsupported_coercion), help("expected a {kind} value"))]
pub struct UnsupportedCoercion {
    /// The raw string that could not be converted.
    pub value: String,

    /// The kind the conversion targeted.
    pub kind: Kind,
}

impl UnsupportedCoercion {
    /// Creates an error for `value` failing to coerce into `kind`.
    pub fn new(value: impl Into<String>, kind: Kind) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }
}

/// Errors raised while checking a declared variable set.
///
/// [`check()`](crate::check()) accumulates these rather than failing on the first
/// one; when several occur they are wrapped in [`Error::Multiple`], which
/// miette renders as related diagnostics so every problem is visible at once.
#[derive(Debug, Diagnostic, ThisError)]
pub enum Error {
    /// A required environment variable was not set.
    #[error("missing required environment variable: {var}")]
    #[diagnostic(code(envcast::missing_var), severity(Error))]
    Missing {
        /// The name of the missing environment variable.
        var: String,

        /// Dynamic help message naming the variable.
        #[help]
        help: String,
    },

    /// An environment variable contains invalid UTF-8.
    #[error("environment variable {var} contains invalid UTF-8")]
    #[diagnostic(
        code(envcast::invalid_utf8),
        help("ensure the variable contains valid UTF-8 text")
    )]
    InvalidUtf8 {
        /// The name of the environment variable with invalid UTF-8.
        var: String,
    },

    /// A variable's value could not be coerced into its declared kind.
    #[error("failed to coerce {var}: {source}")]
    #[diagnostic(code(envcast::coercion_error))]
    Coercion {
        /// The name of the environment variable.
        var: String,

        /// The underlying coercion failure, with the raw value and kind.
        #[source]
        #[diagnostic_source]
        source: UnsupportedCoercion,

        /// Dynamic help text naming the declared kind.
        #[help]
        help: String,
    },

    /// Multiple check errors occurred.
    #[error("{n} configuration error(s) occurred", n = .errors.len())]
    #[diagnostic(
        code(envcast::multiple_errors),
        help("fix all listed configuration errors")
    )]
    Multiple {
        /// All accumulated errors, in spec order.
        #[related]
        errors: Vec<Error>,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Constructor helpers for ergonomic error creation
// ─────────────────────────────────────────────────────────────────────────────

impl Error {
    /// Creates a Missing error with a standard help message.
    pub fn missing(var: impl Into<String>) -> Self {
        let var = var.into();
        let help = format!("set {var} in your environment");
        Self::Missing { var, help }
    }

    /// Wraps a coercion failure with the variable it occurred on.
    pub fn coercion(var: impl Into<String>, source: UnsupportedCoercion) -> Self {
        let help = format!("expected a {} value", source.kind);
        Self::Coercion {
            var: var.into(),
            source,
            help,
        }
    }

    /// Collects multiple errors into a single Multiple error.
    /// Returns None if the input is empty.
    pub fn multiple(errors: Vec<Self>) -> Option<Self> {
        if errors.len() == 1 {
            // Unwrap single error instead of wrapping
            errors.into_iter().next()
        } else if errors.is_empty() {
            None
        } else {
            Some(Self::Multiple { errors })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_coercion_names_value_and_kind() {
        let err = UnsupportedCoercion::new("4.2", Kind::Integer);
        let display = err.to_string();
        assert!(display.contains("4.2"));
        assert!(display.contains("integer"));
    }

    #[test]
    fn test_error_missing() {
        let err = Error::missing("DATABASE_URL");
        let display = err.to_string();
        assert!(display.contains("DATABASE_URL"));
        assert!(display.contains("missing"));
    }

    #[test]
    fn test_error_coercion_keeps_source() {
        let err = Error::coercion("PORT", UnsupportedCoercion::new("abc", Kind::Integer));
        let display = err.to_string();
        assert!(display.contains("PORT"));
        assert!(display.contains("abc"));

        let source = std::error::Error::source(&err).expect("coercion error has a source");
        assert!(source.to_string().contains("integer"));
    }

    #[test]
    fn test_error_multiple() {
        let errors = vec![Error::missing("VAR1"), Error::missing("VAR2")];
        let err = Error::multiple(errors).unwrap();

        if let Error::Multiple { errors } = err {
            assert_eq!(errors.len(), 2);
        } else {
            panic!("Expected Multiple variant");
        }
    }

    #[test]
    fn test_error_multiple_single_unwraps() {
        let errors = vec![Error::missing("VAR1")];
        let err = Error::multiple(errors).unwrap();

        // Single error should be unwrapped, not wrapped in Multiple
        assert!(matches!(err, Error::Missing { .. }));
    }

    #[test]
    fn test_error_multiple_empty_returns_none() {
        assert!(Error::multiple(vec![]).is_none());
    }
}
