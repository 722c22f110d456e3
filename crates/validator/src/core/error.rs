//! Fatal error types for the validation engine.
//!
//! Data-level outcomes (a missing field, a rejected value, an unknown check,
//! an unresolvable rule-set name) are never errors here: they are recorded
//! in a [`ValidationOutcome`](crate::outcome::ValidationOutcome). The types in
//! this module describe a misconfigured engine and abort the call.

use std::path::PathBuf;

use crate::messages::TemplateKind;

// ============================================================================
// VALIDATOR ERROR
// ============================================================================

/// Errors that abort construction or a validation pass.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ValidatorError {
    /// The message catalog has neither the requested language nor the
    /// default fallback language.
    #[error("message catalog has no entry for language '{language}' (nor fallback '{fallback}')")]
    MissingLanguage {
        /// Language that was requested, lowercased.
        language: String,
        /// Fallback language that was tried next.
        fallback: String,
    },

    /// A language entry exists but lacks one of the template kinds.
    #[error("message catalog language '{language}' has no '{kind}' template")]
    MissingTemplate {
        /// Language entry that is incomplete.
        language: String,
        /// Template kind that is missing.
        kind: TemplateKind,
    },

    /// A rule set references checks the predicate provider cannot resolve.
    ///
    /// Only produced by [`Validator::verify_rules`](crate::engine::Validator::verify_rules);
    /// evaluation reports unknown checks as `method` failures instead.
    #[error("rule set references unknown checks: {}", format_unknown(.0))]
    UnknownChecks(Vec<(String, String)>),

    /// A rule-set name was registered twice in a [`RuleRegistry`](crate::resolver::RuleRegistry).
    #[error("rule set '{0}' is already registered")]
    DuplicateRuleSet(String),

    /// A predicate failed to produce an answer.
    #[error("check '{check}' failed on field '{field}': {source}")]
    Predicate {
        /// Field being validated.
        field: String,
        /// Check identifier that was dispatched.
        check: String,
        /// Underlying predicate failure.
        #[source]
        source: PredicateError,
    },

    /// A rule-provider (or catalog) document could not be read or parsed.
    #[error("invalid document {}: {message}", path.display())]
    Provider {
        /// File that was being read.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },

    /// A filesystem operation failed.
    #[error("i/o error at {}: {source}", path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ValidatorError {
    /// Convenience constructor for [`ValidatorError::Provider`].
    pub fn provider(path: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        Self::Provider {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Convenience constructor for [`ValidatorError::Io`].
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn format_unknown(entries: &[(String, String)]) -> String {
    entries
        .iter()
        .map(|(field, check)| format!("{field}.{check}"))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// PREDICATE ERROR
// ============================================================================

/// Raised by a fallible custom predicate that cannot decide.
///
/// Built-in predicates are total and never produce this.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct PredicateError {
    /// Human-readable reason.
    pub message: String,
}

impl PredicateError {
    /// Creates a new predicate error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result alias used across the crate.
pub type ValidatorResult<T> = Result<T, ValidatorError>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_checks_lists_every_entry() {
        let err = ValidatorError::UnknownChecks(vec![
            ("email".into(), "emial".into()),
            ("age".into(), "numbr".into()),
        ]);
        assert_eq!(
            err.to_string(),
            "rule set references unknown checks: email.emial, age.numbr"
        );
    }

    #[test]
    fn missing_template_names_kind() {
        let err = ValidatorError::MissingTemplate {
            language: "de".into(),
            kind: TemplateKind::Method,
        };
        assert_eq!(
            err.to_string(),
            "message catalog language 'de' has no 'method' template"
        );
    }

    #[test]
    fn predicate_error_keeps_source() {
        use std::error::Error as _;

        let err = ValidatorError::Predicate {
            field: "age".into(),
            check: "adult".into(),
            source: PredicateError::new("lookup table unavailable"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("lookup table unavailable"));
    }
}
