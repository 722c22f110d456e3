//! Results of a validation pass.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::messages::TemplateKind;

/// Sentinel error field used when a named rule set cannot be resolved.
pub const METHOD_FIELD: &str = "Method";

// ============================================================================
// FAILURE
// ============================================================================

/// Why a field (or a whole pass) failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Field absent and marked required.
    RequiredFieldMissing,
    /// Field present, a check rejected its value.
    PredicateFailed,
    /// Rule references a check the provider does not know.
    UnknownPredicate,
    /// Named rule set not found in any provider.
    RuleSetNotFound,
}

impl FailureKind {
    /// Message template used for this kind, if any.
    ///
    /// [`FailureKind::RuleSetNotFound`] uses a fixed message instead.
    #[must_use]
    pub const fn template(self) -> Option<TemplateKind> {
        match self {
            Self::RequiredFieldMissing => Some(TemplateKind::Required),
            Self::PredicateFailed => Some(TemplateKind::Field),
            Self::UnknownPredicate => Some(TemplateKind::Method),
            Self::RuleSetNotFound => None,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::RequiredFieldMissing => "required_field_missing",
            Self::PredicateFailed => "predicate_failed",
            Self::UnknownPredicate => "unknown_predicate",
            Self::RuleSetNotFound => "rule_set_not_found",
        };
        f.write_str(s)
    }
}

/// One recorded failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// Field the failure belongs to ([`METHOD_FIELD`] for unresolved rule sets).
    pub field: String,
    pub kind: FailureKind,
    /// Check identifier involved, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,
    /// Rendered, human-readable message.
    pub message: String,
}

// ============================================================================
// OUTCOME
// ============================================================================

/// Accumulated result of a pass.
///
/// `errors` and `fields` views are index-aligned: the n-th message belongs
/// to the n-th field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationOutcome {
    failures: Vec<Failure>,
}

impl ValidationOutcome {
    /// An outcome with no failures.
    #[must_use]
    pub fn valid() -> Self {
        Self::default()
    }

    /// Outcome for a rule-set name nobody provides.
    #[must_use]
    pub fn rule_set_not_found(name: &str) -> Self {
        Self {
            failures: vec![Failure {
                field: METHOD_FIELD.to_owned(),
                kind: FailureKind::RuleSetNotFound,
                check: Some(name.to_owned()),
                message: format!("Undefined method {name}"),
            }],
        }
    }

    pub(crate) fn push(&mut self, failure: Failure) {
        self.failures.push(failure);
    }

    /// `true` when nothing failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Error messages in the order they were recorded.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.message.as_str()).collect()
    }

    /// Failing fields, index-aligned with [`messages`](Self::messages).
    #[must_use]
    pub fn error_fields(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.field.as_str()).collect()
    }

    /// Appends another outcome's failures.
    pub fn merge(&mut self, other: ValidationOutcome) {
        self.failures.extend(other.failures);
    }

    /// Builds the caller-facing payload.
    #[must_use]
    pub fn payload(&self, include_fields: bool) -> ErrorPayload {
        ErrorPayload {
            errors: self.failures.iter().map(|f| f.message.clone()).collect(),
            fields: include_fields
                .then(|| self.failures.iter().map(|f| f.field.clone()).collect()),
        }
    }
}

/// Serialized error shape: `{errors: [..], fields?: [..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub errors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}
