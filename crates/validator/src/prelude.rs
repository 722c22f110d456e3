//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldward_validator::prelude::*;` import that brings
//! in the engine, rule and value types, reporters and the one-call entry
//! points.
//!
//! # Examples
//!
//! ```rust
//! use fieldward_validator::prelude::*;
//!
//! let rules = rule_set! { "login" => [required, Check::Login] };
//! let outcome = Validator::new()
//!     .evaluate(&input_map([("login", "ann_42")]), &rules)
//!     .unwrap();
//! assert!(outcome.is_valid());
//! ```

// ============================================================================
// ENGINE
// ============================================================================

pub use crate::config::{Overrides, ValidationConfig};
pub use crate::core::{PredicateError, ValidatorError, ValidatorResult};
pub use crate::engine::{Validator, ValidatorBuilder};
pub use crate::outcome::{ErrorPayload, Failure, FailureKind, ValidationOutcome};

// ============================================================================
// RULES AND VALUES
// ============================================================================

pub use crate::predicates::{BuiltinPredicates, Check, Predicate, PredicateProvider, PredicateTable};
pub use crate::rule_set;
pub use crate::rules::{CheckRef, RuleSet};
pub use crate::value::{FieldValue, InputMap, input_map};

// ============================================================================
// MESSAGES, RESOLUTION, REPORTING
// ============================================================================

pub use crate::messages::{LanguageMessages, MessageCatalog, RenameTable, TemplateKind};
pub use crate::reporter::{
    CollectingReporter, ExitingReporter, FailureMessage, FailureReport, FailureReporter,
    FnReporter, JsonReporter, ReportMode,
};
pub use crate::resolver::{ProviderDirectory, RuleProviderDescriptor, RuleRegistry, RuleSource};

// ============================================================================
// ENTRY POINTS
// ============================================================================

pub use crate::facade::{
    validate_by_name, validate_by_name_with, validate_by_rule_set, validate_by_rule_set_with,
    validate_like_fields, validate_like_fields_with,
};
