//! One-call entry points.
//!
//! Each function runs a single pass and returns `(valid, payload)`. The plain
//! forms build a [`Validator`] with built-in collaborators from `config`; the
//! `_with` forms take a configured [`Validator`] (custom catalog, renames,
//! predicates or reporter) plus per-call [`Overrides`].
//!
//! ```rust
//! use fieldward_validator::prelude::*;
//!
//! let input = input_map([("time", "noon")]);
//! let (valid, payload) = validate_by_name(
//!     &input,
//!     "TimeValidator",
//!     None,
//!     ValidationConfig::default().with_include_fields(true),
//! )
//! .unwrap();
//!
//! assert!(!valid);
//! assert_eq!(payload.fields.unwrap(), ["time"]);
//! ```

use std::path::Path;

use crate::config::{Overrides, ValidationConfig};
use crate::core::ValidatorResult;
use crate::engine::Validator;
use crate::outcome::{ErrorPayload, ValidationOutcome};
use crate::resolver::{ProviderDirectory, RuleRegistry, RuleSource};
use crate::rules::RuleSet;
use crate::value::InputMap;

fn respond(outcome: &ValidationOutcome, include_fields: bool) -> (bool, ErrorPayload) {
    (outcome.is_valid(), outcome.payload(include_fields))
}

fn include_fields(validator: &Validator, overrides: &Overrides) -> bool {
    overrides
        .include_fields
        .unwrap_or(validator.config().include_fields)
}

// ============================================================================
// DEFAULT COLLABORATORS
// ============================================================================

/// Validates `input` against an explicit rule set.
pub fn validate_by_rule_set(
    input: &InputMap,
    rules: &RuleSet,
    config: ValidationConfig,
) -> ValidatorResult<(bool, ErrorPayload)> {
    let validator = Validator::builder().config(config).build()?;
    validate_by_rule_set_with(&validator, input, rules, &Overrides::none())
}

/// Validates `input` against the rule set registered under `name`.
///
/// With `providers` set, the name is looked up in that provider directory
/// (default namespace); otherwise in [`RuleRegistry::builtin`].
pub fn validate_by_name(
    input: &InputMap,
    name: &str,
    providers: Option<&Path>,
    config: ValidationConfig,
) -> ValidatorResult<(bool, ErrorPayload)> {
    let validator = Validator::builder().config(config).build()?;
    match providers {
        Some(root) => validate_by_name_with(
            &validator,
            input,
            name,
            &ProviderDirectory::new(root),
            &Overrides::none(),
        ),
        None => validate_by_name_with(
            &validator,
            input,
            name,
            &RuleRegistry::builtin(),
            &Overrides::none(),
        ),
    }
}

/// Validates every input key matching a prefix of `prefix_rules`.
pub fn validate_like_fields(
    input: &InputMap,
    prefix_rules: &RuleSet,
    config: ValidationConfig,
) -> ValidatorResult<(bool, ErrorPayload)> {
    let validator = Validator::builder().config(config).build()?;
    validate_like_fields_with(&validator, input, prefix_rules, &Overrides::none())
}

// ============================================================================
// CONFIGURED VALIDATOR
// ============================================================================

/// [`validate_by_rule_set`] through a configured validator: its catalog,
/// renames, predicates and reporter apply, and `overrides` adjust this call.
pub fn validate_by_rule_set_with(
    validator: &Validator,
    input: &InputMap,
    rules: &RuleSet,
    overrides: &Overrides,
) -> ValidatorResult<(bool, ErrorPayload)> {
    let outcome = validator.evaluate_with(input, rules, overrides)?;
    Ok(respond(&outcome, include_fields(validator, overrides)))
}

/// [`validate_by_name`] through a configured validator and any rule source,
/// e.g. a [`ProviderDirectory`] with its own namespace.
pub fn validate_by_name_with(
    validator: &Validator,
    input: &InputMap,
    name: &str,
    source: &dyn RuleSource,
    overrides: &Overrides,
) -> ValidatorResult<(bool, ErrorPayload)> {
    let outcome = validator.evaluate_named(input, name, source, overrides)?;
    Ok(respond(&outcome, include_fields(validator, overrides)))
}

/// [`validate_like_fields`] through a configured validator.
pub fn validate_like_fields_with(
    validator: &Validator,
    input: &InputMap,
    prefix_rules: &RuleSet,
    overrides: &Overrides,
) -> ValidatorResult<(bool, ErrorPayload)> {
    let outcome = validator.evaluate_like_fields(input, prefix_rules, overrides)?;
    Ok(respond(&outcome, include_fields(validator, overrides)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::messages::{LanguageMessages, MessageCatalog, RenameTable};
    use crate::predicates::PredicateTable;
    use crate::reporter::CollectingReporter;
    use crate::rule_set;
    use crate::value::input_map;

    fn configured(reporter: Arc<CollectingReporter>) -> Validator {
        Validator::builder()
            .catalog(MessageCatalog::new().with_language(
                "en",
                LanguageMessages::new(":field is missing", ":field is wrong", ":field is unknown"),
            ))
            .renames(RenameTable::new().with("en", "mail", "E-mail"))
            .predicates(PredicateTable::new().with("upper", |v| {
                v.as_str().is_some_and(|s| s.chars().all(char::is_uppercase))
            }))
            .print_field(false)
            .invoke_callback(true)
            .shared_reporter(reporter)
            .build()
            .unwrap()
    }

    #[test]
    fn rule_set_entry_point() {
        let (valid, payload) = validate_by_rule_set(
            &input_map([("email", "bad")]),
            &rule_set! { "email" => [required, "email"] },
            ValidationConfig::default(),
        )
        .unwrap();
        assert!(!valid);
        assert_eq!(payload.errors, ["Field 'email' contains wrong data"]);
        assert_eq!(payload.fields, None);
    }

    #[test]
    fn unknown_name_reports_method_field() {
        let (valid, payload) = validate_by_name(
            &InputMap::new(),
            "NoSuchList",
            None,
            ValidationConfig::default().with_include_fields(true),
        )
        .unwrap();
        assert!(!valid);
        assert_eq!(payload.errors, ["Undefined method NoSuchList"]);
        assert_eq!(payload.fields.unwrap(), ["Method"]);
    }

    #[test]
    fn like_fields_entry_point() {
        let (valid, payload) = validate_like_fields(
            &input_map([("phone_home", "+123456789"), ("phone_work", "n/a")]),
            &rule_set! { "PHONE" => ["phone"] },
            ValidationConfig::default().with_include_fields(true),
        )
        .unwrap();
        assert!(!valid);
        assert_eq!(payload.fields.unwrap(), ["phone_work"]);
    }

    #[test]
    fn configured_validator_supplies_every_collaborator() {
        let reporter = Arc::new(CollectingReporter::new());
        let validator = configured(reporter.clone());

        let (valid, payload) = validate_by_rule_set_with(
            &validator,
            &input_map([("mail", "abc"), ("code", "XY")]),
            &rule_set! { "mail" => ["upper"], "code" => ["upper", "email"] },
            &Overrides::none().collect_all_errors(true).include_fields(true),
        )
        .unwrap();

        assert!(!valid);
        assert_eq!(payload.errors, ["E-mail is wrong", "code is unknown"]);
        assert_eq!(payload.fields.unwrap(), ["mail", "code"]);
        let reported: Vec<_> = reporter
            .take()
            .into_iter()
            .map(|r| r.message.text().to_owned())
            .collect();
        assert_eq!(reported, payload.errors);
    }

    #[test]
    fn named_lookup_through_any_source() {
        let reporter = Arc::new(CollectingReporter::new());
        let validator = configured(reporter.clone());
        let registry = RuleRegistry::new()
            .with("Codes", || rule_set! { "code" => [required, "upper"] })
            .unwrap();

        let (valid, payload) = validate_by_name_with(
            &validator,
            &InputMap::new(),
            "Codes",
            &registry,
            &Overrides::none(),
        )
        .unwrap();
        assert!(!valid);
        assert_eq!(payload.errors, ["code is missing"]);
        assert_eq!(payload.fields, None);
        assert_eq!(reporter.len(), 1);

        let (valid, _) = validate_like_fields_with(
            &validator,
            &input_map([("code_a", "AB"), ("code_b", "CD")]),
            &rule_set! { "code" => ["upper"] },
            &Overrides::none(),
        )
        .unwrap();
        assert!(valid);
    }
}
