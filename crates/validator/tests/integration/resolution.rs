//! Validation by rule-set name.

use std::fs;
use std::path::Path;

use fieldward_validator::prelude::*;
use pretty_assertions::assert_eq;

use crate::collecting_validator;

fn provider(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn unknown_name_yields_method_failure() {
    let registry = RuleRegistry::new();
    let outcome = Validator::new()
        .evaluate_named(&InputMap::new(), "TimeValidator", &registry, &Overrides::none())
        .unwrap();

    assert!(!outcome.is_valid());
    assert_eq!(outcome.error_fields(), ["Method"]);
    assert_eq!(outcome.messages(), ["Undefined method TimeValidator"]);
    assert_eq!(outcome.failures()[0].kind, FailureKind::RuleSetNotFound);
}

#[test]
fn unknown_name_notifies_reporter() {
    let (reporter, validator) = collecting_validator();
    validator
        .evaluate_named(&InputMap::new(), "Nope", &RuleRegistry::builtin(), &Overrides::none())
        .unwrap();

    let reports = reporter.take();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].message.text(), "Undefined method Nope");
}

#[test]
fn builtin_registry_resolves_sample_lists() {
    let input = input_map([("time", "12:30"), ("date", "2024-02-30 10:00:00")]);
    let registry = RuleRegistry::builtin();
    let validator = Validator::new();

    for name in ["TimeValidator", "DateValidator"] {
        let outcome = validator
            .evaluate_named(&input, name, &registry, &Overrides::none())
            .unwrap();
        assert!(outcome.is_valid(), "{name}: {:?}", outcome.messages());
    }

    let login = validator
        .evaluate_named(&input, "LoginValidator", &registry, &Overrides::none())
        .unwrap();
    assert_eq!(login.error_fields(), ["login"]);
}

#[test]
fn provider_directory_resolves_from_files() {
    let dir = tempfile::tempdir().unwrap();
    provider(
        dir.path(),
        "accounts.toml",
        r#"
[Signup]
email = ["required", "email"]
login = ["required", "login"]
"#,
    );
    provider(dir.path(), "misc.json", r#"{"Wallet": {"address": ["crypto_wallet"]}}"#);

    let providers = ProviderDirectory::new(dir.path()).with_namespace("app");
    let validator = Validator::builder().collect_all_errors(true).build().unwrap();

    let outcome = validator
        .evaluate_named(
            &input_map([("email", "nope")]),
            "Signup",
            &providers,
            &Overrides::none(),
        )
        .unwrap();
    assert_eq!(outcome.error_fields(), ["email", "login"]);

    let outcome = validator
        .evaluate_named(
            &input_map([("address", "0x12")]),
            "Wallet",
            &providers,
            &Overrides::none(),
        )
        .unwrap();
    assert_eq!(outcome.failures()[0].kind, FailureKind::PredicateFailed);

    let mut names = providers.names().unwrap();
    names.sort();
    assert_eq!(names, ["Signup", "Wallet"]);
}

#[test]
fn provider_directory_rescans_on_every_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let providers = ProviderDirectory::new(dir.path());
    assert!(providers.lookup("Late").unwrap().is_none());

    provider(dir.path(), "late.toml", "[Late]\nx = []\n");
    assert!(providers.lookup("Late").unwrap().is_some());
}

#[test]
fn unreadable_provider_aborts_the_call() {
    let dir = tempfile::tempdir().unwrap();
    provider(dir.path(), "broken.json", "{");

    let err = Validator::new()
        .evaluate_named(
            &InputMap::new(),
            "Anything",
            &ProviderDirectory::new(dir.path()),
            &Overrides::none(),
        )
        .unwrap_err();
    assert!(matches!(err, ValidatorError::Provider { .. }));
}

#[test]
fn facade_uses_provider_directory_when_given() {
    let dir = tempfile::tempdir().unwrap();
    provider(dir.path(), "lists.toml", "[Country]\ncountry = [\"required\", \"country2\"]\n");

    let (valid, payload) = validate_by_name(
        &input_map([("country", "DEU")]),
        "Country",
        Some(dir.path()),
        ValidationConfig::default().with_print_value(true),
    )
    .unwrap();
    assert!(!valid);
    assert_eq!(payload.errors, ["Field 'country' contains wrong data: DEU"]);
}
