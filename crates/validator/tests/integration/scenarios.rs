//! End-to-end evaluation scenarios.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fieldward_validator::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn malformed_email_is_a_field_failure() {
    let input = input_map([("email", "bad")]);
    let rules = rule_set! { "email" => [required, "email"] };

    let outcome = Validator::new().evaluate(&input, &rules).unwrap();

    assert!(!outcome.is_valid());
    assert_eq!(outcome.failures().len(), 1);
    assert_eq!(outcome.failures()[0].kind, FailureKind::PredicateFailed);
    assert_eq!(outcome.failures()[0].check.as_deref(), Some("email"));
    assert_eq!(outcome.error_fields(), ["email"]);
}

fn counting_validator() -> (Arc<AtomicUsize>, Validator) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let validator = Validator::builder()
        .predicates(PredicateTable::builtin().with("counted", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        }))
        .build()
        .unwrap();
    (calls, validator)
}

#[test]
fn missing_required_field_stops_before_predicates() {
    let input = input_map([("name", "Ann")]);
    let rules = rule_set! {
        "email" => [required, "counted"],
        "name" => [required, "counted"],
    };
    let (calls, validator) = counting_validator();

    let outcome = validator
        .evaluate_with(&input, &rules, &Overrides::none().collect_all_errors(false))
        .unwrap();

    assert_eq!(
        outcome.failures(),
        [Failure {
            field: "email".into(),
            kind: FailureKind::RequiredFieldMissing,
            check: Some("required".into()),
            message: "Field 'email' does not exist".into(),
        }]
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    validator
        .evaluate_with(&input, &rules, &Overrides::none().collect_all_errors(true))
        .unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn missing_required_field_with_collect_all_continues() {
    let input = input_map([("time", "9am")]);
    let rules = rule_set! {
        "email" => [required, "email"],
        "time" => [required, Check::Time],
    };

    let outcome = Validator::new()
        .evaluate_with(&input, &rules, &Overrides::none().collect_all_errors(true))
        .unwrap();

    let kinds: Vec<_> = outcome.failures().iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        [FailureKind::RequiredFieldMissing, FailureKind::PredicateFailed]
    );
    assert_eq!(outcome.error_fields(), ["email", "time"]);
}

#[test]
fn unknown_check_is_reported_not_skipped() {
    let input = input_map([("age", "42")]);
    let rules = rule_set! { "age" => ["adult"] };

    let outcome = Validator::new().evaluate(&input, &rules).unwrap();

    assert_eq!(outcome.failures()[0].kind, FailureKind::UnknownPredicate);
    assert_eq!(outcome.messages(), ["Method 'age' doesn't exist"]);
}

#[test]
fn valid_lead_passes_every_check() {
    let input = input_map([
        ("first_name", "Анна"),
        ("last_name", "O'Neil"),
        ("phone", "+393331234567"),
        ("country2", "IT"),
        ("email", "anna.oneil@mail.example.com"),
    ]);
    let rules = RuleRegistry::builtin().lookup("LeadValidator").unwrap().unwrap();

    let outcome = Validator::new()
        .evaluate_with(&input, &rules, &Overrides::none().collect_all_errors(true))
        .unwrap();
    assert!(outcome.is_valid(), "{:?}", outcome.messages());
}

#[test]
fn numbers_and_booleans_are_checked_as_text() {
    let input = input_map([
        ("count", FieldValue::Int(-12)),
        ("ratio", FieldValue::Float(0.5)),
        ("agreed", FieldValue::Bool(true)),
        ("flag", FieldValue::from("false")),
    ]);
    let rules = rule_set! {
        "count" => [Check::Number],
        "ratio" => [Check::Number],
        "agreed" => [Check::IsBool],
        "flag" => [Check::IsBool],
    };

    let outcome = Validator::new()
        .evaluate_with(&input, &rules, &Overrides::none().collect_all_errors(true))
        .unwrap();
    assert_eq!(outcome.error_fields(), ["ratio"]);
}

#[test]
fn custom_predicates_extend_the_builtins() {
    let validator = Validator::builder()
        .predicates(PredicateTable::builtin().with("even", |value| {
            value
                .to_text()
                .parse::<i64>()
                .is_ok_and(|n| n % 2 == 0)
        }))
        .build()
        .unwrap();
    let rules = rule_set! { "n" => [Check::Number, "even"] };

    assert!(validator
        .evaluate(&input_map([("n", "4")]), &rules)
        .unwrap()
        .is_valid());
    assert!(!validator
        .evaluate(&input_map([("n", "5")]), &rules)
        .unwrap()
        .is_valid());
}

#[test]
fn rules_load_from_json() {
    let rules: RuleSet =
        serde_json::from_str(r#"{"login": ["required", "login"], "password": ["required", "password"]}"#)
            .unwrap();
    let input = input_map([("login", "ann"), ("password", "s3cret-pass!")]);

    let outcome = Validator::new().evaluate(&input, &rules).unwrap();
    assert!(outcome.is_valid());
}
