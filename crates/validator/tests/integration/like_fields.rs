//! Prefix expansion.

use std::sync::Arc;

use fieldward_validator::prelude::*;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;

/// Validator whose `seen` check records every value it is handed.
fn recording_validator() -> (Arc<Mutex<Vec<String>>>, Validator) {
    let seen: Arc<Mutex<Vec<String>>> = Arc::default();
    let sink = Arc::clone(&seen);
    let validator = Validator::builder()
        .predicates(PredicateTable::builtin().with("seen", move |value| {
            sink.lock().push(value.to_text().into_owned());
            true
        }))
        .build()
        .unwrap();
    (seen, validator)
}

#[test]
fn each_matching_key_is_evaluated_once() {
    let (seen, validator) = recording_validator();
    let input = input_map([("bank1", "x"), ("bank2", "y"), ("other", "z")]);

    let outcome = validator
        .evaluate_like_fields(&input, &rule_set! { "bank" => ["seen"] }, &Overrides::none())
        .unwrap();

    assert!(outcome.is_valid());
    assert_eq!(*seen.lock(), ["x", "y"]);
}

#[test]
fn prefix_matching_ignores_case_but_field_lookup_does_not() {
    let (seen, validator) = recording_validator();
    let input = input_map([("Bank_Main", "x")]);

    validator
        .evaluate_like_fields(&input, &rule_set! { "BANK" => ["seen"] }, &Overrides::none())
        .unwrap();
    assert_eq!(*seen.lock(), ["x"]);

    let exact = validator
        .evaluate(&input, &rule_set! { "bank_main" => [required] })
        .unwrap();
    assert_eq!(exact.error_fields(), ["bank_main"]);
}

#[test]
fn failures_name_the_concrete_key() {
    let input = input_map([("phone_home", "12"), ("phone_work", "+441234567")]);
    let outcome = Validator::new()
        .evaluate_like_fields(
            &input,
            &rule_set! { "phone" => [Check::Phone] },
            &Overrides::none().print_value(true),
        )
        .unwrap();

    assert_eq!(outcome.error_fields(), ["phone_home"]);
    assert_eq!(outcome.messages(), ["Field 'phone_home' contains wrong data: 12"]);
}
