//! Reporter invocation and payload shape.

use std::sync::Arc;

use fieldward_validator::prelude::*;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;

use crate::collecting_validator;

#[test]
fn reporter_sees_every_failure_when_collecting_all() {
    let (reporter, validator) = collecting_validator();
    let rules = rule_set! { "a" => [required], "b" => [required] };

    validator
        .evaluate_with(&InputMap::new(), &rules, &Overrides::none().collect_all_errors(true))
        .unwrap();

    let messages: Vec<_> = reporter
        .take()
        .into_iter()
        .map(|r| r.message.text().to_owned())
        .collect();
    assert_eq!(
        messages,
        ["Field 'a' does not exist", "Field 'b' does not exist"]
    );
}

#[test]
fn reporter_sees_only_first_failure_when_failing_fast() {
    let (reporter, validator) = collecting_validator();
    let rules = rule_set! { "a" => [required], "b" => [required] };

    validator.evaluate(&InputMap::new(), &rules).unwrap();
    assert_eq!(reporter.len(), 1);
}

#[test]
fn closure_reporter_receives_detailed_reports() {
    let seen: Arc<Mutex<Vec<FailureReport>>> = Arc::default();
    let sink = Arc::clone(&seen);
    let validator = Validator::builder()
        .invoke_callback(true)
        .include_fields(true)
        .reporter(FnReporter::new(move |report: &FailureReport| {
            sink.lock().push(report.clone());
        }))
        .build()
        .unwrap();

    validator
        .evaluate(&input_map([("email", "x")]), &rule_set! { "email" => ["email"] })
        .unwrap();

    let seen = seen.lock();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].mode, ReportMode::Detailed);
    assert_eq!(seen[0].message.fields().unwrap(), ["email"]);
}

#[test]
fn payload_shape_with_fields() {
    let input = input_map([("email", "bad")]);
    let rules = rule_set! {
        "name" => [required],
        "email" => [required, "email"],
    };
    let outcome = Validator::new()
        .evaluate_with(&input, &rules, &Overrides::none().collect_all_errors(true))
        .unwrap();

    insta::assert_json_snapshot!(outcome.payload(true), @r###"
    {
      "errors": [
        "Field 'name' does not exist",
        "Field 'email' contains wrong data"
      ],
      "fields": [
        "name",
        "email"
      ]
    }
    "###);
}

#[test]
fn payload_omits_fields_by_default() {
    let (valid, payload) = validate_by_rule_set(
        &InputMap::new(),
        &rule_set! { "name" => [required] },
        ValidationConfig::default(),
    )
    .unwrap();

    assert!(!valid);
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({ "errors": ["Field 'name' does not exist"] })
    );
}
