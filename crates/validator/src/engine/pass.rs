//! A single evaluation pass.

use std::ops::ControlFlow;

use super::Validator;
use crate::config::ValidationConfig;
use crate::core::{ValidatorError, ValidatorResult};
use crate::messages::{MessageFormatter, MessageStyle, TemplateKind};
use crate::outcome::{Failure, FailureKind, ValidationOutcome};
use crate::reporter::FailureReport;
use crate::rules::{CheckRef, REQUIRED, RuleSet};
use crate::value::{FieldValue, InputMap};

/// Whether the pass may keep going after a step.
pub(super) type Flow = ControlFlow<()>;

/// Mutable state of one pass; dropped when the pass ends.
pub(super) struct Pass<'v> {
    validator: &'v Validator,
    config: ValidationConfig,
    outcome: ValidationOutcome,
}

impl<'v> Pass<'v> {
    pub(super) fn new(validator: &'v Validator, config: ValidationConfig) -> Self {
        Self {
            validator,
            config,
            outcome: ValidationOutcome::valid(),
        }
    }

    pub(super) fn finish(self) -> ValidationOutcome {
        self.outcome
    }

    /// Walks `rules` in order. Stops at the first failure unless collecting all.
    pub(super) fn run(&mut self, input: &InputMap, rules: &RuleSet) -> ValidatorResult<Flow> {
        for (field, checks) in rules {
            if self.field(field, checks, input)?.is_break() {
                return Ok(ControlFlow::Break(()));
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Evaluates one field against its checks.
    pub(super) fn field(
        &mut self,
        field: &str,
        checks: &[CheckRef],
        input: &InputMap,
    ) -> ValidatorResult<Flow> {
        let Some(value) = input.get(field).filter(|v| !v.is_null()) else {
            if checks.iter().any(CheckRef::is_required) {
                return self.record(field, None, TemplateKind::Required, REQUIRED);
            }
            return Ok(ControlFlow::Continue(()));
        };

        for check in checks.iter().filter(|c| !c.is_required()) {
            let name = check.as_str();
            let flow = match self.validator.predicates.predicate(name) {
                Some(predicate) => {
                    let passed =
                        predicate
                            .test(value)
                            .map_err(|source| ValidatorError::Predicate {
                                field: field.to_owned(),
                                check: name.to_owned(),
                                source,
                            })?;
                    tracing::trace!(field, check = name, passed, "check evaluated");
                    if passed {
                        ControlFlow::Continue(())
                    } else {
                        self.record(field, Some(value), TemplateKind::Field, name)?
                    }
                }
                None => self.record(field, Some(value), TemplateKind::Method, name)?,
            };
            if flow.is_break() {
                return Ok(flow);
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Records a failure and decides whether the pass continues.
    fn record(
        &mut self,
        field: &str,
        value: Option<&FieldValue>,
        template: TemplateKind,
        check: &str,
    ) -> ValidatorResult<Flow> {
        let kind = match template {
            TemplateKind::Required => FailureKind::RequiredFieldMissing,
            TemplateKind::Field => FailureKind::PredicateFailed,
            TemplateKind::Method => FailureKind::UnknownPredicate,
        };
        let style = MessageStyle {
            language: &self.config.language,
            print_field: self.config.print_field,
            print_value: self.config.print_value,
        };
        let message = MessageFormatter::new(&self.validator.catalog, &self.validator.renames)
            .format(field, value, template, style)?;

        tracing::debug!(field, %kind, check, "validation failure");
        self.notify(&message, field);
        self.outcome.push(Failure {
            field: field.to_owned(),
            kind,
            check: Some(check.to_owned()),
            message,
        });

        Ok(if self.config.collect_all_errors {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        })
    }

    /// Hands a failure to the reporter when callbacks are enabled.
    pub(super) fn notify(&self, message: &str, field: &str) {
        if !self.config.invoke_callback {
            return;
        }
        let report = if self.config.include_fields {
            FailureReport::detailed(message, vec![field.to_owned()])
        } else {
            FailureReport::plain(message)
        };
        self.validator.reporter.report(&report);
    }

    pub(super) fn merge(&mut self, outcome: ValidationOutcome) {
        self.outcome.merge(outcome);
    }
}
