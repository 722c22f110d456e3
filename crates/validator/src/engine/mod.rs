//! The rule evaluator.
//!
//! [`Validator`] owns everything a pass needs: the default
//! [`ValidationConfig`], the message catalog, the rename table, the predicate
//! provider and the failure reporter. It holds no per-pass state, so one
//! instance can be shared freely; every call starts from an empty outcome.
//!
//! ```rust
//! use fieldward_validator::prelude::*;
//!
//! let validator = Validator::builder().collect_all_errors(true).build().unwrap();
//! let input = input_map([("email", "bad")]);
//! let rules = rule_set! { "email" => [required, "email"], "time" => [required] };
//!
//! let outcome = validator.evaluate(&input, &rules).unwrap();
//! assert_eq!(outcome.error_fields(), ["email", "time"]);
//! ```

mod like_fields;
mod pass;

use std::fmt;
use std::sync::Arc;

use pass::Pass;

use crate::config::{Overrides, ValidationConfig};
use crate::core::{ValidatorError, ValidatorResult};
use crate::messages::{MessageCatalog, RenameTable};
use crate::outcome::ValidationOutcome;
use crate::predicates::{BuiltinPredicates, PredicateProvider};
use crate::reporter::{FailureReporter, JsonReporter};
use crate::resolver::RuleSource;
use crate::rules::RuleSet;
use crate::value::InputMap;

// ============================================================================
// VALIDATOR
// ============================================================================

/// Evaluates rule sets against input maps.
#[derive(Clone)]
pub struct Validator {
    config: ValidationConfig,
    catalog: Arc<MessageCatalog>,
    renames: Arc<RenameTable>,
    predicates: Arc<dyn PredicateProvider>,
    reporter: Arc<dyn FailureReporter>,
}

impl Validator {
    /// Validator with every built-in default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ValidationConfig::default(),
            catalog: MessageCatalog::shared_builtin(),
            renames: Arc::new(RenameTable::new()),
            predicates: Arc::new(BuiltinPredicates),
            reporter: Arc::new(JsonReporter::stdout()),
        }
    }

    #[must_use]
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// Constructor-time settings.
    #[must_use]
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn renames(&self) -> &RenameTable {
        &self.renames
    }

    /// Evaluates `rules` with the constructor settings.
    pub fn evaluate(&self, input: &InputMap, rules: &RuleSet) -> ValidatorResult<ValidationOutcome> {
        self.evaluate_with(input, rules, &Overrides::none())
    }

    /// Evaluates `rules`, applying per-call `overrides` on top of the
    /// constructor settings.
    ///
    /// Fields are visited in rule order. A field absent from `input` (or
    /// null) fails only when it carries the `required` marker, and its checks
    /// are skipped. Unknown checks are recorded as failures. Errors are
    /// returned only for a misconfigured engine: a missing message template
    /// or a fallible predicate that gave up.
    pub fn evaluate_with(
        &self,
        input: &InputMap,
        rules: &RuleSet,
        overrides: &Overrides,
    ) -> ValidatorResult<ValidationOutcome> {
        let config = self.config.apply(overrides);
        let _span = tracing::info_span!(
            "evaluate",
            fields = rules.len(),
            collect_all = config.collect_all_errors,
            language = %config.language,
        )
        .entered();

        let mut pass = Pass::new(self, config);
        let flow = pass.run(input, rules)?;
        let outcome = pass.finish();
        tracing::debug!(
            valid = outcome.is_valid(),
            failures = outcome.failures().len(),
            stopped_early = flow.is_break(),
            "evaluation finished"
        );
        Ok(outcome)
    }

    /// Resolves `name` through `source` and evaluates the result.
    ///
    /// An unknown name yields an invalid outcome with a single
    /// `RuleSetNotFound` failure on the `Method` field.
    pub fn evaluate_named(
        &self,
        input: &InputMap,
        name: &str,
        source: &dyn RuleSource,
        overrides: &Overrides,
    ) -> ValidatorResult<ValidationOutcome> {
        if let Some(rules) = source.lookup(name)? {
            tracing::debug!(name, fields = rules.len(), "rule set resolved");
            return self.evaluate_with(input, &rules, overrides);
        }

        tracing::debug!(name, "rule set not found");
        let not_found = ValidationOutcome::rule_set_not_found(name);
        let mut pass = Pass::new(self, self.config.apply(overrides));
        for failure in not_found.failures() {
            pass.notify(&failure.message, &failure.field);
        }
        pass.merge(not_found);
        Ok(pass.finish())
    }

    /// Rejects rule sets that reference checks the provider cannot resolve.
    ///
    /// Evaluation never calls this; it exists for callers that want unknown
    /// identifiers caught when the rule set is built rather than reported as
    /// `method` failures later.
    pub fn verify_rules(&self, rules: &RuleSet) -> ValidatorResult<()> {
        let unknown: Vec<(String, String)> = rules
            .iter()
            .flat_map(|(field, checks)| checks.iter().map(move |check| (field, check)))
            .filter(|(_, check)| !check.is_required())
            .filter(|(_, check)| self.predicates.predicate(check.as_str()).is_none())
            .map(|(field, check)| (field.to_owned(), check.as_str().to_owned()))
            .collect();

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(ValidatorError::UnknownChecks(unknown))
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("config", &self.config)
            .field("languages", &self.catalog.languages().collect::<Vec<_>>())
            .field("checks", &self.predicates.names().len())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`Validator`].
///
/// Unset pieces fall back to the built-ins: [`MessageCatalog::builtin`],
/// an empty [`RenameTable`], [`BuiltinPredicates`] and a stdout
/// [`JsonReporter`].
#[derive(Default)]
pub struct ValidatorBuilder {
    config: ValidationConfig,
    catalog: Option<Arc<MessageCatalog>>,
    renames: Option<RenameTable>,
    predicates: Option<Arc<dyn PredicateProvider>>,
    reporter: Option<Arc<dyn FailureReporter>>,
}

impl ValidatorBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every setting at once.
    #[must_use = "builder methods must be chained or built"]
    pub fn config(mut self, config: ValidationConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn print_field(mut self, enabled: bool) -> Self {
        self.config.print_field = enabled;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn print_value(mut self, enabled: bool) -> Self {
        self.config.print_value = enabled;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn collect_all_errors(mut self, enabled: bool) -> Self {
        self.config.collect_all_errors = enabled;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn invoke_callback(mut self, enabled: bool) -> Self {
        self.config.invoke_callback = enabled;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn include_fields(mut self, enabled: bool) -> Self {
        self.config.include_fields = enabled;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn catalog(mut self, catalog: impl Into<Arc<MessageCatalog>>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn renames(mut self, renames: RenameTable) -> Self {
        self.renames = Some(renames);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn predicates(mut self, provider: impl PredicateProvider + 'static) -> Self {
        self.predicates = Some(Arc::new(provider));
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn shared_predicates(mut self, provider: Arc<dyn PredicateProvider>) -> Self {
        self.predicates = Some(provider);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn reporter(mut self, reporter: impl FailureReporter + 'static) -> Self {
        self.reporter = Some(Arc::new(reporter));
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn shared_reporter(mut self, reporter: Arc<dyn FailureReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Builds the validator.
    ///
    /// # Errors
    ///
    /// Fails when the message catalog lacks the fallback language or any
    /// template kind.
    pub fn build(self) -> ValidatorResult<Validator> {
        let catalog = self.catalog.unwrap_or_else(MessageCatalog::shared_builtin);
        catalog.verify()?;

        let validator = Validator {
            config: self.config,
            catalog,
            renames: Arc::new(self.renames.unwrap_or_default()),
            predicates: self
                .predicates
                .unwrap_or_else(|| Arc::new(BuiltinPredicates)),
            reporter: self
                .reporter
                .unwrap_or_else(|| Arc::new(JsonReporter::stdout())),
        };
        tracing::debug!(?validator, "validator built");
        Ok(validator)
    }
}

impl fmt::Debug for ValidatorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorBuilder")
            .field("config", &self.config)
            .field("custom_catalog", &self.catalog.is_some())
            .field("custom_predicates", &self.predicates.is_some())
            .field("custom_reporter", &self.reporter.is_some())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================
