//! Applying one rule to every input key sharing a prefix.

use super::Validator;
use super::pass::Pass;
use crate::config::Overrides;
use crate::core::ValidatorResult;
use crate::outcome::ValidationOutcome;
use crate::rules::RuleSet;
use crate::value::InputMap;

/// `true` when `key` starts with `prefix`, ignoring case.
pub(crate) fn matches_prefix(key: &str, prefix: &str) -> bool {
    key.to_lowercase().starts_with(&prefix.to_lowercase())
}

impl Validator {
    /// Evaluates `prefix_rules` against every input key that starts with a
    /// rule's key, case-insensitively.
    ///
    /// Each matched key is evaluated on its own: fail-fast stops the checks
    /// of that key only, and a prefix nothing matches is not an error.
    /// Rule order is preserved; within a rule, keys are visited in input order.
    pub fn evaluate_like_fields(
        &self,
        input: &InputMap,
        prefix_rules: &RuleSet,
        overrides: &Overrides,
    ) -> ValidatorResult<ValidationOutcome> {
        let config = self.config.apply(overrides);
        let _span = tracing::info_span!(
            "evaluate_like_fields",
            prefixes = prefix_rules.len(),
            inputs = input.len(),
        )
        .entered();

        let mut pass = Pass::new(self, config);
        for (prefix, checks) in prefix_rules {
            let mut matched = 0usize;
            for key in input.keys().filter(|key| matches_prefix(key, prefix)) {
                matched += 1;
                // per-key fail-fast; other keys are still evaluated
                let _ = pass.field(key, checks, input)?;
            }
            tracing::debug!(prefix, matched, "prefix expanded");
        }
        Ok(pass.finish())
    }
}
