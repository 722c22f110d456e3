//! Explicit name → rule-set factory registry.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use indexmap::map::Entry;

use super::{RuleSource, lists};
use crate::core::{ValidatorError, ValidatorResult};
use crate::rules::RuleSet;

/// Produces a fresh rule set on every call.
pub type RuleFactory = Arc<dyn Fn() -> RuleSet + Send + Sync>;

/// Rule sets registered by name at startup.
///
/// ```rust
/// use fieldward_validator::resolver::{RuleRegistry, RuleSource};
/// use fieldward_validator::rule_set;
///
/// let mut registry = RuleRegistry::new();
/// registry.register("Signup", || rule_set! { "email" => [required, "email"] }).unwrap();
///
/// assert!(registry.lookup("Signup").unwrap().is_some());
/// assert!(registry.lookup("signup").unwrap().is_none());
/// assert!(registry.register("Signup", Default::default).is_err());
/// ```
#[derive(Clone, Default)]
pub struct RuleRegistry {
    factories: IndexMap<String, RuleFactory>,
}

impl RuleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the sample rule sets `LeadValidator`,
    /// `TimeValidator`, `DateValidator` and `LoginValidator`.
    #[must_use]
    pub fn builtin() -> Self {
        let mut factories: IndexMap<String, RuleFactory> = IndexMap::new();
        factories.insert("LeadValidator".into(), Arc::new(lists::lead));
        factories.insert("TimeValidator".into(), Arc::new(lists::time));
        factories.insert("DateValidator".into(), Arc::new(lists::date));
        factories.insert("LoginValidator".into(), Arc::new(lists::login));
        Self { factories }
    }

    /// Registers a factory under `name`.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::DuplicateRuleSet`] when `name` is taken.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> ValidatorResult<()>
    where
        F: Fn() -> RuleSet + Send + Sync + 'static,
    {
        match self.factories.entry(name.into()) {
            Entry::Occupied(entry) => Err(ValidatorError::DuplicateRuleSet(entry.key().clone())),
            Entry::Vacant(entry) => {
                tracing::trace!(name = %entry.key(), "rule set registered");
                entry.insert(Arc::new(factory));
                Ok(())
            }
        }
    }

    /// Registers a fixed rule set under `name`.
    pub fn register_rules(&mut self, name: impl Into<String>, rules: RuleSet) -> ValidatorResult<()> {
        self.register(name, move || rules.clone())
    }

    /// Builder-style [`register`](Self::register).
    pub fn with<F>(mut self, name: impl Into<String>, factory: F) -> ValidatorResult<Self>
    where
        F: Fn() -> RuleSet + Send + Sync + 'static,
    {
        self.register(name, factory)?;
        Ok(self)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl RuleSource for RuleRegistry {
    fn lookup(&self, name: &str) -> ValidatorResult<Option<RuleSet>> {
        Ok(self.factories.get(name).map(|factory| factory()))
    }

    fn names(&self) -> ValidatorResult<Vec<String>> {
        Ok(self.factories.keys().cloned().collect())
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("names", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
