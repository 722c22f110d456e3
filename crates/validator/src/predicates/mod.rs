//! Predicate library
//!
//! A predicate is a pure function from a field value to a verdict. Rule sets
//! refer to predicates by identifier; a [`PredicateProvider`] turns an
//! identifier into a [`Predicate`] once per dispatch.
//!
//! # Providers
//!
//! - [`BuiltinPredicates`] - the closed [`Check`] enumeration, nothing else.
//! - [`PredicateTable`] - an explicit name → predicate table, seeded with the
//!   built-ins or empty, extended with custom closures.
//!
//! # Examples
//!
//! ```rust
//! use fieldward_validator::predicates::{PredicateProvider, PredicateTable};
//! use fieldward_validator::value::FieldValue;
//!
//! let table = PredicateTable::builtin()
//!     .with("even", |v: &FieldValue| v.to_text().parse::<i64>().is_ok_and(|n| n % 2 == 0));
//!
//! let even = table.predicate("even").unwrap();
//! assert!(even.test(&FieldValue::Int(4)).unwrap());
//! assert!(table.predicate("email").is_some());
//! assert!(table.predicate("nope").is_none());
//! ```

pub mod builtin;
mod check;

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

pub use check::{Check, UnknownCheck};

use crate::core::PredicateError;
use crate::value::FieldValue;

type CustomFn = dyn Fn(&FieldValue) -> Result<bool, PredicateError> + Send + Sync;

// ============================================================================
// PREDICATE
// ============================================================================

/// A resolved predicate, cheap to clone.
#[derive(Clone)]
pub struct Predicate {
    inner: PredicateKind,
}

#[derive(Clone)]
enum PredicateKind {
    Builtin(Check),
    Custom(Arc<CustomFn>),
}

impl Predicate {
    /// Wraps a built-in check.
    #[must_use]
    pub const fn builtin(check: Check) -> Self {
        Self {
            inner: PredicateKind::Builtin(check),
        }
    }

    /// Wraps a total custom function.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&FieldValue) -> bool + Send + Sync + 'static,
    {
        Self::fallible(move |value| Ok(f(value)))
    }

    /// Wraps a custom function that may fail to decide.
    ///
    /// An `Err` aborts the validation pass.
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&FieldValue) -> Result<bool, PredicateError> + Send + Sync + 'static,
    {
        Self {
            inner: PredicateKind::Custom(Arc::new(f)),
        }
    }

    /// Evaluates the predicate.
    pub fn test(&self, value: &FieldValue) -> Result<bool, PredicateError> {
        match &self.inner {
            PredicateKind::Builtin(check) => Ok(check.test(value)),
            PredicateKind::Custom(f) => f(value),
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            PredicateKind::Builtin(check) => f.debug_tuple("Predicate").field(check).finish(),
            PredicateKind::Custom(_) => f.write_str("Predicate(<custom>)"),
        }
    }
}

impl From<Check> for Predicate {
    fn from(check: Check) -> Self {
        Self::builtin(check)
    }
}

// ============================================================================
// PROVIDER
// ============================================================================

/// Resolves check identifiers to predicates.
pub trait PredicateProvider: Send + Sync {
    /// Looks up a predicate by its exact, case-sensitive identifier.
    fn predicate(&self, name: &str) -> Option<Predicate>;

    /// Identifiers this provider knows, for diagnostics.
    fn names(&self) -> Vec<String>;
}

/// Provider backed only by the [`Check`] enumeration.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinPredicates;

impl PredicateProvider for BuiltinPredicates {
    fn predicate(&self, name: &str) -> Option<Predicate> {
        name.parse::<Check>().ok().map(Predicate::builtin)
    }

    fn names(&self) -> Vec<String> {
        Check::ALL.iter().map(|c| c.as_str().to_owned()).collect()
    }
}

/// Explicit identifier → predicate table.
#[derive(Debug, Clone, Default)]
pub struct PredicateTable {
    entries: IndexMap<String, Predicate>,
}

impl PredicateTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding every built-in check and its aliases.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = Check::ALL
            .into_iter()
            .map(|check| (check.as_str(), check))
            .chain(Check::ALIASES)
            .map(|(name, check)| (name.to_owned(), Predicate::builtin(check)))
            .collect();
        Self { entries }
    }

    /// Inserts or replaces a predicate.
    pub fn insert(&mut self, name: impl Into<String>, predicate: impl Into<Predicate>) {
        self.entries.insert(name.into(), predicate.into());
    }

    /// Builder-style [`insert`](Self::insert) of a total closure.
    pub fn with<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&FieldValue) -> bool + Send + Sync + 'static,
    {
        self.insert(name, Predicate::from_fn(f));
        self
    }

    /// Builder-style [`insert`](Self::insert) of a fallible closure.
    pub fn with_fallible<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&FieldValue) -> Result<bool, PredicateError> + Send + Sync + 'static,
    {
        self.insert(name, Predicate::fallible(f));
        self
    }

    /// Removes a predicate, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<Predicate> {
        self.entries.shift_remove(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PredicateProvider for PredicateTable {
    fn predicate(&self, name: &str) -> Option<Predicate> {
        self.entries.get(name).cloned()
    }

    fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
