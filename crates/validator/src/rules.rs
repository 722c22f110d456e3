//! Rule sets: which checks apply to which field.
//!
//! A [`RuleSet`] maps field names to an ordered list of [`CheckRef`]s. Both
//! orders matter: fields are visited in insertion order and, under the
//! fail-fast policy, the first failing check is the only one reported.
//!
//! ```rust
//! use fieldward_validator::rule_set;
//! use fieldward_validator::rules::CheckRef;
//!
//! let rules = rule_set! {
//!     "email" => [required, "email"],
//!     "phone" => ["phone"],
//! };
//! assert_eq!(rules.len(), 2);
//! assert!(rules.get("email").unwrap()[0].is_required());
//! assert_eq!(rules.get("phone").unwrap(), &[CheckRef::from("phone")]);
//! ```

use std::borrow::{Borrow, Cow};
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::predicates::Check;

/// Reserved identifier marking a field as mandatory.
pub const REQUIRED: &str = "required";

// ============================================================================
// CHECK REF
// ============================================================================

/// Identifier of a check, or the [`REQUIRED`] sentinel.
///
/// Equality is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckRef(Cow<'static, str>);

impl CheckRef {
    /// The `required` sentinel.
    pub const REQUIRED: CheckRef = CheckRef(Cow::Borrowed(REQUIRED));

    /// Creates a reference from any identifier.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Returns the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the `required` sentinel.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.0 == REQUIRED
    }
}

impl fmt::Display for CheckRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CheckRef {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for CheckRef {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl From<String> for CheckRef {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl From<Check> for CheckRef {
    fn from(check: Check) -> Self {
        Self(Cow::Borrowed(check.as_str()))
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// Ordered map from field name to the checks applied to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    fields: IndexMap<String, Vec<CheckRef>>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends checks for a field, replacing any existing entry.
    pub fn insert<I, C>(&mut self, field: impl Into<String>, checks: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<CheckRef>,
    {
        self.fields
            .insert(field.into(), checks.into_iter().map(Into::into).collect());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use = "builder methods must be chained or built"]
    pub fn field<I, C>(mut self, field: impl Into<String>, checks: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CheckRef>,
    {
        self.insert(field, checks);
        self
    }

    /// Checks for one field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[CheckRef]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Iterates `(field, checks)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CheckRef])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, I, C> FromIterator<(K, I)> for RuleSet
where
    K: Into<String>,
    I: IntoIterator<Item = C>,
    C: Into<CheckRef>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut rules = Self::new();
        for (field, checks) in iter {
            rules.insert(field, checks);
        }
        rules
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = (&'a String, &'a Vec<CheckRef>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<CheckRef>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

// ============================================================================
// MACRO
// ============================================================================

/// Builds a [`RuleSet`] inline.
///
/// Each check is either the bare `required` keyword or any expression
/// convertible into a [`CheckRef`] (string literals, [`Check`] variants).
///
/// ```rust
/// use fieldward_validator::rule_set;
/// use fieldward_validator::predicates::Check;
///
/// let rules = rule_set! {
///     "time" => [required, Check::Time],
///     "note" => [],
/// };
/// assert_eq!(rules.get("note").unwrap().len(), 0);
/// ```
#[macro_export]
macro_rules! rule_set {
    // ── check list muncher ────────────────────────────────────────────────
    (@checks [ $( $done:expr ),* ]) => {{
        let checks: ::std::vec::Vec<$crate::rules::CheckRef> = ::std::vec![ $( $done ),* ];
        checks
    }};
    (@checks [ $( $done:expr ),* ] required $( , $( $rest:tt )* )? ) => {
        $crate::rule_set!(@checks [ $( $done, )* $crate::rules::CheckRef::REQUIRED ] $( $( $rest )* )?)
    };
    (@checks [ $( $done:expr ),* ] $head:expr $( , $( $rest:tt )* )? ) => {
        $crate::rule_set!(@checks [ $( $done, )* $crate::rules::CheckRef::from($head) ] $( $( $rest )* )?)
    };

    () => { $crate::rules::RuleSet::new() };
    ( $( $field:expr => [ $( $check:tt )* ] ),+ $(,)? ) => {{
        let mut rules = $crate::rules::RuleSet::new();
        $(
            rules.insert(
                $field,
                $crate::rule_set!(@checks [] $( $check )*),
            );
        )+
        rules
    }};
}

// ============================================================================
// TESTS
// ============================================================================
