//! Rule-set resolution by name.
//!
//! A [`RuleSource`] maps a symbolic name to a [`RuleSet`]. Two sources ship
//! with the crate:
//!
//! - [`RuleRegistry`]: names registered up front, duplicates rejected.
//! - [`ProviderDirectory`]: a directory of `.toml` / `.json` provider files,
//!   rescanned on every lookup.
//!
//! [`Validator::evaluate_named`](crate::engine::Validator::evaluate_named)
//! turns a miss into a `RuleSetNotFound` failure.

mod directory;
mod lists;
mod registry;

pub use directory::{DEFAULT_NAMESPACE, DEFAULT_PROVIDER_DIR, ProviderDirectory, RuleProviderDescriptor};
pub use registry::{RuleFactory, RuleRegistry};

use crate::core::ValidatorResult;
use crate::rules::RuleSet;

/// Something that can produce rule sets by name.
pub trait RuleSource: Send + Sync {
    /// Returns the rule set registered under `name`, matched case-sensitively.
    ///
    /// `Ok(None)` means nobody provides it. `Err` is reserved for a source
    /// that cannot be read at all.
    fn lookup(&self, name: &str) -> ValidatorResult<Option<RuleSet>>;

    /// Every name this source can resolve.
    fn names(&self) -> ValidatorResult<Vec<String>>;
}

impl<S: RuleSource + ?Sized> RuleSource for &S {
    fn lookup(&self, name: &str) -> ValidatorResult<Option<RuleSet>> {
        (**self).lookup(name)
    }

    fn names(&self) -> ValidatorResult<Vec<String>> {
        (**self).names()
    }
}
