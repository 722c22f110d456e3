//! # fieldward-validator
//!
//! Rule-driven validation of flat field maps with localized error messages.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldward_validator::prelude::*;
//!
//! let validator = Validator::new();
//! let input = input_map([("email", "ann@example.com"), ("phone", "+4915112345678")]);
//! let rules = rule_set! {
//!     "email" => [required, "email"],
//!     "phone" => [Check::Phone],
//! };
//!
//! let outcome = validator.evaluate(&input, &rules).unwrap();
//! assert!(outcome.is_valid());
//! ```
//!
//! ## Pieces
//!
//! - [`rules`]: [`RuleSet`](rules::RuleSet), [`CheckRef`](rules::CheckRef) and the
//!   [`rule_set!`] macro
//! - [`predicates`]: the built-in [`Check`](predicates::Check)s and custom
//!   [`PredicateTable`](predicates::PredicateTable)s
//! - [`messages`]: per-language templates, field renames, message formatting
//! - [`engine`]: the [`Validator`](engine::Validator) and its builder
//! - [`resolver`]: rule sets looked up by name, from a
//!   [`RuleRegistry`](resolver::RuleRegistry) or a
//!   [`ProviderDirectory`](resolver::ProviderDirectory)
//! - [`reporter`]: what happens to failures when callbacks are enabled
//! - [`facade`]: one-call entry points returning `(valid, payload)`
//!
//! Validation failures are data, returned in a
//! [`ValidationOutcome`](outcome::ValidationOutcome). Only a misconfigured
//! engine produces a [`ValidatorError`].

pub mod config;
pub mod core;
pub mod document;
pub mod engine;
pub mod facade;
pub mod messages;
pub mod outcome;
pub mod predicates;
pub mod prelude;
pub mod reporter;
pub mod resolver;
pub mod rules;
pub mod value;

pub use crate::core::{ValidatorError, ValidatorResult};
pub use crate::engine::{Validator, ValidatorBuilder};
pub use crate::outcome::{ErrorPayload, ValidationOutcome};
