//! Core error types shared by every module.
//!
//! The engine separates two failure worlds:
//!
//! - **Data failures**: a required field is missing, a predicate rejects a
//!   value, a rule references an unknown check, a named rule set cannot be
//!   found. These are recorded in the
//!   [`ValidationOutcome`](crate::outcome::ValidationOutcome) and returned
//!   normally.
//! - **Configuration failures**: the message catalog is malformed, a rule
//!   provider cannot be parsed, a predicate cannot decide. These are
//!   [`ValidatorError`]s and abort the call.
//!
//! ```rust,ignore
//! use fieldward_validator::core::ValidatorError;
//!
//! match validator.evaluate(&input, &rules) {
//!     Ok(outcome) if outcome.is_valid() => {}
//!     Ok(outcome) => eprintln!("{:?}", outcome.messages()),
//!     Err(ValidatorError::MissingTemplate { language, kind }) => panic!("{language}/{kind}"),
//!     Err(other) => return Err(other),
//! }
//! ```

pub mod error;

pub use error::{PredicateError, ValidatorError, ValidatorResult};
