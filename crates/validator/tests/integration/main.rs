//! Integration tests for fieldward-validator.

mod like_fields;
mod messages;
mod reporting;
mod resolution;
mod scenarios;

use std::sync::Arc;

use fieldward_validator::prelude::*;

/// Validator that buffers reports, with callbacks enabled.
pub fn collecting_validator() -> (Arc<CollectingReporter>, Validator) {
    let reporter = Arc::new(CollectingReporter::new());
    let validator = Validator::builder()
        .invoke_callback(true)
        .shared_reporter(reporter.clone())
        .build()
        .unwrap();
    (reporter, validator)
}
