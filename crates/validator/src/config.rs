//! Per-pass validation settings.
//!
//! A [`ValidationConfig`] is fixed when a [`Validator`](crate::engine::Validator)
//! is built; every call may override individual switches through
//! [`Overrides`]. An unset override keeps the constructor value.

use serde::{Deserialize, Serialize};

use crate::messages::DEFAULT_LANGUAGE;

/// Settings applied to one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Language code for messages.
    pub language: String,
    /// Quote the field name in messages (`'email'`) instead of printing it bare.
    pub print_field: bool,
    /// Append the offending value to messages.
    pub print_value: bool,
    /// Keep evaluating after the first failure.
    pub collect_all_errors: bool,
    /// Hand every failure to the configured reporter.
    pub invoke_callback: bool,
    /// Include the failing field names in the returned payload.
    pub include_fields: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_owned(),
            print_field: true,
            print_value: false,
            collect_all_errors: false,
            invoke_callback: false,
            include_fields: false,
        }
    }
}

impl ValidationConfig {
    /// Returns the effective config for one call.
    #[must_use]
    pub fn apply(&self, overrides: &Overrides) -> Self {
        Self {
            language: overrides
                .language
                .clone()
                .unwrap_or_else(|| self.language.clone()),
            print_field: overrides.print_field.unwrap_or(self.print_field),
            print_value: overrides.print_value.unwrap_or(self.print_value),
            collect_all_errors: overrides
                .collect_all_errors
                .unwrap_or(self.collect_all_errors),
            invoke_callback: overrides.invoke_callback.unwrap_or(self.invoke_callback),
            include_fields: overrides.include_fields.unwrap_or(self.include_fields),
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_print_field(mut self, enabled: bool) -> Self {
        self.print_field = enabled;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_print_value(mut self, enabled: bool) -> Self {
        self.print_value = enabled;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_collect_all_errors(mut self, enabled: bool) -> Self {
        self.collect_all_errors = enabled;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_invoke_callback(mut self, enabled: bool) -> Self {
        self.invoke_callback = enabled;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_include_fields(mut self, enabled: bool) -> Self {
        self.include_fields = enabled;
        self
    }
}

/// Per-call overrides. `None` keeps the constructor setting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Overrides {
    pub language: Option<String>,
    pub print_field: Option<bool>,
    pub print_value: Option<bool>,
    pub collect_all_errors: Option<bool>,
    pub invoke_callback: Option<bool>,
    pub include_fields: Option<bool>,
}

impl Overrides {
    /// No overrides.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn print_field(mut self, enabled: bool) -> Self {
        self.print_field = Some(enabled);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn print_value(mut self, enabled: bool) -> Self {
        self.print_value = Some(enabled);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn collect_all_errors(mut self, enabled: bool) -> Self {
        self.collect_all_errors = Some(enabled);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn invoke_callback(mut self, enabled: bool) -> Self {
        self.invoke_callback = Some(enabled);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn include_fields(mut self, enabled: bool) -> Self {
        self.include_fields = Some(enabled);
        self
    }
}
