//! Rendering a single failure message.

use std::sync::LazyLock;

use regex::Regex;

use super::catalog::{FIELD_PLACEHOLDER, MessageCatalog, RenameTable, TemplateKind};
use crate::core::ValidatorResult;
use crate::value::FieldValue;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Presentation switches for one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageStyle<'a> {
    /// Requested language code (resolved against the catalog).
    pub language: &'a str,
    /// Quote the field name (`'name'`) instead of printing it bare.
    pub print_field: bool,
    /// Append `: <value>` to the message. Ignored for absent / null values.
    pub print_value: bool,
}

/// Renders messages from a catalog and a rename table.
#[derive(Debug, Clone, Copy)]
pub struct MessageFormatter<'a> {
    catalog: &'a MessageCatalog,
    renames: &'a RenameTable,
}

impl<'a> MessageFormatter<'a> {
    #[must_use]
    pub const fn new(catalog: &'a MessageCatalog, renames: &'a RenameTable) -> Self {
        Self { catalog, renames }
    }

    /// Renders the `kind` template for `field`.
    ///
    /// Fails only when the catalog cannot supply the template.
    pub fn format(
        &self,
        field: &str,
        value: Option<&FieldValue>,
        kind: TemplateKind,
        style: MessageStyle<'_>,
    ) -> ValidatorResult<String> {
        let (language, template) = self.catalog.template(style.language, kind)?;
        let display = self.renames.display_name(language, field);

        let value = value.filter(|v| !v.is_null());
        let print_value = style.print_value && value.is_some();

        let name = if style.print_field {
            format!("'{display}'")
        } else {
            display.to_owned()
        };
        let mut message = template.replace(FIELD_PLACEHOLDER, &name);

        // separator attaches to the last word, never to template padding
        if let Some(value) = value.filter(|_| print_value) {
            message.truncate(message.trim_end().len());
            message.push_str(": ");
            message.push_str(&value.to_text());
        }

        Ok(WHITESPACE_RUN.replace_all(&message, " ").into_owned())
    }
}

/// One-shot form of [`MessageFormatter::format`].
pub fn format_message(
    catalog: &MessageCatalog,
    renames: &RenameTable,
    field: &str,
    value: Option<&FieldValue>,
    kind: TemplateKind,
    style: MessageStyle<'_>,
) -> ValidatorResult<String> {
    MessageFormatter::new(catalog, renames).format(field, value, kind, style)
}
