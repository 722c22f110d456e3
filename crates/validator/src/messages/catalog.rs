//! Message templates per language, plus field display names.

use std::fmt;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{ValidatorError, ValidatorResult};
use crate::document::read_document;

/// Language used when the requested one is not in the catalog.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Placeholder replaced by the (possibly renamed) field name.
pub const FIELD_PLACEHOLDER: &str = ":field";

// ============================================================================
// TEMPLATE KIND
// ============================================================================

/// Which template a failure is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// Field is mandatory but absent.
    Required,
    /// Field is present but a check rejected it.
    Field,
    /// Rule references a check nobody provides.
    Method,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [Self::Required, Self::Field, Self::Method];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Field => "field",
            Self::Method => "method",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// LANGUAGE MESSAGES
// ============================================================================

/// Templates for one language.
///
/// Every field is optional on disk so an incomplete catalog can be loaded
/// and then rejected by [`MessageCatalog::verify`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageMessages {
    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    method: Option<String>,
}

impl LanguageMessages {
    /// Creates a complete set of templates.
    pub fn new(
        required: impl Into<String>,
        field: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            required: Some(required.into()),
            field: Some(field.into()),
            method: Some(method.into()),
        }
    }

    /// Sets a single template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, kind: TemplateKind, template: impl Into<String>) -> Self {
        *self.slot(kind) = Some(template.into());
        self
    }

    #[must_use]
    pub fn template(&self, kind: TemplateKind) -> Option<&str> {
        match kind {
            TemplateKind::Required => self.required.as_deref(),
            TemplateKind::Field => self.field.as_deref(),
            TemplateKind::Method => self.method.as_deref(),
        }
    }

    fn slot(&mut self, kind: TemplateKind) -> &mut Option<String> {
        match kind {
            TemplateKind::Required => &mut self.required,
            TemplateKind::Field => &mut self.field,
            TemplateKind::Method => &mut self.method,
        }
    }
}

// ============================================================================
// CATALOG
// ============================================================================

const BUILTIN_MESSAGES: &[(&str, [&str; 3])] = &[
    (
        "en",
        [
            "Field :field does not exist",
            "Field :field contains wrong data",
            "Method :field doesn't exist",
        ],
    ),
    (
        "it",
        [
            "Campo :field non esiste",
            "Campo :field contiene dati errati",
            "Metodo :field non esiste",
        ],
    ),
    (
        "es",
        [
            "Campo :field no existe",
            "Campo :field contiene datos incorrectos",
            "Método :field no existe",
        ],
    ),
    (
        "de",
        [
            "Feld :field existiert nicht",
            "Feld :field enthält falsche Daten",
            "Methode :field existiert nicht",
        ],
    ),
    (
        "fr",
        [
            "Champ :field n'existe pas",
            "Champ :field contient des données incorrectes",
            "Méthode :field n'existe pas",
        ],
    ),
    (
        "ru",
        [
            "Поле :field не существует",
            "Поле :field содержит неверные данные",
            "Метод :field не существует",
        ],
    ),
];

static BUILTIN_CATALOG: LazyLock<Arc<MessageCatalog>> =
    LazyLock::new(|| Arc::new(MessageCatalog::builtin()));

/// Language code → [`LanguageMessages`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    languages: IndexMap<String, LanguageMessages>,
}

impl MessageCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the built-in `en`, `it`, `es`, `de`, `fr`, `ru` messages.
    #[must_use]
    pub fn builtin() -> Self {
        let languages = BUILTIN_MESSAGES
            .iter()
            .map(|(code, [required, field, method])| {
                (
                    (*code).to_owned(),
                    LanguageMessages::new(*required, *field, *method),
                )
            })
            .collect();
        Self { languages }
    }

    /// Shared handle to the built-in catalog.
    #[must_use]
    pub fn shared_builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN_CATALOG)
    }

    /// Loads a catalog from a `.toml` or `.json` file.
    pub fn from_path(path: &Path) -> ValidatorResult<Self> {
        read_document(path)
    }

    /// Adds or replaces a language. Codes are stored lowercased.
    pub fn insert(&mut self, code: impl AsRef<str>, messages: LanguageMessages) {
        self.languages
            .insert(code.as_ref().to_lowercase(), messages);
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_language(mut self, code: impl AsRef<str>, messages: LanguageMessages) -> Self {
        self.insert(code, messages);
        self
    }

    /// Resolves a language code: lowercased lookup, then [`DEFAULT_LANGUAGE`].
    ///
    /// Returns the code that was actually used together with its messages.
    pub fn resolve(&self, language: &str) -> ValidatorResult<(&str, &LanguageMessages)> {
        let wanted = language.to_lowercase();
        self.languages
            .get_key_value(wanted.as_str())
            .or_else(|| self.languages.get_key_value(DEFAULT_LANGUAGE))
            .map(|(code, messages)| (code.as_str(), messages))
            .ok_or(ValidatorError::MissingLanguage {
                language: wanted,
                fallback: DEFAULT_LANGUAGE.to_owned(),
            })
    }

    /// Looks up one template after resolving the language.
    pub fn template(&self, language: &str, kind: TemplateKind) -> ValidatorResult<(&str, &str)> {
        let (code, messages) = self.resolve(language)?;
        let template = messages
            .template(kind)
            .ok_or_else(|| ValidatorError::MissingTemplate {
                language: code.to_owned(),
                kind,
            })?;
        Ok((code, template))
    }

    /// Checks that the fallback language exists and every language has
    /// every template kind.
    pub fn verify(&self) -> ValidatorResult<()> {
        if !self.languages.contains_key(DEFAULT_LANGUAGE) {
            return Err(ValidatorError::MissingLanguage {
                language: DEFAULT_LANGUAGE.to_owned(),
                fallback: DEFAULT_LANGUAGE.to_owned(),
            });
        }
        for (code, messages) in &self.languages {
            if let Some(kind) = TemplateKind::ALL
                .into_iter()
                .find(|kind| messages.template(*kind).is_none())
            {
                return Err(ValidatorError::MissingTemplate {
                    language: code.clone(),
                    kind,
                });
            }
        }
        Ok(())
    }

    /// Language codes in insertion order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }
}

// ============================================================================
// RENAME TABLE
// ============================================================================

/// Per-language display names for fields.
///
/// ```toml
/// [en]
/// first_name = "First name"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenameTable {
    languages: IndexMap<String, IndexMap<String, String>>,
}

impl RenameTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a rename table from a `.toml` or `.json` file.
    pub fn from_path(path: &Path) -> ValidatorResult<Self> {
        read_document(path)
    }

    /// Adds a display name for `field` in `language`.
    pub fn insert(
        &mut self,
        language: impl AsRef<str>,
        field: impl Into<String>,
        display: impl Into<String>,
    ) {
        self.languages
            .entry(language.as_ref().to_lowercase())
            .or_default()
            .insert(field.into(), display.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use = "builder methods must be chained or built"]
    pub fn with(
        mut self,
        language: impl AsRef<str>,
        field: impl Into<String>,
        display: impl Into<String>,
    ) -> Self {
        self.insert(language, field, display);
        self
    }

    /// Display name for `field`, or `field` itself when no rename exists.
    #[must_use]
    pub fn display_name<'a>(&'a self, language: &str, field: &'a str) -> &'a str {
        self.languages
            .get(language)
            .and_then(|names| names.get(field))
            .map_or(field, String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.values().all(IndexMap::is_empty)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_complete() {
        let catalog = MessageCatalog::builtin();
        catalog.verify().unwrap();
        let codes: Vec<_> = catalog.languages().collect();
        assert_eq!(codes, ["en", "it", "es", "de", "fr", "ru"]);
    }

    #[test]
    fn resolve_lowercases_and_falls_back() {
        let catalog = MessageCatalog::builtin();
        assert_eq!(catalog.resolve("DE").unwrap().0, "de");
        assert_eq!(catalog.resolve("pt").unwrap().0, "en");
    }

    #[test]
    fn resolve_without_fallback_fails() {
        let catalog = MessageCatalog::new()
            .with_language("de", LanguageMessages::new("a :field", "b :field", "c :field"));
        let err = catalog.resolve("pt").unwrap_err();
        assert!(matches!(err, ValidatorError::MissingLanguage { .. }));
        assert!(catalog.verify().is_err());
    }

    #[test]
    fn missing_template_is_a_configuration_error() {
        let partial = LanguageMessages::default()
            .with(TemplateKind::Required, "Field :field missing")
            .with(TemplateKind::Field, "Field :field wrong");
        let catalog = MessageCatalog::new().with_language("en", partial);

        assert!(catalog.template("en", TemplateKind::Field).is_ok());
        let err = catalog.template("en", TemplateKind::Method).unwrap_err();
        assert!(matches!(
            err,
            ValidatorError::MissingTemplate {
                kind: TemplateKind::Method,
                ..
            }
        ));
        assert!(catalog.verify().is_err());
    }

    #[test]
    fn catalog_deserializes_from_toml() {
        let catalog: MessageCatalog = toml::from_str(
            r#"
            [en]
            required = "Missing :field"
            field = "Bad :field"
            method = "No check for :field"
            "#,
        )
        .unwrap();
        catalog.verify().unwrap();
        assert_eq!(
            catalog.template("EN", TemplateKind::Field).unwrap(),
            ("en", "Bad :field")
        );
    }

    #[test]
    fn rename_table_falls_back_to_field() {
        let renames = RenameTable::new().with("en", "name", "NAME");
        assert_eq!(renames.display_name("en", "name"), "NAME");
        assert_eq!(renames.display_name("en", "time"), "time");
        assert_eq!(renames.display_name("de", "name"), "name");
        assert!(!renames.is_empty());
        assert!(RenameTable::new().is_empty());
    }
}
