//! Reading TOML / JSON documents from disk.
//!
//! Catalogs, rename tables and rule providers share one loader so the
//! extension → format decision lives in a single place.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::core::{ValidatorError, ValidatorResult};

/// Serialization format of a document on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
}

impl DocumentFormat {
    /// Picks a format from the file extension, case-insensitively.
    ///
    /// Returns `None` for anything other than `.toml` / `.json`.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Parses `text` in this format.
    pub fn parse<T: DeserializeOwned>(self, path: &Path, text: &str) -> ValidatorResult<T> {
        match self {
            Self::Toml => toml::from_str(text).map_err(|e| ValidatorError::provider(path, e)),
            Self::Json => serde_json::from_str(text).map_err(|e| ValidatorError::provider(path, e)),
        }
    }
}

/// Reads and parses a document, choosing the format by extension.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> ValidatorResult<T> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| {
        ValidatorError::provider(path, "unsupported extension (expected .toml or .json)")
    })?;
    let text = std::fs::read_to_string(path).map_err(|e| ValidatorError::io(path, e))?;
    format.parse(path, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/rules.TOML")),
            Some(DocumentFormat::Toml)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("rules.json")),
            Some(DocumentFormat::Json)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("rules.yaml")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("rules")), None);
    }

    #[test]
    fn read_document_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = read_document::<BTreeMap<String, String>>(&path).unwrap_err();
        assert!(matches!(err, ValidatorError::Provider { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn read_document_reports_missing_file() {
        let err = read_document::<BTreeMap<String, String>>(Path::new("/nonexistent/x.toml"))
            .unwrap_err();
        assert!(matches!(err, ValidatorError::Io { .. }));
    }
}
