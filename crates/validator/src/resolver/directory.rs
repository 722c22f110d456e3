//! Rule providers discovered on disk.
//!
//! Every `.toml` / `.json` file under the root is a provider. A provider is
//! a table of rule-set names to rule sets:
//!
//! ```toml
//! [TimeValidator]
//! time = ["required", "time"]
//!
//! [DateValidator]
//! date = ["required", "date_time"]
//! ```
//!
//! Nothing is cached: each lookup rescans the directory.
//!
//! The namespace is a label: every file gets the configured namespace,
//! extended by its subdirectories (`lists::admin`). An unqualified name is
//! searched in every provider. A qualified name (`lists::admin::Signup` or
//! `lists::admin::extra::Signup`) is searched only in providers under that
//! namespace or with that qualified name, so a wrong namespace resolves to
//! nothing.

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use super::RuleSource;
use crate::core::{ValidatorError, ValidatorResult};
use crate::document::{DocumentFormat, read_document};
use crate::rules::RuleSet;

/// Directory scanned when none is configured.
pub const DEFAULT_PROVIDER_DIR: &str = "lists";

/// Namespace given to providers when none is configured.
pub const DEFAULT_NAMESPACE: &str = "lists";

/// Separator between namespace segments.
const NAMESPACE_SEPARATOR: &str = "::";

// ============================================================================
// DESCRIPTOR
// ============================================================================

/// One provider file found by a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleProviderDescriptor {
    /// Configured namespace, extended by the file's subdirectories.
    pub namespace: String,
    /// File name without extension.
    pub file_stem: String,
    pub path: PathBuf,
}

impl RuleProviderDescriptor {
    /// `namespace::file_stem`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}{NAMESPACE_SEPARATOR}{}", self.namespace, self.file_stem)
    }

    fn answers_to(&self, qualifier: &str) -> bool {
        self.namespace == qualifier || self.qualified_name() == qualifier
    }
}

/// Splits `a::b::Name` into `(Some("a::b"), "Name")`.
fn split_qualified(name: &str) -> (Option<&str>, &str) {
    match name.rsplit_once(NAMESPACE_SEPARATOR) {
        Some((qualifier, bare)) => (Some(qualifier), bare),
        None => (None, name),
    }
}

impl fmt::Display for RuleProviderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.qualified_name(), self.path.display())
    }
}

// ============================================================================
// DIRECTORY
// ============================================================================

/// A directory of rule-provider files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDirectory {
    root: PathBuf,
    namespace: String,
}

impl Default for ProviderDirectory {
    fn default() -> Self {
        Self::new(DEFAULT_PROVIDER_DIR)
    }
}

impl ProviderDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            namespace: DEFAULT_NAMESPACE.to_owned(),
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Lists provider files in sorted path order.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::Provider`] when the root or one of its entries
    /// cannot be read.
    pub fn descriptors(&self) -> ValidatorResult<Vec<RuleProviderDescriptor>> {
        let mut descriptors = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(self.root.as_path()).to_path_buf();
                ValidatorError::provider(path, e)
            })?;
            if !entry.file_type().is_file() || DocumentFormat::from_path(entry.path()).is_none() {
                continue;
            }
            descriptors.push(self.describe(entry.path()));
        }
        tracing::debug!(
            root = %self.root.display(),
            providers = descriptors.len(),
            "provider directory scanned"
        );
        Ok(descriptors)
    }

    /// Parses one provider file.
    pub fn load(descriptor: &RuleProviderDescriptor) -> ValidatorResult<IndexMap<String, RuleSet>> {
        read_document(&descriptor.path)
    }

    /// Every provider with the rule-set names it defines.
    pub fn scan(&self) -> ValidatorResult<Vec<(RuleProviderDescriptor, Vec<String>)>> {
        self.descriptors()?
            .into_iter()
            .map(|descriptor| {
                let names = Self::load(&descriptor)?.into_keys().collect();
                Ok((descriptor, names))
            })
            .collect()
    }

    fn describe(&self, path: &Path) -> RuleProviderDescriptor {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let mut namespace = self.namespace.clone();
        if let Some(parent) = relative.parent() {
            for segment in parent.iter() {
                namespace.push_str(NAMESPACE_SEPARATOR);
                namespace.push_str(&segment.to_string_lossy());
            }
        }
        RuleProviderDescriptor {
            namespace,
            file_stem: path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: path.to_path_buf(),
        }
    }
}

impl RuleSource for ProviderDirectory {
    /// First provider in sorted path order wins.
    ///
    /// Files after the winner are only read to warn about shadowed
    /// definitions; one that fails to parse is skipped. A name of the form
    /// `qualifier::Name` only matches providers whose namespace or
    /// qualified name equals `qualifier`.
    fn lookup(&self, name: &str) -> ValidatorResult<Option<RuleSet>> {
        let (qualifier, bare) = split_qualified(name);
        let mut descriptors = self
            .descriptors()?
            .into_iter()
            .filter(|descriptor| qualifier.is_none_or(|q| descriptor.answers_to(q)));

        let mut found = None;
        for descriptor in descriptors.by_ref() {
            if let Some(rules) = Self::load(&descriptor)?.shift_remove(bare) {
                tracing::debug!(name, provider = %descriptor, "rule set found");
                found = Some((descriptor, rules));
                break;
            }
        }
        let Some((winner, rules)) = found else {
            return Ok(None);
        };

        for descriptor in descriptors {
            match Self::load(&descriptor) {
                Ok(rule_sets) if rule_sets.contains_key(bare) => tracing::warn!(
                    name,
                    used = %winner,
                    shadowed = %descriptor,
                    "rule set defined by more than one provider"
                ),
                Ok(_) => {}
                Err(error) => tracing::warn!(
                    provider = %descriptor,
                    %error,
                    "skipping unreadable provider after match"
                ),
            }
        }
        Ok(Some(rules))
    }

    fn names(&self) -> ValidatorResult<Vec<String>> {
        let mut names: Vec<String> = Vec::new();
        for (_, defined) in self.scan()? {
            for name in defined {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        Ok(names)
    }
}
