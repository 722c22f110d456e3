//! Layered settings: defaults → TOML file → `FIELDWARD_*` env → flags.

use std::path::{Path, PathBuf};

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use fieldward_log::Format as LogFormat;
use fieldward_validator::config::ValidationConfig;
use serde::{Deserialize, Serialize};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "fieldward.toml";

/// Environment prefix for settings.
pub const ENV_PREFIX: &str = "FIELDWARD_";

/// `FIELDWARD_*` variables owned by `fieldward-log` or clap, not by settings.
const FOREIGN_ENV_KEYS: &[&str] = &[
    "log",
    "log_format",
    "log_time",
    "log_colors",
    "log_source",
    "log_target",
    "config",
];

/// Effective CLI settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(flatten)]
    pub validation: ValidationConfig,
    /// Provider directory used by `named` and `providers`.
    pub providers: Option<PathBuf>,
    /// Namespace given to discovered providers.
    pub namespace: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}

/// Values set on the command line. Unset flags leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FlagOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_all_errors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_field: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_fields: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoke_callback: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub providers: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_format: Option<LogFormat>,
}

impl Settings {
    /// Loads settings from every layer.
    ///
    /// An explicit `config` path must exist; the default file is optional.
    pub fn load(config: Option<&Path>, flags: &FlagOverrides) -> anyhow::Result<Self> {
        Self::figment(config, flags)?
            .extract()
            .context("invalid configuration")
    }

    fn figment(config: Option<&Path>, flags: &FlagOverrides) -> anyhow::Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));

        match config {
            Some(path) => {
                anyhow::ensure!(path.is_file(), "config file {} not found", path.display());
                figment = figment.merge(Toml::file(path));
            }
            None => figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
        }

        Ok(figment
            .merge(Env::prefixed(ENV_PREFIX).ignore(FOREIGN_ENV_KEYS))
            .merge(Serialized::defaults(flags)))
    }
}
