//! Configuration types
//!
//! - [`Config`]: filter, format, display switches
//! - `presets`: `development()`, `production()`, `from_env()`

mod presets;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter directive (e.g. `"info"`, `"fieldward_validator=trace,warn"`)
    pub level: String,

    /// Output format
    pub format: Format,

    /// Display configuration
    pub display: DisplayConfig,

    /// Service name recorded on a root span, if any
    pub service: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: Format::Compact,
            display: DisplayConfig::default(),
            service: None,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Human-readable, multi-line
    Pretty,
    /// Single-line
    #[default]
    Compact,
    /// Structured JSON, one object per line
    Json,
}

impl Format {
    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Format::Pretty => "pretty",
            Format::Compact => "compact",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Format::Pretty),
            "compact" => Ok(Format::Compact),
            "json" => Ok(Format::Json),
            other => Err(LogError::Config(format!(
                "unknown log format '{other}' (expected pretty, compact or json)"
            ))),
        }
    }
}

/// What each event line shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Use ANSI colors
    pub colors: bool,
    /// Show timestamps
    pub time: bool,
    /// Show target module
    pub target: bool,
    /// Show source location (`file:line`)
    pub source: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            colors: std::io::IsTerminal::is_terminal(&std::io::stderr()),
            time: true,
            target: true,
            source: cfg!(debug_assertions),
        }
    }
}

impl DisplayConfig {
    /// Applies `FIELDWARD_LOG_{TIME,SOURCE,COLORS,TARGET}` switches.
    pub(crate) fn parse_env(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        let flag = |key: &str| lookup(key).map(|v| v != "0" && !v.eq_ignore_ascii_case("false"));
        if let Some(v) = flag("FIELDWARD_LOG_TIME") {
            self.time = v;
        }
        if let Some(v) = flag("FIELDWARD_LOG_SOURCE") {
            self.source = v;
        }
        if let Some(v) = flag("FIELDWARD_LOG_COLORS") {
            self.colors = v;
        }
        if let Some(v) = flag("FIELDWARD_LOG_TARGET") {
            self.target = v;
        }
    }
}
