//! Failure reporters.
//!
//! A reporter is invoked once per recorded failure when
//! [`ValidationConfig::invoke_callback`](crate::config::ValidationConfig) is
//! on. Reporters never influence the outcome of a pass.
//!
//! [`JsonReporter`] is the default and returns control to the caller.
//! [`ExitingReporter`] restores the old terminate-after-report behaviour
//! and must be chosen explicitly.

use std::fmt;
use std::io::{self, Write};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

// ============================================================================
// REPORT
// ============================================================================

/// Message handed to a reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FailureMessage {
    /// Rendered message only.
    Single(String),
    /// Rendered message plus the fields it concerns.
    WithFields(String, Vec<String>),
}

impl FailureMessage {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Single(text) | Self::WithFields(text, _) => text,
        }
    }

    #[must_use]
    pub fn fields(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::WithFields(_, fields) => Some(fields),
        }
    }
}

/// How much detail the report carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum ReportMode {
    #[default]
    Plain = 0,
    Detailed = 1,
}

impl ReportMode {
    #[must_use]
    pub const fn as_int(self) -> u8 {
        self as u8
    }
}

/// One failure as seen by a reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReport {
    pub message: FailureMessage,
    pub mode: ReportMode,
}

impl FailureReport {
    /// Report for a message without field information.
    pub fn plain(message: impl Into<String>) -> Self {
        Self {
            message: FailureMessage::Single(message.into()),
            mode: ReportMode::Plain,
        }
    }

    /// Report carrying the failing field(s).
    pub fn detailed(message: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            message: FailureMessage::WithFields(message.into(), fields),
            mode: ReportMode::Detailed,
        }
    }
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.text())?;
        if let Some(fields) = self.message.fields() {
            write!(f, " [{}]", fields.join(", "))?;
        }
        Ok(())
    }
}

// ============================================================================
// TRAIT
// ============================================================================

/// Receives failures as they are recorded.
pub trait FailureReporter: Send + Sync {
    fn report(&self, report: &FailureReport);
}

impl fmt::Debug for dyn FailureReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dyn FailureReporter")
    }
}

// ============================================================================
// JSON
// ============================================================================

#[derive(Serialize)]
struct JsonLine<'a> {
    status: &'static str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<&'a [String]>,
}

/// Writes `{"status":"error","message":..,"fields"?:..}` lines.
pub struct JsonReporter {
    out: Mutex<Box<dyn Write + Send>>,
}

impl JsonReporter {
    /// Reporter writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for JsonReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonReporter").finish_non_exhaustive()
    }
}

impl FailureReporter for JsonReporter {
    fn report(&self, report: &FailureReport) {
        let line = JsonLine {
            status: "error",
            message: report.message.text(),
            fields: report.message.fields(),
        };
        let mut out = self.out.lock();
        let written = serde_json::to_writer(&mut *out, &line)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(out))
            .and_then(|()| out.flush());
        if let Err(error) = written {
            tracing::warn!(%error, "failed to write failure report");
        }
    }
}

// ============================================================================
// EXITING
// ============================================================================

/// Reports through `inner`, then exits the process with status 0.
#[derive(Debug)]
pub struct ExitingReporter<R = JsonReporter> {
    inner: R,
}

impl<R: FailureReporter> ExitingReporter<R> {
    pub const fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl Default for ExitingReporter {
    fn default() -> Self {
        Self::new(JsonReporter::stdout())
    }
}

impl<R: FailureReporter> FailureReporter for ExitingReporter<R> {
    fn report(&self, report: &FailureReport) {
        self.inner.report(report);
        tracing::debug!("exiting after failure report");
        std::process::exit(0);
    }
}

// ============================================================================
// COLLECTING
// ============================================================================

/// Buffers every report in memory.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    reports: Mutex<Vec<FailureReport>>,
}

impl CollectingReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the reports received so far.
    #[must_use]
    pub fn reports(&self) -> Vec<FailureReport> {
        self.reports.lock().clone()
    }

    /// Drains the buffer.
    pub fn take(&self) -> Vec<FailureReport> {
        std::mem::take(&mut *self.reports.lock())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }
}

impl FailureReporter for CollectingReporter {
    fn report(&self, report: &FailureReport) {
        self.reports.lock().push(report.clone());
    }
}

// ============================================================================
// CLOSURE
// ============================================================================

/// Adapts a closure.
pub struct FnReporter<F> {
    f: F,
}

impl<F> FnReporter<F>
where
    F: Fn(&FailureReport) + Send + Sync,
{
    pub const fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> fmt::Debug for FnReporter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnReporter").finish_non_exhaustive()
    }
}

impl<F> FailureReporter for FnReporter<F>
where
    F: Fn(&FailureReport) + Send + Sync,
{
    fn report(&self, report: &FailureReport) {
        (self.f)(report);
    }
}
