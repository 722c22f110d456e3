//! Subcommand implementations.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use fieldward_validator::config::Overrides;
use fieldward_validator::document::read_document;
use fieldward_validator::reporter::JsonReporter;
use fieldward_validator::resolver::{
    DEFAULT_NAMESPACE, DEFAULT_PROVIDER_DIR, ProviderDirectory, RuleRegistry,
};
use fieldward_validator::rules::RuleSet;
use fieldward_validator::value::InputMap;
use fieldward_validator::{ErrorPayload, ValidationOutcome, Validator};
use serde::Serialize;

use crate::settings::Settings;

/// Result document printed on stdout.
#[derive(Debug, Serialize)]
struct Report {
    valid: bool,
    #[serde(flatten)]
    payload: ErrorPayload,
}

/// One provider file in `providers` output.
#[derive(Debug, Serialize)]
struct ProviderEntry {
    namespace: String,
    name: String,
    path: PathBuf,
    rule_sets: Vec<String>,
}

pub fn check(settings: &Settings, input: &Path, rules: &Path) -> anyhow::Result<bool> {
    let input = read_input(input)?;
    let rules = read_rules(rules)?;
    let outcome = validator(settings)?.evaluate(&input, &rules)?;
    emit(settings, &outcome)
}

pub fn named(settings: &Settings, name: &str, input: &Path) -> anyhow::Result<bool> {
    let input = read_input(input)?;
    let validator = validator(settings)?;
    let outcome = match &settings.providers {
        Some(root) => {
            let directory = provider_directory(settings, root);
            validator.evaluate_named(&input, name, &directory, &Overrides::none())?
        }
        None => validator.evaluate_named(&input, name, &RuleRegistry::builtin(), &Overrides::none())?,
    };
    emit(settings, &outcome)
}

pub fn like(settings: &Settings, input: &Path, rules: &Path) -> anyhow::Result<bool> {
    let input = read_input(input)?;
    let rules = read_rules(rules)?;
    let outcome = validator(settings)?.evaluate_like_fields(&input, &rules, &Overrides::none())?;
    emit(settings, &outcome)
}

pub fn providers(settings: &Settings) -> anyhow::Result<()> {
    let root = settings
        .providers
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROVIDER_DIR));
    let entries: Vec<ProviderEntry> = provider_directory(settings, &root)
        .scan()
        .with_context(|| format!("failed to scan {}", root.display()))?
        .into_iter()
        .map(|(descriptor, rule_sets)| ProviderEntry {
            namespace: descriptor.namespace,
            name: descriptor.file_stem,
            path: descriptor.path,
            rule_sets,
        })
        .collect();
    print_json(&entries)
}

// ============================================================================
// Helpers
// ============================================================================

fn validator(settings: &Settings) -> anyhow::Result<Validator> {
    Validator::builder()
        .config(settings.validation.clone())
        .reporter(JsonReporter::new(std::io::stderr()))
        .build()
        .context("failed to build validator")
}

fn provider_directory(settings: &Settings, root: &Path) -> ProviderDirectory {
    ProviderDirectory::new(root)
        .with_namespace(settings.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE))
}

fn read_input(path: &Path) -> anyhow::Result<InputMap> {
    read_document(path).with_context(|| format!("failed to read input {}", path.display()))
}

fn read_rules(path: &Path) -> anyhow::Result<RuleSet> {
    read_document(path).with_context(|| format!("failed to read rules {}", path.display()))
}

fn emit(settings: &Settings, outcome: &ValidationOutcome) -> anyhow::Result<bool> {
    let report = Report {
        valid: outcome.is_valid(),
        payload: outcome.payload(settings.validation.include_fields),
    };
    tracing::info!(
        valid = report.valid,
        failures = outcome.failures().len(),
        "validation finished"
    );
    print_json(&report)?;
    Ok(report.valid)
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
