//! `fieldward` - validate field maps against rule sets from the command line.
//!
//! Results are printed as JSON on stdout; logs go to stderr.
//! Exit status: `0` valid, `1` invalid, `2` error.

mod commands;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use fieldward_log::Format as LogFormat;

use crate::settings::{FlagOverrides, Settings};

#[derive(Parser)]
#[command(
    name = "fieldward",
    version,
    about = "Validate field maps against rule sets",
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Settings file (defaults to ./fieldward.toml when present)
    #[arg(long, global = true, env = "FIELDWARD_CONFIG")]
    config: Option<PathBuf>,

    /// Message language
    #[arg(long = "lang", global = true)]
    language: Option<String>,

    /// Report every failure instead of stopping at the first
    #[arg(long, global = true)]
    all_errors: bool,

    /// Append the offending value to messages
    #[arg(long, global = true)]
    print_value: bool,

    /// Print field names bare instead of quoted
    #[arg(long, global = true)]
    hide_field: bool,

    /// Include failing field names in the output
    #[arg(long, global = true)]
    fields: bool,

    /// Write each failure report to stderr as it happens
    #[arg(long, global = true)]
    callback: bool,

    /// Log filter directive (e.g. `debug`, `fieldward_validator=trace`)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an input document against a rule-set file
    Check {
        /// Input document (field → value)
        #[arg(short, long)]
        input: PathBuf,
        /// Rule-set file (field → checks)
        #[arg(short, long)]
        rules: PathBuf,
    },

    /// Validate against a rule set looked up by name
    Named {
        /// Rule-set name
        name: String,
        /// Input document (field → value)
        #[arg(short, long)]
        input: PathBuf,
        /// Provider directory; the built-in registry is used when unset
        #[arg(long)]
        providers: Option<PathBuf>,
        /// Namespace for discovered providers
        #[arg(long)]
        namespace: Option<String>,
    },

    /// Validate every input key that starts with a rule's prefix
    Like {
        /// Input document (field → value)
        #[arg(short, long)]
        input: PathBuf,
        /// Prefix rule file (prefix → checks)
        #[arg(short, long)]
        rules: PathBuf,
    },

    /// List rule-set providers and the names they define
    Providers {
        /// Provider directory
        #[arg(long)]
        providers: Option<PathBuf>,
        /// Namespace for discovered providers
        #[arg(long)]
        namespace: Option<String>,
    },
}

impl Cli {
    fn overrides(&self) -> FlagOverrides {
        let global = &self.global;
        let (providers, namespace) = match &self.command {
            Commands::Named {
                providers,
                namespace,
                ..
            }
            | Commands::Providers {
                providers,
                namespace,
            } => (providers.clone(), namespace.clone()),
            _ => (None, None),
        };
        FlagOverrides {
            language: global.language.clone(),
            collect_all_errors: global.all_errors.then_some(true),
            print_value: global.print_value.then_some(true),
            print_field: global.hide_field.then_some(false),
            include_fields: global.fields.then_some(true),
            invoke_callback: global.callback.then_some(true),
            providers,
            namespace,
            log_level: global.log_level.clone(),
            log_format: global.log_format,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let settings = Settings::load(cli.global.config.as_deref(), &cli.overrides())?;
    let _guard = init_logging(&settings)?;
    tracing::debug!(?settings, "settings loaded");

    match cli.command {
        Commands::Check { input, rules } => commands::check(&settings, &input, &rules),
        Commands::Named { name, input, .. } => commands::named(&settings, &name, &input),
        Commands::Like { input, rules } => commands::like(&settings, &input, &rules),
        Commands::Providers { .. } => commands::providers(&settings).map(|()| true),
    }
}

fn init_logging(settings: &Settings) -> anyhow::Result<fieldward_log::LoggerGuard> {
    let mut builder = fieldward_log::LoggerBuilder::from_config(fieldward_log::Config::from_env());
    if let Some(level) = &settings.log_level {
        builder = builder.level(level.clone());
    }
    if let Some(format) = settings.log_format {
        builder = builder.format(format);
    }
    Ok(builder.build()?)
}
