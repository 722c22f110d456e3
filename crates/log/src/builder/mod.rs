//! Logger builder implementation

// External dependencies
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

// Internal crates
use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Builds a stderr format layer with the common display switches.
///
/// Timestamps change the layer type, so both arms are boxed.
macro_rules! create_fmt_layer {
    ($format:ident, $display:expr) => {{
        let display = $display;
        let layer = tracing_subscriber::fmt::layer()
            .$format()
            .with_writer(std::io::stderr)
            .with_ansi(display.colors)
            .with_target(display.target)
            .with_file(display.source)
            .with_line_number(display.source);
        if display.time {
            layer.boxed()
        } else {
            layer.without_time().boxed()
        }
    }};
}

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard that keeps the logger's root span entered
///
/// Dropping it exits the span; the subscriber itself stays installed.
#[derive(Debug)]
pub struct LoggerGuard {
    /// RAII guard for the root span, if a service name was configured
    _root_span: Option<tracing::span::EnteredSpan>,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Overrides the filter directive
    #[must_use = "builder methods must be chained or built"]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.config.level = level.into();
        self
    }

    /// Overrides the output format
    #[must_use = "builder methods must be chained or built"]
    pub fn format(mut self, format: Format) -> Self {
        self.config.format = format;
        self
    }

    /// Current configuration
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses the filter directive without installing anything
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Filter`] if the directive is malformed.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::Filter(format!("{}: {}", &self.config.level, e)))
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.filter()?;

        let display = &self.config.display;
        let fmt_layer: BoxedLayer = match self.config.format {
            Format::Pretty => create_fmt_layer!(pretty, display),
            Format::Compact => create_fmt_layer!(compact, display),
            Format::Json => {
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_target(display.target)
                    .with_file(display.source)
                    .with_line_number(display.source);
                if display.time {
                    layer.boxed()
                } else {
                    layer.without_time().boxed()
                }
            }
        };

        tracing_subscriber::registry()
            .with(fmt_layer)
            .with(filter)
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))?;

        let root_span = self.config.service.as_deref().map(|service| {
            tracing::info_span!("app", service, version = env!("CARGO_PKG_VERSION")).entered()
        });

        tracing::debug!(
            level = %self.config.level,
            format = %self.config.format,
            "logger initialized"
        );

        Ok(LoggerGuard {
            _root_span: root_span,
        })
    }
}
