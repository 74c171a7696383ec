//! Tracing subscriber initialization.
//!
//! ```rust,ignore
//! use scopechat_core::observability::{init_tracing, OutputFormat, TracingConfig};
//!
//! let _guard = init_tracing(
//!     TracingConfig::builder()
//!         .log_level(tracing::Level::DEBUG)
//!         .output_format(OutputFormat::Json)
//!         .build(),
//! )?;
//! ```

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::error::LlmError;

/// Output format for tracing logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Multi-line, human-readable
    #[default]
    Pretty,
    /// Single-line text
    Compact,
    /// One JSON object per line
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(LlmError::ConfigurationError(format!(
                "Invalid log format: {other}. Valid options: pretty, compact, json"
            ))),
        }
    }
}

/// Configuration for the tracing subscriber
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Default level for scopechat crates; `RUST_LOG` overrides it.
    pub log_level: tracing::Level,
    pub output_format: OutputFormat,
    /// Directory for daily-rolling log files. Console output when `None`.
    pub log_dir: Option<PathBuf>,
    /// File name prefix inside `log_dir`.
    pub file_prefix: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            log_level: tracing::Level::INFO,
            output_format: OutputFormat::default(),
            log_dir: None,
            file_prefix: "scopechat.log".to_string(),
        }
    }
}

impl TracingConfig {
    pub fn builder() -> TracingConfigBuilder {
        TracingConfigBuilder::default()
    }

    /// Debug-level pretty console output.
    pub fn debug() -> Self {
        Self {
            log_level: tracing::Level::DEBUG,
            ..Self::default()
        }
    }

    /// Filter directive used when `RUST_LOG` is unset.
    pub fn default_directive(&self) -> String {
        let level = self.log_level.as_str().to_ascii_lowercase();
        format!(
            "scopechat={level},scopechat_core={level},scopechat_provider_agentscope={level}"
        )
    }
}

/// Builder for TracingConfig
#[derive(Debug, Default)]
pub struct TracingConfigBuilder {
    config: TracingConfig,
}

impl TracingConfigBuilder {
    pub fn log_level(mut self, level: tracing::Level) -> Self {
        self.config.log_level = level;
        self
    }

    /// Set the log level from a string
    pub fn log_level_str(mut self, level: &str) -> Result<Self, LlmError> {
        self.config.log_level = level.trim().parse().map_err(|_| {
            LlmError::ConfigurationError(format!(
                "Invalid log level: {level}. Valid options: trace, debug, info, warn, error"
            ))
        })?;
        Ok(self)
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output_format = format;
        self
    }

    pub fn log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.log_dir = Some(dir.into());
        self
    }

    pub fn file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.file_prefix = prefix.into();
        self
    }

    pub fn build(self) -> TracingConfig {
        self.config
    }
}

/// Install a global tracing subscriber.
///
/// Returns the file writer's `WorkerGuard` when file output is enabled; keep
/// it alive for the lifetime of the program. Calling this when a subscriber
/// is already installed is a no-op.
pub fn init_tracing(config: TracingConfig) -> Result<Option<WorkerGuard>, LlmError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    let (result, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, &config.file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                try_init_with(config.output_format, filter, writer, false),
                Some(guard),
            )
        }
        None => (
            try_init_with(config.output_format, filter, std::io::stdout, true),
            None,
        ),
    };

    match result {
        Ok(()) => Ok(guard),
        Err(e) if e.to_string().contains("already been set") => Ok(None),
        Err(e) => Err(LlmError::ConfigurationError(format!(
            "Failed to initialize tracing: {e}"
        ))),
    }
}

/// Initialize from `SCOPECHAT_LOG_LEVEL`, `SCOPECHAT_LOG_FORMAT` and
/// `SCOPECHAT_LOG_DIR`.
pub fn init_tracing_from_env() -> Result<Option<WorkerGuard>, LlmError> {
    let mut builder = TracingConfig::builder();
    if let Ok(level) = std::env::var("SCOPECHAT_LOG_LEVEL") {
        builder = builder.log_level_str(&level)?;
    }
    if let Ok(format) = std::env::var("SCOPECHAT_LOG_FORMAT") {
        builder = builder.output_format(format.parse()?);
    }
    if let Ok(dir) = std::env::var("SCOPECHAT_LOG_DIR") {
        builder = builder.log_dir(dir);
    }
    init_tracing(builder.build())
}

type InitResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;

fn try_init_with<W>(format: OutputFormat, filter: EnvFilter, writer: W, ansi: bool) -> InitResult
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true);
    match format {
        OutputFormat::Pretty => builder.pretty().try_init(),
        OutputFormat::Compact => builder.compact().try_init(),
        OutputFormat::Json => builder.json().try_init(),
    }
}
