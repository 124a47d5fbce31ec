//! Structured logging system.
//!
//! Provides tracing-based structured logging with support for:
//! - Multi-level logging (TRACE, DEBUG, INFO, WARN, ERROR)
//! - Structured fields
//! - Environment variable configuration
//! - JSON and formatted output

use tracing::Level;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Trace level: most detailed debugging information.
    Trace,
    /// Debug level: detailed debugging information.
    Debug,
    /// Info level: important business events.
    Info,
    /// Warn level: potential issues.
    Warn,
    /// Error level: error information.
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable formatted output.
    Pretty,
    /// Compact format.
    Compact,
    /// JSON format for production environments.
    Json,
}

/// Log configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level.
    pub level: LogLevel,
    /// Log format.
    pub format: LogFormat,
    /// Whether to show thread IDs.
    pub show_thread_ids: bool,
    /// Whether to show target module.
    pub show_target: bool,
    /// Whether to show span events (function enter/exit).
    pub show_span_events: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
            show_thread_ids: false,
            show_target: true,
            show_span_events: false,
        }
    }
}

impl LogConfig {
    /// Creates a log configuration for development environments.
    pub fn development() -> Self {
        Self {
            level: LogLevel::Debug,
            format: LogFormat::Pretty,
            show_thread_ids: false,
            show_target: true,
            show_span_events: true,
        }
    }

    /// Creates a log configuration for production environments.
    pub fn production() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Json,
            show_thread_ids: true,
            show_target: true,
            show_span_events: false,
        }
    }
}

/// Initializes the logging system.
///
/// Respects `RUST_LOG` when set; otherwise uses the configured level for
/// the cfapi crates.
///
/// # Examples
///
/// ```no_run
/// use cfapi_core::logging::{init_logging, LogConfig};
///
/// init_logging(&LogConfig::default());
/// ```
pub fn init_logging(config: &LogConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "cfapi_core={},cfapi_services={}",
            config.level, config.level
        ))
    });

    let span_events = if config.show_span_events {
        FmtSpan::ENTER | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    match config.format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .pretty()
                .with_thread_ids(config.show_thread_ids)
                .with_target(config.show_target)
                .with_span_events(span_events)
                .with_filter(env_filter);
            tracing_subscriber::registry().with(fmt_layer).init();
        }
        LogFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_thread_ids(config.show_thread_ids)
                .with_target(config.show_target)
                .with_span_events(span_events)
                .with_filter(env_filter);
            tracing_subscriber::registry().with(fmt_layer).init();
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_thread_ids(config.show_thread_ids)
                .with_target(config.show_target)
                .with_span_events(span_events)
                .with_filter(env_filter);
            tracing_subscriber::registry().with(fmt_layer).init();
        }
    }
}
