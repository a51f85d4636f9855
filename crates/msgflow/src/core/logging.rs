//! Structured logging setup
//!
//! Everything goes through `tracing`. The subscriber writes to stderr, so a
//! diagram printed on stdout never gets mixed with log events.
//!
//! ```rust,no_run
//! use msgflow::core::logging::init_logging;
//!
//! init_logging(Some("debug"), Some("pretty")).unwrap();
//! ```
//!
//! What each level shows:
//!
//! - `trace`: how every input line was classified
//! - `debug`: directives applied and rules registered
//! - `info`: one summary per pipeline stage
//! - `warn`: extraction rules that can never match (the default)
//!
//! When no level is passed, `MSGFLOW_LOG_LEVEL` is read, then `RUST_LOG`.
//! `MSGFLOW_LOG_FORMAT` picks the format the same way. Filter directives work
//! too, e.g. `RUST_LOG="msgflow::flow::extractor=trace"`.

use std::str::FromStr;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Level used when neither an argument nor the environment sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

const LEVEL_ENV: &str = "MSGFLOW_LOG_LEVEL";
const FORMAT_ENV: &str = "MSGFLOW_LOG_FORMAT";

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One line per event, no target
    #[default]
    Compact,
    /// Multi-line with source locations and span activity
    Pretty,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!(
                "unknown log format '{}', expected one of {}",
                other,
                LogFormat::variants().join("|")
            )),
        }
    }
}

impl LogFormat {
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }

    fn layer(self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let base = fmt::layer().with_writer(std::io::stderr);
        match self {
            LogFormat::Compact => base.compact().with_target(false).boxed(),
            LogFormat::Pretty => base
                .pretty()
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::ACTIVE)
                .boxed(),
            LogFormat::Json => base
                .json()
                .with_current_span(true)
                .with_span_events(FmtSpan::CLOSE)
                .boxed(),
        }
    }
}

/// Resolved logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Level name or `EnvFilter` directive string
    pub filter: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// Pick the filter and format from explicit values, falling back to the
    /// process environment
    pub fn resolve(level: Option<&str>, format: Option<&str>) -> Result<Self, String> {
        Self::resolve_with(level, format, |key| std::env::var(key).ok())
    }

    fn resolve_with(
        level: Option<&str>,
        format: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, String> {
        let filter = level
            .map(str::to_string)
            .or_else(|| env(LEVEL_ENV))
            .or_else(|| env("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let format = match format.map(str::to_string).or_else(|| env(FORMAT_ENV)) {
            Some(name) => name.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self { filter, format })
    }

    /// Unparseable directives fall back to [`DEFAULT_LOG_LEVEL`]
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    }

    /// Install these settings as the global subscriber
    pub fn install(&self) -> Result<(), Box<dyn std::error::Error>> {
        Registry::default()
            .with(self.format.layer())
            .with(self.env_filter())
            .try_init()?;
        Ok(())
    }
}

/// Initialize the global tracing subscriber
///
/// Fails on an unknown format, or when a global subscriber is already set.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    LogSettings::resolve(level, format)?.install()
}

/// Same as `init_logging(None, None)`
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(None, None)
}
