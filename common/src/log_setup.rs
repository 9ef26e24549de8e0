use std::sync::OnceLock;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{Builder, InitError, Rotation};
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "dstretch";
const MAX_LOG_FILES: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum LogSetupError {
    #[error("Invalid log filter '{directives}'")]
    InvalidFilter {
        directives: String,
        #[source]
        source: ParseError,
    },
    #[error("Failed to create logs directory")]
    LogDir(#[from] std::io::Error),
    #[error("Failed to create log file appender")]
    Appender(#[from] InitError),
    #[error("Logging already initialized")]
    AlreadyInitialized,
    #[error("Global subscriber already set")]
    Subscriber(#[from] TryInitError),
}

pub type LogSetupResult<T> = Result<T, LogSetupError>;

/// Picks the active filter: `env_directives` (normally `RUST_LOG`) when it
/// parses, `base_level` otherwise. `base_level` must always parse.
pub fn resolve_filter(base_level: &str, env_directives: Option<&str>) -> LogSetupResult<EnvFilter> {
    let base = EnvFilter::try_new(base_level).map_err(|source| LogSetupError::InvalidFilter {
        directives: base_level.to_string(),
        source,
    })?;

    Ok(env_directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or(base))
}

/// Installs the console and daily rolling-file subscribers.
///
/// Succeeds once per process; later calls return
/// [`LogSetupError::AlreadyInitialized`].
pub fn setup_logging(base_level: &str) -> LogSetupResult<()> {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = resolve_filter(base_level, env_directives.as_deref())?;

    std::fs::create_dir_all(LOG_DIR)?;

    let file_appender = Builder::new()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(LOG_DIR)?;

    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    LOG_GUARD
        .set(guard)
        .map_err(|_| LogSetupError::AlreadyInitialized)?;

    let console_writer = std::io::stdout.and(std::io::stderr.with_min_level(Level::WARN));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_ansi(true)
        .with_writer(console_writer);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(false)
        .with_writer(file_writer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}
