use crate::error::ConfigError;
use crate::settings::Logging;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. When a log directory is configured,
/// output is duplicated into a daily rolling file; the returned guard must be held until exit
/// so buffered lines are flushed.
pub fn init_tracing(settings: &Logging) -> Result<Option<WorkerGuard>, ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| ConfigError::LoggingError(e.to_string()))?;

    let (file_writer, guard) = match &settings.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "squadwatch.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let builder = fmt().with_env_filter(filter);
    let result = match (settings.format.as_str(), file_writer) {
        ("json", Some(file)) => builder
            .json()
            .with_writer(std::io::stderr.and(file))
            .try_init(),
        ("json", None) => builder.json().with_writer(std::io::stderr).try_init(),
        (_, Some(file)) => builder
            .with_writer(std::io::stderr.and(file))
            .try_init(),
        (_, None) => builder.with_writer(std::io::stderr).try_init(),
    };
    result.map_err(|e| ConfigError::LoggingError(e.to_string()))?;

    Ok(guard)
}
