use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
#[cfg(feature = "clap")]
pub mod cli;
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{Alerting, Config, Logging};

/// The file read when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "squadwatch.toml";

/// Loads the application configuration.
///
/// Reads `path` (or `squadwatch.toml` in the working directory, if present), then applies
/// `SQUADWATCH__SECTION__KEY` environment overrides. Every value has a default, so a missing
/// default file is not an error; a missing explicit path is. The alerting thresholds are
/// validated before returning.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("SQUADWATCH")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.alerting.validate()?;

    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}
