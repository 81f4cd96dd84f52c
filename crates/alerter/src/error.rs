use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlerterError {
    #[error("Alerting parameters are invalid: {0}")]
    InvalidParameters(#[from] configuration::error::ConfigError),
}
