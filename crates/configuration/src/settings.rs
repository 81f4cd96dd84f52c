use crate::error::ConfigError;
use chrono::{Duration, NaiveDate, Utc};
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub alerting: Alerting,
    #[serde(default)]
    pub logging: Logging,
}

/// Run parameters for the alert engines.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Alerting {
    /// The reference date of the run. `None` means the date of invocation.
    pub as_of: Option<NaiveDate>,
    /// Contracts ending within this many weeks raise a `CONTRACT_ENDING` alert.
    pub contract_warning_weeks: i64,
    /// Loans ending within this many weeks raise a `LOAN_ENDING` alert.
    pub loan_warning_weeks: i64,
    /// Players older than this (in fractional years) are past their peak.
    pub peak_age_limit: f64,
    /// Whether second and third positions count towards position group membership.
    pub include_secondary_positions: bool,
}

impl Default for Alerting {
    fn default() -> Self {
        Self {
            as_of: None,
            contract_warning_weeks: 52,
            loan_warning_weeks: 26,
            peak_age_limit: 28.0,
            include_secondary_positions: true,
        }
    }
}

impl Alerting {
    /// The configured as-of date, falling back to today's date in UTC.
    pub fn resolve_as_of(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Last date a contract may end on to raise a `CONTRACT_ENDING` alert in a run on `as_of`.
    pub fn contract_horizon(&self, as_of: NaiveDate) -> Result<NaiveDate, ConfigError> {
        horizon(as_of, self.contract_warning_weeks, "contract_warning_weeks")
    }

    /// Last date a loan may end on to raise a `LOAN_ENDING` alert in a run on `as_of`.
    pub fn loan_horizon(&self, as_of: NaiveDate) -> Result<NaiveDate, ConfigError> {
        horizon(as_of, self.loan_warning_weeks, "loan_warning_weeks")
    }

    /// Checks that the thresholds describe a meaningful run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.contract_warning_weeks < 0 {
            return Err(ConfigError::ValidationError(
                "contract_warning_weeks must not be negative".to_string(),
            ));
        }
        if self.loan_warning_weeks < 0 {
            return Err(ConfigError::ValidationError(
                "loan_warning_weeks must not be negative".to_string(),
            ));
        }
        if !self.peak_age_limit.is_finite() || self.peak_age_limit <= 0.0 {
            return Err(ConfigError::ValidationError(
                "peak_age_limit must be a positive number of years".to_string(),
            ));
        }
        Ok(())
    }
}

/// `as_of` moved forward by `weeks`, or a validation error when the result is not a
/// representable date.
fn horizon(as_of: NaiveDate, weeks: i64, name: &str) -> Result<NaiveDate, ConfigError> {
    Duration::try_weeks(weeks)
        .and_then(|window| as_of.checked_add_signed(window))
        .ok_or_else(|| {
            ConfigError::ValidationError(format!(
                "{name} of {weeks} reaches beyond the supported date range"
            ))
        })
}

/// Output settings for the tracing subscriber.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// `pretty` or `json`.
    pub format: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<String>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            directory: None,
        }
    }
}
