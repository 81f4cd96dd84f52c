use crate::settings::Alerting;
use chrono::NaiveDate;

/// Command-line overrides for the alerting thresholds.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AlertingArgs {
    /// The reference date of the run (format: YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Warn about contracts ending within this many weeks.
    #[arg(long)]
    pub contract_weeks: Option<i64>,

    /// Warn about loans ending within this many weeks.
    #[arg(long)]
    pub loan_weeks: Option<i64>,

    /// Age (in years) after which players are considered past their peak.
    #[arg(long)]
    pub peak_age: Option<f64>,

    /// Only use each player's first position for position group membership.
    #[arg(long)]
    pub primary_only: bool,
}

impl AlertingArgs {
    /// Applies every flag that was given on top of the loaded settings.
    pub fn apply(&self, alerting: &mut Alerting) {
        if let Some(as_of) = self.as_of {
            alerting.as_of = Some(as_of);
        }
        if let Some(weeks) = self.contract_weeks {
            alerting.contract_warning_weeks = weeks;
        }
        if let Some(weeks) = self.loan_weeks {
            alerting.loan_warning_weeks = weeks;
        }
        if let Some(age) = self.peak_age {
            alerting.peak_age_limit = age;
        }
        if self.primary_only {
            alerting.include_secondary_positions = false;
        }
    }
}
