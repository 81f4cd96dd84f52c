use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Urgency of a squad alert. Ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertPriority {
    /// Derives a player alert priority from a usage percentage.
    ///
    /// The bands are open below and closed above, so exactly 75.0 is `High`.
    pub fn from_usage(usage: f64) -> Self {
        if usage > 75.0 {
            AlertPriority::Critical
        } else if usage > 50.0 {
            AlertPriority::High
        } else if usage > 25.0 {
            AlertPriority::Medium
        } else {
            AlertPriority::Low
        }
    }
}

impl FromStr for AlertPriority {
    type Err = CoreError;

    /// Parses `low`, `medium`, `high` or `critical`, ignoring case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(AlertPriority::Low),
            "medium" => Ok(AlertPriority::Medium),
            "high" => Ok(AlertPriority::High),
            "critical" => Ok(AlertPriority::Critical),
            _ => Err(CoreError::InvalidInput(
                "alert priority".to_string(),
                format!("unknown priority '{value}'"),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    PastPeakAge,
    ContractEnding,
    LoanEnding,
    WeakSpotStarter,
    WeakSpotBackUp,
    WeakSpotSecondary,
    LackOfDepth,
    ContractOrLoanExpired,
}

impl AlertType {
    /// Returns true for alerts raised about a whole position group rather than a player.
    pub fn is_position_level(&self) -> bool {
        matches!(
            self,
            AlertType::WeakSpotStarter
                | AlertType::WeakSpotBackUp
                | AlertType::WeakSpotSecondary
                | AlertType::LackOfDepth
        )
    }
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AlertType::PastPeakAge => "Past peak age",
            AlertType::ContractEnding => "Contract ending",
            AlertType::LoanEnding => "Loan ending",
            AlertType::WeakSpotStarter => "Weak spot (starter)",
            AlertType::WeakSpotBackUp => "Weak spot (back-up)",
            AlertType::WeakSpotSecondary => "Weak spot (secondary back-up)",
            AlertType::LackOfDepth => "Lack of depth",
            AlertType::ContractOrLoanExpired => "Contract or loan expired",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_bands_are_closed_above() {
        assert_eq!(AlertPriority::from_usage(75.1), AlertPriority::Critical);
        assert_eq!(AlertPriority::from_usage(75.0), AlertPriority::High);
        assert_eq!(AlertPriority::from_usage(50.0), AlertPriority::Medium);
        assert_eq!(AlertPriority::from_usage(25.0), AlertPriority::Low);
        assert_eq!(AlertPriority::from_usage(0.0), AlertPriority::Low);
    }

    #[test]
    fn priorities_are_ordered_by_urgency() {
        assert!(AlertPriority::Critical > AlertPriority::High);
        assert!(AlertPriority::High > AlertPriority::Medium);
        assert!(AlertPriority::Medium > AlertPriority::Low);
    }

    #[test]
    fn priorities_parse_case_insensitively() {
        assert_eq!("High".parse::<AlertPriority>(), Ok(AlertPriority::High));
        assert_eq!(" critical ".parse::<AlertPriority>(), Ok(AlertPriority::Critical));
        assert_eq!(
            "urgent".parse::<AlertPriority>(),
            Err(CoreError::InvalidInput(
                "alert priority".to_string(),
                "unknown priority 'urgent'".to_string()
            ))
        );
    }
}
