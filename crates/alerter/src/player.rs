use crate::error::AlerterError;
use analytics::NormalizedPlayer;
use chrono::NaiveDate;
use configuration::Alerting;
use core_types::{Alert, AlertPriority, AlertType, SquadAlerts};

/// Evaluates the per-player rules: expired deals, deals ending soon and age decline.
#[derive(Debug, Clone)]
pub struct PlayerAlertEngine {
    params: Alerting,
    as_of: NaiveDate,
    contract_horizon: NaiveDate,
    loan_horizon: NaiveDate,
}

impl PlayerAlertEngine {
    /// Creates a new `PlayerAlertEngine` for a run on `as_of`.
    ///
    /// Fails when the parameters are invalid or a warning window ends past the last
    /// representable date.
    pub fn new(params: Alerting, as_of: NaiveDate) -> Result<Self, AlerterError> {
        params.validate()?;
        let contract_horizon = params.contract_horizon(as_of)?;
        let loan_horizon = params.loan_horizon(as_of)?;
        Ok(Self {
            params,
            as_of,
            contract_horizon,
            loan_horizon,
        })
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Produces the player alerts for a squad given in usage order.
    ///
    /// Players whose deal already expired get a single `CONTRACT_OR_LOAN_EXPIRED` alert
    /// and take no further part in the run. Those alerts come first, followed by the
    /// rule alerts of the remaining players.
    pub fn evaluate(&self, squad: &[NormalizedPlayer]) -> SquadAlerts {
        let mut alerts = SquadAlerts::new();

        let (expired, active): (Vec<&NormalizedPlayer>, Vec<&NormalizedPlayer>) =
            squad.iter().partition(|p| self.is_expired(p));

        for player in &expired {
            alerts.push(self.alert(AlertType::ContractOrLoanExpired, player));
        }
        for player in &active {
            for alert_type in self.rule_alerts(player) {
                alerts.push(self.alert(alert_type, player));
            }
        }

        tracing::debug!(
            as_of = %self.as_of,
            expired = expired.len(),
            evaluated = active.len(),
            alerts = alerts.len(),
            "Player alerts evaluated."
        );
        alerts
    }

    fn is_expired(&self, player: &NormalizedPlayer) -> bool {
        player.operative_expiry.is_some_and(|expiry| expiry < self.as_of)
    }

    /// The alert types raised for an active player, in a fixed order.
    fn rule_alerts(&self, player: &NormalizedPlayer) -> Vec<AlertType> {
        let mut types = Vec::new();
        let on_loan = player.player.on_loan;

        if let Some(expiry) = player.operative_expiry {
            if !on_loan && expiry <= self.contract_horizon {
                types.push(AlertType::ContractEnding);
            }
            if on_loan && expiry <= self.loan_horizon {
                types.push(AlertType::LoanEnding);
            }
        }
        if self.age(player).is_some_and(|age| age > self.params.peak_age_limit) {
            types.push(AlertType::PastPeakAge);
        }
        types
    }

    fn age(&self, player: &NormalizedPlayer) -> Option<f64> {
        player
            .player
            .birth_date
            .map(|birth| analytics::tenure::age_on(birth, self.as_of))
    }

    fn alert(&self, alert_type: AlertType, player: &NormalizedPlayer) -> Alert {
        Alert::for_player(
            alert_type,
            AlertPriority::from_usage(player.usage.usage),
            player.player.first_position,
            player.player.name.clone(),
        )
    }
}
