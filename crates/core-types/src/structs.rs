use crate::enums::{AlertPriority, AlertType};
use crate::position::Position;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A player in a team's squad, as supplied by the data provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: u64,
    pub team_id: u64,
    pub name: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub contract_end: Option<NaiveDate>,
    #[serde(default)]
    pub loan_end: Option<NaiveDate>,
    #[serde(default)]
    pub on_loan: bool,
    #[serde(default)]
    pub first_position: Position,
    #[serde(default)]
    pub second_position: Option<Position>,
    #[serde(default)]
    pub third_position: Option<Position>,
    #[serde(default)]
    pub skill: f64,
    #[serde(default)]
    pub skill_dev: f64,
    #[serde(default)]
    pub potential: f64,
    #[serde(default)]
    pub market_value: Option<Decimal>,
    /// Estimated transfer value.
    #[serde(default)]
    pub etv_current: Option<Decimal>,
    /// Change in estimated transfer value.
    #[serde(default)]
    pub etv_dev: Option<Decimal>,
}

impl Player {
    /// The date the player leaves the squad: the loan end for loaned players, else the contract end.
    pub fn operative_expiry(&self) -> Option<NaiveDate> {
        if self.on_loan {
            self.loan_end
        } else {
            self.contract_end
        }
    }

    /// True if `position` is one of the player's ranked positions.
    ///
    /// With `include_secondary` unset only the first position is considered.
    pub fn plays(&self, position: Position, include_secondary: bool) -> bool {
        if self.first_position == position {
            return true;
        }
        include_secondary
            && (self.second_position == Some(position) || self.third_position == Some(position))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub match_id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kick_off_date: Option<NaiveDate>,
    #[serde(default)]
    pub formation: Option<String>,
    #[serde(default)]
    pub formation_faced: Option<String>,
    #[serde(default)]
    pub goals_scored: u32,
    #[serde(default)]
    pub goals_conceded: u32,
}

/// Minutes a single player spent on the pitch in a single match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchParticipation {
    pub match_id: u64,
    pub player_id: u64,
    #[serde(default)]
    pub minutes_played: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub player_id: u64,
    #[serde(default)]
    pub player_name: String,
    pub from_team_id: u64,
    #[serde(default)]
    pub from_team_name: String,
    #[serde(default)]
    pub from_league_id: Option<u64>,
    #[serde(default)]
    pub from_league_name: String,
    #[serde(default)]
    pub from_league_nation: String,
    pub to_team_id: u64,
    #[serde(default)]
    pub to_team_name: String,
    #[serde(default)]
    pub to_league_id: Option<u64>,
    #[serde(default)]
    pub to_league_name: String,
    #[serde(default)]
    pub to_league_nation: String,
    #[serde(default)]
    pub fee: Option<Decimal>,
    /// Internal moves are academy promotions.
    #[serde(default)]
    pub is_internal: bool,
    #[serde(default)]
    pub is_loan: bool,
    /// The player returning from a loan spell.
    #[serde(default)]
    pub is_end_loan: bool,
    #[serde(default)]
    pub market_value: Option<Decimal>,
    pub transfer_date: NaiveDate,
    #[serde(default)]
    pub contract_date: Option<NaiveDate>,
}

/// Everything known about one team at the time of a run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamSnapshot {
    pub team_id: u64,
    pub name: String,
    #[serde(default)]
    pub squad: Vec<Player>,
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(default)]
    pub participations: Vec<MatchParticipation>,
    #[serde(default)]
    pub transfers: Vec<Transfer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub match_id: u64,
    pub home_team_id: u64,
    pub away_team_id: u64,
    #[serde(default)]
    pub kick_off_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub season_id: u64,
    pub season_name: String,
    pub league_name: String,
    #[serde(default)]
    pub fixtures: Vec<Fixture>,
}

impl Season {
    /// Distinct team ids taking part in the season, in order of first appearance.
    pub fn team_ids(&self) -> Vec<u64> {
        let mut teams = Vec::new();
        for fixture in &self.fixtures {
            for team_id in [fixture.home_team_id, fixture.away_team_id] {
                if !teams.contains(&team_id) {
                    teams.push(team_id);
                }
            }
        }
        teams
    }
}

/// A single squad-management alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub alert_type: AlertType,
    pub priority: AlertPriority,
    pub position: Position,
    pub player: Option<String>,
}

impl Alert {
    pub fn for_player(
        alert_type: AlertType,
        priority: AlertPriority,
        position: Position,
        player: impl Into<String>,
    ) -> Self {
        Self {
            alert_type,
            priority,
            position,
            player: Some(player.into()),
        }
    }

    pub fn for_position(alert_type: AlertType, priority: AlertPriority, position: Position) -> Self {
        Self {
            alert_type,
            priority,
            position,
            player: None,
        }
    }
}

/// The ordered alerts of a single run. Append order is preserved and nothing is deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SquadAlerts {
    pub alerts: Vec<Alert>,
}

impl SquadAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }

    pub fn extend(&mut self, other: SquadAlerts) {
        self.alerts.extend(other.alerts);
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Alert> {
        self.alerts.iter()
    }

    /// Alerts of the given type, in emission order.
    pub fn of_type(&self, alert_type: AlertType) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(move |a| a.alert_type == alert_type)
    }
}
