//! # SquadWatch Alerter
//!
//! Turns a team snapshot into an ordered list of squad alerts and the position
//! benchmark table they were derived from.
//!
//! ## Architectural Principles
//!
//! - **Deterministic:** a run depends only on the snapshot, the alerting parameters and
//!   the as-of date. Running it twice yields the same alerts in the same order.
//! - **Two independent engines:** `PlayerAlertEngine` looks at each player on their
//!   own; `PositionBenchmarkEngine` compares the ten position groups of the squad.
//!
//! ## Public API
//!
//! - `SquadAlerter`: a full run over one team.
//! - `PlayerAlertEngine`, `PositionBenchmarkEngine`: the engines, usable separately.

pub mod error;
pub mod player;
pub mod position;

pub use error::AlerterError;
pub use player::PlayerAlertEngine;
pub use position::{BenchmarkTable, PositionBenchmark, PositionBenchmarkEngine, Tier, TierBenchmark};

use analytics::{NormalizedPlayer, normalize_squad};
use chrono::NaiveDate;
use configuration::Alerting;
use core_types::{Player, SquadAlerts, TeamSnapshot};
use serde::Serialize;
use tracing::info;

/// Everything a squad run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SquadReport {
    pub team_id: u64,
    pub team_name: String,
    pub as_of: NaiveDate,
    /// Player alerts followed by position alerts.
    pub alerts: SquadAlerts,
    pub benchmarks: BenchmarkTable,
    /// The normalized squad in usage order.
    pub players: Vec<NormalizedPlayer>,
}

/// Runs both alert engines over a team snapshot.
#[derive(Debug, Clone)]
pub struct SquadAlerter {
    players: PlayerAlertEngine,
    positions: PositionBenchmarkEngine,
}

impl SquadAlerter {
    pub fn new(params: Alerting, as_of: NaiveDate) -> Result<Self, AlerterError> {
        let positions = PositionBenchmarkEngine::new(params.include_secondary_positions);
        let players = PlayerAlertEngine::new(params, as_of)?;
        Ok(Self { players, positions })
    }

    pub fn as_of(&self) -> NaiveDate {
        self.players.as_of()
    }

    /// Normalizes the snapshot and evaluates the player rules, then the position rules.
    ///
    /// The position engine sees the whole squad. Expiry only ends a player's own rule
    /// evaluation.
    pub fn run(&self, team: &TeamSnapshot) -> SquadReport {
        let as_of = self.as_of();
        let players = normalize_squad(team, as_of);

        let mut alerts = self.players.evaluate(&players);
        let squad: Vec<Player> = players.iter().map(|p| p.player.clone()).collect();
        let (benchmarks, position_alerts) = self.positions.evaluate(&squad);
        let player_alert_count = alerts.len();
        alerts.extend(position_alerts);

        info!(
            team_id = team.team_id,
            team = %team.name,
            %as_of,
            squad = players.len(),
            player_alerts = player_alert_count,
            position_alerts = alerts.len() - player_alert_count,
            "Squad alert run complete."
        );

        SquadReport {
            team_id: team.team_id,
            team_name: team.name.clone(),
            as_of,
            alerts,
            benchmarks,
            players,
        }
    }
}
