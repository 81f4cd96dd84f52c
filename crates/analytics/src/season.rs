//! Benchmarking all teams of a season against each other.

use crate::error::AnalyticsError;
use crate::insights::{
    PerformanceInsights, RevenueInsights, TransferDirection, TransferInsights,
    analyze_performance, analyze_revenue, analyze_transfers,
};
use chrono::NaiveDate;
use core_types::{Season, TeamSnapshot};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

/// Supplies the full snapshot of a team. Implemented by the data-provider layer.
pub trait TeamProvider {
    fn team(&self, team_id: u64) -> Result<TeamSnapshot, AnalyticsError>;
}

/// A provider backed by snapshots that are already in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTeams {
    teams: HashMap<u64, TeamSnapshot>,
}

impl InMemoryTeams {
    pub fn new(teams: impl IntoIterator<Item = TeamSnapshot>) -> Self {
        Self {
            teams: teams.into_iter().map(|t| (t.team_id, t)).collect(),
        }
    }
}

impl TeamProvider for InMemoryTeams {
    fn team(&self, team_id: u64) -> Result<TeamSnapshot, AnalyticsError> {
        self.teams
            .get(&team_id)
            .cloned()
            .ok_or_else(|| AnalyticsError::TeamUnavailable {
                team_id,
                reason: "no snapshot loaded for this team".to_string(),
            })
    }
}

/// One row per team for every insight kind, in the season's team order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonReport {
    pub league_name: String,
    pub season_name: String,
    pub performance: Vec<PerformanceInsights>,
    pub inbound_transfers: Vec<TransferInsights>,
    pub outbound_transfers: Vec<TransferInsights>,
    pub revenue: Vec<RevenueInsights>,
}

/// All teams of a season, ready to be analyzed side by side.
#[derive(Debug, Clone)]
pub struct SeasonInsights {
    season: Season,
    teams: Vec<TeamSnapshot>,
}

impl SeasonInsights {
    /// Fetches every team taking part in `season` from the provider.
    pub fn load<P: TeamProvider>(season: Season, provider: &P) -> Result<Self, AnalyticsError> {
        let teams = season
            .team_ids()
            .into_iter()
            .map(|team_id| provider.team(team_id))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            league = %season.league_name,
            season = %season.season_name,
            teams = teams.len(),
            "Season teams loaded."
        );
        Ok(Self { season, teams })
    }

    pub fn teams(&self) -> &[TeamSnapshot] {
        &self.teams
    }

    /// Computes the insights of every team. Teams are analyzed in parallel; the output
    /// keeps the season's team order.
    pub fn analyze(&self, as_of: NaiveDate) -> SeasonReport {
        let rows: Vec<_> = self
            .teams
            .par_iter()
            .map(|team| {
                (
                    analyze_performance(team),
                    analyze_transfers(team, TransferDirection::Inbound),
                    analyze_transfers(team, TransferDirection::Outbound),
                    analyze_revenue(team, as_of),
                )
            })
            .collect();

        let mut report = SeasonReport {
            league_name: self.season.league_name.clone(),
            season_name: self.season.season_name.clone(),
            performance: Vec::with_capacity(rows.len()),
            inbound_transfers: Vec::with_capacity(rows.len()),
            outbound_transfers: Vec::with_capacity(rows.len()),
            revenue: Vec::with_capacity(rows.len()),
        };
        for (performance, inbound, outbound, revenue) in rows {
            report.performance.push(performance);
            report.inbound_transfers.push(inbound);
            report.outbound_transfers.push(outbound);
            report.revenue.push(revenue);
        }
        report
    }
}
