use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Team {team_id} could not be supplied by the data provider: {reason}")]
    TeamUnavailable { team_id: u64, reason: String },
}
