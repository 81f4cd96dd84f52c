use core_types::{Alert, AlertType, Position, SquadAlerts};
use serde::Serialize;
use std::fmt;

/// Prefix of every label the planner creates.
pub const LABEL_PREFIX: &str = "Virtual Director";

/// The squad tier a scouting task is meant to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScoutingLevel {
    Starter,
    BackUp,
    SecondaryBackUp,
}

impl ScoutingLevel {
    pub fn code(&self) -> &'static str {
        match self {
            ScoutingLevel::Starter => "Starter",
            ScoutingLevel::BackUp => "BackUp",
            ScoutingLevel::SecondaryBackUp => "SecondaryBackUp",
        }
    }
}

impl fmt::Display for ScoutingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A position and tier to recruit for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScoutingTask {
    pub position: Position,
    pub level: ScoutingLevel,
}

impl ScoutingTask {
    pub fn new(position: Position, level: ScoutingLevel) -> Self {
        Self { position, level }
    }

    /// Derives a task from a position alert.
    ///
    /// Weak spots map to their own tier and a lack of depth to the secondary back-up.
    /// Player alerts and alerts on `Other` yield nothing.
    pub fn from_alert(alert: &Alert) -> Option<Self> {
        if alert.position == Position::Other {
            return None;
        }
        let level = match alert.alert_type {
            AlertType::WeakSpotStarter => ScoutingLevel::Starter,
            AlertType::WeakSpotBackUp => ScoutingLevel::BackUp,
            AlertType::WeakSpotSecondary | AlertType::LackOfDepth => ScoutingLevel::SecondaryBackUp,
            _ => return None,
        };
        Some(Self::new(alert.position, level))
    }

    /// e.g. `LeftBack_Starter`
    pub fn key(&self) -> String {
        format!("{}_{}", self.position.code(), self.level)
    }

    pub fn label(&self) -> String {
        format!("{LABEL_PREFIX}: {}", self.key())
    }
}

/// The distinct tasks implied by a run's alerts, in alert order.
pub fn tasks_from_alerts(alerts: &SquadAlerts) -> Vec<ScoutingTask> {
    let mut tasks: Vec<ScoutingTask> = Vec::new();
    for task in alerts.iter().filter_map(ScoutingTask::from_alert) {
        if !tasks.contains(&task) {
            tasks.push(task);
        }
    }
    tasks
}
