use crate::error::PlannerError;
use crate::ports::{Collaboration, PlayerSearch};
use crate::task::ScoutingTask;
use analytics::insights::{PerformanceInsights, TransferInsights};
use serde::Serialize;
use tracing::info;

/// Most inbound market nations a search is restricted to.
pub const MAX_SEARCH_NATIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoutingList {
    pub key: String,
    pub label: String,
    pub players: Vec<u64>,
}

/// Scouting lists per task, in task order. Tasks without results have no list.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ScoutingPlan {
    pub lists: Vec<ScoutingList>,
}

impl ScoutingPlan {
    pub fn get(&self, key: &str) -> Option<&ScoutingList> {
        self.lists.iter().find(|l| l.key == key)
    }
}

/// Runs a player search per scouting task and publishes the results as labels.
///
/// The search is shaped by the team's own profile: the leagues it usually buys from,
/// the mean skill of its most used players and the largest fee it has paid.
pub struct ScoutingPlanner<'a, S: PlayerSearch, C: Collaboration> {
    search: &'a mut S,
    collaboration: &'a mut C,
    inbound: &'a TransferInsights,
    performance: &'a PerformanceInsights,
}

impl<'a, S: PlayerSearch, C: Collaboration> ScoutingPlanner<'a, S, C> {
    pub fn new(
        search: &'a mut S,
        collaboration: &'a mut C,
        inbound: &'a TransferInsights,
        performance: &'a PerformanceInsights,
    ) -> Self {
        Self {
            search,
            collaboration,
            inbound,
            performance,
        }
    }

    /// Executes every task, then creates its label and assigns it to the players found.
    pub fn create_scouting_plan(&mut self, tasks: &[ScoutingTask]) -> Result<ScoutingPlan, PlannerError> {
        let mut plan = ScoutingPlan::default();
        for task in tasks {
            let players = self.execute_task(task)?;
            let label = task.label();
            self.collaboration.add_label(&label)?;
            if !players.is_empty() {
                self.collaboration.put_player_labels(&label, &players)?;
                plan.lists.push(ScoutingList {
                    key: task.key(),
                    label,
                    players,
                });
            }
        }
        info!(tasks = tasks.len(), lists = plan.lists.len(), "Scouting plan created.");
        Ok(plan)
    }

    fn execute_task(&mut self, task: &ScoutingTask) -> Result<Vec<u64>, PlannerError> {
        let nations = self.search_nations();
        self.search.set_league_selection(&nations);
        self.search.set_position(task.position);

        let benchmark = self.performance.mean_skill_core;
        let budget = self.inbound.fee_range.max;
        let players = self.search.find_recommended_players(benchmark, budget)?;

        info!(
            task = %task.key(),
            found = players.len(),
            benchmark,
            %budget,
            "Compatible players found."
        );
        Ok(players)
    }

    fn search_nations(&self) -> Vec<String> {
        self.inbound
            .market_shares
            .iter()
            .take(MAX_SEARCH_NATIONS)
            .map(|s| s.nation.clone())
            .collect()
    }
}
