use analytics::insights::{TransferDirection, analyze_performance, analyze_transfers};
use chrono::NaiveDate;
use core_types::{
    Alert, AlertPriority, AlertType, Player, Position, SquadAlerts, TeamSnapshot, Transfer,
};
use planner::{
    Collaboration, InMemoryCollaboration, PlannerError, PlayerSearch, ScoutingLevel,
    ScoutingPlanner, ScoutingTask, tasks_from_alerts,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Records the criteria of every search and answers from a fixed table.
#[derive(Default)]
struct FakeSearch {
    nations: Vec<String>,
    position: Option<Position>,
    searches: Vec<(Position, f64, Decimal)>,
    fail: bool,
}

impl PlayerSearch for FakeSearch {
    fn set_league_selection(&mut self, nations: &[String]) {
        self.nations = nations.to_vec();
    }

    fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }

    fn find_recommended_players(
        &mut self,
        benchmark: f64,
        budget: Decimal,
    ) -> Result<Vec<u64>, PlannerError> {
        if self.fail {
            return Err(PlannerError::Search("service unavailable".to_string()));
        }
        let position = self.position.unwrap_or_default();
        self.searches.push((position, benchmark, budget));
        Ok(match position {
            Position::LeftBack => vec![11, 12],
            Position::Goalkeeper => vec![21],
            _ => Vec::new(),
        })
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn inbound(player_id: u64, nation: &str, fee: Decimal) -> Transfer {
    Transfer {
        player_id,
        player_name: format!("Signing {player_id}"),
        from_team_id: 500 + player_id,
        from_team_name: String::new(),
        from_league_id: None,
        from_league_name: String::new(),
        from_league_nation: nation.to_string(),
        to_team_id: 1,
        to_team_name: "Test FC".to_string(),
        to_league_id: None,
        to_league_name: String::new(),
        to_league_nation: "Netherlands".to_string(),
        fee: Some(fee),
        is_internal: false,
        is_loan: false,
        is_end_loan: false,
        market_value: None,
        transfer_date: date(2023, 7, 1),
        contract_date: None,
    }
}

fn squad_member(player_id: u64, skill: f64) -> Player {
    Player {
        player_id,
        team_id: 1,
        name: format!("Player {player_id}"),
        birth_date: None,
        contract_end: None,
        loan_end: None,
        on_loan: false,
        first_position: Position::CentreBack,
        second_position: None,
        third_position: None,
        skill,
        skill_dev: 0.0,
        potential: skill,
        market_value: None,
        etv_current: None,
        etv_dev: None,
    }
}

fn team() -> TeamSnapshot {
    let mut transfers = vec![
        inbound(1, "Netherlands", dec!(250000)),
        inbound(2, "Belgium", dec!(2500000)),
        inbound(3, "Netherlands", dec!(0)),
        inbound(4, "Belgium", dec!(400000)),
        inbound(5, "Netherlands", dec!(100000)),
    ];
    let singles = [
        "Denmark", "Sweden", "Norway", "Austria", "Switzerland", "Poland", "Croatia", "Serbia",
        "Greece", "Portugal",
    ];
    for (i, nation) in singles.iter().enumerate() {
        transfers.push(inbound(10 + i as u64, nation, dec!(50000)));
    }

    TeamSnapshot {
        team_id: 1,
        name: "Test FC".to_string(),
        squad: vec![squad_member(1, 60.0), squad_member(2, 70.0)],
        transfers,
        ..Default::default()
    }
}

fn tasks() -> Vec<ScoutingTask> {
    vec![
        ScoutingTask::new(Position::LeftBack, ScoutingLevel::Starter),
        ScoutingTask::new(Position::CentreForward, ScoutingLevel::SecondaryBackUp),
    ]
}

#[test]
fn searches_use_the_team_profile() {
    let team = team();
    let inbound = analyze_transfers(&team, TransferDirection::Inbound);
    let performance = analyze_performance(&team);
    let mut search = FakeSearch::default();
    let mut collab = InMemoryCollaboration::new();

    ScoutingPlanner::new(&mut search, &mut collab, &inbound, &performance)
        .create_scouting_plan(&tasks())
        .unwrap();

    assert_eq!(search.nations.len(), 10);
    assert_eq!(&search.nations[..3], ["Netherlands", "Belgium", "Denmark"]);
    assert!(!search.nations.iter().any(|n| n == "Greece" || n == "Portugal"));
    assert_eq!(search.searches, vec![
        (Position::LeftBack, 65.0, dec!(2500000)),
        (Position::CentreForward, 65.0, dec!(2500000)),
    ]);
}

#[test]
fn only_tasks_with_results_get_a_list() {
    let team = team();
    let inbound = analyze_transfers(&team, TransferDirection::Inbound);
    let performance = analyze_performance(&team);
    let mut search = FakeSearch::default();
    let mut collab = InMemoryCollaboration::new();

    let plan = ScoutingPlanner::new(&mut search, &mut collab, &inbound, &performance)
        .create_scouting_plan(&tasks())
        .unwrap();

    assert_eq!(plan.lists.len(), 1);
    let list = plan.get("LeftBack_Starter").unwrap();
    assert_eq!(list.label, "Virtual Director: LeftBack_Starter");
    assert_eq!(list.players, vec![11, 12]);
    assert!(plan.get("CentreForward_SecondaryBackUp").is_none());

    let labelled: Vec<u64> = collab
        .label("Virtual Director: LeftBack_Starter")
        .unwrap()
        .players
        .iter()
        .copied()
        .collect();
    assert_eq!(labelled, vec![11, 12]);
    // The label is created even when the search came back empty.
    assert!(collab.get_label("Virtual Director: CentreForward_SecondaryBackUp").is_some());
}

#[test]
fn search_failures_abort_the_plan() {
    let team = team();
    let inbound = analyze_transfers(&team, TransferDirection::Inbound);
    let performance = analyze_performance(&team);
    let mut search = FakeSearch {
        fail: true,
        ..Default::default()
    };
    let mut collab = InMemoryCollaboration::new();

    let err = ScoutingPlanner::new(&mut search, &mut collab, &inbound, &performance)
        .create_scouting_plan(&tasks())
        .unwrap_err();
    assert_eq!(err, PlannerError::Search("service unavailable".to_string()));
    assert_eq!(collab.labels().count(), 0);
}

#[test]
fn alerts_drive_the_plan() {
    let mut alerts = SquadAlerts::new();
    alerts.push(Alert::for_position(
        AlertType::WeakSpotStarter,
        AlertPriority::High,
        Position::Goalkeeper,
    ));
    alerts.push(Alert::for_position(
        AlertType::LackOfDepth,
        AlertPriority::Medium,
        Position::LeftBack,
    ));

    let team = team();
    let inbound = analyze_transfers(&team, TransferDirection::Inbound);
    let performance = analyze_performance(&team);
    let mut search = FakeSearch::default();
    let mut collab = InMemoryCollaboration::new();

    let plan = ScoutingPlanner::new(&mut search, &mut collab, &inbound, &performance)
        .create_scouting_plan(&tasks_from_alerts(&alerts))
        .unwrap();

    let keys: Vec<&str> = plan.lists.iter().map(|l| l.key.as_str()).collect();
    assert_eq!(keys, vec!["Goalkeeper_Starter", "LeftBack_SecondaryBackUp"]);
}

#[test]
fn an_empty_transfer_history_searches_everywhere_without_budget() {
    let mut team = team();
    team.transfers.clear();
    let inbound = analyze_transfers(&team, TransferDirection::Inbound);
    let performance = analyze_performance(&team);
    let mut search = FakeSearch::default();
    let mut collab = InMemoryCollaboration::new();

    ScoutingPlanner::new(&mut search, &mut collab, &inbound, &performance)
        .create_scouting_plan(&tasks()[..1])
        .unwrap();
    assert!(search.nations.is_empty());
    assert_eq!(search.searches[0].2, Decimal::ZERO);
}
