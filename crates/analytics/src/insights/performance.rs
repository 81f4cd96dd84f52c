use crate::usage::{aggregate_usage, round_one};
use core_types::{Match, Player, TeamSnapshot};
use serde::Serialize;

/// Number of most-used players that make up the core of the squad.
pub const CORE_SQUAD_SIZE: usize = 15;

/// Results on the pitch and squad quality of a team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceInsights {
    pub team_id: u64,
    pub team_name: String,
    pub primary_formation: Option<String>,
    pub secondary_formation: Option<String>,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub matches_won: usize,
    pub matches_drawn: usize,
    pub matches_lost: usize,
    pub goals_scored_per_game: f64,
    pub goals_conceded_per_game: f64,
    pub total_points: u32,
    pub points_per_game: f64,
    pub mean_skill: f64,
    pub mean_potential: f64,
    pub mean_skill_core: f64,
    pub mean_potential_core: f64,
    pub mean_skill_dev: f64,
}

/// League points earned in a match.
pub fn points(m: &Match) -> u32 {
    match m.goals_scored.cmp(&m.goals_conceded) {
        std::cmp::Ordering::Greater => 3,
        std::cmp::Ordering::Equal => 1,
        std::cmp::Ordering::Less => 0,
    }
}

/// The two most used formations, ties broken by first use.
///
/// With a single formation it is both primary and secondary.
pub fn team_formations(matches: &[Match]) -> (Option<String>, Option<String>) {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for formation in matches.iter().filter_map(|m| m.formation.as_deref()) {
        match counts.iter_mut().find(|(name, _)| *name == formation) {
            Some((_, count)) => *count += 1,
            None => counts.push((formation, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let primary = counts.first().map(|(name, _)| name.to_string());
    let secondary = counts
        .get(1)
        .map(|(name, _)| name.to_string())
        .or_else(|| primary.clone());
    (primary, secondary)
}

pub fn analyze_performance(team: &TeamSnapshot) -> PerformanceInsights {
    let matches = &team.matches;
    let match_points: Vec<u32> = matches.iter().map(points).collect();
    let goals_scored = saturating_total(matches.iter().map(|m| m.goals_scored));
    let goals_conceded = saturating_total(matches.iter().map(|m| m.goals_conceded));
    let total_points = saturating_total(match_points.iter().copied());
    let (primary_formation, secondary_formation) = team_formations(matches);

    // Squad means follow usage order so the core squad is the most used players.
    let usage = aggregate_usage(&team.squad, &team.matches, &team.participations);
    let by_usage: Vec<&Player> = usage
        .rows
        .iter()
        .filter_map(|row| team.squad.get(row.roster_index))
        .collect();
    let core = &by_usage[..by_usage.len().min(CORE_SQUAD_SIZE)];

    PerformanceInsights {
        team_id: team.team_id,
        team_name: team.name.clone(),
        primary_formation,
        secondary_formation,
        goals_scored,
        goals_conceded,
        matches_won: match_points.iter().filter(|p| **p == 3).count(),
        matches_drawn: match_points.iter().filter(|p| **p == 1).count(),
        matches_lost: match_points.iter().filter(|p| **p == 0).count(),
        goals_scored_per_game: per_game(goals_scored, matches.len()),
        goals_conceded_per_game: per_game(goals_conceded, matches.len()),
        total_points,
        points_per_game: per_game(total_points, matches.len()),
        mean_skill: mean(by_usage.iter().map(|p| p.skill)),
        mean_potential: mean(by_usage.iter().map(|p| p.potential)),
        mean_skill_core: mean(core.iter().map(|p| p.skill)),
        mean_potential_core: mean(core.iter().map(|p| p.potential)),
        mean_skill_dev: mean(by_usage.iter().map(|p| p.skill_dev)),
    }
}

fn saturating_total(values: impl Iterator<Item = u32>) -> u32 {
    values.fold(0, |total, v| total.saturating_add(v))
}

fn per_game(total: u32, games: usize) -> f64 {
    if games == 0 {
        return 0.0;
    }
    round_one(f64::from(total) / games as f64)
}

/// Mean rounded to one decimal, 0 for an empty sequence.
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return 0.0;
    }
    round_one(sum / count as f64)
}
