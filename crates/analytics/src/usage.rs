//! Minutes-based usage of each squad member.
//!
//! The available playing time of a match is approximated by the most minutes any
//! single player of the team played in it.

use core_types::{Match, MatchParticipation, Player};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerUsage {
    pub player_id: u64,
    /// Index of the player in the squad the table was built from.
    pub roster_index: usize,
    pub total_minutes: u32,
    pub avg_minutes: f64,
    pub matches_played: usize,
    /// Share of the team's available minutes, in percent with one decimal.
    pub usage: f64,
}

/// Usage of the whole squad, ordered by descending usage.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UsageTable {
    pub available_minutes: u32,
    pub rows: Vec<PlayerUsage>,
}

impl UsageTable {
    pub fn get(&self, player_id: u64) -> Option<&PlayerUsage> {
        self.rows.iter().find(|row| row.player_id == player_id)
    }

    /// Usage of a player, 0 for players the table does not know.
    pub fn usage_of(&self, player_id: u64) -> f64 {
        self.get(player_id).map_or(0.0, |row| row.usage)
    }
}

/// Sum over the matches of the longest time any player of the team spent on the pitch.
pub fn available_minutes(matches: &[Match], participations: &[MatchParticipation]) -> u32 {
    let mut durations: HashMap<u64, u32> = matches.iter().map(|m| (m.match_id, 0)).collect();
    for fact in participations {
        if let Some(duration) = durations.get_mut(&fact.match_id) {
            *duration = (*duration).max(fact.minutes_played);
        }
    }
    durations.values().fold(0, |total, d| total.saturating_add(*d))
}

/// Aggregates participation facts per squad member.
///
/// Only facts belonging to one of `matches` are counted. Players without any
/// participation are kept with zero minutes and zero usage.
pub fn aggregate_usage(
    squad: &[Player],
    matches: &[Match],
    participations: &[MatchParticipation],
) -> UsageTable {
    let match_ids: HashSet<u64> = matches.iter().map(|m| m.match_id).collect();
    let available = available_minutes(matches, participations);

    let mut minutes: HashMap<u64, (u32, usize)> = HashMap::new();
    for fact in participations.iter().filter(|f| match_ids.contains(&f.match_id)) {
        let entry = minutes.entry(fact.player_id).or_insert((0, 0));
        entry.0 = entry.0.saturating_add(fact.minutes_played);
        entry.1 += 1;
    }

    let mut rows: Vec<PlayerUsage> = squad
        .iter()
        .enumerate()
        .map(|(roster_index, player)| {
            let (total_minutes, matches_played) =
                minutes.get(&player.player_id).copied().unwrap_or((0, 0));
            let avg_minutes = if matches_played > 0 {
                f64::from(total_minutes) / matches_played as f64
            } else {
                0.0
            };
            let usage = if available > 0 {
                round_one(f64::from(total_minutes) / f64::from(available) * 100.0)
            } else {
                0.0
            };
            PlayerUsage {
                player_id: player.player_id,
                roster_index,
                total_minutes,
                avg_minutes,
                matches_played,
                usage,
            }
        })
        .collect();

    // Stable: equal usage keeps roster order.
    rows.sort_by(|a, b| b.usage.total_cmp(&a.usage));

    if available == 0 {
        tracing::warn!(
            matches = matches.len(),
            "No playing time available; every player has zero usage."
        );
    }
    tracing::debug!(available, players = rows.len(), "Usage table computed.");

    UsageTable {
        available_minutes: available,
        rows,
    }
}

pub(crate) fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
