//! Contract horizons, acquisition costs and value deltas per squad member.

use crate::usage::{PlayerUsage, aggregate_usage};
use chrono::{Datelike, NaiveDate};
use core_types::{Player, TeamSnapshot, Transfer};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::HashMap;

/// What the club paid to bring a player in, taken from the latest inbound transfer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Acquisition {
    pub paid_fee: Decimal,
    pub academy_player: bool,
    pub starting_market_value: Decimal,
}

/// A squad member with usage and financial figures resolved for one as-of date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedPlayer {
    pub player: Player,
    pub usage: PlayerUsage,
    pub operative_expiry: Option<NaiveDate>,
    pub months_left: Option<i32>,
    pub age: Option<f64>,
    pub academy_player: bool,
    pub paid_fee: Decimal,
    pub market_value: Decimal,
    pub etv_current: Decimal,
    pub etv_dev: Decimal,
    /// Estimated transfer value minus the fee paid. Zero for loaned players.
    pub etv_revenue: Decimal,
    /// Market value gained since the acquisition. Zero for loaned players and players
    /// without a recorded acquisition.
    pub value_added: Decimal,
}

/// Floors an amount to a whole thousand, rounding towards negative infinity.
pub fn floor_thousand(amount: Decimal) -> Decimal {
    (amount / dec!(1000)).floor() * dec!(1000)
}

/// Calendar months between `as_of` and `expiry`, ignoring the day of month.
pub fn months_between(as_of: NaiveDate, expiry: NaiveDate) -> i32 {
    (expiry.year() - as_of.year()) * 12 + expiry.month() as i32 - as_of.month() as i32
}

/// Age in fractional years on `as_of`.
pub fn age_on(birth_date: NaiveDate, as_of: NaiveDate) -> f64 {
    (as_of - birth_date).num_days() as f64 / 365.25
}

/// The latest non loan-return inbound transfer per player.
///
/// Transfers are stable-sorted by date, newest first, and the first record per player
/// wins, so same-day duplicates resolve to the one listed first.
pub fn latest_acquisitions(team_id: u64, transfers: &[Transfer]) -> HashMap<u64, Acquisition> {
    let mut inbound: Vec<&Transfer> = transfers
        .iter()
        .filter(|t| t.to_team_id == team_id && !t.is_end_loan)
        .collect();
    inbound.sort_by(|a, b| b.transfer_date.cmp(&a.transfer_date));

    let mut acquisitions = HashMap::new();
    for transfer in inbound {
        acquisitions
            .entry(transfer.player_id)
            .or_insert_with(|| Acquisition {
                paid_fee: floor_thousand(transfer.fee.unwrap_or_default()),
                academy_player: transfer.is_internal,
                starting_market_value: floor_thousand(transfer.market_value.unwrap_or_default()),
            });
    }
    acquisitions
}

/// Resolves usage, tenure and financial figures for every squad member.
///
/// The result follows usage order (highest usage first).
pub fn normalize_squad(team: &TeamSnapshot, as_of: NaiveDate) -> Vec<NormalizedPlayer> {
    let usage = aggregate_usage(&team.squad, &team.matches, &team.participations);
    let acquisitions = latest_acquisitions(team.team_id, &team.transfers);

    usage
        .rows
        .into_iter()
        .filter_map(|row| {
            let player = team.squad.get(row.roster_index)?;
            Some(normalize_player(player, row, acquisitions.get(&player.player_id), as_of))
        })
        .collect()
}

fn normalize_player(
    player: &Player,
    usage: PlayerUsage,
    acquisition: Option<&Acquisition>,
    as_of: NaiveDate,
) -> NormalizedPlayer {
    let operative_expiry = player.operative_expiry();
    let market_value = floor_thousand(player.market_value.unwrap_or_default());
    let etv_current = floor_thousand(player.etv_current.unwrap_or_default());
    let etv_dev = floor_thousand(player.etv_dev.unwrap_or_default());
    let paid_fee = acquisition.map_or(Decimal::ZERO, |a| a.paid_fee);

    let (etv_revenue, value_added) = if player.on_loan {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        let value_added = acquisition.map_or(Decimal::ZERO, |a| {
            floor_thousand(market_value - a.starting_market_value)
        });
        (floor_thousand(etv_current - paid_fee), value_added)
    };

    NormalizedPlayer {
        operative_expiry,
        months_left: operative_expiry.map(|expiry| months_between(as_of, expiry)),
        age: player.birth_date.map(|birth| age_on(birth, as_of)),
        academy_player: acquisition.is_some_and(|a| a.academy_player),
        paid_fee,
        market_value,
        etv_current,
        etv_dev,
        etv_revenue,
        value_added,
        usage,
        player: player.clone(),
    }
}
