use core_types::{TeamSnapshot, Transfer};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransferDirection {
    Inbound,
    Outbound,
}

/// Minimum, mean and maximum of a set of values. All zero for an empty set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ValueRange<T> {
    pub min: T,
    pub mean: T,
    pub max: T,
}

/// Share of transfers involving a given league nation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketShare {
    pub nation: String,
    pub share: f64,
}

/// Typical transfer behaviour of a team in one direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferInsights {
    pub team_id: u64,
    pub team_name: String,
    pub direction: TransferDirection,
    pub total_transfers: usize,
    /// Fees spent (inbound) or earned (outbound), loans excluded.
    pub total_fees: Decimal,
    /// Fraction of the transfers that were loans.
    pub loan_ratio: f64,
    /// Fraction of the permanent transfers that involved no fee.
    pub free_ratio: f64,
    pub fee_range: ValueRange<Decimal>,
    pub market_value_range: ValueRange<Decimal>,
    pub contract_years_left_range: ValueRange<f64>,
    /// Counterpart league nations, most frequent first.
    pub market_shares: Vec<MarketShare>,
}

/// Summarizes the team's inbound or outbound transfers, loan returns excluded.
pub fn analyze_transfers(team: &TeamSnapshot, direction: TransferDirection) -> TransferInsights {
    let mut sample: Vec<&Transfer> = team
        .transfers
        .iter()
        .filter(|t| !t.is_end_loan)
        .filter(|t| match direction {
            TransferDirection::Inbound => t.to_team_id == team.team_id,
            TransferDirection::Outbound => t.to_team_id != team.team_id,
        })
        .collect();
    sample.sort_by(|a, b| b.transfer_date.cmp(&a.transfer_date));

    let permanent: Vec<&Transfer> = sample.iter().copied().filter(|t| !t.is_loan).collect();
    let fees: Vec<Decimal> = permanent.iter().map(|t| t.fee.unwrap_or_default()).collect();
    let market_values: Vec<Decimal> = permanent
        .iter()
        .map(|t| t.market_value.unwrap_or_default())
        .collect();
    let contract_years: Vec<f64> = permanent.iter().map(|t| contract_years_left(t)).collect();

    let loans = sample.iter().filter(|t| t.is_loan).count();
    let free = fees.iter().filter(|fee| fee.is_zero()).count();

    let nations = sample.iter().map(|t| match direction {
        TransferDirection::Inbound => t.from_league_nation.as_str(),
        TransferDirection::Outbound => t.to_league_nation.as_str(),
    });

    TransferInsights {
        team_id: team.team_id,
        team_name: team.name.clone(),
        direction,
        total_transfers: sample.len(),
        total_fees: fees.iter().sum(),
        loan_ratio: ratio(loans, sample.len()),
        free_ratio: ratio(free, permanent.len()),
        fee_range: decimal_range(&fees),
        market_value_range: decimal_range(&market_values),
        contract_years_left_range: float_range(&contract_years),
        market_shares: market_shares(nations),
    }
}

/// Years of contract the player had left when the transfer happened.
fn contract_years_left(transfer: &Transfer) -> f64 {
    let contract_date = transfer.contract_date.unwrap_or(transfer.transfer_date);
    (contract_date - transfer.transfer_date).num_days() as f64 / 365.0
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

fn decimal_range(values: &[Decimal]) -> ValueRange<Decimal> {
    let (Some(min), Some(max)) = (values.iter().min(), values.iter().max()) else {
        return ValueRange::default();
    };
    let sum: Decimal = values.iter().sum();
    ValueRange {
        min: *min,
        mean: sum / Decimal::from(values.len()),
        max: *max,
    }
}

fn float_range(values: &[f64]) -> ValueRange<f64> {
    if values.is_empty() {
        return ValueRange::default();
    }
    ValueRange {
        min: values.iter().copied().fold(f64::INFINITY, f64::min),
        mean: values.iter().sum::<f64>() / values.len() as f64,
        max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    }
}

/// Normalized counts of non-empty nations, most frequent first, ties by first appearance.
fn market_shares<'a>(nations: impl Iterator<Item = &'a str>) -> Vec<MarketShare> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for nation in nations.filter(|n| !n.is_empty()) {
        match counts.iter_mut().find(|(name, _)| *name == nation) {
            Some((_, count)) => *count += 1,
            None => counts.push((nation, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let total: usize = counts.iter().map(|(_, count)| count).sum();
    counts
        .into_iter()
        .map(|(nation, count)| MarketShare {
            nation: nation.to_string(),
            share: ratio(count, total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, team, transfer};
    use rust_decimal_macros::dec;

    fn club() -> TeamSnapshot {
        let mut bought = transfer(1, 20, 1, date(2023, 7, 1));
        bought.fee = Some(dec!(2000000));
        bought.market_value = Some(dec!(1800000));
        bought.from_league_nation = "NLD".to_string();
        bought.contract_date = Some(date(2027, 6, 30));

        let mut free = transfer(2, 30, 1, date(2023, 1, 15));
        free.from_league_nation = "BEL".to_string();

        let mut loan = transfer(3, 40, 1, date(2024, 1, 31));
        loan.is_loan = true;
        loan.fee = Some(dec!(300000));
        loan.from_league_nation = "NLD".to_string();

        let mut loan_return = transfer(4, 50, 1, date(2024, 6, 30));
        loan_return.is_end_loan = true;
        loan_return.from_league_nation = "DEU".to_string();

        let mut sold = transfer(5, 1, 60, date(2023, 8, 31));
        sold.fee = Some(dec!(7500000));
        sold.to_league_nation = "ENG".to_string();

        let mut team = team(vec![]);
        team.transfers = vec![bought, free, loan, loan_return, sold];
        team
    }

    #[test]
    fn inbound_money_statistics_exclude_loans() {
        let insights = analyze_transfers(&club(), TransferDirection::Inbound);
        assert_eq!(insights.total_transfers, 3);
        assert_eq!(insights.total_fees, dec!(2000000));
        assert!((insights.loan_ratio - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(insights.free_ratio, 0.5);
        assert_eq!(insights.fee_range.min, Decimal::ZERO);
        assert_eq!(insights.fee_range.mean, dec!(1000000));
        assert_eq!(insights.fee_range.max, dec!(2000000));
        assert!(insights.contract_years_left_range.max > 3.9);
        assert_eq!(insights.contract_years_left_range.min, 0.0);
    }

    #[test]
    fn market_shares_are_sorted_and_normalized() {
        let insights = analyze_transfers(&club(), TransferDirection::Inbound);
        let nations: Vec<&str> = insights.market_shares.iter().map(|m| m.nation.as_str()).collect();
        assert_eq!(nations, vec!["NLD", "BEL"]);
        assert!((insights.market_shares[0].share - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn outbound_uses_the_destination_nation() {
        let insights = analyze_transfers(&club(), TransferDirection::Outbound);
        assert_eq!(insights.total_transfers, 1);
        assert_eq!(insights.total_fees, dec!(7500000));
        assert_eq!(insights.market_shares[0].nation, "ENG");
        assert_eq!(insights.market_shares[0].share, 1.0);
    }

    #[test]
    fn empty_history_yields_zeros() {
        let insights = analyze_transfers(&team(vec![]), TransferDirection::Inbound);
        assert_eq!(insights.total_transfers, 0);
        assert_eq!(insights.loan_ratio, 0.0);
        assert_eq!(insights.free_ratio, 0.0);
        assert_eq!(insights.fee_range, ValueRange::default());
        assert!(insights.market_shares.is_empty());
    }
}
