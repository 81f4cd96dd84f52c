use crate::tenure::{NormalizedPlayer, floor_thousand, normalize_squad};
use crate::usage::round_one;
use chrono::NaiveDate;
use core_types::TeamSnapshot;
use rust_decimal::Decimal;
use serde::Serialize;

/// Financial output of a squad. Amounts are floored to the thousand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueInsights {
    pub team_id: u64,
    pub team_name: String,
    pub mean_age: f64,
    pub mean_etv: Decimal,
    pub total_etv: Decimal,
    pub mean_market_value: Decimal,
    pub total_market_value: Decimal,
    pub mean_etv_dev: Decimal,
    pub total_etv_dev: Decimal,
    pub mean_etv_revenue: Decimal,
    pub total_etv_revenue: Decimal,
    pub mean_value_added: Decimal,
    pub total_value_added: Decimal,
    pub total_academy_etv: Decimal,
    pub total_academy_etv_dev: Decimal,
}

pub fn analyze_revenue(team: &TeamSnapshot, as_of: NaiveDate) -> RevenueInsights {
    let squad = normalize_squad(team, as_of);
    let academy: Vec<&NormalizedPlayer> = squad.iter().filter(|p| p.academy_player).collect();

    let ages: Vec<f64> = squad.iter().filter_map(|p| p.age).collect();
    let mean_age = if ages.is_empty() {
        0.0
    } else {
        round_one(ages.iter().sum::<f64>() / ages.len() as f64)
    };

    let (mean_etv, total_etv) = mean_and_total(&squad, |p| p.etv_current);
    let (mean_market_value, total_market_value) = mean_and_total(&squad, |p| p.market_value);
    let (mean_etv_dev, total_etv_dev) = mean_and_total(&squad, |p| p.etv_dev);
    let (mean_etv_revenue, total_etv_revenue) = mean_and_total(&squad, |p| p.etv_revenue);
    let (mean_value_added, total_value_added) = mean_and_total(&squad, |p| p.value_added);

    RevenueInsights {
        team_id: team.team_id,
        team_name: team.name.clone(),
        mean_age,
        mean_etv,
        total_etv,
        mean_market_value,
        total_market_value,
        mean_etv_dev,
        total_etv_dev,
        mean_etv_revenue,
        total_etv_revenue,
        mean_value_added,
        total_value_added,
        total_academy_etv: floor_thousand(academy.iter().map(|p| p.etv_current).sum()),
        total_academy_etv_dev: floor_thousand(academy.iter().map(|p| p.etv_dev).sum()),
    }
}

fn mean_and_total<F>(squad: &[NormalizedPlayer], amount: F) -> (Decimal, Decimal)
where
    F: Fn(&NormalizedPlayer) -> Decimal,
{
    let total: Decimal = squad.iter().map(amount).sum();
    if squad.is_empty() {
        return (Decimal::ZERO, Decimal::ZERO);
    }
    let mean = total / Decimal::from(squad.len());
    (floor_thousand(mean), floor_thousand(total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, player, team, transfer};
    use rust_decimal_macros::dec;

    #[test]
    fn aggregates_squad_value_and_academy_output() {
        let mut graduate = player(1, "Graduate");
        graduate.etv_current = Some(dec!(1500000));
        graduate.etv_dev = Some(dec!(250000));
        graduate.market_value = Some(dec!(1000000));
        graduate.birth_date = Some(date(2004, 7, 1));

        let mut signing = player(2, "Signing");
        signing.etv_current = Some(dec!(501000));
        signing.etv_dev = Some(dec!(-100000));
        signing.market_value = Some(dec!(2000000));
        signing.birth_date = None;

        let mut promotion = transfer(1, 1, 1, date(2022, 7, 1));
        promotion.is_internal = true;

        let mut team = team(vec![graduate, signing]);
        team.transfers = vec![promotion];

        let insights = analyze_revenue(&team, date(2024, 7, 1));
        assert_eq!(insights.total_etv, dec!(2001000));
        assert_eq!(insights.mean_etv, dec!(1000000));
        assert_eq!(insights.total_market_value, dec!(3000000));
        assert_eq!(insights.total_etv_dev, dec!(150000));
        assert_eq!(insights.total_academy_etv, dec!(1500000));
        assert_eq!(insights.total_academy_etv_dev, dec!(250000));
        // Only the graduate has a birth date.
        assert_eq!(insights.mean_age, 20.0);
    }

    #[test]
    fn empty_squad_yields_zeros() {
        let insights = analyze_revenue(&team(vec![]), date(2024, 7, 1));
        assert_eq!(insights.total_etv, Decimal::ZERO);
        assert_eq!(insights.mean_value_added, Decimal::ZERO);
        assert_eq!(insights.mean_age, 0.0);
    }
}
