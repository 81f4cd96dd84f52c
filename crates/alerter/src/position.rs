//! Position group benchmarks and the depth/strength rules evaluated on them.
//!
//! Each of the ten canonical positions is benchmarked by its three best players. The
//! groups are then ranked against each other; the current run's groups are the only
//! comparison population.

use core_types::{Alert, AlertPriority, AlertType, Player, Position, SquadAlerts};
use serde::Serialize;
use std::cmp::Ordering;

/// Number of bottom-ranked groups that count as weak.
const WEAK_BAND: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tier {
    Starter,
    BackUp,
    SecondaryBackUp,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Starter, Tier::BackUp, Tier::SecondaryBackUp];

    /// The weak-spot alert raised for this tier and its fixed priority.
    pub fn weak_spot_alert(&self) -> (AlertType, AlertPriority) {
        match self {
            Tier::Starter => (AlertType::WeakSpotStarter, AlertPriority::High),
            Tier::BackUp => (AlertType::WeakSpotBackUp, AlertPriority::Medium),
            Tier::SecondaryBackUp => (AlertType::WeakSpotSecondary, AlertPriority::Low),
        }
    }
}

/// Skill and potential of the n-th best player of a group, with the group's rank on both.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TierBenchmark {
    pub skill: f64,
    pub potential: f64,
    pub skill_rank: usize,
    pub potential_rank: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionBenchmark {
    pub position: Position,
    /// Members of the group by descending skill.
    pub members: Vec<u64>,
    pub starter: TierBenchmark,
    pub back_up: TierBenchmark,
    pub secondary_back_up: TierBenchmark,
}

impl PositionBenchmark {
    pub fn tier(&self, tier: Tier) -> &TierBenchmark {
        match tier {
            Tier::Starter => &self.starter,
            Tier::BackUp => &self.back_up,
            Tier::SecondaryBackUp => &self.secondary_back_up,
        }
    }

    fn tier_mut(&mut self, tier: Tier) -> &mut TierBenchmark {
        match tier {
            Tier::Starter => &mut self.starter,
            Tier::BackUp => &mut self.back_up,
            Tier::SecondaryBackUp => &mut self.secondary_back_up,
        }
    }

    /// A group lacks depth when any of its three tiers has no skill at all.
    pub fn lacks_depth(&self) -> bool {
        Tier::ALL.iter().any(|t| self.tier(*t).skill == 0.0)
    }
}

/// The ranked benchmarks of all ten canonical positions, in canonical order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BenchmarkTable {
    pub groups: Vec<PositionBenchmark>,
}

impl BenchmarkTable {
    pub fn get(&self, position: Position) -> Option<&PositionBenchmark> {
        self.groups.iter().find(|g| g.position == position)
    }

    /// True when the group's rank on both skill and potential of `tier` is among the
    /// bottom three of the table.
    pub fn is_weak(&self, group: &PositionBenchmark, tier: Tier) -> bool {
        let max_skill_rank = self.max_rank(|g| g.tier(tier).skill_rank);
        let max_potential_rank = self.max_rank(|g| g.tier(tier).potential_rank);
        let bench = group.tier(tier);
        bench.skill_rank > max_skill_rank.saturating_sub(WEAK_BAND)
            && bench.potential_rank > max_potential_rank.saturating_sub(WEAK_BAND)
    }

    fn max_rank<F: Fn(&PositionBenchmark) -> usize>(&self, rank: F) -> usize {
        self.groups.iter().map(rank).max().unwrap_or(0)
    }
}

/// Builds and evaluates position group benchmarks for a squad.
#[derive(Debug, Clone)]
pub struct PositionBenchmarkEngine {
    include_secondary_positions: bool,
}

impl PositionBenchmarkEngine {
    pub fn new(include_secondary_positions: bool) -> Self {
        Self {
            include_secondary_positions,
        }
    }

    /// Groups the squad by position and ranks the groups.
    ///
    /// With secondary positions included a player can be a member of several groups.
    pub fn benchmarks(&self, squad: &[Player]) -> BenchmarkTable {
        let mut groups: Vec<PositionBenchmark> = Position::CANONICAL
            .iter()
            .map(|position| self.group(*position, squad))
            .collect();
        rank_groups(&mut groups);

        tracing::debug!(
            include_secondary = self.include_secondary_positions,
            groups = groups.len(),
            "Position benchmarks computed."
        );
        BenchmarkTable { groups }
    }

    /// Builds the benchmark table and derives its alerts.
    pub fn evaluate(&self, squad: &[Player]) -> (BenchmarkTable, SquadAlerts) {
        let table = self.benchmarks(squad);
        let alerts = position_alerts(&table);
        (table, alerts)
    }

    fn group(&self, position: Position, squad: &[Player]) -> PositionBenchmark {
        let mut members: Vec<&Player> = squad
            .iter()
            .filter(|p| p.plays(position, self.include_secondary_positions))
            .collect();
        // Stable: equal skill keeps squad order.
        members.sort_by(|a, b| b.skill.total_cmp(&a.skill));

        let tier = |n: usize| {
            members.get(n).map_or_else(TierBenchmark::default, |p| TierBenchmark {
                skill: p.skill,
                potential: p.potential,
                ..Default::default()
            })
        };

        PositionBenchmark {
            position,
            starter: tier(0),
            back_up: tier(1),
            secondary_back_up: tier(2),
            members: members.iter().map(|p| p.player_id).collect(),
        }
    }
}

/// Assigns the six group ranks: {starter, back-up, secondary} × {skill, potential}.
///
/// Each metric is ranked independently in descending order, rank 1 being the highest.
/// Ties keep the order of `groups`. The function only reads skill and potential, so
/// ranking an already ranked table again changes nothing.
pub fn rank_groups(groups: &mut [PositionBenchmark]) {
    for tier in Tier::ALL {
        let skill_ranks = ranks(groups, |g| g.tier(tier).skill);
        let potential_ranks = ranks(groups, |g| g.tier(tier).potential);
        for (i, group) in groups.iter_mut().enumerate() {
            let bench = group.tier_mut(tier);
            bench.skill_rank = skill_ranks[i];
            bench.potential_rank = potential_ranks[i];
        }
    }
}

/// Descending ranks of `value` over `groups`, indexed like `groups`.
fn ranks<F: Fn(&PositionBenchmark) -> f64>(groups: &[PositionBenchmark], value: F) -> Vec<usize> {
    let mut order: Vec<usize> = (0..groups.len()).collect();
    order.sort_by(|a, b| {
        value(&groups[*b])
            .partial_cmp(&value(&groups[*a]))
            .unwrap_or(Ordering::Equal)
    });

    let mut ranks = vec![0; groups.len()];
    for (rank, index) in order.into_iter().enumerate() {
        ranks[index] = rank + 1;
    }
    ranks
}

/// Depth and strength alerts per group.
///
/// Groups are visited by their secondary back-up potential rank, best first. For every
/// group: `LACK_OF_DEPTH` first, then the weak spots from starter down to the secondary
/// back-up.
pub fn position_alerts(table: &BenchmarkTable) -> SquadAlerts {
    let mut groups: Vec<&PositionBenchmark> = table.groups.iter().collect();
    groups.sort_by_key(|g| g.secondary_back_up.potential_rank);

    let mut alerts = SquadAlerts::new();
    for group in groups {
        if group.lacks_depth() {
            alerts.push(Alert::for_position(
                AlertType::LackOfDepth,
                AlertPriority::Medium,
                group.position,
            ));
        }
        for tier in Tier::ALL {
            if table.is_weak(group, tier) {
                let (alert_type, priority) = tier.weak_spot_alert();
                alerts.push(Alert::for_position(alert_type, priority, group.position));
            }
        }
    }
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::player;

    fn at(id: u64, position: Position, skill: f64, potential: f64) -> Player {
        let mut p = player(id, "Player");
        p.first_position = position;
        p.skill = skill;
        p.potential = potential;
        p
    }

    /// Three players in every canonical position; `weak` gets the lowest values.
    fn full_squad(weak: Position) -> Vec<Player> {
        let mut squad = Vec::new();
        let mut id = 0;
        for (i, position) in Position::CANONICAL.iter().enumerate() {
            for depth in 0..3 {
                id += 1;
                let base = if *position == weak { 10.0 } else { 60.0 + i as f64 };
                squad.push(at(id, *position, base - depth as f64, base));
            }
        }
        squad
    }

    #[test]
    fn tiers_are_the_three_best_by_skill() {
        let squad = vec![
            at(1, Position::LeftBack, 60.0, 65.0),
            at(2, Position::LeftBack, 80.0, 82.0),
            at(3, Position::LeftBack, 40.0, 70.0),
            at(4, Position::LeftBack, 20.0, 90.0),
        ];
        let table = PositionBenchmarkEngine::new(true).benchmarks(&squad);
        let left_backs = table.get(Position::LeftBack).unwrap();
        assert_eq!(left_backs.starter.skill, 80.0);
        assert_eq!(left_backs.starter.potential, 82.0);
        assert_eq!(left_backs.back_up.skill, 60.0);
        assert_eq!(left_backs.secondary_back_up.skill, 40.0);
        assert_eq!(left_backs.members, vec![2, 1, 3, 4]);
    }

    #[test]
    fn missing_tiers_default_to_zero_and_lack_depth() {
        let squad = vec![
            at(1, Position::Goalkeeper, 70.0, 75.0),
            at(2, Position::Goalkeeper, 55.0, 60.0),
        ];
        let (table, alerts) = PositionBenchmarkEngine::new(true).evaluate(&squad);
        let keepers = table.get(Position::Goalkeeper).unwrap();
        assert_eq!(keepers.secondary_back_up, TierBenchmark {
            skill_rank: keepers.secondary_back_up.skill_rank,
            potential_rank: keepers.secondary_back_up.potential_rank,
            ..Default::default()
        });
        assert!(alerts.iter().any(|a| {
            a.alert_type == AlertType::LackOfDepth
                && a.priority == AlertPriority::Medium
                && a.position == Position::Goalkeeper
                && a.player.is_none()
        }));
    }

    #[test]
    fn ranks_are_descending_with_ties_in_canonical_order() {
        let squad = vec![
            at(1, Position::CentreBack, 70.0, 70.0),
            at(2, Position::Goalkeeper, 70.0, 50.0),
            at(3, Position::CentreForward, 90.0, 95.0),
        ];
        let table = PositionBenchmarkEngine::new(true).benchmarks(&squad);
        let rank = |p: Position| table.get(p).unwrap().starter.skill_rank;
        assert_eq!(rank(Position::CentreForward), 1);
        assert_eq!(rank(Position::Goalkeeper), 2);
        assert_eq!(rank(Position::CentreBack), 3);
        // Empty groups tie at zero and keep canonical order.
        assert_eq!(rank(Position::LeftBack), 4);
        assert_eq!(rank(Position::RightBack), 5);
    }

    #[test]
    fn weak_starter_is_flagged_when_bottom_three_on_skill_and_potential() {
        let squad = full_squad(Position::LeftBack);
        let (table, alerts) = PositionBenchmarkEngine::new(true).evaluate(&squad);

        let left_backs = table.get(Position::LeftBack).unwrap();
        assert_eq!(left_backs.starter.skill_rank, 10);
        assert_eq!(left_backs.starter.potential_rank, 10);
        assert!(alerts.iter().any(|a| a.alert_type == AlertType::WeakSpotStarter
            && a.priority == AlertPriority::High
            && a.position == Position::LeftBack));
        assert!(!alerts.iter().any(|a| a.alert_type == AlertType::LackOfDepth));
    }

    #[test]
    fn every_tier_has_its_own_weak_spot_priority() {
        let squad = full_squad(Position::LeftBack);
        let (_, alerts) = PositionBenchmarkEngine::new(true).evaluate(&squad);
        let for_left_back: Vec<(AlertType, AlertPriority)> = alerts
            .iter()
            .filter(|a| a.position == Position::LeftBack)
            .map(|a| (a.alert_type, a.priority))
            .collect();
        assert_eq!(for_left_back, vec![
            (AlertType::WeakSpotStarter, AlertPriority::High),
            (AlertType::WeakSpotBackUp, AlertPriority::Medium),
            (AlertType::WeakSpotSecondary, AlertPriority::Low),
        ]);
    }

    #[test]
    fn low_skill_with_high_potential_is_not_a_weak_spot() {
        let mut squad = full_squad(Position::LeftBack);
        for p in squad.iter_mut().filter(|p| p.first_position == Position::LeftBack) {
            p.potential = 99.0;
        }
        let (_, alerts) = PositionBenchmarkEngine::new(true).evaluate(&squad);
        assert!(!alerts.iter().any(|a| a.position == Position::LeftBack));
    }

    #[test]
    fn secondary_positions_widen_group_membership() {
        let mut utility = at(1, Position::CentreBack, 75.0, 80.0);
        utility.second_position = Some(Position::LeftBack);
        utility.third_position = Some(Position::RightBack);
        let squad = vec![utility, at(2, Position::LeftBack, 65.0, 70.0)];

        let with = PositionBenchmarkEngine::new(true).benchmarks(&squad);
        let without = PositionBenchmarkEngine::new(false).benchmarks(&squad);
        let size = |t: &BenchmarkTable| t.groups.iter().map(|g| g.members.len()).sum::<usize>();

        assert_eq!(size(&with), 4);
        assert_eq!(size(&without), 2);
        assert_eq!(with.get(Position::LeftBack).unwrap().members, vec![1, 2]);
        assert_eq!(without.get(Position::LeftBack).unwrap().members, vec![2]);
    }

    #[test]
    fn reranking_a_ranked_table_is_stable() {
        let mut squad = full_squad(Position::RightWing);
        squad.push(at(100, Position::Goalkeeper, 62.0, 40.0));
        let table = PositionBenchmarkEngine::new(true).benchmarks(&squad);

        let mut reranked = table.groups.clone();
        rank_groups(&mut reranked);
        assert_eq!(reranked, table.groups);
    }

    #[test]
    fn alerts_follow_the_secondary_back_up_potential_ranking() {
        // Goalkeepers and centre backs are the two weakest full groups after the left backs.
        let squad = full_squad(Position::LeftBack);
        let (table, alerts) = PositionBenchmarkEngine::new(true).evaluate(&squad);
        let rank = |p: Position| table.get(p).unwrap().secondary_back_up.potential_rank;
        assert_eq!(rank(Position::CentreBack), 8);
        assert_eq!(rank(Position::Goalkeeper), 9);
        assert_eq!(rank(Position::LeftBack), 10);

        let mut visited: Vec<Position> = Vec::new();
        for alert in alerts.iter() {
            if visited.last() != Some(&alert.position) {
                visited.push(alert.position);
            }
        }
        assert_eq!(visited, vec![Position::CentreBack, Position::Goalkeeper, Position::LeftBack]);
        assert_eq!(alerts.len(), 9);
    }

    #[test]
    fn empty_squad_lacks_depth_everywhere() {
        let (table, alerts) = PositionBenchmarkEngine::new(true).evaluate(&[]);
        assert_eq!(table.groups.len(), 10);
        assert_eq!(alerts.of_type(AlertType::LackOfDepth).count(), 10);
    }
}
