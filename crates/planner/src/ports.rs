//! The external systems the planner talks to.
//!
//! Implementations own their transport; the planner only sees these calls.

use crate::error::PlannerError;
use core_types::Position;
use rust_decimal::Decimal;

/// A guided player search over a provider's player database.
pub trait PlayerSearch: Send + Sync {
    /// Restricts subsequent searches to leagues of the given nations.
    fn set_league_selection(&mut self, nations: &[String]);

    /// Restricts subsequent searches to players of the given position.
    fn set_position(&mut self, position: Position);

    /// Ids of the players matching the current selection whose skill reaches
    /// `benchmark` and who are affordable within `budget`.
    fn find_recommended_players(
        &mut self,
        benchmark: f64,
        budget: Decimal,
    ) -> Result<Vec<u64>, PlannerError>;
}

/// Labels, comments and shortlists shared with the scouting staff.
pub trait Collaboration: Send + Sync {
    /// Attaches a free-text comment to a player.
    fn set_comment(&mut self, comment: &str, player_id: u64) -> Result<(), PlannerError>;

    /// Id of the label with this name, if any.
    fn get_label(&self, name: &str) -> Option<String>;

    /// Creates the label, replacing an existing one with the same name.
    fn add_label(&mut self, name: &str) -> Result<(), PlannerError>;

    /// Deletes the label if it exists.
    fn delete_label(&mut self, name: &str) -> Result<(), PlannerError>;

    /// Fails with `LabelNotFound` when the label does not exist.
    fn put_player_labels(&mut self, name: &str, players: &[u64]) -> Result<(), PlannerError>;

    /// Id of the user's shortlist with this name, if any.
    fn get_shortlist(&self, name: &str, user_id: &str) -> Option<String>;

    /// Creates the shortlist, replacing an existing one with the same name and owner.
    fn add_shortlist(&mut self, user_id: &str, name: &str, private: bool) -> Result<(), PlannerError>;

    fn delete_shortlist(&mut self, shortlist_id: &str) -> Result<(), PlannerError>;

    /// Fails with `ShortlistNotFound` when the user has no such shortlist.
    fn add_players_to_shortlist(
        &mut self,
        user_id: &str,
        name: &str,
        players: &[u64],
    ) -> Result<(), PlannerError>;
}
