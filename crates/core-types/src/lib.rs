pub mod enums;
pub mod error;
pub mod position;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{AlertPriority, AlertType};
pub use error::CoreError;
pub use position::{Position, PositionGroup, PositionLine};
pub use structs::{
    Alert, Fixture, Match, MatchParticipation, Player, Season, SquadAlerts, TeamSnapshot, Transfer,
};
