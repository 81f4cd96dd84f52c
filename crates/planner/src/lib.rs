//! # SquadWatch Planner
//!
//! Turns position alerts into scouting tasks and runs them against an external player
//! search, publishing the results as labels in a collaboration tool.
//!
//! ## Public API
//!
//! - `ScoutingTask`: a position and tier to recruit for.
//! - `PlayerSearch`, `Collaboration`: the external systems, as traits.
//! - `InMemoryCollaboration`: an in-process `Collaboration` backend.
//! - `ScoutingPlanner`: executes the tasks.

pub mod error;
pub mod memory;
pub mod plan;
pub mod ports;
pub mod task;

pub use error::PlannerError;
pub use memory::InMemoryCollaboration;
pub use plan::{ScoutingList, ScoutingPlan, ScoutingPlanner};
pub use ports::{Collaboration, PlayerSearch};
pub use task::{ScoutingLevel, ScoutingTask, tasks_from_alerts};
