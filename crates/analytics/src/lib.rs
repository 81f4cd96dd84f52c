//! # SquadWatch Analytics
//!
//! Derived per-player and per-team figures that the alert engines and squad planning
//! build on.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** this crate has no knowledge of external systems. It depends only on
//!   `core-types`, and every calculation takes its as-of date explicitly.
//! - **Degraded, never failing:** empty match lists, squads or transfer histories produce
//!   zero-filled output rather than errors. The only error is a team the data provider
//!   cannot supply.
//!
//! ## Public API
//!
//! - `aggregate_usage`: minutes-based usage per player.
//! - `normalize_squad`: contract horizon, acquisition cost and value deltas per player.
//! - `insights`: transfer, performance and revenue summaries of a team.
//! - `SeasonInsights`: the same summaries for every team of a season.

pub mod error;
pub mod insights;
pub mod season;
pub mod tenure;
pub mod usage;

pub use error::AnalyticsError;
pub use season::{InMemoryTeams, SeasonInsights, SeasonReport, TeamProvider};
pub use tenure::{Acquisition, NormalizedPlayer, floor_thousand, normalize_squad};
pub use usage::{PlayerUsage, UsageTable, aggregate_usage};
