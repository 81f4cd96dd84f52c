//! Descriptive team statistics consumed alongside the alerts for squad planning.

pub mod performance;
pub mod revenue;
pub mod transfers;

pub use performance::{PerformanceInsights, analyze_performance};
pub use revenue::{RevenueInsights, analyze_revenue};
pub use transfers::{MarketShare, TransferDirection, TransferInsights, ValueRange, analyze_transfers};
