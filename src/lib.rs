//! survey-charts: data derivation and chart layout for student health and
//! sports survey dashboards.
//!
//! Two CSV tables (health and sports) are loaded into a [`data::Dataset`],
//! metrics are derived and ranked per country, and the layout engine turns
//! the ranked values into grouped bars, stacked circles, half donuts, a
//! podium and a dual scatterplot with trendlines. [`DashboardState`] ties it
//! together behind a validated [`DashboardConfig`].

pub mod aggregate;
pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod render;
pub mod telemetry;
pub mod trend;

pub use api::{DashboardConfig, DashboardSnapshot, DashboardState};
pub use error::{ChartError, ChartResult};
