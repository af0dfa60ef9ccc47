//! Dashboard facade: configuration, selection state and the chart views.

mod bmi_chart;
mod config;
mod donut_panels;
mod honeycomb;
mod leaderboard;
mod scatter;
mod snapshot;
mod state;

pub use bmi_chart::{BmiChartMode, BmiChartView, build_bmi_chart};
pub use config::{
    BmiChartConfig, DashboardConfig, DonutPanelConfig, HoneycombConfig, PodiumConfig, ScatterConfig,
};
pub use donut_panels::{DonutPanel, DonutPanelsView, build_donut_panels};
pub use honeycomb::{
    CountryRankSummary, HoneycombCircle, HoneycombPanel, HoneycombPanelView, HoneycombView,
    build_honeycomb, label_font_size,
};
pub use leaderboard::{
    LeaderboardBar, LeaderboardView, build_leaderboard, build_leaderboard_from_values,
};
pub use scatter::{ScatterPanel, ScatterPoint, ScatterTrendline, ScatterView, build_scatter};
pub use snapshot::{
    DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1, DashboardSnapshot, DashboardSnapshotJsonContractV1,
};
pub use state::{DashboardState, FilterSelection};
