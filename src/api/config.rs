use serde::{Deserialize, Serialize};

use crate::core::{Margins, Region};
use crate::data::{Country, Metric};
use crate::error::{ChartError, ChartResult};
use crate::layout::{DonutStyle, GroupedBarStyle, PodiumStyle, StackedCircleStyle};
use crate::metrics::{NegativeValuePolicy, lookup_display_name};

/// Grouped BMI bar chart canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BmiChartConfig {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub bars: GroupedBarStyle,
    /// Group order of the by-country view.
    pub country_order: Vec<Country>,
}

impl Default for BmiChartConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 500.0,
            margins: Margins::new(50.0, 30.0, 50.0, 60.0),
            bars: GroupedBarStyle::default(),
            country_order: vec![Country::France, Country::Netherlands, Country::Italy],
        }
    }
}

/// Half-donut panels, laid out left to right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonutPanelConfig {
    pub panel_width: f64,
    pub panel_height: f64,
    pub panel_gap: f64,
    pub style: DonutStyle,
}

impl Default for DonutPanelConfig {
    fn default() -> Self {
        Self {
            panel_width: 300.0,
            panel_height: 220.0,
            panel_gap: 20.0,
            style: DonutStyle::default(),
        }
    }
}

impl DonutPanelConfig {
    /// Region of the panel at `index`.
    #[must_use]
    pub fn panel_region(&self, index: usize) -> Region {
        let x_min = index as f64 * (self.panel_width + self.panel_gap);
        Region::new(x_min, x_min + self.panel_width, 0.0, self.panel_height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoneycombConfig {
    pub width: f64,
    pub height: f64,
    pub circles: StackedCircleStyle,
    pub min_label_font_px: f64,
    pub label_font_ratio: f64,
}

impl Default for HoneycombConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 700.0,
            circles: StackedCircleStyle::default(),
            min_label_font_px: 12.0,
            label_font_ratio: 0.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodiumConfig {
    pub width: f64,
    pub height: f64,
    pub style: PodiumStyle,
}

impl Default for PodiumConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            style: PodiumStyle::default(),
        }
    }
}

/// Dual-panel scatterplot canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    /// Half of the blank strip between the two panels.
    pub panel_gap: f64,
    pub nice_ticks: usize,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            width: 1300.0,
            height: 650.0,
            margins: Margins::new(60.0, 60.0, 100.0, 120.0),
            panel_gap: 20.0,
            nice_ticks: 10,
        }
    }
}

/// Public dashboard configuration.
///
/// Serializable so hosts can keep the dashboard setup in a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_year")]
    pub default_year: i32,
    #[serde(default = "default_scatter_metric")]
    pub default_scatter_metric: String,
    #[serde(default = "default_leaderboard_metric")]
    pub leaderboard_metric: Metric,
    #[serde(default)]
    pub negative_value_policy: NegativeValuePolicy,
    #[serde(default)]
    pub bmi_chart: BmiChartConfig,
    #[serde(default)]
    pub donut: DonutPanelConfig,
    #[serde(default)]
    pub honeycomb: HoneycombConfig,
    #[serde(default)]
    pub podium: PodiumConfig,
    #[serde(default)]
    pub scatter: ScatterConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_year: default_year(),
            default_scatter_metric: default_scatter_metric(),
            leaderboard_metric: default_leaderboard_metric(),
            negative_value_policy: NegativeValuePolicy::default(),
            bmi_chart: BmiChartConfig::default(),
            donut: DonutPanelConfig::default(),
            honeycomb: HoneycombConfig::default(),
            podium: PodiumConfig::default(),
            scatter: ScatterConfig::default(),
        }
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the year selected on startup.
    #[must_use]
    pub fn with_default_year(mut self, year: i32) -> Self {
        self.default_year = year;
        self
    }

    /// Sets the scatterplot metric selected on startup, by display name.
    #[must_use]
    pub fn with_default_scatter_metric(mut self, display_name: impl Into<String>) -> Self {
        self.default_scatter_metric = display_name.into();
        self
    }

    #[must_use]
    pub fn with_leaderboard_metric(mut self, metric: Metric) -> Self {
        self.leaderboard_metric = metric;
        self
    }

    /// Sets how derived percentages outside `[0, 100]` are treated.
    #[must_use]
    pub fn with_negative_value_policy(mut self, policy: NegativeValuePolicy) -> Self {
        self.negative_value_policy = policy;
        self
    }

    #[must_use]
    pub fn with_bmi_chart(mut self, config: BmiChartConfig) -> Self {
        self.bmi_chart = config;
        self
    }

    #[must_use]
    pub fn with_donut(mut self, config: DonutPanelConfig) -> Self {
        self.donut = config;
        self
    }

    #[must_use]
    pub fn with_honeycomb(mut self, config: HoneycombConfig) -> Self {
        self.honeycomb = config;
        self
    }

    #[must_use]
    pub fn with_podium(mut self, config: PodiumConfig) -> Self {
        self.podium = config;
        self
    }

    #[must_use]
    pub fn with_scatter(mut self, config: ScatterConfig) -> Self {
        self.scatter = config;
        self
    }

    /// Checks canvas sizes and the startup metric.
    pub fn validate(&self) -> ChartResult<()> {
        lookup_display_name(&self.default_scatter_metric)?;

        self.bmi_chart
            .margins
            .plot_region(self.bmi_chart.width, self.bmi_chart.height)
            .validate()?;
        self.scatter
            .margins
            .plot_region(self.scatter.width, self.scatter.height)
            .validate()?;
        self.donut.panel_region(0).validate()?;
        self.donut.style.validate()?;
        Region::from_size(self.honeycomb.width, self.honeycomb.height).validate()?;
        Region::from_size(self.podium.width, self.podium.height).validate()?;

        if self.bmi_chart.country_order.is_empty() {
            return Err(ChartError::InvalidData(
                "bmi chart country order must not be empty".to_owned(),
            ));
        }
        if self.scatter.nice_ticks == 0 {
            return Err(ChartError::InvalidData(
                "scatter nice tick count must be > 0".to_owned(),
            ));
        }
        if !self.scatter.panel_gap.is_finite() || self.scatter.panel_gap < 0.0 {
            return Err(ChartError::InvalidData(
                "scatter panel gap must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_year() -> i32 {
    2022
}

fn default_scatter_metric() -> String {
    "Daily Fruit Consumption".to_owned()
}

fn default_leaderboard_metric() -> Metric {
    Metric::FruitConsumption
}
