use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::data::{Country, Dataset};
use crate::error::{ChartError, ChartResult};
use crate::metrics::{CatalogEntry, MetricDeriver, lookup_display_name};

use super::{
    BmiChartMode, BmiChartView, DashboardConfig, DashboardSnapshot, DonutPanelsView, HoneycombView,
    LeaderboardView, ScatterView, build_bmi_chart, build_donut_panels, build_honeycomb,
    build_leaderboard, build_scatter,
};

/// User-controlled inputs shared by every view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub year: i32,
    /// Display name of the scatterplot metric.
    pub scatter_metric: String,
    pub show_trendlines: bool,
    pub compare_scaled_axes: bool,
    pub selected_country: Option<Country>,
    pub bmi_mode: BmiChartMode,
}

/// Loaded dataset plus the current selection; views are derived on demand.
#[derive(Debug, Clone)]
pub struct DashboardState {
    dataset: Dataset,
    config: DashboardConfig,
    deriver: MetricDeriver,
    selection: FilterSelection,
}

impl DashboardState {
    /// Validates `config` and opens the dashboard on its default year.
    ///
    /// When the default year is absent from the data the latest year is
    /// used instead.
    pub fn new(dataset: Dataset, config: DashboardConfig) -> ChartResult<Self> {
        config.validate()?;
        let years = dataset.years();
        let year = if years.contains(&config.default_year) {
            config.default_year
        } else {
            let latest = years.last().copied().ok_or_else(|| {
                ChartError::InvalidData("dataset contains no survey years".to_owned())
            })?;
            warn!(
                requested = config.default_year,
                fallback = latest,
                "default year missing from data; using latest year"
            );
            latest
        };

        let selection = FilterSelection {
            year,
            scatter_metric: config.default_scatter_metric.clone(),
            show_trendlines: false,
            compare_scaled_axes: true,
            selected_country: None,
            bmi_mode: BmiChartMode::default(),
        };
        Ok(Self {
            deriver: MetricDeriver::new(config.negative_value_policy),
            dataset,
            config,
            selection,
        })
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        self.dataset.years()
    }

    pub fn set_year(&mut self, year: i32) -> ChartResult<()> {
        if !self.dataset.years().contains(&year) {
            return Err(ChartError::InvalidData(format!(
                "year {year} is not present in the dataset"
            )));
        }
        debug!(year, "year selected");
        self.selection.year = year;
        Ok(())
    }

    /// Selects the scatterplot metric by its dropdown display name.
    pub fn select_metric(&mut self, display_name: &str) -> ChartResult<&'static CatalogEntry> {
        let entry = lookup_display_name(display_name)?;
        debug!(metric = %entry.metric, "scatter metric selected");
        self.selection.scatter_metric = entry.display_name.to_owned();
        Ok(entry)
    }

    pub fn set_show_trendlines(&mut self, show: bool) {
        self.selection.show_trendlines = show;
    }

    pub fn set_compare_scaled_axes(&mut self, compare: bool) {
        self.selection.compare_scaled_axes = compare;
    }

    pub fn set_bmi_mode(&mut self, mode: BmiChartMode) {
        self.selection.bmi_mode = mode;
    }

    /// Click semantics: selecting the selected country clears the selection.
    pub fn toggle_country(&mut self, country: Country) -> Option<Country> {
        self.selection.selected_country = if self.selection.selected_country == Some(country) {
            None
        } else {
            Some(country)
        };
        self.selection.selected_country
    }

    pub fn clear_selected_country(&mut self) {
        self.selection.selected_country = None;
    }

    pub fn bmi_chart(&self) -> ChartResult<BmiChartView> {
        build_bmi_chart(
            &self.dataset,
            self.selection.year,
            self.selection.bmi_mode,
            &self.config.bmi_chart,
            &self.deriver,
        )
    }

    pub fn donut_panels(&self) -> ChartResult<DonutPanelsView> {
        build_donut_panels(
            &self.dataset,
            self.selection.year,
            &self.config.bmi_chart.country_order,
            &self.config.donut,
            &self.deriver,
        )
    }

    pub fn honeycomb(&self) -> ChartResult<HoneycombView> {
        build_honeycomb(
            &self.dataset,
            self.selection.year,
            self.selection.selected_country,
            &self.config.honeycomb,
            &self.deriver,
        )
    }

    pub fn leaderboard(&self) -> ChartResult<LeaderboardView> {
        build_leaderboard(
            &self.dataset,
            self.config.leaderboard_metric,
            &self.config.podium,
            &self.deriver,
        )
    }

    pub fn scatter(&self) -> ChartResult<ScatterView> {
        let entry = lookup_display_name(&self.selection.scatter_metric)?;
        build_scatter(
            &self.dataset,
            entry,
            &self.config.scatter,
            self.selection.compare_scaled_axes,
            self.selection.show_trendlines,
        )
    }

    /// Every view for the current selection.
    pub fn snapshot(&self) -> ChartResult<DashboardSnapshot> {
        Ok(DashboardSnapshot {
            selection: self.selection.clone(),
            years: self.dataset.years(),
            bmi_chart: self.bmi_chart()?,
            donut_panels: self.donut_panels()?,
            honeycomb: self.honeycomb()?,
            leaderboard: self.leaderboard()?,
            scatter: self.scatter()?,
        })
    }
}
