use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::Region;
use crate::data::{Country, Dataset, RecordFilter};
use crate::error::ChartResult;
use crate::layout::{
    GroupedValue, LayoutShape, ShapeKey, grouped_bar_value_scale, layout_grouped_bars,
};
use crate::metrics::{BmiBreakdown, BmiCategory, MetricDeriver};

use super::BmiChartConfig;

/// Which level of the BMI bar chart forms the outer bands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiChartMode {
    /// Countries outside, BMI categories inside.
    #[default]
    ByCountry,
    /// BMI categories outside, countries inside.
    ByCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiChartView {
    pub year: i32,
    pub mode: BmiChartMode,
    /// Plot area inside the margins, in translated plot coordinates.
    pub plot_region: Region,
    /// Niced value domain of the vertical axis.
    pub value_domain: (f64, f64),
    pub breakdowns: Vec<BmiBreakdown>,
    pub bars: Vec<LayoutShape>,
}

/// BMI composition per country for `year`, in `order`.
///
/// A country without a sports row for the year is left out; filling it with
/// zeros would report it as 100 % normal weight.
pub(crate) fn bmi_breakdowns(
    dataset: &Dataset,
    year: i32,
    order: &[Country],
    deriver: &MetricDeriver,
) -> Vec<BmiBreakdown> {
    let filter = RecordFilter::year(year);
    order
        .iter()
        .filter_map(|&country| {
            let record = dataset.sports().find(country, filter);
            if record.is_none() {
                warn!(country = %country, year, "no sports row; country omitted from BMI views");
            }
            record.map(|record| deriver.bmi_breakdown(record))
        })
        .collect()
}

fn grouped_values(breakdowns: &[BmiBreakdown], mode: BmiChartMode) -> Vec<GroupedValue> {
    match mode {
        BmiChartMode::ByCountry => breakdowns
            .iter()
            .flat_map(|breakdown| {
                BmiCategory::ALL
                    .into_iter()
                    .map(move |category| GroupedValue {
                        group: ShapeKey::Country(breakdown.country),
                        series: ShapeKey::Category(category),
                        value: breakdown.value(category),
                    })
            })
            .collect(),
        BmiChartMode::ByCategory => BmiCategory::ALL
            .into_iter()
            .flat_map(|category| {
                breakdowns.iter().map(move |breakdown| GroupedValue {
                    group: ShapeKey::Category(category),
                    series: ShapeKey::Country(breakdown.country),
                    value: breakdown.value(category),
                })
            })
            .collect(),
    }
}

/// Builds the grouped Normal/Overweight/Obese bar chart for `year`.
pub fn build_bmi_chart(
    dataset: &Dataset,
    year: i32,
    mode: BmiChartMode,
    config: &BmiChartConfig,
    deriver: &MetricDeriver,
) -> ChartResult<BmiChartView> {
    let plot_region = config.margins.plot_region(config.width, config.height);
    let breakdowns = bmi_breakdowns(dataset, year, &config.country_order, deriver);
    let values = grouped_values(&breakdowns, mode);
    let bars = layout_grouped_bars(&values, &config.bars, plot_region)?;
    let value_domain = grouped_bar_value_scale(&config.bars, plot_region)?.domain();

    debug!(year, ?mode, bars = bars.len(), "built bmi chart");
    Ok(BmiChartView {
        year,
        mode,
        plot_region,
        value_domain,
        breakdowns,
        bars,
    })
}
