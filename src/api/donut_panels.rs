use serde::{Deserialize, Serialize};

use crate::core::Region;
use crate::data::{Country, Dataset};
use crate::error::ChartResult;
use crate::layout::{LayoutShape, layout_donut};
use crate::metrics::{CategoryValue, MetricDeriver};

use super::DonutPanelConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutPanel {
    pub country: Country,
    pub region: Region,
    pub segments: Vec<CategoryValue>,
    pub wedges: Vec<LayoutShape>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutPanelsView {
    pub year: i32,
    pub panels: Vec<DonutPanel>,
}

/// One half donut per country with a sports row for `year`.
///
/// Panels follow `order` left to right; missing countries are skipped, so
/// the remaining panels close ranks.
pub fn build_donut_panels(
    dataset: &Dataset,
    year: i32,
    order: &[Country],
    config: &DonutPanelConfig,
    deriver: &MetricDeriver,
) -> ChartResult<DonutPanelsView> {
    let panels = super::bmi_chart::bmi_breakdowns(dataset, year, order, deriver)
        .into_iter()
        .enumerate()
        .map(|(index, breakdown)| {
            let region = config.panel_region(index);
            let segments = breakdown.donut_segments().into_vec();
            let wedges = layout_donut(breakdown.country, &segments, &config.style, region)?;
            Ok(DonutPanel {
                country: breakdown.country,
                region,
                segments,
                wedges,
            })
        })
        .collect::<ChartResult<Vec<_>>>()?;

    Ok(DonutPanelsView { year, panels })
}
