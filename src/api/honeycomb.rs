use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::{RankCounts, Ranking, aggregate, ratio_label};
use crate::core::Region;
use crate::data::{Country, Dataset, Metric, RecordFilter, Sex, TableKind};
use crate::error::ChartResult;
use crate::layout::{LayoutShape, ShapeExtent, layout_stacked_circles};
use crate::metrics::{DerivedMetric, MetricDeriver};

use super::HoneycombConfig;

const CORNER_MARGIN: f64 = 30.0;
const CORNER_WIDTH: f64 = 120.0;
const CORNER_HEIGHT: f64 = 200.0;
const CENTER_INNER_OFFSET: f64 = 40.0;
const CENTER_OUTER_OFFSET: f64 = 120.0;

/// The six metrics of the overview, each drawn as one circle stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HoneycombPanel {
    HealthyBmi,
    GoodSph,
    ExercisingRegularly,
    ExercisingRigorously,
    FruitEaters,
    VeggieEaters,
}

impl HoneycombPanel {
    pub const ALL: [HoneycombPanel; 6] = [
        HoneycombPanel::HealthyBmi,
        HoneycombPanel::GoodSph,
        HoneycombPanel::ExercisingRegularly,
        HoneycombPanel::ExercisingRigorously,
        HoneycombPanel::FruitEaters,
        HoneycombPanel::VeggieEaters,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HealthyBmi => "Healthy BMI",
            Self::GoodSph => "Good SPH",
            Self::ExercisingRegularly => "Students Exercising Regularly",
            Self::ExercisingRigorously => "Students Exercising Rigorously",
            Self::FruitEaters => "Regular Fruit Eaters",
            Self::VeggieEaters => "Regular Veggie Eaters",
        }
    }

    #[must_use]
    pub const fn metric(self) -> DerivedMetric {
        match self {
            Self::HealthyBmi => DerivedMetric::Raw(Metric::Healthy),
            Self::GoodSph => DerivedMetric::Raw(Metric::Sph),
            Self::ExercisingRegularly => DerivedMetric::CombinedRegularExercise,
            Self::ExercisingRigorously => DerivedMetric::AnyVigorousActivity,
            Self::FruitEaters => DerivedMetric::Raw(Metric::FruitConsumption),
            Self::VeggieEaters => DerivedMetric::Raw(Metric::VegetableConsumption),
        }
    }

    #[must_use]
    pub const fn table(self) -> TableKind {
        match self {
            Self::FruitEaters | Self::VeggieEaters => TableKind::Health,
            _ => TableKind::Sports,
        }
    }

    /// Rows feeding the panel: the year, plus `Sex = Total` for health rows.
    #[must_use]
    pub const fn filter(self, year: i32) -> RecordFilter {
        match self.table() {
            TableKind::Health => RecordFilter::year(year).with_sex(Sex::Total),
            TableKind::Sports => RecordFilter::year(year),
        }
    }

    /// Bounding region on a `width` x `height` canvas.
    ///
    /// BMI and SPH share the two center columns; activity panels take the
    /// left corners and diet panels the right corners.
    #[must_use]
    pub fn region(self, width: f64, height: f64) -> Region {
        let center_x = width / 2.0;
        let center_top = height / 5.0;
        let center_bottom = height / 1.8;
        let corner_top_bottom = CORNER_HEIGHT * 2.0 - CORNER_MARGIN;
        let lower_top = height / 1.6;
        let lower_bottom = height - 20.0;
        let left = (CORNER_MARGIN + CORNER_WIDTH, CORNER_MARGIN * 6.0);
        let right = (
            width - CORNER_MARGIN - CORNER_WIDTH * 3.0,
            width - CORNER_MARGIN,
        );

        match self {
            Self::HealthyBmi => Region::new(
                center_x - CENTER_OUTER_OFFSET,
                center_x - CENTER_INNER_OFFSET,
                center_top,
                center_bottom,
            ),
            Self::GoodSph => Region::new(
                center_x + CENTER_INNER_OFFSET,
                center_x + CENTER_OUTER_OFFSET,
                center_top,
                center_bottom,
            ),
            Self::ExercisingRegularly => Region::new(left.0, left.1, center_top, corner_top_bottom),
            Self::ExercisingRigorously => Region::new(left.0, left.1, lower_top, lower_bottom),
            Self::FruitEaters => Region::new(right.0, right.1, center_top, corner_top_bottom),
            Self::VeggieEaters => Region::new(right.0, right.1, lower_top, lower_bottom),
        }
    }
}

/// Stacked circle plus its label and tooltip figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoneycombCircle {
    pub shape: LayoutShape,
    pub label: String,
    pub font_size_px: f64,
    pub ratio_to_average: Option<f64>,
    pub ratio_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoneycombPanelView {
    pub panel: HoneycombPanel,
    pub region: Region,
    pub ranking: Ranking,
    pub average: f64,
    pub circles: Vec<HoneycombCircle>,
}

/// Podium placements of the selected country over all six panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRankSummary {
    pub country: Country,
    pub counts: RankCounts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoneycombView {
    pub year: i32,
    pub panels: Vec<HoneycombPanelView>,
    pub selected_country: Option<Country>,
    pub rank_summary: Option<CountryRankSummary>,
}

impl HoneycombView {
    #[must_use]
    pub fn panel(&self, panel: HoneycombPanel) -> Option<&HoneycombPanelView> {
        self.panels.iter().find(|view| view.panel == panel)
    }
}

/// Label font size for a circle of `radius`.
#[must_use]
pub fn label_font_size(radius: f64, config: &HoneycombConfig) -> f64 {
    (radius * config.label_font_ratio).max(config.min_label_font_px)
}

fn build_panel(
    dataset: &Dataset,
    year: i32,
    panel: HoneycombPanel,
    config: &HoneycombConfig,
    deriver: &MetricDeriver,
) -> ChartResult<HoneycombPanelView> {
    let region = panel.region(config.width, config.height).validate()?;
    let ranking = aggregate(
        dataset.table(panel.table()).records(),
        panel.metric(),
        panel.filter(year),
        &Country::ALL,
        deriver,
    );
    let average = ranking.average();
    let shapes = layout_stacked_circles(ranking.values(), &config.circles, region)?;

    let circles = shapes
        .into_iter()
        .map(|shape| {
            let radius = match shape.extent {
                ShapeExtent::Circle { radius } => radius,
                _ => 0.0,
            };
            let ratio = shape
                .key
                .country()
                .and_then(|country| ranking.ratio_to_average(country));
            HoneycombCircle {
                label: format!("{:.1}", shape.value),
                font_size_px: label_font_size(radius, config),
                ratio_to_average: ratio,
                ratio_label: ratio.map(ratio_label),
                shape,
            }
        })
        .collect();

    Ok(HoneycombPanelView {
        panel,
        region,
        ranking,
        average,
        circles,
    })
}

/// Builds all six panels for `year`.
///
/// With a `selected_country` the view also carries how often that country
/// ranks first, second and third across the panels.
pub fn build_honeycomb(
    dataset: &Dataset,
    year: i32,
    selected_country: Option<Country>,
    config: &HoneycombConfig,
    deriver: &MetricDeriver,
) -> ChartResult<HoneycombView> {
    let panels = HoneycombPanel::ALL
        .into_iter()
        .map(|panel| build_panel(dataset, year, panel, config, deriver))
        .collect::<ChartResult<Vec<_>>>()?;

    let rank_summary = selected_country.map(|country| CountryRankSummary {
        country,
        counts: RankCounts::tally(country, panels.iter().map(|view| &view.ranking)),
    });

    debug!(year, selected = ?selected_country, "built honeycomb");
    Ok(HoneycombView {
        year,
        panels,
        selected_country,
        rank_summary,
    })
}
