use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DataPoint, LinearScale, Region, extent};
use crate::data::{Country, Dataset, Metric, Record, Sex, TableKind};
use crate::error::ChartResult;
use crate::metrics::CatalogEntry;
use crate::trend::{GroupFit, TrendGroup, Trendline, fit_groups};

use super::ScatterConfig;

/// Fallback domain when a column has no values at all.
const EMPTY_DOMAIN: (f64, f64) = (0.0, 100.0);

/// The two side-by-side scatter panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScatterPanel {
    /// x = `Healthy (%)`.
    Healthy,
    /// x = `SPH`.
    Sph,
}

impl ScatterPanel {
    pub const ALL: [ScatterPanel; 2] = [ScatterPanel::Healthy, ScatterPanel::Sph];

    #[must_use]
    pub const fn x_metric(self) -> Metric {
        match self {
            Self::Healthy => Metric::Healthy,
            Self::Sph => Metric::Sph,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub panel: ScatterPanel,
    pub country: Country,
    /// `None` for sports rows, which are not split by sex.
    pub sex: Option<Sex>,
    pub year: i32,
    /// Position of `year` inside the year extent, `0..=1`.
    pub year_fraction: f64,
    pub value: DataPoint,
    pub pixel: DataPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterTrendline {
    pub panel: ScatterPanel,
    pub group: TrendGroup,
    pub line: Trendline,
    pub from: DataPoint,
    pub to: DataPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterView {
    pub metric: Metric,
    pub axis_label: String,
    pub plot_region: Region,
    pub healthy_domain: (f64, f64),
    pub sph_domain: (f64, f64),
    /// `None` when the source table has no rows.
    pub y_domain: Option<(f64, f64)>,
    pub year_extent: Option<(i32, i32)>,
    pub points: Vec<ScatterPoint>,
    pub trendlines: Vec<ScatterTrendline>,
    pub show_trendlines: bool,
    pub compare_scaled_axes: bool,
}

impl ScatterView {
    /// Trendlines to draw under the current visibility flag.
    pub fn visible_trendlines(&self) -> impl Iterator<Item = &ScatterTrendline> {
        self.trendlines.iter().filter(|_| self.show_trendlines)
    }

    pub fn points_in(&self, panel: ScatterPanel) -> impl Iterator<Item = &ScatterPoint> {
        self.points.iter().filter(move |point| point.panel == panel)
    }
}

/// Non-`Total` health rows followed by every sports row.
fn all_rows(dataset: &Dataset) -> impl Iterator<Item = &Record> {
    dataset
        .health()
        .records()
        .iter()
        .filter(|record| record.sex != Sex::Total)
        .chain(dataset.sports().records())
}

fn niced_scale(domain: (f64, f64), range: (f64, f64), ticks: usize) -> ChartResult<LinearScale> {
    let scale = if domain.0 == domain.1 {
        LinearScale::new(domain.0 - 0.5, domain.1 + 0.5)?
    } else {
        LinearScale::new(domain.0, domain.1)?
    };
    scale.nice(ticks).with_range(range.0, range.1)
}

fn year_fraction(year: i32, years: Option<(i32, i32)>) -> f64 {
    match years {
        Some((first, last)) if last > first => {
            f64::from(year - first) / f64::from(last - first)
        }
        _ => 0.0,
    }
}

/// Builds the dual-panel scatterplot of `entry` against Healthy BMI and SPH.
///
/// Health metrics plot the sex-stratified health rows with one trendline per
/// country and sex; sports metrics plot sports rows with one line per
/// country. Empty or unparseable cells plot as 0, the same way
/// aggregation counts them.
pub fn build_scatter(
    dataset: &Dataset,
    entry: &CatalogEntry,
    config: &ScatterConfig,
    compare_scaled_axes: bool,
    show_trendlines: bool,
) -> ChartResult<ScatterView> {
    let plot_region = config
        .margins
        .plot_region(config.width, config.height)
        .validate()?;
    let width = plot_region.width();
    let half = width / 2.0;

    let healthy_extent =
        extent(all_rows(dataset).map(|r| r.value_or_zero(Metric::Healthy))).unwrap_or(EMPTY_DOMAIN);
    let sph_extent =
        extent(all_rows(dataset).map(|r| r.value_or_zero(Metric::Sph))).unwrap_or(EMPTY_DOMAIN);
    let year_extent = all_rows(dataset)
        .map(|record| record.year)
        .fold(None, |acc: Option<(i32, i32)>, year| match acc {
            Some((lo, hi)) => Some((lo.min(year), hi.max(year))),
            None => Some((year, year)),
        });

    let (healthy_domain, sph_domain) = if compare_scaled_axes {
        let union = (
            healthy_extent.0.min(sph_extent.0),
            healthy_extent.1.max(sph_extent.1),
        );
        (union, union)
    } else {
        (healthy_extent, sph_extent)
    };
    let healthy_scale = niced_scale(
        healthy_domain,
        (0.0, half - config.panel_gap),
        config.nice_ticks,
    )?;
    let sph_scale = niced_scale(
        sph_domain,
        (half + config.panel_gap, width),
        config.nice_ticks,
    )?;

    let stratified = entry.group.source_table() == TableKind::Health;
    let rows: Vec<(&Record, f64)> = match entry.group.source_table() {
        TableKind::Health => dataset
            .health()
            .records()
            .iter()
            .filter(|record| record.sex != Sex::Total)
            .map(|record| (record, record.value_or_zero(entry.metric)))
            .collect(),
        TableKind::Sports => dataset
            .sports()
            .records()
            .iter()
            .map(|record| (record, record.value_or_zero(entry.metric)))
            .collect(),
    };

    let y_domain = extent(rows.iter().map(|(_, y)| *y));
    let mut view = ScatterView {
        metric: entry.metric,
        axis_label: entry.axis_label.to_owned(),
        plot_region,
        healthy_domain: healthy_scale.domain(),
        sph_domain: sph_scale.domain(),
        y_domain: None,
        year_extent,
        points: Vec::new(),
        trendlines: Vec::new(),
        show_trendlines,
        compare_scaled_axes,
    };
    let Some(y_domain) = y_domain else {
        debug!(metric = %entry.metric, "no rows to plot");
        return Ok(view);
    };
    let y_scale = niced_scale(
        y_domain,
        (plot_region.y_max, plot_region.y_min),
        config.nice_ticks,
    )?;
    view.y_domain = Some(y_scale.domain());

    for panel in ScatterPanel::ALL {
        let x_scale = match panel {
            ScatterPanel::Healthy => healthy_scale,
            ScatterPanel::Sph => sph_scale,
        };

        let mut samples = Vec::new();
        for &(record, y) in &rows {
            let x = record.value_or_zero(panel.x_metric());
            let sex = stratified.then_some(record.sex);
            let value = DataPoint::new(x, y);
            view.points.push(ScatterPoint {
                panel,
                country: record.country,
                sex,
                year: record.year,
                year_fraction: year_fraction(record.year, year_extent),
                value,
                pixel: DataPoint::new(x_scale.map(x), y_scale.map(y)),
            });
            let group = match sex {
                Some(sex) => TrendGroup::country_and_sex(record.country, sex),
                None => TrendGroup::country(record.country),
            };
            samples.push((group, value));
        }

        view.trendlines.extend(
            fit_groups(samples)
                .iter()
                .filter_map(|group_fit| pixel_trendline(panel, group_fit, x_scale, y_scale)),
        );
    }

    debug!(
        metric = %entry.metric,
        points = view.points.len(),
        trendlines = view.trendlines.len(),
        "built scatterplot"
    );
    Ok(view)
}

fn pixel_trendline(
    panel: ScatterPanel,
    group_fit: &GroupFit,
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> Option<ScatterTrendline> {
    let line = group_fit.fit.line()?;
    let (from, to) = group_fit.segment()?;
    Some(ScatterTrendline {
        panel,
        group: group_fit.group,
        line,
        from: DataPoint::new(x_scale.map(from.x), y_scale.map(from.y)),
        to: DataPoint::new(x_scale.map(to.x), y_scale.map(to.y)),
    })
}

#[cfg(test)]
mod tests {
    use super::year_fraction;

    #[test]
    fn year_fraction_spans_the_extent() {
        assert_eq!(year_fraction(2018, Some((2018, 2022))), 0.0);
        assert_eq!(year_fraction(2020, Some((2018, 2022))), 0.5);
        assert_eq!(year_fraction(2022, Some((2018, 2022))), 1.0);
    }

    #[test]
    fn single_year_extent_maps_to_start() {
        assert_eq!(year_fraction(2022, Some((2022, 2022))), 0.0);
        assert_eq!(year_fraction(2022, None), 0.0);
    }
}
