use serde::{Deserialize, Serialize};

use crate::aggregate::{CountryValue, Ranking, aggregate, ordinal_label};
use crate::core::Region;
use crate::data::{Country, Dataset, Metric, RecordFilter, Sex, TableKind};
use crate::error::ChartResult;
use crate::layout::{LayoutShape, layout_podium};
use crate::metrics::{DerivedMetric, MetricDeriver, lookup_metric};

use super::PodiumConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardBar {
    pub shape: LayoutShape,
    /// `1st`, `2nd`, `3rd`.
    pub position_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardView {
    /// `None` when the values were supplied by the caller.
    pub metric: Option<Metric>,
    pub ranking: Ranking,
    pub bars: Vec<LeaderboardBar>,
}

fn podium(
    metric: Option<Metric>,
    ranking: Ranking,
    config: &PodiumConfig,
) -> ChartResult<LeaderboardView> {
    let region = Region::from_size(config.width, config.height);
    let bars = layout_podium(ranking.values(), &config.style, region)?
        .into_iter()
        .map(|shape| LeaderboardBar {
            position_label: ordinal_label(shape.ordinal),
            shape,
        })
        .collect();
    Ok(LeaderboardView {
        metric,
        ranking,
        bars,
    })
}

/// Podium over `metric` averaged across every year.
///
/// Health rows are restricted to `Sex = Total`; sports rows carry no sex
/// split and are used as they are.
pub fn build_leaderboard(
    dataset: &Dataset,
    metric: Metric,
    config: &PodiumConfig,
    deriver: &MetricDeriver,
) -> ChartResult<LeaderboardView> {
    let table = lookup_metric(metric)?.group.source_table();
    let filter = match table {
        TableKind::Health => RecordFilter::any().with_sex(Sex::Total),
        TableKind::Sports => RecordFilter::any(),
    };
    let ranking = aggregate(
        dataset.table(table).records(),
        DerivedMetric::Raw(metric),
        filter,
        &Country::ALL,
        deriver,
    );
    podium(Some(metric), ranking, config)
}

/// Podium over caller-supplied values, ranked before placement.
pub fn build_leaderboard_from_values(
    values: impl IntoIterator<Item = CountryValue>,
    config: &PodiumConfig,
) -> ChartResult<LeaderboardView> {
    podium(None, Ranking::from_values(values), config)
}
