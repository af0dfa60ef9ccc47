//! Ordinary least-squares trendlines per country (and sex) group.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DataPoint, extent};
use crate::data::{Country, Sex};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trendline {
    pub slope: f64,
    pub intercept: f64,
}

impl Trendline {
    #[must_use]
    pub fn at(self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Why no line could be fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UndefinedReason {
    NoPoints,
    NonFinitePoint,
    /// Every x is identical, so the slope denominator is zero.
    ZeroXVariance,
}

/// Fit outcome; `Undefined` means "draw nothing".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TrendFit {
    Defined(Trendline),
    Undefined(UndefinedReason),
}

impl TrendFit {
    #[must_use]
    pub fn line(self) -> Option<Trendline> {
        match self {
            Self::Defined(line) => Some(line),
            Self::Undefined(_) => None,
        }
    }

    #[must_use]
    pub fn is_defined(self) -> bool {
        matches!(self, Self::Defined(_))
    }
}

/// Fits `y = slope * x + intercept` by ordinary least squares.
#[must_use]
pub fn fit(points: &[DataPoint]) -> TrendFit {
    let Some(first) = points.first() else {
        return TrendFit::Undefined(UndefinedReason::NoPoints);
    };
    if points
        .iter()
        .any(|point| !point.x.is_finite() || !point.y.is_finite())
    {
        return TrendFit::Undefined(UndefinedReason::NonFinitePoint);
    }
    if points.iter().all(|point| point.x == first.x) {
        return TrendFit::Undefined(UndefinedReason::ZeroXVariance);
    }

    let n = points.len() as f64;
    let (sum_x, sum_y, sum_xy, sum_xx) = points.iter().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxy, sxx), point| {
            (
                sx + point.x,
                sy + point.y,
                sxy + point.x * point.y,
                sxx + point.x * point.x,
            )
        },
    );

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 || !denominator.is_finite() {
        return TrendFit::Undefined(UndefinedReason::ZeroXVariance);
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    TrendFit::Defined(Trendline { slope, intercept })
}

/// Grouping key: country alone, or country and sex for stratified data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrendGroup {
    pub country: Country,
    pub sex: Option<Sex>,
}

impl TrendGroup {
    #[must_use]
    pub const fn country(country: Country) -> Self {
        Self { country, sex: None }
    }

    #[must_use]
    pub const fn country_and_sex(country: Country, sex: Sex) -> Self {
        Self {
            country,
            sex: Some(sex),
        }
    }
}

/// Fit for one group plus the x span its line covers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupFit {
    pub group: TrendGroup,
    pub fit: TrendFit,
    pub point_count: usize,
    pub x_extent: Option<(f64, f64)>,
}

impl GroupFit {
    /// Line endpoints over the group's x extent, `None` for undefined fits.
    #[must_use]
    pub fn segment(&self) -> Option<(DataPoint, DataPoint)> {
        let line = self.fit.line()?;
        let (x0, x1) = self.x_extent?;
        Some((
            DataPoint::new(x0, line.at(x0)),
            DataPoint::new(x1, line.at(x1)),
        ))
    }
}

/// Fits one line per group, groups in first-appearance order.
pub fn fit_groups(samples: impl IntoIterator<Item = (TrendGroup, DataPoint)>) -> Vec<GroupFit> {
    let mut grouped: IndexMap<TrendGroup, Vec<DataPoint>> = IndexMap::new();
    for (group, point) in samples {
        grouped.entry(group).or_default().push(point);
    }

    grouped
        .into_iter()
        .map(|(group, points)| {
            let fit = fit(&points);
            if let TrendFit::Undefined(reason) = fit {
                debug!(
                    country = %group.country,
                    sex = ?group.sex,
                    ?reason,
                    points = points.len(),
                    "trendline undefined; skipping"
                );
            }
            GroupFit {
                group,
                fit,
                point_count: points.len(),
                x_extent: extent(points.iter().map(|point| point.x)),
            }
        })
        .collect()
}
