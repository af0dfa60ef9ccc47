use serde::{Deserialize, Serialize};

use crate::data::{Metric, TableKind};
use crate::error::{ChartError, ChartResult};

/// Dropdown section a selectable metric belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricGroup {
    DietaryHabits,
    PhysicalHabits,
    HealthMetrics,
}

impl MetricGroup {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DietaryHabits => "Dietary Habits",
            Self::PhysicalHabits => "Physical Habits",
            Self::HealthMetrics => "Health Metrics",
        }
    }

    /// Table the scatterplot reads for metrics of this group.
    #[must_use]
    pub const fn source_table(self) -> TableKind {
        match self {
            Self::DietaryHabits | Self::HealthMetrics => TableKind::Health,
            Self::PhysicalHabits => TableKind::Sports,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub display_name: &'static str,
    pub metric: Metric,
    pub axis_label: &'static str,
    pub group: MetricGroup,
}

const fn entry(
    display_name: &'static str,
    metric: Metric,
    axis_label: &'static str,
    group: MetricGroup,
) -> CatalogEntry {
    CatalogEntry {
        display_name,
        metric,
        axis_label,
        group,
    }
}

/// Selectable scatterplot metrics in dropdown order.
pub const METRIC_CATALOG: &[CatalogEntry] = &[
    entry(
        "Daily Fruit Consumption",
        Metric::FruitConsumption,
        "Proportion of Students Consuming Fruits Daily (%)",
        MetricGroup::DietaryHabits,
    ),
    entry(
        "Daily Vegetable Consumption",
        Metric::VegetableConsumption,
        "Proportion of Students Consuming Vegetables Daily (%)",
        MetricGroup::DietaryHabits,
    ),
    entry(
        "Regular Sports and Exercise",
        Metric::ExerciseRegularly,
        "Proportion of Students who Exercise Regularly (%)",
        MetricGroup::PhysicalHabits,
    ),
    entry(
        "Somewhat Regular Sports and Exercise",
        Metric::ExerciseSomeRegularity,
        "Proportion of Students who Exercise with Some Regularity (%)",
        MetricGroup::PhysicalHabits,
    ),
    entry(
        "No Sports and Exercise",
        Metric::ExerciseNever,
        "Proportion of Students who Never Exercise (%)",
        MetricGroup::PhysicalHabits,
    ),
    entry(
        "Daily Moderate Activity (> 60 min)",
        Metric::ModerateOver60,
        "Proportion of Students with >60min of Daily Moderate Activity (%)",
        MetricGroup::PhysicalHabits,
    ),
    entry(
        "Daily Moderate Activity (< 60 min)",
        Metric::ModerateUnder60,
        "Proportion of Students with <60min of Daily Moderate Activity (%)",
        MetricGroup::PhysicalHabits,
    ),
    entry(
        "No Moderate Activity",
        Metric::ModerateNever,
        "Proportion of Students with No Daily Moderate Activity (%)",
        MetricGroup::PhysicalHabits,
    ),
    entry(
        "Daily Vigorous Activity (> 60 min)",
        Metric::VigorousOver60,
        "Proportion of Students with >60min of Vigorous Activity (%)",
        MetricGroup::PhysicalHabits,
    ),
    entry(
        "Daily Vigorous Activity (< 60 min)",
        Metric::VigorousUnder60,
        "Proportion of Students with <60min of Vigorous Activity (%)",
        MetricGroup::PhysicalHabits,
    ),
    entry(
        "No Vigorous Activity",
        Metric::VigorousNever,
        "Proportion of Students with No Daily Vigorous Activity (%)",
        MetricGroup::PhysicalHabits,
    ),
    entry(
        "Good Self-Perceived Health (SPH)",
        Metric::Sph,
        "Proportion of Student with Good SPH (%)",
        MetricGroup::HealthMetrics,
    ),
    entry(
        "Healthy BMI",
        Metric::Healthy,
        "Proportion of Students with Healthy BMI (%)",
        MetricGroup::HealthMetrics,
    ),
    entry(
        "Obese BMI",
        Metric::Obese,
        "Proportion of Students who are Obese (%)",
        MetricGroup::HealthMetrics,
    ),
    entry(
        "Overweight BMI",
        Metric::Overweight,
        "Proportion of Students who are Overweight (%)",
        MetricGroup::HealthMetrics,
    ),
    entry(
        "Overweight or Obese BMI",
        Metric::OverweightOrObese,
        "Proportion of Students who are Overweight or Obese (%)",
        MetricGroup::HealthMetrics,
    ),
];

/// Looks up a dropdown display name.
pub fn lookup_display_name(display_name: &str) -> ChartResult<&'static CatalogEntry> {
    METRIC_CATALOG
        .iter()
        .find(|entry| entry.display_name == display_name)
        .ok_or_else(|| ChartError::UnknownMetric(display_name.to_owned()))
}

/// Looks up the catalog entry for a column.
pub fn lookup_metric(metric: Metric) -> ChartResult<&'static CatalogEntry> {
    METRIC_CATALOG
        .iter()
        .find(|entry| entry.metric == metric)
        .ok_or_else(|| ChartError::UnknownMetric(metric.column_name().to_owned()))
}

/// Entries of one dropdown section, in order.
pub fn entries_in_group(group: MetricGroup) -> impl Iterator<Item = &'static CatalogEntry> {
    METRIC_CATALOG
        .iter()
        .filter(move |entry| entry.group == group)
}
