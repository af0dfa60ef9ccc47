//! Metric derivation and the selectable metric catalog.

mod catalog;
mod derive;

pub use catalog::{
    CatalogEntry, METRIC_CATALOG, MetricGroup, entries_in_group, lookup_display_name, lookup_metric,
};
pub use derive::{
    BmiBreakdown, BmiCategory, CategoryValue, DerivedMetric, MetricDeriver, NegativeValuePolicy,
};
