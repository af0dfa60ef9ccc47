use survey_charts::ChartError;
use survey_charts::data::{Metric, TableKind};
use survey_charts::metrics::{
    METRIC_CATALOG, MetricGroup, entries_in_group, lookup_display_name, lookup_metric,
};

#[test]
fn every_metric_column_has_one_entry() {
    assert_eq!(METRIC_CATALOG.len(), 16);
    for entry in METRIC_CATALOG {
        let found = lookup_metric(entry.metric).expect("metric in catalog");
        assert_eq!(found.display_name, entry.display_name);
        assert_eq!(
            lookup_display_name(entry.display_name).expect("display name"),
            entry
        );
    }
}

#[test]
fn groups_pick_the_source_table() {
    let fruit = lookup_display_name("Daily Fruit Consumption").expect("fruit");
    assert_eq!(fruit.metric, Metric::FruitConsumption);
    assert_eq!(fruit.group, MetricGroup::DietaryHabits);
    assert_eq!(fruit.group.source_table(), TableKind::Health);

    let regular = lookup_metric(Metric::ExerciseRegularly).expect("regular exercise");
    assert_eq!(regular.group, MetricGroup::PhysicalHabits);
    assert_eq!(regular.group.source_table(), TableKind::Sports);

    assert_eq!(MetricGroup::HealthMetrics.source_table(), TableKind::Health);
    assert_eq!(MetricGroup::PhysicalHabits.label(), "Physical Habits");
}

#[test]
fn groups_partition_the_catalog() {
    let total: usize = [
        MetricGroup::DietaryHabits,
        MetricGroup::PhysicalHabits,
        MetricGroup::HealthMetrics,
    ]
    .into_iter()
    .map(|group| entries_in_group(group).count())
    .sum();
    assert_eq!(total, METRIC_CATALOG.len());
    assert_eq!(entries_in_group(MetricGroup::DietaryHabits).count(), 2);
}

#[test]
fn unknown_display_name_is_reported() {
    let err = lookup_display_name("daily fruit consumption").expect_err("case sensitive");
    assert!(matches!(err, ChartError::UnknownMetric(name) if name == "daily fruit consumption"));
}
