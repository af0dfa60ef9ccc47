use survey_charts::data::{Country, Metric, Record, Sex};
use survey_charts::metrics::{BmiCategory, DerivedMetric, MetricDeriver, NegativeValuePolicy};

fn bmi_record(overweight: f64, obese: f64) -> Record {
    Record::new(2022, Country::France, Sex::Unknown)
        .with_value(Metric::Overweight, overweight)
        .with_value(Metric::Obese, obese)
}

#[test]
fn normal_weight_is_remainder_of_overweight_and_obese() {
    let record = bmi_record(30.0, 10.0);
    let value = MetricDeriver::default().derive(&record, DerivedMetric::NormalWeight);
    assert!((value - 60.0).abs() <= 1e-9);
}

#[test]
fn bmi_breakdown_sums_to_one_hundred() {
    let breakdown = MetricDeriver::default().bmi_breakdown(&bmi_record(22.5, 7.25));
    assert_eq!(breakdown.country, Country::France);
    assert!((breakdown.total() - 100.0).abs() <= 1e-9);
    assert!((breakdown.value(BmiCategory::Normal) - 70.25).abs() <= 1e-9);
}

#[test]
fn donut_segments_follow_overweight_obese_normal_order() {
    let breakdown = MetricDeriver::default().bmi_breakdown(&bmi_record(30.0, 10.0));
    let order: Vec<BmiCategory> = breakdown
        .donut_segments()
        .iter()
        .map(|segment| segment.category)
        .collect();
    assert_eq!(
        order,
        vec![
            BmiCategory::Overweight,
            BmiCategory::Obese,
            BmiCategory::Normal,
        ]
    );
}

#[test]
fn combined_exercise_and_vigorous_activity_are_derived() {
    let record = Record::new(2018, Country::Italy, Sex::Unknown)
        .with_value(Metric::ExerciseRegularly, 35.0)
        .with_value(Metric::ExerciseSomeRegularity, 30.0)
        .with_value(Metric::VigorousNever, 40.0);
    let deriver = MetricDeriver::default();

    let combined = deriver.derive(&record, DerivedMetric::CombinedRegularExercise);
    let vigorous = deriver.derive(&record, DerivedMetric::AnyVigorousActivity);
    assert!((combined - 65.0).abs() <= 1e-9);
    assert!((vigorous - 60.0).abs() <= 1e-9);
}

#[test]
fn missing_source_values_count_as_zero() {
    let record = Record::new(2018, Country::Italy, Sex::Unknown);
    let deriver = MetricDeriver::default();

    assert_eq!(deriver.derive(&record, DerivedMetric::NormalWeight), 100.0);
    assert_eq!(
        deriver.derive(&record, DerivedMetric::CombinedRegularExercise),
        0.0
    );
    assert_eq!(deriver.derive(&record, Metric::Sph.into()), 0.0);
}

#[test]
fn pass_through_policy_keeps_negative_normal_weight() {
    let record = bmi_record(70.0, 40.0);
    let value = MetricDeriver::new(NegativeValuePolicy::PassThrough)
        .derive(&record, DerivedMetric::NormalWeight);
    assert!((value + 10.0).abs() <= 1e-9);
}

#[test]
fn clamp_policy_bounds_computed_metrics_only() {
    let deriver = MetricDeriver::new(NegativeValuePolicy::Clamp);
    assert_eq!(
        deriver.derive(&bmi_record(70.0, 40.0), DerivedMetric::NormalWeight),
        0.0
    );

    let raw = Record::new(2022, Country::Netherlands, Sex::Total).with_value(Metric::Sph, 120.0);
    assert_eq!(deriver.derive(&raw, DerivedMetric::Raw(Metric::Sph)), 120.0);
}

#[test]
fn warn_policy_reports_but_keeps_value() {
    let value = MetricDeriver::new(NegativeValuePolicy::Warn)
        .derive(&bmi_record(70.0, 40.0), DerivedMetric::NormalWeight);
    assert!((value + 10.0).abs() <= 1e-9);
}

#[test]
fn derived_metric_names_match_column_headers() {
    assert_eq!(DerivedMetric::Raw(Metric::Healthy).name(), "Healthy (%)");
    assert_eq!(DerivedMetric::NormalWeight.to_string(), "Normal (%)");
    assert!(DerivedMetric::AnyVigorousActivity.is_computed());
    assert!(!DerivedMetric::from(Metric::Obese).is_computed());
}
