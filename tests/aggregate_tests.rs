use survey_charts::aggregate::{
    CountryValue, RankCounts, Ranking, aggregate, ordinal_label, ratio_label,
};
use survey_charts::data::{Country, Metric, Record, RecordFilter, Sex};
use survey_charts::metrics::{DerivedMetric, MetricDeriver};

fn sph(year: i32, country: Country, value: f64) -> Record {
    Record::new(year, country, Sex::Unknown).with_value(Metric::Sph, value)
}

fn countries(ranking: &Ranking) -> Vec<Country> {
    ranking.values().iter().map(|entry| entry.country).collect()
}

#[test]
fn ranks_descending_by_value() {
    let records = vec![
        sph(2022, Country::France, 80.0),
        sph(2022, Country::Italy, 70.0),
        sph(2022, Country::Netherlands, 90.0),
    ];
    let ranking = aggregate(
        &records,
        Metric::Sph.into(),
        RecordFilter::year(2022),
        &Country::ALL,
        &MetricDeriver::default(),
    );

    assert_eq!(
        countries(&ranking),
        vec![Country::Netherlands, Country::France, Country::Italy]
    );
    assert_eq!(
        ordinal_label(ranking.position(Country::Netherlands).expect("ranked")),
        "1st"
    );
    assert_eq!(
        ordinal_label(ranking.position(Country::France).expect("ranked")),
        "2nd"
    );
    assert_eq!(
        ordinal_label(ranking.position(Country::Italy).expect("ranked")),
        "3rd"
    );
}

#[test]
fn averages_rows_and_applies_filter() {
    let records = vec![
        sph(2018, Country::France, 60.0),
        sph(2022, Country::France, 70.0),
        sph(2022, Country::France, 90.0),
        sph(2022, Country::Italy, 50.0),
        sph(2022, Country::Netherlands, 75.0),
    ];
    let ranking = aggregate(
        &records,
        Metric::Sph.into(),
        RecordFilter::year(2022),
        &Country::ALL,
        &MetricDeriver::default(),
    );

    assert_eq!(ranking.value_of(Country::France), Some(80.0));
    assert_eq!(ranking.len(), 3);
}

#[test]
fn sex_filter_selects_total_rows() {
    let records = vec![
        Record::new(2022, Country::France, Sex::Total).with_value(Metric::FruitConsumption, 40.0),
        Record::new(2022, Country::France, Sex::Male).with_value(Metric::FruitConsumption, 10.0),
    ];
    let ranking = aggregate(
        &records,
        Metric::FruitConsumption.into(),
        RecordFilter::year(2022).with_sex(Sex::Total),
        &[Country::France],
        &MetricDeriver::default(),
    );
    assert_eq!(ranking.value_of(Country::France), Some(40.0));
}

#[test]
fn missing_country_defaults_to_zero_and_ranks_last() {
    let records = vec![
        sph(2022, Country::France, 80.0),
        sph(2022, Country::Italy, 70.0),
    ];
    let ranking = aggregate(
        &records,
        Metric::Sph.into(),
        RecordFilter::year(2022),
        &Country::ALL,
        &MetricDeriver::default(),
    );

    assert_eq!(ranking.len(), 3);
    assert_eq!(ranking.value_of(Country::Netherlands), Some(0.0));
    assert_eq!(ranking.position(Country::Netherlands), Some(2));
}

#[test]
fn ties_keep_roster_order() {
    let ranking = Ranking::from_values([
        CountryValue::new(Country::Netherlands, 50.0),
        CountryValue::new(Country::Italy, 50.0),
        CountryValue::new(Country::France, 50.0),
    ]);
    assert_eq!(
        countries(&ranking),
        vec![Country::France, Country::Italy, Country::Netherlands]
    );
}

#[test]
fn computed_metrics_aggregate_through_the_deriver() {
    let records = vec![
        Record::new(2022, Country::Italy, Sex::Unknown)
            .with_value(Metric::Overweight, 22.0)
            .with_value(Metric::Obese, 6.0),
    ];
    let ranking = aggregate(
        &records,
        DerivedMetric::NormalWeight,
        RecordFilter::any(),
        &[Country::Italy],
        &MetricDeriver::default(),
    );
    assert_eq!(ranking.value_of(Country::Italy), Some(72.0));
}

#[test]
fn average_and_ratio_to_average() {
    let ranking = Ranking::from_values([
        CountryValue::new(Country::France, 60.0),
        CountryValue::new(Country::Italy, 30.0),
        CountryValue::new(Country::Netherlands, 90.0),
    ]);
    assert!((ranking.average() - 60.0).abs() <= 1e-9);
    assert_eq!(ranking.ratio_to_average(Country::Netherlands), Some(1.5));
    assert_eq!(ratio_label(1.5), "1.50× more than avg");
    assert_eq!(ratio_label(0.5), "0.50× less than avg");
}

#[test]
fn ratio_is_undefined_for_zero_average() {
    let ranking = Ranking::from_values([CountryValue::new(Country::France, 0.0)]);
    assert_eq!(ranking.ratio_to_average(Country::France), None);
    assert_eq!(Ranking::default().average(), 0.0);
}

#[test]
fn ordinal_labels_cover_teens() {
    assert_eq!(ordinal_label(3), "4th");
    assert_eq!(ordinal_label(10), "11th");
    assert_eq!(ordinal_label(20), "21st");
    assert_eq!(ordinal_label(21), "22nd");
}

#[test]
fn rank_counts_tally_places() {
    let first = Ranking::from_values([
        CountryValue::new(Country::France, 3.0),
        CountryValue::new(Country::Italy, 2.0),
        CountryValue::new(Country::Netherlands, 1.0),
    ]);
    let third = Ranking::from_values([
        CountryValue::new(Country::France, 1.0),
        CountryValue::new(Country::Italy, 2.0),
        CountryValue::new(Country::Netherlands, 3.0),
    ]);

    let counts = RankCounts::tally(Country::France, [&first, &first, &third]);
    assert_eq!(
        counts,
        RankCounts {
            first: 2,
            second: 0,
            third: 1
        }
    );
}
