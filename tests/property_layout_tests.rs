use proptest::prelude::*;
use survey_charts::aggregate::{CountryValue, Ranking, aggregate};
use survey_charts::core::{DataPoint, Region};
use survey_charts::data::{Country, Metric, Record, RecordFilter, Sex};
use survey_charts::layout::{ShapeExtent, StackedCircleStyle, layout_stacked_circles};
use survey_charts::metrics::{DerivedMetric, MetricDeriver};
use survey_charts::trend::fit;

fn country_strategy() -> impl Strategy<Value = Country> {
    prop_oneof![
        Just(Country::France),
        Just(Country::Italy),
        Just(Country::Netherlands),
    ]
}

proptest! {
    #[test]
    fn aggregate_returns_one_value_per_country(
        rows in prop::collection::vec((country_strategy(), 0.0f64..100.0), 0..12)
    ) {
        let records: Vec<Record> = rows
            .iter()
            .map(|&(country, value)| {
                Record::new(2022, country, Sex::Total).with_value(Metric::Sph, value)
            })
            .collect();
        let ranking = aggregate(
            &records,
            Metric::Sph.into(),
            RecordFilter::year(2022),
            &Country::ALL,
            &MetricDeriver::default(),
        );

        prop_assert_eq!(ranking.len(), 3);
        for country in Country::ALL {
            prop_assert!(ranking.position(country).is_some());
        }
    }

    #[test]
    fn ranking_is_descending(
        a in -1_000.0f64..1_000.0,
        b in -1_000.0f64..1_000.0,
        c in -1_000.0f64..1_000.0
    ) {
        let ranking = Ranking::from_values([
            CountryValue::new(Country::Italy, a),
            CountryValue::new(Country::Netherlands, b),
            CountryValue::new(Country::France, c),
        ]);
        for pair in ranking.values().windows(2) {
            prop_assert!(pair[0].value >= pair[1].value);
        }
    }

    #[test]
    fn normal_weight_completes_well_formed_triples(
        overweight in 0.0f64..60.0,
        obese in 0.0f64..40.0
    ) {
        let record = Record::new(2022, Country::France, Sex::Unknown)
            .with_value(Metric::Overweight, overweight)
            .with_value(Metric::Obese, obese);
        let deriver = MetricDeriver::default();
        let normal = deriver.derive(&record, DerivedMetric::NormalWeight);

        prop_assert!((normal + overweight + obese - 100.0).abs() <= 1e-9);
    }

    #[test]
    fn stacked_circles_keep_gap_and_order(
        mut values in prop::collection::vec(0.0f64..150.0, 3)
    ) {
        values.sort_by(|a, b| b.total_cmp(a));
        let ranked: Vec<CountryValue> = Country::ALL
            .into_iter()
            .zip(values)
            .map(|(country, value)| CountryValue::new(country, value))
            .collect();
        let style = StackedCircleStyle::default();
        let circles = layout_stacked_circles(&ranked, &style, Region::from_size(120.0, 400.0))
            .expect("layout");

        let radius = |extent: ShapeExtent| match extent {
            ShapeExtent::Circle { radius } => radius,
            _ => 0.0,
        };
        prop_assert_eq!(circles[0].key.country(), Some(ranked[0].country));
        for pair in circles.windows(2) {
            let needed = radius(pair[0].extent) + radius(pair[1].extent) + style.gap_px;
            prop_assert!(pair[0].y - pair[1].y + 1e-9 >= needed);
            prop_assert!(radius(pair[0].extent) + 1e-9 >= radius(pair[1].extent));
        }
    }

    #[test]
    fn fit_recovers_generating_line(
        slope in -10.0f64..10.0,
        intercept in -100.0f64..100.0,
        xs in prop::collection::btree_set(-500i32..500, 2..20)
    ) {
        let points: Vec<DataPoint> = xs
            .iter()
            .map(|&x| {
                let x = f64::from(x);
                DataPoint::new(x, slope * x + intercept)
            })
            .collect();
        let line = fit(&points).line().expect("distinct x values");

        prop_assert!((line.slope - slope).abs() <= 1e-6);
        prop_assert!((line.intercept - intercept).abs() <= 1e-4);
    }
}
