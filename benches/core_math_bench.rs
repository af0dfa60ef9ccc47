use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use survey_charts::aggregate::aggregate;
use survey_charts::api::{DashboardConfig, DashboardState};
use survey_charts::core::DataPoint;
use survey_charts::data::{
    Country, DataTable, Dataset, Metric, Record, RecordFilter, Sex, TableKind,
};
use survey_charts::metrics::{DerivedMetric, MetricDeriver};
use survey_charts::trend::fit;

fn synthetic_dataset(years: i32) -> Dataset {
    let mut health = Vec::new();
    let mut sports = Vec::new();
    for year in 2000..2000 + years {
        let t = f64::from(year - 2000);
        for (index, country) in Country::ALL.into_iter().enumerate() {
            let offset = index as f64 * 3.0;
            for (sex_index, sex) in [Sex::Total, Sex::Male, Sex::Female].into_iter().enumerate() {
                let s = sex_index as f64;
                health.push(
                    Record::new(year, country, sex)
                        .with_value(
                            Metric::FruitConsumption,
                            30.0 + offset + s + (t * 0.3) % 7.0,
                        )
                        .with_value(Metric::VegetableConsumption, 35.0 - offset + s)
                        .with_value(Metric::Healthy, 70.0 + offset + (t * 0.7) % 9.0 - s)
                        .with_value(Metric::Sph, 80.0 + offset + (t * 0.5) % 5.0 + s),
                );
            }
            sports.push(
                Record::new(year, country, Sex::Unknown)
                    .with_value(Metric::Sph, 82.0 + offset)
                    .with_value(Metric::Healthy, 72.0 + offset + (t * 0.2) % 4.0)
                    .with_value(Metric::Overweight, 15.0 + offset)
                    .with_value(Metric::Obese, 4.0 + index as f64)
                    .with_value(Metric::ExerciseRegularly, 40.0 + offset)
                    .with_value(Metric::ExerciseSomeRegularity, 30.0 - offset)
                    .with_value(Metric::VigorousOver60, 25.0 + offset)
                    .with_value(Metric::VigorousUnder60, 40.0 - offset),
            );
        }
    }
    Dataset::new(
        DataTable::new(TableKind::Health, health),
        DataTable::new(TableKind::Sports, sports),
    )
    .expect("valid synthetic dataset")
}

fn bench_aggregate_health_rows(c: &mut Criterion) {
    let dataset = synthetic_dataset(1_000);
    let deriver = MetricDeriver::default();

    c.bench_function("aggregate_health_rows_9k", |b| {
        b.iter(|| {
            let _ = aggregate(
                black_box(dataset.health().records()),
                DerivedMetric::Raw(Metric::FruitConsumption),
                RecordFilter::any().with_sex(Sex::Total),
                &Country::ALL,
                &deriver,
            );
        })
    });
}

fn bench_trendline_fit_10k(c: &mut Criterion) {
    let points: Vec<DataPoint> = (0..10_000)
        .map(|i| {
            let x = f64::from(i) * 0.01;
            DataPoint::new(x, 3.0 * x - 4.0 + if i % 2 == 0 { 0.5 } else { -0.5 })
        })
        .collect();

    c.bench_function("trendline_fit_10k", |b| {
        b.iter(|| {
            let _ = fit(black_box(&points));
        })
    });
}

fn bench_dashboard_snapshot_json(c: &mut Criterion) {
    let config = DashboardConfig::default().with_default_year(2010);
    let state = DashboardState::new(synthetic_dataset(20), config).expect("dashboard state");

    c.bench_function("dashboard_snapshot_json_20y", |b| {
        b.iter(|| {
            let _ = black_box(&state)
                .snapshot_json_contract_v1_pretty()
                .expect("snapshot json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_aggregate_health_rows,
    bench_trendline_fit_10k,
    bench_dashboard_snapshot_json
);
criterion_main!(benches);
