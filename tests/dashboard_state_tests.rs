mod common;

use survey_charts::ChartError;
use survey_charts::api::{
    BmiChartMode, DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1, DashboardConfig, DashboardSnapshot,
    DashboardState, DonutPanelConfig, ScatterConfig,
};
use survey_charts::data::{Country, Metric};
use survey_charts::metrics::NegativeValuePolicy;

fn state() -> DashboardState {
    DashboardState::new(common::dataset(), DashboardConfig::default()).expect("dashboard state")
}

#[test]
fn opens_on_default_selection() {
    let state = state();
    let selection = state.selection();

    assert_eq!(selection.year, 2022);
    assert_eq!(selection.scatter_metric, "Daily Fruit Consumption");
    assert!(!selection.show_trendlines);
    assert!(selection.compare_scaled_axes);
    assert_eq!(selection.selected_country, None);
    assert_eq!(selection.bmi_mode, BmiChartMode::ByCountry);
    assert_eq!(state.years(), vec![2018, 2022]);
}

#[test]
fn missing_default_year_falls_back_to_latest() {
    let config = DashboardConfig::default().with_default_year(2030);
    let state = DashboardState::new(common::dataset(), config).expect("dashboard state");
    assert_eq!(state.selection().year, 2022);
}

#[test]
fn empty_dataset_is_rejected() {
    let dataset = common::dataset_from("Year,Country,Sex\n", "Year,Country\n");
    let err = DashboardState::new(dataset, DashboardConfig::default()).expect_err("no years");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let config = DashboardConfig::default().with_default_scatter_metric("Hours of Sleep");
    let err = DashboardState::new(common::dataset(), config).expect_err("unknown metric");
    assert!(matches!(err, ChartError::UnknownMetric(_)));

    let config = DashboardConfig::default().with_scatter(ScatterConfig {
        nice_ticks: 0,
        ..ScatterConfig::default()
    });
    assert!(DashboardState::new(common::dataset(), config).is_err());
}

#[test]
fn reversed_donut_angles_are_rejected_up_front() {
    let mut donut = DonutPanelConfig::default();
    donut.style.start_angle = 1.0;
    donut.style.end_angle = -1.0;
    let config = DashboardConfig::default().with_donut(donut);

    let err = config.validate().expect_err("reversed donut span");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn year_must_exist_in_data() {
    let mut state = state();
    state.set_year(2018).expect("2018 present");
    assert_eq!(state.selection().year, 2018);
    assert_eq!(state.honeycomb().expect("honeycomb").year, 2018);

    let err = state.set_year(2019).expect_err("2019 absent");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert_eq!(state.selection().year, 2018);
}

#[test]
fn metric_selection_resolves_display_names() {
    let mut state = state();
    let entry = state
        .select_metric("Regular Sports and Exercise")
        .expect("known metric");
    assert_eq!(entry.metric, Metric::ExerciseRegularly);
    assert_eq!(
        state.selection().scatter_metric,
        "Regular Sports and Exercise"
    );
    assert_eq!(
        state.scatter().expect("scatter").metric,
        Metric::ExerciseRegularly
    );

    let err = state
        .select_metric("Hours of Sleep")
        .expect_err("unknown metric");
    assert!(matches!(err, ChartError::UnknownMetric(name) if name == "Hours of Sleep"));
    assert_eq!(
        state.selection().scatter_metric,
        "Regular Sports and Exercise"
    );
}

#[test]
fn country_selection_toggles() {
    let mut state = state();
    assert_eq!(state.toggle_country(Country::Italy), Some(Country::Italy));
    assert_eq!(state.toggle_country(Country::France), Some(Country::France));
    assert_eq!(state.toggle_country(Country::France), None);

    state.toggle_country(Country::Netherlands);
    let summary = state
        .honeycomb()
        .expect("honeycomb")
        .rank_summary
        .expect("summary");
    assert_eq!(summary.country, Country::Netherlands);

    state.clear_selected_country();
    assert_eq!(state.selection().selected_country, None);
}

#[test]
fn toggles_flow_into_views() {
    let mut state = state();
    state.set_show_trendlines(true);
    state.set_compare_scaled_axes(false);
    state.set_bmi_mode(BmiChartMode::ByCategory);

    let scatter = state.scatter().expect("scatter");
    assert!(scatter.show_trendlines);
    assert!(!scatter.compare_scaled_axes);
    assert_eq!(scatter.healthy_domain, (72.0, 88.0));
    assert_eq!(
        scatter.visible_trendlines().count(),
        scatter.trendlines.len()
    );

    assert_eq!(
        state.bmi_chart().expect("bmi").mode,
        BmiChartMode::ByCategory
    );
}

#[test]
fn leaderboard_follows_configured_metric() {
    let config = DashboardConfig::default().with_leaderboard_metric(Metric::VegetableConsumption);
    let state = DashboardState::new(common::dataset(), config).expect("dashboard state");
    let view = state.leaderboard().expect("leaderboard");

    assert_eq!(view.metric, Some(Metric::VegetableConsumption));
    // Total rows: France 40/45, Italy 30/35, Netherlands 35/30
    assert_eq!(view.ranking.values()[0].country, Country::France);
    assert_eq!(view.ranking.value_of(Country::France), Some(42.5));
}

#[test]
fn config_json_round_trip() {
    let config = DashboardConfig::default()
        .with_default_year(2018)
        .with_negative_value_policy(NegativeValuePolicy::Clamp)
        .with_leaderboard_metric(Metric::Sph);
    let json = config.to_json_pretty().expect("serialize");
    let parsed = DashboardConfig::from_json_str(&json).expect("parse");

    assert_eq!(parsed.default_year, 2018);
    assert_eq!(parsed.negative_value_policy, NegativeValuePolicy::Clamp);
    assert_eq!(parsed.leaderboard_metric, Metric::Sph);
    assert_eq!(parsed.default_scatter_metric, config.default_scatter_metric);
    assert_eq!(parsed.bmi_chart, config.bmi_chart);
    assert_eq!(parsed.honeycomb, config.honeycomb);
    assert_eq!(parsed.podium, config.podium);
    assert_eq!(parsed.scatter, config.scatter);
    parsed.validate().expect("parsed config is valid");
}

#[test]
fn config_json_fills_missing_fields() {
    assert_eq!(
        DashboardConfig::from_json_str("{}").expect("empty object"),
        DashboardConfig::default()
    );

    let partial = DashboardConfig::from_json_str(r#"{ "default_year": 2018 }"#).expect("partial");
    assert_eq!(partial.default_year, 2018);
    assert_eq!(partial.scatter, ScatterConfig::default());

    let nested = DashboardConfig::from_json_str(
        r#"{ "scatter": { "width": 1000 }, "honeycomb": { "circles": { "gap_px": 4 } } }"#,
    )
    .expect("partial nested objects");
    assert_eq!(nested.scatter.width, 1000.0);
    assert_eq!(nested.scatter.height, ScatterConfig::default().height);
    assert_eq!(nested.scatter.margins, ScatterConfig::default().margins);
    assert_eq!(nested.honeycomb.circles.gap_px, 4.0);
    assert_eq!(nested.honeycomb.width, 1200.0);
    assert_eq!(nested.bmi_chart, DashboardConfig::default().bmi_chart);
    nested.validate().expect("partial config is valid");

    let err = DashboardConfig::from_json_str("[1, 2]").expect_err("not an object");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn snapshot_collects_every_view() {
    let mut state = state();
    state.toggle_country(Country::Italy);
    let snapshot = state.snapshot().expect("snapshot");

    assert_eq!(snapshot.selection, *state.selection());
    assert_eq!(snapshot.years, vec![2018, 2022]);
    assert_eq!(snapshot.bmi_chart.bars.len(), 9);
    assert_eq!(snapshot.donut_panels.panels.len(), 3);
    assert_eq!(snapshot.honeycomb.panels.len(), 6);
    assert_eq!(snapshot.leaderboard.bars.len(), 3);
    assert_eq!(snapshot.scatter.points.len(), 24);
}

#[test]
fn snapshot_contract_round_trip() {
    let state = state();
    let snapshot = state.snapshot().expect("snapshot");

    let contract = state
        .snapshot_json_contract_v1_pretty()
        .expect("contract json");
    let value: serde_json::Value = serde_json::from_str(&contract).expect("valid json");
    assert_eq!(value["schema_version"], DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1);

    let parsed = DashboardSnapshot::from_json_compat_str(&contract).expect("contract payload");
    assert_eq!(parsed.selection, snapshot.selection);
    assert_eq!(parsed.years, snapshot.years);
    assert_eq!(
        parsed.honeycomb.rank_summary,
        snapshot.honeycomb.rank_summary
    );
    assert_eq!(parsed.leaderboard.ranking, snapshot.leaderboard.ranking);
    assert_eq!(parsed.scatter.points.len(), snapshot.scatter.points.len());

    let bare = snapshot.to_json_pretty().expect("bare json");
    let parsed = DashboardSnapshot::from_json_compat_str(&bare).expect("bare payload");
    assert_eq!(parsed.selection, snapshot.selection);
}

#[test]
fn snapshot_contract_rejects_other_versions() {
    let snapshot = state().snapshot().expect("snapshot");
    let mut value: serde_json::Value =
        serde_json::from_str(&snapshot.to_json_contract_v1_pretty().expect("contract"))
            .expect("valid json");
    value["schema_version"] = serde_json::json!(2);

    let err = DashboardSnapshot::from_json_compat_str(&value.to_string()).expect_err("v2");
    assert!(matches!(err, ChartError::InvalidData(message) if message.contains("version")));

    let err = DashboardSnapshot::from_json_compat_str("{\"years\": []}").expect_err("garbage");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
