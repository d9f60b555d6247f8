use std::time::Duration;

use pie_chart_rs::animation::TrackState;
use pie_chart_rs::api::{
    AnimationConfig, FloatListAdapter, PIE_CHART_SNAPSHOT_JSON_SCHEMA_V1, PieChart,
    PieChartConfig, PieChartSnapshot,
};
use pie_chart_rs::core::{Interpolator, Viewport};
use pie_chart_rs::render::NullRenderer;

fn animated_chart() -> PieChart<NullRenderer> {
    let config = PieChartConfig::new(Viewport::new(200, 200))
        .with_data_set_animation(AnimationConfig::new(1000, Interpolator::Linear));
    let mut chart = PieChart::new(NullRenderer::default(), config).expect("chart init");
    chart
        .set_adapter(Some(FloatListAdapter::new(vec![1.0, 1.0, 2.0]).shared()))
        .expect("bind adapter");
    chart
}

#[test]
fn snapshot_captures_live_animation_state() {
    let mut chart = animated_chart();
    chart.tick(Duration::from_millis(500));
    chart.set_selection(Some(2));

    let snapshot = chart.snapshot();
    assert_eq!(snapshot.boundaries, vec![0.0, 0.625, 0.75, 1.0]);
    assert_eq!(snapshot.selections, vec![0.0, 0.0, 1.0]);
    assert_eq!(snapshot.selected_index, Some(2));
    assert_eq!(snapshot.data_len, 3);
    assert_eq!(snapshot.data_set_state, TrackState::Running);
    assert_eq!(snapshot.selection_state, TrackState::Idle);
    assert_eq!(snapshot.slice_renderer.as_deref(), Some("wedge"));
    assert_eq!(snapshot.geometry.radius, 100.0);
}

#[test]
fn snapshot_is_deterministic() {
    let mut chart = animated_chart();
    chart.tick(Duration::from_millis(250));
    let first = chart.snapshot_json_pretty().expect("first");
    let second = chart.snapshot_json_pretty().expect("second");
    assert_eq!(first, second);
}

#[test]
fn json_contract_wraps_snapshot_with_schema_version() {
    let chart = animated_chart();
    let snapshot = chart.snapshot();
    let json = snapshot.to_json_contract_v1_pretty().expect("contract");

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(
        value["schema_version"],
        serde_json::json!(PIE_CHART_SNAPSHOT_JSON_SCHEMA_V1)
    );

    let parsed = PieChartSnapshot::from_json_compat_str(&json).expect("contract parse");
    assert_eq!(parsed, snapshot);

    let bare = chart.snapshot_json_pretty().expect("bare snapshot");
    let parsed = PieChartSnapshot::from_json_compat_str(&bare).expect("bare parse");
    assert_eq!(parsed, snapshot);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let snapshot = animated_chart().snapshot();
    let json = serde_json::json!({ "schema_version": 99, "snapshot": snapshot }).to_string();
    assert!(PieChartSnapshot::from_json_compat_str(&json).is_err());
}
