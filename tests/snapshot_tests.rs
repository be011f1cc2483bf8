use line_chart_rs::ChartError;
use line_chart_rs::api::{ChartSnapshot, LineChart, LineChartConfig};
use line_chart_rs::core::Sample;
use line_chart_rs::render::NullRenderer;

fn chart() -> LineChart<NullRenderer> {
    let samples = vec![
        Sample::new(0.0, 0.0),
        Sample::new(1.0, 10.0),
        Sample::new(2.0, 5.0),
    ];
    LineChart::new(
        NullRenderer::default(),
        samples,
        LineChartConfig::default().with_start_from_zero(true),
    )
    .expect("chart init")
}

#[test]
fn snapshot_reflects_chart_state() {
    let mut chart = chart();
    chart.pointer_move(20.0, 200.0).expect("hover");

    let snapshot = chart.snapshot();
    assert_eq!(snapshot.transform, chart.transform());
    assert!(snapshot.overlay.is_visible());
    assert_eq!(snapshot.samples, chart.samples());
    assert_eq!(snapshot.plot_points, chart.plot_points());
    assert_eq!(snapshot.amplitude, 376.0);
    assert_eq!(snapshot.visible_width, 580.0);
    assert_eq!(snapshot.rendered_width, 2.0 * 8.0 + 4.0);
    assert_eq!(snapshot.plot_points[1].y, 0.0);
}

#[test]
fn snapshot_json_carries_schema_version() {
    let snapshot = chart().snapshot();
    let json = snapshot.to_json_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));
    assert_eq!(ChartSnapshot::from_json_str(&json).expect("parse"), snapshot);
}

#[test]
fn bare_snapshot_json_is_accepted() {
    let snapshot = chart().snapshot();
    let json = serde_json::to_string(&snapshot).expect("serialize");
    assert_eq!(ChartSnapshot::from_json_str(&json).expect("parse"), snapshot);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let snapshot = chart().snapshot();
    let json = snapshot
        .to_json_pretty()
        .expect("serialize")
        .replace("\"schema_version\": 1", "\"schema_version\": 9");
    let err = ChartSnapshot::from_json_str(&json).expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
