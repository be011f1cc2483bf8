use line_chart_rs::api::{LineChart, LineChartConfig};
use line_chart_rs::core::{
    Dimensions, Margin, PlotGeometry, Sample, Transform, find_sample_by_index, nearest_sample,
    nearest_sample_index,
};
use line_chart_rs::interaction::OverlayVisibility;
use line_chart_rs::render::NullRenderer;

fn default_geometry() -> PlotGeometry {
    PlotGeometry::new(Margin::default(), Dimensions::default()).expect("valid geometry")
}

#[test]
fn index_rounds_to_nearest_step() {
    let geometry = default_geometry();
    let identity = Transform::identity();
    assert_eq!(nearest_sample_index(12.0 + 8.0 * 2.4, identity, &geometry), 2.0);
    assert_eq!(nearest_sample_index(12.0 + 8.0 * 2.6, identity, &geometry), 3.0);

    let zoomed = Transform {
        pan_x: 0.0,
        zoom: 2.0,
    };
    assert_eq!(nearest_sample_index(12.0 + 16.0 * 3.0, zoomed, &geometry), 3.0);
}

#[test]
fn index_left_of_plot_clamps_to_zero() {
    let geometry = default_geometry();
    assert_eq!(nearest_sample_index(0.0, Transform::identity(), &geometry), 0.0);
    assert_eq!(nearest_sample_index(-500.0, Transform::identity(), &geometry), 0.0);
}

#[test]
fn index_past_last_sample_has_no_match() {
    let geometry = default_geometry();
    let samples: Vec<Sample> = (0..5).map(|i| Sample::new(f64::from(i), 1.0)).collect();
    let content_x = 12.0 + 8.0 * 40.0;
    assert_eq!(
        nearest_sample_index(content_x, Transform::identity(), &geometry),
        40.0
    );
    assert!(nearest_sample(&samples, content_x, Transform::identity(), &geometry).is_none());
}

#[test]
fn lookup_requires_exact_x() {
    let samples = [
        Sample::new(0.0, 1.0),
        Sample::new(2.5, 2.0),
        Sample::new(3.0, 3.0),
    ];
    assert!(find_sample_by_index(&samples, 2.0).is_none());

    let found = find_sample_by_index(&samples, 3.0).expect("exact match");
    assert_eq!(found.position, 2);
    assert_eq!(found.sample, Sample::new(3.0, 3.0));
}

#[test]
fn hover_over_gap_in_x_leaves_overlay_untouched() {
    let samples: Vec<Sample> = [0, 1, 2, 3, 4, 5, 6, 8, 9]
        .into_iter()
        .map(|x| Sample::new(f64::from(x), f64::from(x) * 2.0))
        .collect();
    let mut chart = LineChart::new(NullRenderer::default(), samples, LineChartConfig::default())
        .expect("chart init");
    let x7 = 7.0 * 8.0 + 12.0;

    let missed = chart.pointer_move(x7, 200.0).expect("pointer move");
    assert!(missed.is_none());
    assert_eq!(chart.overlay().visibility(), OverlayVisibility::Hidden);
    assert!(chart.renderer().overlay_layer().is_empty());

    let hit = chart
        .pointer_move(6.0 * 8.0 + 12.0, 200.0)
        .expect("pointer move")
        .expect("sample 6");
    assert_eq!(hit.sample.x, 6.0);
    let overlay_before = chart.renderer().overlay_layer().clone();

    assert!(chart.pointer_move(x7, 220.0).expect("pointer move").is_none());
    assert_eq!(chart.overlay().visibility(), OverlayVisibility::Visible);
    assert_eq!(chart.overlay().hover(), Some(hit));
    assert_eq!(chart.renderer().overlay_layer(), &overlay_before);
}
