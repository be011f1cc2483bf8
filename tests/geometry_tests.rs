use approx::assert_relative_eq;
use line_chart_rs::ChartError;
use line_chart_rs::core::{
    Dimensions, Margin, PlotGeometry, Sample, Transform, nearest_sample_index, to_pixel_space,
    to_plot_space,
};

fn geometry_with_amplitude_100() -> PlotGeometry {
    // 100 + 2 * (margin 10 + point 2)
    PlotGeometry::new(Margin::default(), Dimensions::new(600.0, 124.0, 2.0, 8.0))
        .expect("valid geometry")
}

fn samples(points: &[(f64, f64)]) -> Vec<Sample> {
    points.iter().copied().map(Sample::from).collect()
}

fn plot_ys(samples: &[Sample], geometry: &PlotGeometry, start_from_zero: bool) -> Vec<f64> {
    to_plot_space(samples, geometry, start_from_zero)
        .into_iter()
        .map(|point| point.y)
        .collect()
}

#[test]
fn start_from_zero_scales_against_zero_baseline() {
    let geometry = geometry_with_amplitude_100();
    let ys = plot_ys(
        &samples(&[(0.0, 0.0), (1.0, 10.0), (2.0, 5.0)]),
        &geometry,
        true,
    );
    assert_eq!(ys, vec![100.0, 0.0, 50.0]);
}

#[test]
fn minimum_sample_is_baseline_without_start_from_zero() {
    let geometry = geometry_with_amplitude_100();
    let ys = plot_ys(
        &samples(&[(0.0, 5.0), (1.0, 10.0), (2.0, 15.0)]),
        &geometry,
        false,
    );
    assert_relative_eq!(ys[0], geometry.amplitude());
    assert_relative_eq!(ys[1], 50.0);
    assert_relative_eq!(ys[2], 0.0);
}

#[test]
fn plot_space_keeps_sample_x() {
    let geometry = geometry_with_amplitude_100();
    let points = to_plot_space(&samples(&[(3.0, 1.0), (7.5, 2.0)]), &geometry, false);
    assert_eq!(points[0].x, 3.0);
    assert_eq!(points[1].x, 7.5);
}

#[test]
fn flat_series_is_drawn_at_mid_amplitude() {
    let geometry = geometry_with_amplitude_100();
    let ys = plot_ys(
        &samples(&[(0.0, 7.0), (1.0, 7.0), (2.0, 7.0)]),
        &geometry,
        false,
    );
    assert_eq!(ys, vec![50.0, 50.0, 50.0]);
}

#[test]
fn all_zero_series_with_start_from_zero_is_flat() {
    let geometry = geometry_with_amplitude_100();
    let ys = plot_ys(&samples(&[(0.0, 0.0), (1.0, 0.0)]), &geometry, true);
    assert_eq!(ys, vec![50.0, 50.0]);
}

#[test]
fn negative_samples_extend_zero_baseline_downwards() {
    let geometry = geometry_with_amplitude_100();
    let ys = plot_ys(&samples(&[(0.0, -10.0), (1.0, 10.0)]), &geometry, true);
    assert_relative_eq!(ys[0], 100.0);
    assert_relative_eq!(ys[1], 0.0);
}

#[test]
fn all_negative_series_keeps_zero_as_top() {
    let geometry = geometry_with_amplitude_100();
    let ys = plot_ys(&samples(&[(0.0, -5.0), (1.0, -15.0)]), &geometry, true);
    assert_relative_eq!(ys[0], 100.0 - 10.0 * 100.0 / 15.0, epsilon = 1e-9);
    assert_relative_eq!(ys[1], 100.0);
}

#[test]
fn pixel_space_applies_spacing_and_zoom_but_not_pan() {
    let geometry =
        PlotGeometry::new(Margin::default(), Dimensions::default()).expect("valid geometry");
    let point = to_plot_space(&samples(&[(4.0, 1.0), (5.0, 2.0)]), &geometry, false)[0];

    let pixel = to_pixel_space(point, Transform::identity(), &geometry);
    assert_relative_eq!(pixel.x, 4.0 * 8.0 + 12.0);
    assert_relative_eq!(pixel.y, geometry.amplitude() + 12.0);

    let zoomed = to_pixel_space(
        point,
        Transform {
            pan_x: -300.0,
            zoom: 2.5,
        },
        &geometry,
    );
    assert_relative_eq!(zoomed.x, 4.0 * 8.0 * 2.5 + 12.0);
}

#[test]
fn pixel_of_every_sample_maps_back_to_its_index() {
    let geometry =
        PlotGeometry::new(Margin::default(), Dimensions::default()).expect("valid geometry");
    let series: Vec<Sample> = (0..50).map(|i| Sample::new(f64::from(i), 1.0)).collect();

    for point in to_plot_space(&series, &geometry, false) {
        let pixel = to_pixel_space(point, Transform::identity(), &geometry);
        let index = nearest_sample_index(pixel.x, Transform::identity(), &geometry);
        assert_eq!(index, point.x);
    }
}

#[test]
fn geometry_rejects_invalid_layouts() {
    let cases = [
        (Margin::new(-1.0, 10.0, 10.0, 10.0), Dimensions::default()),
        (Margin::default(), Dimensions::new(600.0, 400.0, 2.0, 0.0)),
        (Margin::default(), Dimensions::new(600.0, 400.0, -2.0, 8.0)),
        (Margin::default(), Dimensions::new(0.0, 400.0, 2.0, 8.0)),
        (Margin::default(), Dimensions::new(600.0, 24.0, 2.0, 8.0)),
        (Margin::new(10.0, 300.0, 10.0, 300.0), Dimensions::default()),
        (Margin::default(), Dimensions::new(f64::NAN, 400.0, 2.0, 8.0)),
    ];

    for (margin, dimensions) in cases {
        let err = PlotGeometry::new(margin, dimensions).expect_err("layout must be rejected");
        assert!(matches!(err, ChartError::InvalidConfig(_)));
    }
}
