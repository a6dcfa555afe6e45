use approx::assert_abs_diff_eq;
use folio_chart::core::{
    FilteredSeries, RangeWindow, Sample, SeriesScale, Viewport, build_scale, filter_series,
};
use folio_chart::interaction::{SurfaceMapping, resolve_pointer};

fn fixture(padding: f64) -> (FilteredSeries, SeriesScale, SurfaceMapping) {
    let viewport = Viewport::new(300.0, 150.0);
    let samples = [
        Sample::new(0, 10.0),
        Sample::new(100, 20.0),
        Sample::new(300, 15.0),
    ];
    let series = filter_series(&samples, RangeWindow::Day, 300, viewport).expect("series");
    let scale = build_scale(&series, viewport, padding);
    (series, scale, SurfaceMapping::identity(viewport))
}

#[test]
fn pointer_resolves_to_nearest_timestamp() {
    let (series, scale, mapping) = fixture(0.0);

    let x = scale.time_scale().domain_to_pixel(180.0);
    let point = resolve_pointer(x, &scale, &series, mapping);
    assert_eq!(point.sample.timestamp, 100);

    let x = scale.time_scale().domain_to_pixel(260.0);
    let point = resolve_pointer(x, &scale, &series, mapping);
    assert_eq!(point.sample.timestamp, 300);
}

#[test]
fn exact_midpoint_tie_resolves_to_earlier_sample() {
    for padding in [0.0, 8.0, 13.5] {
        let (series, scale, mapping) = fixture(padding);
        let x = scale.time_scale().domain_to_pixel(200.0);
        let point = resolve_pointer(x, &scale, &series, mapping);
        assert_eq!(point.sample.timestamp, 100, "padding {padding}");
    }
}

#[test]
fn resolved_point_carries_sample_and_pointer_coordinates() {
    let (series, scale, mapping) = fixture(8.0);
    let pointer_x = scale.time_to_x(100) + 3.0;

    let point = resolve_pointer(pointer_x, &scale, &series, mapping);
    assert_eq!(point.pointer_x, pointer_x);
    assert_eq!(point.sample, Sample::new(100, 20.0));
    assert_eq!(point.sample_x, scale.time_to_x(100));
    assert_eq!(point.sample_y, scale.value_to_y(20.0));
    assert_eq!(point.container_x, point.sample_x);
    assert_eq!(point.container_y, point.sample_y);
}

#[test]
fn out_of_range_pointer_clamps_to_edge_samples() {
    let (series, scale, mapping) = fixture(8.0);

    let left = resolve_pointer(-500.0, &scale, &series, mapping);
    assert_eq!(left.sample.timestamp, 0);
    assert_eq!(left.pointer_x, -500.0);

    let right = resolve_pointer(10_000.0, &scale, &series, mapping);
    assert_eq!(right.sample.timestamp, 300);

    let nan = resolve_pointer(f64::NAN, &scale, &series, mapping);
    assert_eq!(nan.sample.timestamp, 0);
}

#[test]
fn stretched_surface_reports_container_coordinates() {
    let (series, scale, _) = fixture(0.0);
    let mapping = SurfaceMapping::identity(Viewport::new(300.0, 150.0))
        .with_rendered(Viewport::new(600.0, 75.0))
        .with_offset(20.0, 10.0);

    let point = resolve_pointer(scale.time_to_x(100), &scale, &series, mapping);
    assert_abs_diff_eq!(point.container_x, 20.0 + point.sample_x * 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(point.container_y, 10.0 + point.sample_y * 0.5, epsilon = 1e-9);
}

#[test]
fn mapping_round_trips_container_coordinates() {
    let mapping = SurfaceMapping::identity(Viewport::new(400.0, 200.0))
        .with_rendered(Viewport::new(800.0, 300.0))
        .with_offset(16.0, 4.0);

    let (sx, sy) = mapping.container_to_surface(416.0, 154.0);
    assert_abs_diff_eq!(sx, 200.0, epsilon = 1e-9);
    assert_abs_diff_eq!(sy, 100.0, epsilon = 1e-9);

    let (cx, cy) = mapping.surface_to_container(sx, sy);
    assert_abs_diff_eq!(cx, 416.0, epsilon = 1e-9);
    assert_abs_diff_eq!(cy, 154.0, epsilon = 1e-9);

    assert!(mapping.contains(416.0, 154.0));
    assert!(!mapping.contains(10.0, 154.0));
    assert!(!mapping.contains(416.0, 305.0));
}

#[test]
fn zero_rendered_size_falls_back_to_unit_ratio() {
    let mapping = SurfaceMapping::identity(Viewport::new(400.0, 200.0))
        .with_rendered(Viewport::new(0.0, 0.0));
    assert_eq!(mapping.surface_to_container(40.0, 20.0), (40.0, 20.0));
}
