use folio_chart::core::{
    FilteredSeries, PathVertex, RangeWindow, Sample, Trend, Viewport, build_path, build_scale,
    filter_series,
};

const NOW: i64 = 1_000;

fn series(samples: &[Sample], viewport: Viewport) -> FilteredSeries {
    filter_series(samples, RangeWindow::Day, NOW, viewport).expect("series")
}

#[test]
fn stroke_follows_samples_in_time_order() {
    let viewport = Viewport::new(200.0, 100.0);
    let samples = [
        Sample::new(0, 0.0),
        Sample::new(500, 50.0),
        Sample::new(1_000, 100.0),
    ];
    let filtered = series(&samples, viewport);
    let scale = build_scale(&filtered, viewport, 0.0);
    let path = build_path(&filtered, &scale);

    assert_eq!(
        path.stroke,
        vec![
            PathVertex::new(0.0, 100.0),
            PathVertex::new(100.0, 50.0),
            PathVertex::new(200.0, 0.0),
        ]
    );
    assert_eq!(path.terminal, PathVertex::new(200.0, 0.0));
}

#[test]
fn area_closes_against_bottom_edge() {
    let viewport = Viewport::new(200.0, 100.0);
    let samples = [Sample::new(0, 10.0), Sample::new(1_000, 20.0)];
    let filtered = series(&samples, viewport);
    let scale = build_scale(&filtered, viewport, 10.0);
    let path = build_path(&filtered, &scale);

    // [stroke..., (last.x, bottom), (first.x, bottom), first]
    assert_eq!(path.area.len(), path.stroke.len() + 3);
    let first = path.stroke[0];
    let last = path.stroke[1];
    assert_eq!(path.area[2], PathVertex::new(last.x, 100.0));
    assert_eq!(path.area[3], PathVertex::new(first.x, 100.0));
    assert_eq!(path.area[4], first);
}

#[test]
fn path_data_uses_move_line_and_close_commands() {
    let viewport = Viewport::new(200.0, 100.0);
    let samples = [Sample::new(0, 0.0), Sample::new(1_000, 100.0)];
    let filtered = series(&samples, viewport);
    let scale = build_scale(&filtered, viewport, 0.0);
    let path = build_path(&filtered, &scale);

    assert_eq!(path.stroke_path_data(), "M0.00,100.00 L200.00,0.00");
    assert_eq!(
        path.area_path_data(),
        "M0.00,100.00 L200.00,0.00 L200.00,100.00 L0.00,100.00 L0.00,100.00 Z"
    );
}

#[test]
fn trend_compares_first_and_last_only() {
    let viewport = Viewport::new(200.0, 100.0);
    let rising = [
        Sample::new(0, 100.0),
        Sample::new(300, 10.0),
        Sample::new(600, 500.0),
        Sample::new(1_000, 101.0),
    ];
    let filtered = series(&rising, viewport);
    let path = build_path(&filtered, &build_scale(&filtered, viewport, 4.0));
    assert_eq!(path.trend, Trend::Positive);

    let falling = [
        Sample::new(0, 101.0),
        Sample::new(300, 10.0),
        Sample::new(600, 500.0),
        Sample::new(1_000, 100.0),
    ];
    let filtered = series(&falling, viewport);
    let path = build_path(&filtered, &build_scale(&filtered, viewport, 4.0));
    assert_eq!(path.trend, Trend::Negative);
}

#[test]
fn tie_between_first_and_last_is_positive() {
    assert_eq!(Trend::classify(250.0, 250.0), Trend::Positive);
    assert_eq!(Trend::classify(250.0, 249.99), Trend::Negative);
}

#[test]
fn flat_series_draws_horizontal_midline_without_nan() {
    let viewport = Viewport::new(300.0, 120.0);
    let samples = [Sample::new(0, 7.0), Sample::new(400, 7.0), Sample::new(900, 7.0)];
    let filtered = series(&samples, viewport);
    let path = build_path(&filtered, &build_scale(&filtered, viewport, 8.0));

    for vertex in path.stroke.iter().chain(path.area.iter()) {
        assert!(vertex.is_finite());
    }
    assert!(path.stroke.iter().all(|v| v.y == 60.0));
}

#[test]
fn equal_timestamps_stack_on_center_line() {
    let viewport = Viewport::new(300.0, 120.0);
    let samples = [Sample::new(500, 1.0), Sample::new(500, 3.0)];
    let filtered = series(&samples, viewport);
    let path = build_path(&filtered, &build_scale(&filtered, viewport, 8.0));

    assert!(path.stroke.iter().all(|v| v.x == 150.0 && v.y.is_finite()));
}

#[test]
fn build_path_is_deterministic() {
    let viewport = Viewport::new(640.0, 360.0);
    let samples: Vec<Sample> = (0..40).map(|i| Sample::new(i * 25, (i % 7) as f64)).collect();
    let filtered = series(&samples, viewport);
    let scale = build_scale(&filtered, viewport, 8.0);

    assert_eq!(build_path(&filtered, &scale), build_path(&filtered, &scale));
}

#[test]
fn extreme_value_spread_produces_finite_vertices() {
    let viewport = Viewport::new(300.0, 150.0);
    let series = series(&[Sample::new(0, -1e308), Sample::new(100, 1e308)], viewport);
    let scale = build_scale(&series, viewport, 8.0);
    let path = build_path(&series, &scale);

    assert_eq!(path.stroke, vec![PathVertex::new(8.0, 142.0), PathVertex::new(292.0, 8.0)]);
    assert!(path.area.iter().all(|vertex| vertex.is_finite()));
    assert_eq!(path.trend, Trend::Positive);
}
