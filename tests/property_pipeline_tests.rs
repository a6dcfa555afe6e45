use folio_chart::core::{RangeWindow, Sample, Viewport, build_path, build_scale, filter_series};
use folio_chart::interaction::{
    SurfaceMapping, TooltipPlacementConfig, TooltipSize, place_tooltip, resolve_pointer,
};
use proptest::prelude::*;

const NOW: i64 = 1_700_000_000_000;
const DAY_MS: i64 = 86_400_000;

fn samples_strategy() -> impl Strategy<Value = Vec<Sample>> {
    proptest::collection::vec(
        (0..90 * DAY_MS, -1.0e7f64..1.0e7),
        2..200,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(age, value)| Sample::new(NOW - age, value))
            .collect()
    })
}

proptest! {
    #[test]
    fn scaled_samples_stay_inside_padded_surface(
        samples in samples_strategy(),
        width in 1.0f64..4_000.0,
        height in 1.0f64..2_000.0,
        padding in 0.0f64..40.0,
    ) {
        let viewport = Viewport::new(width, height);
        let series = filter_series(&samples, RangeWindow::Quarter, NOW, viewport)
            .expect("all samples are inside the quarter window");
        let scale = build_scale(&series, viewport, padding);
        let p = scale.padding();

        for sample in series.samples() {
            let x = scale.time_to_x(sample.timestamp);
            let y = scale.value_to_y(sample.value);
            prop_assert!(x >= p && x <= width - p, "x={x} p={p} width={width}");
            prop_assert!(y >= p && y <= height - p, "y={y} p={p} height={height}");
        }
    }

    #[test]
    fn pipeline_is_deterministic_and_finite(
        samples in samples_strategy(),
        width in 1.0f64..4_000.0,
        height in 1.0f64..2_000.0,
    ) {
        let viewport = Viewport::new(width, height);
        let series = filter_series(&samples, RangeWindow::Quarter, NOW, viewport).expect("series");

        let scale = build_scale(&series, viewport, 8.0);
        let path = build_path(&series, &scale);
        prop_assert_eq!(scale, build_scale(&series, viewport, 8.0));
        prop_assert_eq!(&path, &build_path(&series, &scale));

        prop_assert_eq!(path.stroke.len(), series.len());
        prop_assert_eq!(path.area.len(), series.len() + 3);
        for vertex in path.stroke.iter().chain(path.area.iter()) {
            prop_assert!(vertex.is_finite());
        }
    }

    #[test]
    fn resolved_sample_is_a_nearest_one(
        samples in samples_strategy(),
        pointer_x in -500.0f64..1_500.0,
    ) {
        let viewport = Viewport::new(1_000.0, 400.0);
        let series = filter_series(&samples, RangeWindow::Quarter, NOW, viewport).expect("series");
        let scale = build_scale(&series, viewport, 8.0);

        let point = resolve_pointer(pointer_x, &scale, &series, SurfaceMapping::identity(viewport));
        let target = scale.x_to_time(pointer_x);
        let best = series
            .samples()
            .iter()
            .map(|s| s.timestamp.abs_diff(target))
            .min()
            .expect("non-empty");
        prop_assert_eq!(point.sample.timestamp.abs_diff(target), best);

        let earliest_best = series
            .samples()
            .iter()
            .find(|s| s.timestamp.abs_diff(target) == best)
            .expect("best exists");
        prop_assert_eq!(point.sample, *earliest_best);
    }

    #[test]
    fn tooltip_stays_within_margins_when_it_fits(
        x in -100.0f64..500.0,
        y in -50.0f64..400.0,
        tooltip_width in 0.0f64..290.0,
        tooltip_height in 0.0f64..120.0,
    ) {
        let container = Viewport::new(300.0, 300.0);
        let placement = place_tooltip(
            x,
            y,
            TooltipSize::new(tooltip_width, tooltip_height),
            container,
            TooltipPlacementConfig::default(),
        );
        prop_assert!(placement.left >= 5.0);
        prop_assert!(placement.left <= 300.0 - tooltip_width - 5.0);
        prop_assert!(placement.top.is_finite());
    }

    #[test]
    fn trend_depends_only_on_endpoints(
        first in -1.0e6f64..1.0e6,
        last in -1.0e6f64..1.0e6,
        middle in proptest::collection::vec(-1.0e6f64..1.0e6, 0..20),
    ) {
        let viewport = Viewport::new(500.0, 200.0);
        let mut samples = vec![Sample::new(NOW - 50 * DAY_MS, first)];
        samples.extend(
            middle
                .iter()
                .enumerate()
                .map(|(i, v)| Sample::new(NOW - 40 * DAY_MS + i as i64 * 1_000, *v)),
        );
        samples.push(Sample::new(NOW, last));

        let series = filter_series(&samples, RangeWindow::Quarter, NOW, viewport).expect("series");
        let path = build_path(&series, &build_scale(&series, viewport, 8.0));
        let expected = if last >= first {
            folio_chart::core::Trend::Positive
        } else {
            folio_chart::core::Trend::Negative
        };
        prop_assert_eq!(path.trend, expected);
    }
}
