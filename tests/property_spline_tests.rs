use proptest::prelude::*;
use spline_chart_rs::core::{DataPoint, FillType, PointSequence, compute_range, interpolate};

fn increasing_points(steps: Vec<(f64, f64)>, x0: f64) -> PointSequence {
    let mut x = x0;
    let points = steps
        .into_iter()
        .map(|(gap, y)| {
            x += gap;
            DataPoint::new(x, y)
        })
        .collect();
    PointSequence::new(points).expect("finite points")
}

proptest! {
    #[test]
    fn interpolation_keeps_input_endpoints_and_sample_count(
        steps in prop::collection::vec((0.01f64..500.0, -10_000.0f64..10_000.0), 2..40),
        x0 in -1_000_000.0f64..1_000_000.0,
        precision in 1usize..24
    ) {
        let points = increasing_points(steps, x0);
        let path = interpolate(&points, precision).expect("interpolate");

        prop_assert_eq!(path.segment_count(), points.len() - 1);
        prop_assert_eq!(path.samples().len(), 1 + (points.len() - 1) * precision);
        prop_assert_eq!(path.first(), points.first());
        prop_assert_eq!(path.last(), points.last());
        for (index, segment) in path.segments().iter().enumerate() {
            prop_assert_eq!(segment.start, points.as_slice()[index]);
            prop_assert_eq!(segment.end, points.as_slice()[index + 1]);
        }
    }

    #[test]
    fn doubling_precision_never_shrinks_range(
        steps in prop::collection::vec((0.01f64..500.0, -10_000.0f64..10_000.0), 1..30),
        precision in 1usize..12
    ) {
        let points = increasing_points(steps, 0.0);
        let coarse = interpolate(&points, precision).expect("interpolate");
        let fine = interpolate(&points, precision * 2).expect("interpolate");

        let coarse_range = compute_range(&coarse, FillType::None, 0.0).expect("range");
        let fine_range = compute_range(&fine, FillType::None, 0.0).expect("range");
        prop_assert!(fine_range.lower() <= coarse_range.lower());
        prop_assert!(fine_range.upper() >= coarse_range.upper());

        // Every coarse sample reappears at the finer precision.
        for (index, sample) in coarse.samples().iter().enumerate() {
            prop_assert_eq!(fine.samples()[index * 2], *sample);
        }
    }

    #[test]
    fn range_covers_every_sample_and_the_raw_data(
        steps in prop::collection::vec((0.01f64..500.0, -10_000.0f64..10_000.0), 1..30),
        precision in 1usize..16
    ) {
        let points = increasing_points(steps, 0.0);
        let path = interpolate(&points, precision).expect("interpolate");
        let range = compute_range(&path, FillType::None, 0.0).expect("range");

        prop_assert!(range.lower().is_finite() && range.upper().is_finite());
        for sample in path.samples() {
            prop_assert!(range.contains(sample.y));
        }
        for point in points.as_slice() {
            prop_assert!(range.contains(point.y));
        }
    }

    #[test]
    fn to_zero_range_always_contains_zero(
        steps in prop::collection::vec((0.01f64..500.0, 1.0f64..10_000.0), 1..20),
        negate in any::<bool>(),
        precision in 1usize..10
    ) {
        let sign = if negate { -1.0 } else { 1.0 };
        let steps = steps.into_iter().map(|(gap, y)| (gap, y * sign)).collect();
        let points = increasing_points(steps, 0.0);
        let path = interpolate(&points, precision).expect("interpolate");
        let range = compute_range(&path, FillType::ToZero, 0.0).expect("range");
        prop_assert!(range.contains(0.0));
    }

    #[test]
    fn samples_never_fold_back_in_x(
        steps in prop::collection::vec((0.01f64..500.0, -10_000.0f64..10_000.0), 2..30),
        precision in 1usize..16
    ) {
        let points = increasing_points(steps, 0.0);
        let path = interpolate(&points, precision).expect("interpolate");
        let first = points.first().expect("first").x;
        let last = points.last().expect("last").x;
        let tolerance = 1e-9 * (last - first).abs().max(1.0);
        for pair in path.samples().windows(2) {
            prop_assert!(pair[0].x <= pair[1].x + tolerance, "{:?}", pair);
        }
    }
}
