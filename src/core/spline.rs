//! Piecewise-cubic interpolation through an ordered point sequence.
//!
//! Every interval between two consecutive input points becomes one cubic
//! Bézier segment. Control points sit along a unit tangent estimated from the
//! neighbouring points, at a distance proportional to the segment chord. When
//! the tangent leans toward the other end of the segment, the reach is capped
//! at the chord's projection onto it, which keeps collinear runs straight.
//! All of this is computed in the unit square spanned by the data, so the
//! curve shape does not depend on the units of either axis.
//!
//! Each segment is then sampled at `precision` evenly spaced parameter values;
//! those samples are what gets drawn and what the axis range is computed from.

use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, LineSegment, PointSequence};
use crate::error::{ChartError, ChartResult};

/// Sub-segments per input interval when nothing else is configured.
pub const DEFAULT_PRECISION: usize = 5;

/// Uncapped control-point reach as a multiple of the normalized chord length.
pub const TANGENT_SCALE: f64 = 1.37;

/// One Bézier piece between two consecutive input points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub start: DataPoint,
    pub control1: DataPoint,
    pub control2: DataPoint,
    pub end: DataPoint,
}

impl CubicSegment {
    /// Evaluates the segment at parameter `t` in `[0, 1]` (Bernstein form).
    #[must_use]
    pub fn point_at(self, t: f64) -> DataPoint {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        DataPoint::new(
            b0 * self.start.x + b1 * self.control1.x + b2 * self.control2.x + b3 * self.end.x,
            b0 * self.start.y + b1 * self.control1.y + b2 * self.control2.y + b3 * self.end.y,
        )
    }

    /// Yields the `precision` samples after `start`; the last one is `end`.
    pub fn subdivide(self, precision: usize) -> impl Iterator<Item = DataPoint> {
        (1..=precision).map(move |step| {
            if step == precision {
                self.end
            } else {
                self.point_at(step as f64 / precision as f64)
            }
        })
    }
}

/// Result of [`interpolate`]: cubic segments plus their flattened samples.
///
/// `samples` holds the first input point followed by `precision` samples per
/// segment, so `samples.len() == 1 + segments.len() * precision` whenever there
/// is at least one segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpolatedPath {
    precision: usize,
    segments: Vec<CubicSegment>,
    samples: Vec<DataPoint>,
}

impl InterpolatedPath {
    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }

    #[must_use]
    pub fn segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn samples(&self) -> &[DataPoint] {
        &self.samples
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<DataPoint> {
        self.samples.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<DataPoint> {
        self.samples.last().copied()
    }

    /// Samples belonging to one segment, including its start point.
    #[must_use]
    pub fn segment_samples(&self, index: usize) -> Option<&[DataPoint]> {
        if index >= self.segments.len() {
            return None;
        }
        let from = index.checked_mul(self.precision)?;
        let to = from.checked_add(self.precision)?;
        self.samples.get(from..=to)
    }

    /// Straight sub-segments for the drawing backend, in path order.
    #[must_use]
    pub fn line_segments(&self) -> Vec<LineSegment> {
        self.samples
            .windows(2)
            .map(|pair| LineSegment::between(pair[0], pair[1]))
            .collect()
    }
}

/// Interpolates `points` into a sampled cubic path.
///
/// Fewer than two points yield a path with no segments whose samples are the
/// input itself. `precision` must be at least 1; precision 1 reproduces the
/// input polyline. A precision whose sample count cannot be allocated is
/// rejected with `InvalidPrecision` before any sampling.
pub fn interpolate(points: &PointSequence, precision: usize) -> ChartResult<InterpolatedPath> {
    if precision == 0 {
        return Err(ChartError::InvalidPrecision { precision });
    }

    let source = points.as_slice();
    if source.len() < 2 {
        return Ok(InterpolatedPath {
            precision,
            segments: Vec::new(),
            samples: source.to_vec(),
        });
    }

    let frame = UnitFrame::enclosing(source)?;
    let normalized: Vec<DataPoint> = source.iter().map(|p| frame.normalize(*p)).collect();
    let tangents = unit_tangents(&normalized);

    let segment_count = source.len() - 1;
    let mut samples = sample_buffer(segment_count, precision)?;
    let mut segments = Vec::with_capacity(segment_count);
    samples.push(source[0]);

    for index in 0..segment_count {
        let (control1, control2) = control_points(
            normalized[index],
            normalized[index + 1],
            tangents[index],
            tangents[index + 1],
        );
        let segment = CubicSegment {
            start: source[index],
            control1: frame.denormalize(control1),
            control2: frame.denormalize(control2),
            end: source[index + 1],
        };
        samples.extend(segment.subdivide(precision));
        segments.push(segment);
    }

    Ok(InterpolatedPath {
        precision,
        segments,
        samples,
    })
}

// Sized up front; a precision too large to hold in memory fails here.
fn sample_buffer(segment_count: usize, precision: usize) -> ChartResult<Vec<DataPoint>> {
    let too_large = || ChartError::InvalidPrecision { precision };
    let len = segment_count
        .checked_mul(precision)
        .and_then(|count| count.checked_add(1))
        .ok_or_else(too_large)?;
    let mut samples = Vec::new();
    samples.try_reserve_exact(len).map_err(|_| too_large())?;
    Ok(samples)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Direction {
    dx: f64,
    dy: f64,
}

impl Direction {
    const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    fn unit(dx: f64, dy: f64) -> Self {
        let length = dx.hypot(dy);
        if length > 0.0 && length.is_finite() {
            Self {
                dx: dx / length,
                dy: dy / length,
            }
        } else {
            Self::ZERO
        }
    }
}

/// Affine map between data space and the unit square of the data's bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
struct UnitFrame {
    origin_x: f64,
    origin_y: f64,
    span_x: f64,
    span_y: f64,
}

impl UnitFrame {
    fn enclosing(points: &[DataPoint]) -> ChartResult<Self> {
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for point in points {
            min_x = min_x.min(point.x);
            max_x = max_x.max(point.x);
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
        }

        Ok(Self {
            origin_x: min_x,
            origin_y: min_y,
            span_x: usable_span(max_x - min_x, "x")?,
            span_y: usable_span(max_y - min_y, "y")?,
        })
    }

    fn normalize(self, point: DataPoint) -> DataPoint {
        DataPoint::new(
            (point.x - self.origin_x) / self.span_x,
            (point.y - self.origin_y) / self.span_y,
        )
    }

    fn denormalize(self, point: DataPoint) -> DataPoint {
        DataPoint::new(
            self.origin_x + point.x * self.span_x,
            self.origin_y + point.y * self.span_y,
        )
    }
}

// Zero-width spans normalize with span 1 so flat data stays flat.
fn usable_span(span: f64, axis: &str) -> ChartResult<f64> {
    if !span.is_finite() {
        return Err(ChartError::InvalidInput(format!(
            "{axis} coordinate span overflows f64"
        )));
    }
    if span > 0.0 { Ok(span) } else { Ok(1.0) }
}

// Endpoints use their single neighbour (one-sided estimate).
fn unit_tangents(points: &[DataPoint]) -> Vec<Direction> {
    let last = points.len().saturating_sub(1);
    (0..points.len())
        .map(|index| {
            let prev = points[index.saturating_sub(1)];
            let next = points[(index + 1).min(last)];
            Direction::unit(next.x - prev.x, next.y - prev.y)
        })
        .collect()
}

fn control_points(
    start: DataPoint,
    end: DataPoint,
    start_tangent: Direction,
    end_tangent: Direction,
) -> (DataPoint, DataPoint) {
    let chord = Direction {
        dx: end.x - start.x,
        dy: end.y - start.y,
    };
    let reach = TANGENT_SCALE * chord.dx.hypot(chord.dy);
    let start_reach = capped_reach(reach, chord, start_tangent);
    let end_reach = capped_reach(reach, chord, end_tangent);
    let low_x = start.x.min(end.x);
    let high_x = start.x.max(end.x);

    // Abscissae stay inside the interval so the path never folds back in x.
    let control1 = DataPoint::new(
        (start.x + start_tangent.dx * start_reach).clamp(low_x, high_x),
        start.y + start_tangent.dy * start_reach,
    );
    let control2 = DataPoint::new(
        (end.x - end_tangent.dx * end_reach).clamp(low_x, high_x),
        end.y - end_tangent.dy * end_reach,
    );
    (control1, control2)
}

// A control never reaches further along the tangent than the chord does.
fn capped_reach(reach: f64, chord: Direction, tangent: Direction) -> f64 {
    let along = chord.dx * tangent.dx + chord.dy * tangent.dy;
    if along > 0.0 { reach.min(along) } else { reach }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_tangents_are_one_sided() {
        let points = [
            DataPoint::new(0.0, 0.0),
            DataPoint::new(1.0, 1.0),
            DataPoint::new(2.0, 0.0),
        ];
        let tangents = unit_tangents(&points);
        let diagonal = std::f64::consts::FRAC_1_SQRT_2;
        assert!((tangents[0].dx - diagonal).abs() <= 1e-12);
        assert!((tangents[0].dy - diagonal).abs() <= 1e-12);
        // Symmetric neighbours give a horizontal tangent at the peak.
        assert_eq!(tangents[1], Direction { dx: 1.0, dy: 0.0 });
        assert!((tangents[2].dy + diagonal).abs() <= 1e-12);
    }

    #[test]
    fn coincident_neighbours_give_zero_tangent() {
        let points = [DataPoint::new(1.0, 1.0), DataPoint::new(1.0, 1.0)];
        assert_eq!(unit_tangents(&points), vec![Direction::ZERO, Direction::ZERO]);
    }

    #[test]
    fn flat_data_uses_unit_span() {
        let frame = UnitFrame::enclosing(&[DataPoint::new(2.0, 5.0), DataPoint::new(4.0, 5.0)])
            .expect("frame");
        assert_eq!(frame.span_x, 2.0);
        assert_eq!(frame.span_y, 1.0);
        assert_eq!(frame.normalize(DataPoint::new(4.0, 5.0)), DataPoint::new(1.0, 0.0));
    }

    #[test]
    fn overflowing_span_is_rejected() {
        let result = UnitFrame::enclosing(&[
            DataPoint::new(-f64::MAX, 0.0),
            DataPoint::new(f64::MAX, 1.0),
        ]);
        assert!(matches!(result, Err(ChartError::InvalidInput(_))));
    }

    #[test]
    fn control_abscissae_stay_inside_interval() {
        let (c1, c2) = control_points(
            DataPoint::new(0.0, 0.0),
            DataPoint::new(1.0, 0.0),
            Direction { dx: 1.0, dy: 0.0 },
            Direction { dx: 1.0, dy: 0.0 },
        );
        assert_eq!(c1, DataPoint::new(1.0, 0.0));
        assert_eq!(c2, DataPoint::new(0.0, 0.0));
    }

    #[test]
    fn reach_is_capped_only_when_tangent_follows_the_chord() {
        let chord = Direction { dx: 1.0, dy: 0.0 };
        assert_eq!(capped_reach(1.37, chord, Direction { dx: 1.0, dy: 0.0 }), 1.0);
        assert_eq!(capped_reach(1.37, chord, Direction { dx: 0.0, dy: 1.0 }), 1.37);
        assert_eq!(capped_reach(1.37, chord, Direction { dx: -1.0, dy: 0.0 }), 1.37);

        let (c1, c2) = control_points(
            DataPoint::new(0.0, 0.0),
            DataPoint::new(1.0, 0.0),
            Direction { dx: 0.0, dy: 1.0 },
            Direction { dx: 0.0, dy: -1.0 },
        );
        assert_eq!(c1, DataPoint::new(0.0, TANGENT_SCALE));
        assert_eq!(c2, DataPoint::new(1.0, TANGENT_SCALE));
    }

    #[test]
    fn collinear_points_stay_on_their_line() {
        let points = PointSequence::new(vec![
            DataPoint::new(0.0, 0.0),
            DataPoint::new(1.0, 1.0),
            DataPoint::new(2.0, 2.0),
        ])
        .expect("points");
        let path = interpolate(&points, 8).expect("interpolate");
        for sample in path.samples() {
            assert!((sample.x - sample.y).abs() <= 1e-12, "{sample:?}");
        }
    }

    #[test]
    fn oversized_sample_buffer_is_rejected() {
        assert!(matches!(
            sample_buffer(2, usize::MAX),
            Err(ChartError::InvalidPrecision { precision: usize::MAX })
        ));
        assert!(matches!(
            sample_buffer(1, usize::MAX),
            Err(ChartError::InvalidPrecision { .. })
        ));
        assert!(sample_buffer(3, 4).expect("buffer").capacity() >= 13);
    }

    #[test]
    fn bezier_endpoints_are_exact() {
        let segment = CubicSegment {
            start: DataPoint::new(0.1, 0.2),
            control1: DataPoint::new(0.3, 7.0),
            control2: DataPoint::new(0.7, -3.0),
            end: DataPoint::new(0.9, 0.4),
        };
        assert_eq!(segment.point_at(0.0), segment.start);
        let samples: Vec<DataPoint> = segment.subdivide(3).collect();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[2], segment.end);
    }
}
