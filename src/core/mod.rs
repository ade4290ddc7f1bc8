pub mod axis_range;
pub mod fill;
pub mod geometry;
pub mod point_sequence;
pub mod primitives;
pub mod spline;
pub mod types;

pub use axis_range::{AxisRange, compute_range};
pub use fill::{FillOutline, FillType, build_fill};
pub use geometry::{GradientPaintTransformer, LegendShape, Rect};
pub use point_sequence::PointSequence;
pub use spline::{
    CubicSegment, DEFAULT_PRECISION, InterpolatedPath, TANGENT_SCALE, interpolate,
};
pub use types::{DataPoint, LineSegment};
