mod frame;
mod null_renderer;
mod primitives;

pub use frame::SplineFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, GradientSpan, LinePrimitive, PolygonPrimitive};

use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized `SplineFrame`, so rasterization stays
/// isolated from interpolation and range logic.
pub trait Renderer {
    fn render(&mut self, frame: &SplineFrame) -> ChartResult<()>;
}
