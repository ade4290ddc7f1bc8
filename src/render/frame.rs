use crate::core::LegendShape;
use crate::error::ChartResult;
use crate::render::{LinePrimitive, PolygonPrimitive};

/// Backend-agnostic scene for one spline draw pass.
///
/// Coordinates are in data space; mapping to pixels is up to the backend.
/// The fill is painted before the line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SplineFrame {
    pub fill: Option<PolygonPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub legend_shape: Option<LegendShape>,
}

impl SplineFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: PolygonPrimitive) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_legend_shape(mut self, shape: Option<LegendShape>) -> Self {
        self.legend_shape = shape;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if let Some(fill) = &self.fill {
            fill.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        if let Some(shape) = &self.legend_shape {
            shape.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.fill.is_none()
    }
}
