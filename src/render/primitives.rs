use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, Rect};
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidInput(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke command for one straight sub-segment, in data space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidInput(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidInput(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Gradient vector resolved for one fill, see `GradientPaintTransformer`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSpan {
    pub span: Rect,
    pub cyclic: bool,
}

/// Fill command for a closed polygon, in data space.
///
/// `vertices` repeats the first vertex at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub vertices: Vec<DataPoint>,
    pub color: Color,
    pub gradient: Option<GradientSpan>,
}

impl PolygonPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if self.vertices.len() < 4 {
            return Err(ChartError::InvalidInput(
                "fill polygon needs at least 3 distinct vertices plus closure".to_owned(),
            ));
        }
        if self.vertices.first() != self.vertices.last() {
            return Err(ChartError::InvalidInput(
                "fill polygon must be explicitly closed".to_owned(),
            ));
        }
        if !self.vertices.iter().all(|vertex| vertex.is_finite()) {
            return Err(ChartError::InvalidInput(
                "fill polygon coordinates must be finite".to_owned(),
            ));
        }
        if let Some(gradient) = self.gradient {
            if !gradient.span.is_finite() {
                return Err(ChartError::InvalidInput(
                    "gradient span must be finite".to_owned(),
                ));
            }
        }
        self.color.validate()
    }
}
