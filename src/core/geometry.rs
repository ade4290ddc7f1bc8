//! Small geometry value types carried by the renderer configuration.
//!
//! Floats compare and hash through `OrderedFloat`, which makes equality total
//! (`Eq`) and keeps `Hash` consistent with it (`0.0 == -0.0`, `NaN == NaN`).

use std::hash::{Hash, Hasher};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

fn key(value: f64) -> OrderedFloat<f64> {
    OrderedFloat(value)
}

/// Axis-aligned rectangle, `x`/`y` being the minimum corner.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bounding box of `points`; the zero rectangle when empty.
    #[must_use]
    pub fn enclosing(points: impl IntoIterator<Item = DataPoint>) -> Self {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return Self::default();
        };
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
        for point in points {
            min_x = min_x.min(point.x);
            max_x = max_x.max(point.x);
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
        }
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    #[must_use]
    pub fn max_x(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn max_y(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.x + self.width / 2.0
    }

    #[must_use]
    pub fn center_y(self) -> f64 {
        self.y + self.height / 2.0
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    fn keys(self) -> [OrderedFloat<f64>; 4] {
        [key(self.x), key(self.y), key(self.width), key(self.height)]
    }
}

impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        self.keys() == other.keys()
    }
}

impl Eq for Rect {}

impl Hash for Rect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.keys().hash(state);
    }
}

/// Override geometry for the legend marker of a spline series.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LegendShape {
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Rectangle(Rect),
    Ellipse(Rect),
    Polygon { vertices: Vec<DataPoint> },
}

impl Default for LegendShape {
    /// Short horizontal stroke centred on the legend anchor.
    fn default() -> Self {
        Self::Line {
            x1: -7.0,
            y1: 0.0,
            x2: 7.0,
            y2: 0.0,
        }
    }
}

impl LegendShape {
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Line { x1, y1, x2, y2 } => {
                Rect::enclosing([DataPoint::new(*x1, *y1), DataPoint::new(*x2, *y2)])
            }
            Self::Rectangle(rect) | Self::Ellipse(rect) => *rect,
            Self::Polygon { vertices } => Rect::enclosing(vertices.iter().copied()),
        }
    }

    /// Moves the shape in place.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Self::Line { x1, y1, x2, y2 } => {
                *x1 += dx;
                *x2 += dx;
                *y1 += dy;
                *y2 += dy;
            }
            Self::Rectangle(rect) | Self::Ellipse(rect) => *rect = rect.translated(dx, dy),
            Self::Polygon { vertices } => {
                for vertex in vertices {
                    vertex.x += dx;
                    vertex.y += dy;
                }
            }
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        let finite = match self {
            Self::Line { x1, y1, x2, y2 } => [x1, y1, x2, y2].iter().all(|v| v.is_finite()),
            Self::Rectangle(rect) | Self::Ellipse(rect) => {
                if rect.width < 0.0 || rect.height < 0.0 {
                    return Err(ChartError::InvalidInput(
                        "legend shape extent must be >= 0".to_owned(),
                    ));
                }
                rect.is_finite()
            }
            Self::Polygon { vertices } => {
                if vertices.len() < 3 {
                    return Err(ChartError::InvalidInput(
                        "legend polygon needs at least 3 vertices".to_owned(),
                    ));
                }
                vertices.iter().all(|vertex| vertex.is_finite())
            }
        };
        if finite {
            Ok(())
        } else {
            Err(ChartError::InvalidInput(
                "legend shape coordinates must be finite".to_owned(),
            ))
        }
    }

    fn tag(&self) -> u8 {
        match self {
            Self::Line { .. } => 0,
            Self::Rectangle(_) => 1,
            Self::Ellipse(_) => 2,
            Self::Polygon { .. } => 3,
        }
    }
}

impl PartialEq for LegendShape {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Line { x1, y1, x2, y2 },
                Self::Line {
                    x1: ox1,
                    y1: oy1,
                    x2: ox2,
                    y2: oy2,
                },
            ) => [key(*x1), key(*y1), key(*x2), key(*y2)] == [key(*ox1), key(*oy1), key(*ox2), key(*oy2)],
            (Self::Rectangle(lhs), Self::Rectangle(rhs))
            | (Self::Ellipse(lhs), Self::Ellipse(rhs)) => lhs == rhs,
            (Self::Polygon { vertices: lhs }, Self::Polygon { vertices: rhs }) => {
                lhs.len() == rhs.len()
                    && lhs
                        .iter()
                        .zip(rhs)
                        .all(|(a, b)| key(a.x) == key(b.x) && key(a.y) == key(b.y))
            }
            _ => false,
        }
    }
}

impl Eq for LegendShape {}

impl Hash for LegendShape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag().hash(state);
        match self {
            Self::Line { x1, y1, x2, y2 } => {
                [key(*x1), key(*y1), key(*x2), key(*y2)].hash(state);
            }
            Self::Rectangle(rect) | Self::Ellipse(rect) => rect.hash(state),
            Self::Polygon { vertices } => {
                vertices.len().hash(state);
                for vertex in vertices {
                    key(vertex.x).hash(state);
                    key(vertex.y).hash(state);
                }
            }
        }
    }
}

/// Orientation strategy for a gradient fill, applied by the drawing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientPaintTransformer {
    /// Bottom-to-top across the full height.
    #[default]
    Vertical,
    /// Left-to-right across the full width.
    Horizontal,
    /// From the vertical centre outwards, mirrored.
    CenterVertical,
    /// From the horizontal centre outwards, mirrored.
    CenterHorizontal,
}

impl GradientPaintTransformer {
    /// Maps the bounds of a filled shape to the gradient span.
    ///
    /// The returned rectangle starts at the gradient's start point and its
    /// `width`/`height` give the vector to the end point.
    #[must_use]
    pub fn transform(self, bounds: Rect) -> Rect {
        match self {
            Self::Vertical => Rect::new(bounds.center_x(), bounds.y, 0.0, bounds.height),
            Self::Horizontal => Rect::new(bounds.x, bounds.center_y(), bounds.width, 0.0),
            Self::CenterVertical => Rect::new(
                bounds.center_x(),
                bounds.center_y(),
                0.0,
                bounds.height / 2.0,
            ),
            Self::CenterHorizontal => Rect::new(
                bounds.center_x(),
                bounds.center_y(),
                bounds.width / 2.0,
                0.0,
            ),
        }
    }

    /// Centred variants repeat the gradient mirrored around the centre.
    #[must_use]
    pub fn is_cyclic(self) -> bool {
        matches!(self, Self::CenterVertical | Self::CenterHorizontal)
    }
}
