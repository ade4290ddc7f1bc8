use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

/// Validated, ordered snapshot of samples for one render pass.
///
/// Order is traversal order of the curve. Duplicate or unordered x values are
/// not rejected; they are a caller error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSequence {
    points: Vec<DataPoint>,
}

impl PointSequence {
    /// Takes ownership of `points`, rejecting any non-finite coordinate.
    pub fn new(points: Vec<DataPoint>) -> ChartResult<Self> {
        if let Some((index, point)) = points
            .iter()
            .enumerate()
            .find(|(_, point)| !point.is_finite())
        {
            return Err(ChartError::NonFiniteCoordinate {
                index,
                x: point.x,
                y: point.y,
            });
        }
        Ok(Self { points })
    }

    pub fn from_slice(points: &[DataPoint]) -> ChartResult<Self> {
        Self::new(points.to_vec())
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn first(&self) -> Option<DataPoint> {
        self.points.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<DataPoint> {
        self.points.last().copied()
    }
}

impl TryFrom<Vec<DataPoint>> for PointSequence {
    type Error = ChartError;

    fn try_from(points: Vec<DataPoint>) -> ChartResult<Self> {
        Self::new(points)
    }
}
