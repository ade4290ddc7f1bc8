use serde::{Deserialize, Serialize};

use crate::core::geometry::Rect;
use crate::core::primitives::require_finite;
use crate::core::{DataPoint, InterpolatedPath};
use crate::error::ChartResult;

/// Closure strategy for area shading under a spline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FillType {
    /// Line only; no outline is produced.
    #[default]
    None,
    /// Close the area against `y = 0`.
    ToZero,
    /// Close the area against a caller-supplied domain-axis bound.
    ToDomainBounds,
}

impl FillType {
    /// Baseline y-value in effect for this fill type, if any.
    ///
    /// `domain_bound` is only read (and validated) for `ToDomainBounds`.
    pub fn baseline(self, domain_bound: f64) -> ChartResult<Option<f64>> {
        match self {
            Self::None => Ok(None),
            Self::ToZero => Ok(Some(0.0)),
            Self::ToDomainBounds => require_finite(domain_bound, "domain bound").map(Some),
        }
    }
}

/// Closed area outline: the path samples, then two baseline vertices.
///
/// The outline borrows the path; closing back to the first sample is implicit
/// in [`FillOutline::vertices`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillOutline<'a> {
    path: &'a [DataPoint],
    closure: [DataPoint; 2],
    baseline: f64,
}

impl<'a> FillOutline<'a> {
    #[must_use]
    pub fn path(&self) -> &'a [DataPoint] {
        self.path
    }

    #[must_use]
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// `(last_x, baseline)` followed by `(first_x, baseline)`.
    #[must_use]
    pub fn closure(&self) -> [DataPoint; 2] {
        self.closure
    }

    /// Every vertex of the ring, ending with the repeated first sample.
    pub fn vertices(&self) -> impl Iterator<Item = DataPoint> + use<'a> {
        let first = self.path.first().copied();
        self.path
            .iter()
            .copied()
            .chain(self.closure)
            .chain(first)
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.path.len() + self.closure.len() + 1
    }

    /// Owned copy of [`FillOutline::vertices`] for backends that keep frames.
    #[must_use]
    pub fn to_polygon(&self) -> Vec<DataPoint> {
        self.vertices().collect()
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::enclosing(self.vertices())
    }
}

/// Builds the fill outline for `fill_type`, or `None` when nothing is filled.
pub fn build_fill(
    path: &InterpolatedPath,
    fill_type: FillType,
    domain_bound: f64,
) -> ChartResult<Option<FillOutline<'_>>> {
    let Some(baseline) = fill_type.baseline(domain_bound)? else {
        return Ok(None);
    };
    let (Some(first), Some(last)) = (path.first(), path.last()) else {
        return Ok(None);
    };

    Ok(Some(FillOutline {
        path: path.samples(),
        closure: [
            DataPoint::new(last.x, baseline),
            DataPoint::new(first.x, baseline),
        ],
        baseline,
    }))
}
