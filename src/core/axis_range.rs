use serde::{Deserialize, Serialize};

use crate::core::{FillType, InterpolatedPath};
use crate::error::{ChartError, ChartResult};

/// Value-axis bounds, `lower <= upper`.
///
/// Deserialization goes through [`AxisRange::new`], so a decoded range obeys
/// the same bounds as a constructed one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AxisRangeBounds")]
pub struct AxisRange {
    lower: f64,
    upper: f64,
}

#[derive(Deserialize)]
struct AxisRangeBounds {
    lower: f64,
    upper: f64,
}

impl TryFrom<AxisRangeBounds> for AxisRange {
    type Error = ChartError;

    fn try_from(bounds: AxisRangeBounds) -> ChartResult<Self> {
        Self::new(bounds.lower, bounds.upper)
    }
}

impl AxisRange {
    pub fn new(lower: f64, upper: f64) -> ChartResult<Self> {
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(ChartError::InvalidInput(format!(
                "axis range must be finite with lower <= upper, got [{lower}, {upper}]"
            )));
        }
        Ok(Self { lower, upper })
    }

    #[must_use]
    pub fn lower(self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.lower == self.upper
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    #[must_use]
    pub fn union_value(self, value: f64) -> Self {
        Self {
            lower: self.lower.min(value),
            upper: self.upper.max(value),
        }
    }

    /// Pads both ends by a ratio of the current span.
    ///
    /// Never applied by [`compute_range`]; this is the value axis's margin.
    pub fn with_margins(self, lower_ratio: f64, upper_ratio: f64) -> ChartResult<Self> {
        if !lower_ratio.is_finite()
            || !upper_ratio.is_finite()
            || lower_ratio < 0.0
            || upper_ratio < 0.0
        {
            return Err(ChartError::InvalidInput(
                "axis margin ratios must be finite and >= 0".to_owned(),
            ));
        }
        let span = self.span();
        Self::new(
            self.lower - span * lower_ratio,
            self.upper + span * upper_ratio,
        )
    }

    /// Centres a zero-width range inside `min_span`; wider ranges are unchanged.
    pub fn widened_to_min_span(self, min_span: f64) -> ChartResult<Self> {
        if !min_span.is_finite() || min_span <= 0.0 {
            return Err(ChartError::InvalidInput(
                "minimum axis span must be finite and > 0".to_owned(),
            ));
        }
        if self.span() >= min_span {
            return Ok(self);
        }
        let half = min_span / 2.0;
        let center = self.lower + self.span() / 2.0;
        Self::new(center - half, center + half)
    }
}

/// Bounds of every sampled y of `path`, unioned with the fill baseline.
///
/// Samples, not just the input points, are scanned so spline overshoot between
/// points is never clipped. An empty path has no defined range.
pub fn compute_range(
    path: &InterpolatedPath,
    fill_type: FillType,
    domain_bound: f64,
) -> ChartResult<AxisRange> {
    let samples = path.samples();
    let Some(first) = samples.first() else {
        return Err(ChartError::DegenerateRange);
    };

    let mut range = AxisRange {
        lower: first.y,
        upper: first.y,
    };
    for sample in &samples[1..] {
        range = range.union_value(sample.y);
    }

    match fill_type.baseline(domain_bound)? {
        Some(baseline) => Ok(range.union_value(baseline)),
        None => Ok(range),
    }
}
