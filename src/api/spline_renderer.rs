use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{
    AxisRange, FillOutline, FillType, GradientPaintTransformer, InterpolatedPath, LegendShape,
    build_fill, compute_range, interpolate,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, GradientSpan, LinePrimitive, PolygonPrimitive, Renderer, SplineFrame};

use super::listener_registry::ListenerRegistry;
use super::{SplineRendererConfig, XySeries};

/// Notification sent after an effective configuration change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RendererChangeEvent {
    PrecisionChanged { precision: usize },
    FillTypeChanged { fill_type: FillType },
    GradientTransformerChanged,
    LegendShapeChanged,
    ConfigReplaced,
}

/// Observer of a [`SplineRenderer`], typically the owning plot.
pub trait RendererChangeListener {
    fn id(&self) -> &str;
    fn renderer_changed(&mut self, event: &RendererChangeEvent);
}

/// Stroke and fill colors used when building frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplineStyle {
    pub line_color: Color,
    pub stroke_width: f64,
    pub fill_color: Color,
}

impl Default for SplineStyle {
    fn default() -> Self {
        Self {
            line_color: Color::rgb(0.16, 0.38, 0.86),
            stroke_width: 1.0,
            fill_color: Color::rgba(0.16, 0.38, 0.86, 0.35),
        }
    }
}

/// Output of one render pass: the sampled path and the range it needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineRenderPass {
    pub path: InterpolatedPath,
    /// `None` when the series was empty; the axis should use its default span.
    pub range: Option<AxisRange>,
    pub fill_type: FillType,
    pub domain_bound: f64,
}

impl SplineRenderPass {
    /// Fill outline borrowing this pass's path, or `None` when unfilled.
    pub fn fill(&self) -> ChartResult<Option<FillOutline<'_>>> {
        build_fill(&self.path, self.fill_type, self.domain_bound)
    }
}

/// Counts reported after a frame was handed to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplinePassSummary {
    pub segment_count: usize,
    pub sample_count: usize,
    pub line_count: usize,
    pub filled: bool,
    pub range: Option<AxisRange>,
}

/// Draws one series as a smooth spline and reports the axis range it needs.
///
/// Listeners are runtime handles: they are not persisted and must be
/// registered again after [`SplineRenderer::restore`].
#[derive(Debug, Default)]
pub struct SplineRenderer {
    config: SplineRendererConfig,
    style: SplineStyle,
    listeners: ListenerRegistry<dyn RendererChangeListener>,
}

impl SplineRenderer {
    #[must_use]
    pub fn new(config: SplineRendererConfig) -> Self {
        Self {
            config,
            style: SplineStyle::default(),
            listeners: ListenerRegistry::default(),
        }
    }

    pub fn with_precision(precision: usize) -> ChartResult<Self> {
        Ok(Self::new(SplineRendererConfig::new(precision)?))
    }

    #[must_use]
    pub fn config(&self) -> &SplineRendererConfig {
        &self.config
    }

    #[must_use]
    pub fn style(&self) -> SplineStyle {
        self.style
    }

    pub fn set_style(&mut self, style: SplineStyle) -> ChartResult<()> {
        style.line_color.validate()?;
        style.fill_color.validate()?;
        if !style.stroke_width.is_finite() || style.stroke_width <= 0.0 {
            return Err(ChartError::InvalidInput(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.style = style;
        Ok(())
    }

    pub fn set_config(&mut self, config: SplineRendererConfig) -> ChartResult<()> {
        config.validate()?;
        if config == self.config {
            return Ok(());
        }
        self.config = config;
        self.notify(RendererChangeEvent::ConfigReplaced);
        Ok(())
    }

    pub fn set_precision(&mut self, precision: usize) -> ChartResult<()> {
        if precision == self.config.precision() {
            return Ok(());
        }
        self.config.set_precision(precision)?;
        self.notify(RendererChangeEvent::PrecisionChanged { precision });
        Ok(())
    }

    pub fn set_fill_type(&mut self, fill_type: FillType) {
        if fill_type == self.config.fill_type() {
            return;
        }
        self.config.set_fill_type(fill_type);
        self.notify(RendererChangeEvent::FillTypeChanged { fill_type });
    }

    pub fn set_gradient_transformer(&mut self, transformer: Option<GradientPaintTransformer>) {
        if transformer == self.config.gradient_transformer() {
            return;
        }
        self.config.set_gradient_transformer(transformer);
        self.notify(RendererChangeEvent::GradientTransformerChanged);
    }

    pub fn set_legend_shape(&mut self, shape: Option<LegendShape>) -> ChartResult<()> {
        if shape.as_ref() == self.config.legend_shape() {
            return Ok(());
        }
        self.config.set_legend_shape(shape)?;
        self.notify(RendererChangeEvent::LegendShapeChanged);
        Ok(())
    }

    pub fn add_listener(&mut self, listener: Box<dyn RendererChangeListener>) -> ChartResult<()> {
        let id = listener.id().to_owned();
        self.listeners.add(&id, listener)
    }

    /// Removes a listener by id. Returns `true` when removed.
    pub fn remove_listener(&mut self, listener_id: &str) -> bool {
        self.listeners.remove(listener_id)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Interpolated value range for auto-ranging, without any axis margin.
    pub fn find_range_bounds(
        &self,
        series: &XySeries,
        domain_bound: f64,
    ) -> ChartResult<AxisRange> {
        let points = series.snapshot()?;
        let path = interpolate(&points, self.config.precision())?;
        compute_range(&path, self.config.fill_type(), domain_bound)
    }

    /// Snapshots `series`, interpolates it and computes its range.
    pub fn render_pass(&self, series: &XySeries, domain_bound: f64) -> ChartResult<SplineRenderPass> {
        let points = series.snapshot()?;
        let path = interpolate(&points, self.config.precision())?;
        let range = match compute_range(&path, self.config.fill_type(), domain_bound) {
            Ok(range) => Some(range),
            Err(ChartError::DegenerateRange) => None,
            Err(err) => return Err(err),
        };
        debug!(
            series = series.key(),
            points = points.len(),
            segments = path.segment_count(),
            samples = path.samples().len(),
            precision = path.precision(),
            "spline render pass"
        );
        Ok(SplineRenderPass {
            path,
            range,
            fill_type: self.config.fill_type(),
            domain_bound,
        })
    }

    /// Builds the frame for `pass` without drawing it.
    pub fn build_frame(&self, pass: &SplineRenderPass) -> ChartResult<SplineFrame> {
        let mut frame = SplineFrame::new().with_legend_shape(self.config.legend_shape().cloned());

        if let Some(outline) = pass.fill()? {
            let gradient = self
                .config
                .gradient_transformer()
                .map(|transformer| GradientSpan {
                    span: transformer.transform(outline.bounds()),
                    cyclic: transformer.is_cyclic(),
                });
            frame = frame.with_fill(PolygonPrimitive {
                vertices: outline.to_polygon(),
                color: self.style.fill_color,
                gradient,
            });
        }

        for segment in pass.path.line_segments() {
            frame = frame.with_line(LinePrimitive::new(
                segment.x1,
                segment.y1,
                segment.x2,
                segment.y2,
                self.style.stroke_width,
                self.style.line_color,
            ));
        }
        Ok(frame)
    }

    /// Runs a pass and hands the resulting frame to `renderer`.
    pub fn draw<R: Renderer>(
        &self,
        series: &XySeries,
        domain_bound: f64,
        renderer: &mut R,
    ) -> ChartResult<SplinePassSummary> {
        let pass = self.render_pass(series, domain_bound)?;
        let frame = self.build_frame(&pass)?;
        if let Err(err) = renderer.render(&frame) {
            warn!(series = series.key(), error = %err, "spline frame rejected by renderer");
            return Err(err);
        }
        Ok(SplinePassSummary {
            segment_count: pass.path.segment_count(),
            sample_count: pass.path.samples().len(),
            line_count: frame.lines.len(),
            filled: frame.fill.is_some(),
            range: pass.range,
        })
    }

    /// Persists the configuration (listeners and style are runtime state).
    pub fn persist(&self) -> ChartResult<String> {
        self.config.to_json_contract_v1_pretty()
    }

    pub fn restore(input: &str) -> ChartResult<Self> {
        Ok(Self::new(SplineRendererConfig::from_json_compat_str(input)?))
    }

    fn notify(&mut self, event: RendererChangeEvent) {
        debug!(?event, listeners = self.listeners.len(), "renderer config changed");
        self.listeners
            .for_each_mut(|listener| listener.renderer_changed(&event));
    }
}
