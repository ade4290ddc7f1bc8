mod listener_registry;
mod renderer_config;
mod series;
mod spline_renderer;

pub use renderer_config::{
    RENDERER_CONFIG_JSON_SCHEMA_V1, SplineRendererConfig, SplineRendererConfigJsonContractV1,
};
pub use series::{SeriesChangeEvent, SeriesChangeListener, XySeries};
pub use spline_renderer::{
    RendererChangeEvent, RendererChangeListener, SplinePassSummary, SplineRenderPass,
    SplineRenderer, SplineStyle,
};
