//! spline-chart-rs: smooth spline series geometry for Rust-native charts.
//!
//! The crate interpolates an ordered point series with cubic Bézier segments,
//! samples them at a configurable precision, and derives the value-axis range
//! from those samples so that curve overshoot is never clipped. Drawing is
//! delegated to a `render::Renderer` backend.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{SplineRenderer, SplineRendererConfig, XySeries};
pub use error::{ChartError, ChartResult};
