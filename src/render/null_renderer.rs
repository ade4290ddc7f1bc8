use crate::error::ChartResult;
use crate::render::{Renderer, SplineFrame};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frames so invalid geometry surfaces before a real
/// backend sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_line_count: usize,
    pub last_fill_vertex_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &SplineFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_line_count = frame.lines.len();
        self.last_fill_vertex_count = frame
            .fill
            .as_ref()
            .map_or(0, |fill| fill.vertices.len());
        Ok(())
    }
}
