use crate::error::DashboardResult;
use crate::render::{PreviewFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_polygon_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &PreviewFrame) -> DashboardResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_polygon_count = frame.polygons.len();
        Ok(())
    }
}
