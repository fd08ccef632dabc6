use std::fmt::Write as _;

use crate::error::DashboardResult;
use crate::render::{PreviewFrame, Renderer};

/// Renderer that serializes each frame into a standalone SVG document.
///
/// Coordinates arrive already projected into pixel space with the origin at
/// the top-left corner, which matches the SVG coordinate convention, so the
/// backend writes them out verbatim.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// SVG document produced by the most recent `render` call.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &PreviewFrame) -> DashboardResult<()> {
        frame.validate()?;

        let mut doc = String::new();
        let _ = write!(
            doc,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
            frame.viewport.width, frame.viewport.height, frame.viewport.width, frame.viewport.height
        );
        for polygon in &frame.polygons {
            let points = polygon
                .points
                .iter()
                .map(|p| format!("{},{}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = write!(
                doc,
                "<polygon points=\"{}\" fill=\"{}\"/>",
                points,
                polygon.fill.to_hex()
            );
        }
        doc.push_str("</svg>");

        self.document = doc;
        Ok(())
    }
}
