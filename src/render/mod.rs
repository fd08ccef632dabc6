mod frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::PreviewFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, PolygonPrimitive};
pub use svg_backend::SvgRenderer;

use crate::error::DashboardResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `PreviewFrame` so
/// drawing code remains isolated from map domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &PreviewFrame) -> DashboardResult<()>;
}
