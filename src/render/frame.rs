use crate::core::Viewport;
use crate::error::{DashboardError, DashboardResult};
use crate::render::PolygonPrimitive;

/// Backend-agnostic scene for one boundary preview draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFrame {
    pub viewport: Viewport,
    pub polygons: Vec<PolygonPrimitive>,
}

impl PreviewFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            polygons: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_polygon(mut self, polygon: PolygonPrimitive) -> Self {
        self.polygons.push(polygon);
        self
    }

    pub fn push_polygon(&mut self, polygon: PolygonPrimitive) {
        self.polygons.push(polygon);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if !self.viewport.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        Ok(())
    }
}
