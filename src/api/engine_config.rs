use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{DashboardError, DashboardResult};
use crate::interaction::DisplayOptions;

/// Map camera position and zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            longitude: 37.5,
            latitude: 55.7,
            zoom: 5.0,
        }
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load dashboard
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Pixel size of the selected-cell geometry preview.
    #[serde(default = "default_preview_viewport")]
    pub preview_viewport: Viewport,
    #[serde(default)]
    pub display: DisplayOptions,
    #[serde(default)]
    pub camera: CameraState,
}

impl DashboardConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            preview_viewport: default_preview_viewport(),
            display: DisplayOptions::default(),
            camera: CameraState::default(),
        }
    }

    /// Sets the preview viewport size in pixels.
    #[must_use]
    pub fn with_preview_viewport(mut self, viewport: Viewport) -> Self {
        self.preview_viewport = viewport;
        self
    }

    /// Sets initial display toggles.
    #[must_use]
    pub fn with_display(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }

    /// Sets the initial camera position.
    #[must_use]
    pub fn with_camera(mut self, camera: CameraState) -> Self {
        self.camera = camera;
        self
    }

    pub fn validate(self) -> DashboardResult<()> {
        if !self.preview_viewport.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: self.preview_viewport.width,
                height: self.preview_viewport.height,
            });
        }
        if !self.camera.longitude.is_finite()
            || !self.camera.latitude.is_finite()
            || !self.camera.zoom.is_finite()
        {
            return Err(DashboardError::InvalidData(
                "camera position and zoom must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_preview_viewport() -> Viewport {
    Viewport::new(50, 50)
}
