use tracing::{debug, trace, warn};

use crate::classify::{ClassGranularity, ClassPalette, LegendEntry, legend_entries};
use crate::core::{MapFeature, Viewport, project_boundary};
use crate::error::{DashboardError, DashboardResult};
use crate::interaction::{
    DisplayOptions, FeatureClick, MapLayerKind, SelectionState, extrusion_height,
};
use crate::render::{PolygonPrimitive, PreviewFrame, Renderer};

use super::class_chart::ClassBreakdown;
use super::engine_config::{CameraState, DashboardConfig};
use super::summary::{AreaSummary, CellSummary};

/// Main orchestration facade consumed by host applications.
///
/// `DashboardEngine` coordinates selection state, display toggles, the
/// classification palette, and renderer calls for the cell preview.
pub struct DashboardEngine<R: Renderer> {
    renderer: R,
    preview_viewport: Viewport,
    display: DisplayOptions,
    camera: CameraState,
    selection: SelectionState,
    palette: ClassPalette,
}

impl<R: Renderer> DashboardEngine<R> {
    pub fn new(renderer: R, config: DashboardConfig) -> DashboardResult<Self> {
        config.validate()?;
        debug!(
            width = config.preview_viewport.width,
            height = config.preview_viewport.height,
            granularity = ?config.display.granularity,
            "dashboard engine created"
        );
        Ok(Self {
            renderer,
            preview_viewport: config.preview_viewport,
            display: config.display,
            camera: config.camera,
            selection: SelectionState::new(),
            palette: ClassPalette::new(),
        })
    }

    #[must_use]
    pub fn display(&self) -> DisplayOptions {
        self.display
    }

    #[must_use]
    pub fn camera(&self) -> CameraState {
        self.camera
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[must_use]
    pub fn preview_viewport(&self) -> Viewport {
        self.preview_viewport
    }

    /// Updates the preview viewport used for cell boundary rendering.
    pub fn set_preview_viewport(&mut self, viewport: Viewport) -> DashboardResult<()> {
        if !viewport.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.preview_viewport = viewport;
        Ok(())
    }

    /// Routes one resolved pointer hit into the selection.
    pub fn handle_click(&mut self, click: FeatureClick) {
        trace!(layer = ?click.layer, fid = ?click.feature.properties.fid, "feature click");
        self.selection.apply_click(click);
    }

    /// Routes a batch of hits from a single pointer event, one per layer.
    pub fn handle_clicks(&mut self, clicks: impl IntoIterator<Item = FeatureClick>) {
        for click in clicks {
            self.handle_click(click);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn set_granularity(&mut self, granularity: ClassGranularity) {
        self.display.granularity = granularity;
    }

    pub fn toggle_granularity(&mut self) {
        self.display.toggle_granularity();
        debug!(granularity = ?self.display.granularity, "class granularity toggled");
    }

    pub fn toggle_volumetric(&mut self) {
        self.display.toggle_volumetric();
        debug!(volumetric = self.display.volumetric, "volumetric display toggled");
    }

    /// Moves the camera, typically on map pan/zoom events from the host.
    pub fn set_camera(&mut self, camera: CameraState) -> DashboardResult<()> {
        if !camera.longitude.is_finite() || !camera.latitude.is_finite() || !camera.zoom.is_finite()
        {
            return Err(DashboardError::InvalidData(
                "camera position and zoom must be finite".to_owned(),
            ));
        }
        self.camera = camera;
        Ok(())
    }

    /// Legend rows for the active classification scheme.
    #[must_use]
    pub fn legend(&self) -> Vec<LegendEntry> {
        legend_entries(self.display.granularity)
    }

    /// Detail panels become available once both a municipality and a region
    /// are selected.
    #[must_use]
    pub fn dashboard_ready(&self) -> bool {
        self.selection.dashboard_ready()
    }

    /// Stat panel for the selected cell, if any.
    #[must_use]
    pub fn cell_summary(&self) -> Option<CellSummary> {
        self.selection
            .cell()
            .map(|cell| CellSummary::from_feature(cell, self.display.granularity, &self.palette))
    }

    /// Title, total population and class chart for the selected municipality.
    #[must_use]
    pub fn municipality_summary(&self) -> Option<AreaSummary> {
        self.selection.municipality().map(|feature| {
            let properties = &feature.properties;
            AreaSummary::new(
                properties.name.clone().unwrap_or_default(),
                properties.degurba_total.unwrap_or(0.0),
                ClassBreakdown::from_properties(properties, self.display.granularity),
            )
        })
    }

    /// Title, total population and class chart for the selected region.
    #[must_use]
    pub fn region_summary(&self) -> Option<AreaSummary> {
        self.selection.region().map(|feature| {
            let properties = &feature.properties;
            AreaSummary::new(
                properties.region.clone().unwrap_or_default(),
                properties.degurba_total.unwrap_or(0.0),
                ClassBreakdown::from_properties(properties, self.display.granularity),
            )
        })
    }

    /// Feature id to highlight on a layer, mirroring the current selection.
    #[must_use]
    pub fn highlight_fid(&self, layer: MapLayerKind) -> Option<u64> {
        self.selection.highlight_fid(layer)
    }

    /// Extrusion height for one cell feature at the current camera zoom.
    #[must_use]
    pub fn extrusion_height_for(&self, feature: &MapFeature) -> f64 {
        let properties = &feature.properties;
        extrusion_height(
            properties.population.unwrap_or(0.0),
            properties.area.unwrap_or(0.0),
            self.camera.zoom,
            self.display.volumetric,
        )
    }

    /// Builds the boundary preview frame for the selected cell.
    ///
    /// Returns `Ok(None)` when there is nothing to draw: no cell selected, or
    /// the selected cell's geometry carries no coordinates.
    pub fn build_preview(&self) -> DashboardResult<Option<PreviewFrame>> {
        let Some(cell) = self.selection.cell() else {
            return Ok(None);
        };

        let points = cell.geometry.boundary_points();
        let pixels = match project_boundary(&points, self.preview_viewport) {
            Ok(pixels) => pixels,
            Err(DashboardError::EmptyBoundary) => {
                warn!(
                    fid = ?cell.properties.fid,
                    "skipping cell preview for geometry without coordinates"
                );
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        let color_label = match self.display.granularity {
            ClassGranularity::Level1 => cell.properties.l1_class.as_deref(),
            ClassGranularity::Level2 => cell.properties.l2_class.as_deref(),
        };
        let fill = self.palette.color_for_opt(color_label);

        trace!(point_count = pixels.len(), "built cell preview frame");
        let frame =
            PreviewFrame::new(self.preview_viewport).with_polygon(PolygonPrimitive::new(pixels, fill));
        Ok(Some(frame))
    }

    /// Renders the selected cell's boundary preview.
    ///
    /// Returns whether anything was drawn; an empty selection or an empty
    /// boundary renders nothing and is not an error.
    pub fn render_preview(&mut self) -> DashboardResult<bool> {
        match self.build_preview()? {
            Some(frame) => {
                self.renderer.render(&frame)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
