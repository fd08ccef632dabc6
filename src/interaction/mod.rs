use serde::{Deserialize, Serialize};

use crate::classify::ClassGranularity;
use crate::core::MapFeature;

/// Interactive map layer a pointer hit can originate from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapLayerKind {
    Cell,
    Municipality,
    Region,
}

/// One resolved pointer hit: the layer it came from and the feature under it.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureClick {
    pub layer: MapLayerKind,
    pub feature: MapFeature,
}

impl FeatureClick {
    #[must_use]
    pub fn new(layer: MapLayerKind, feature: MapFeature) -> Self {
        Self { layer, feature }
    }
}

/// Current cell, municipality and region selection.
///
/// A single click can hit several interactive layers at once. Each hit only
/// replaces the selection for its own layer, so drilling into a cell keeps
/// the surrounding municipality and region selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    cell: Option<MapFeature>,
    municipality: Option<MapFeature>,
    region: Option<MapFeature>,
}

impl SelectionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_click(&mut self, click: FeatureClick) {
        match click.layer {
            MapLayerKind::Cell => self.cell = Some(click.feature),
            MapLayerKind::Municipality => self.municipality = Some(click.feature),
            MapLayerKind::Region => self.region = Some(click.feature),
        }
    }

    pub fn apply_clicks(&mut self, clicks: impl IntoIterator<Item = FeatureClick>) {
        for click in clicks {
            self.apply_click(click);
        }
    }

    #[must_use]
    pub fn cell(&self) -> Option<&MapFeature> {
        self.cell.as_ref()
    }

    #[must_use]
    pub fn municipality(&self) -> Option<&MapFeature> {
        self.municipality.as_ref()
    }

    #[must_use]
    pub fn region(&self) -> Option<&MapFeature> {
        self.region.as_ref()
    }

    /// Detail panels unlock once both a municipality and a region are chosen.
    #[must_use]
    pub fn dashboard_ready(&self) -> bool {
        self.municipality.is_some() && self.region.is_some()
    }

    /// The intro panel shows only while neither a municipality nor a region
    /// is selected.
    #[must_use]
    pub fn show_intro(&self) -> bool {
        self.municipality.is_none() && self.region.is_none()
    }

    /// Feature id to highlight on the given layer, if that layer has a
    /// selection with an id.
    #[must_use]
    pub fn highlight_fid(&self, layer: MapLayerKind) -> Option<u64> {
        let feature = match layer {
            MapLayerKind::Cell => self.cell.as_ref(),
            MapLayerKind::Municipality => self.municipality.as_ref(),
            MapLayerKind::Region => self.region.as_ref(),
        };
        feature.and_then(|f| f.properties.fid)
    }

    pub fn clear(&mut self) {
        self.cell = None;
        self.municipality = None;
        self.region = None;
    }
}

/// Display toggles mirrored by the legend controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Active classification scheme, level 2 at startup.
    #[serde(default)]
    pub granularity: ClassGranularity,
    /// Cells extrude by population density when set, render flat otherwise.
    #[serde(default)]
    pub volumetric: bool,
}

impl DisplayOptions {
    pub fn toggle_granularity(&mut self) {
        self.granularity = match self.granularity {
            ClassGranularity::Level1 => ClassGranularity::Level2,
            ClassGranularity::Level2 => ClassGranularity::Level1,
        };
    }

    pub fn toggle_volumetric(&mut self) {
        self.volumetric = !self.volumetric;
    }
}

/// Extrusion height for one cell at the given zoom level.
///
/// Height ramps linearly from zero at zoom 3 up to twice the cell's
/// population density at zoom 5, staying flat outside that range. A cell with
/// non-positive area never extrudes, and neither does anything while
/// volumetric display is off.
#[must_use]
pub fn extrusion_height(population: f64, area: f64, zoom: f64, volumetric: bool) -> f64 {
    if !volumetric || area <= 0.0 {
        return 0.0;
    }

    let peak = population / area * 2.0;
    if zoom <= 3.0 {
        0.0
    } else if zoom >= 5.0 {
        peak
    } else {
        peak * (zoom - 3.0) / 2.0
    }
}
