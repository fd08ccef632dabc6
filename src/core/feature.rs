use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::FeatureGeometry;

/// Properties carried by the dataset's vector tiles.
///
/// The three interactive layers share one property space: cells carry class
/// labels, population and area; municipalities and regions carry a display
/// name plus the per-class population sums. Every field is optional so a
/// feature from any layer deserializes cleanly; properties this crate does
/// not interpret are preserved in `extra` in their original order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureProperties {
    pub fid: Option<u64>,
    /// Municipality display name.
    pub name: Option<String>,
    /// Region display name.
    pub region: Option<String>,
    /// DEGURBA cluster core name, when the cell belongs to a named cluster.
    pub core_name: Option<String>,
    /// Level-1 class label (3-class scheme).
    pub l1_class: Option<String>,
    /// Level-2 class label (7-class scheme).
    pub l2_class: Option<String>,
    pub population: Option<f64>,
    /// Area in square kilometres.
    pub area: Option<f64>,
    pub degurba_total: Option<f64>,
    pub degurba_10: Option<f64>,
    pub degurba_20: Option<f64>,
    pub degurba_30: Option<f64>,
    pub degurba_11: Option<f64>,
    pub degurba_12: Option<f64>,
    pub degurba_13: Option<f64>,
    pub degurba_21: Option<f64>,
    pub degurba_22: Option<f64>,
    pub degurba_23: Option<f64>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl FeatureProperties {
    /// Per-class population sum for a DEGURBA code.
    ///
    /// Absent sums and unknown codes read as zero, which is how the dashboard
    /// renders them: a zero-height bar, not an error.
    #[must_use]
    pub fn class_population(&self, code: &str) -> f64 {
        let value = match code {
            "10" => self.degurba_10,
            "20" => self.degurba_20,
            "30" => self.degurba_30,
            "11" => self.degurba_11,
            "12" => self.degurba_12,
            "13" => self.degurba_13,
            "21" => self.degurba_21,
            "22" => self.degurba_22,
            "23" => self.degurba_23,
            _ => None,
        };
        value.unwrap_or(0.0)
    }

    /// Population density in people per km², when both population and a
    /// positive area are known.
    #[must_use]
    pub fn density(&self) -> Option<f64> {
        match (self.population, self.area) {
            (Some(population), Some(area)) if area > 0.0 => Some(population / area),
            _ => None,
        }
    }
}

/// One selected feature from the map: typed tile properties plus polygon
/// geometry.
///
/// Deserializes from a GeoJSON Feature object; fields outside `properties`
/// and `geometry` (the `"type"` tag, `bbox`, layer metadata) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapFeature {
    pub properties: FeatureProperties,
    pub geometry: FeatureGeometry,
}

impl MapFeature {
    #[must_use]
    pub fn new(properties: FeatureProperties, geometry: FeatureGeometry) -> Self {
        Self {
            properties,
            geometry,
        }
    }
}
