use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::GeoPoint;

/// GeoJSON position: `[lng, lat]` in degrees. The dataset's tiles are 2D;
/// altitude-bearing positions are not accepted.
pub type Position = [f64; 2];

impl From<Position> for GeoPoint {
    fn from(position: Position) -> Self {
        GeoPoint::new(position[0], position[1])
    }
}

/// Polygonal geometry as delivered by the map library for a selected feature.
///
/// The serde representation matches the GeoJSON wire shape
/// (`{"type": "Polygon", "coordinates": [...]}`), so a feature payload can be
/// deserialized straight off the selection event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum FeatureGeometry {
    Polygon(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
}

impl FeatureGeometry {
    /// Every ring across every polygon, outer rings and holes alike.
    ///
    /// Features are overwhelmingly single-ring grid squares, so the list
    /// stays on the stack for the common case.
    #[must_use]
    pub fn rings(&self) -> SmallVec<[&[Position]; 4]> {
        match self {
            Self::Polygon(rings) => rings.iter().map(Vec::as_slice).collect(),
            Self::MultiPolygon(polygons) => {
                polygons.iter().flatten().map(Vec::as_slice).collect()
            }
        }
    }

    /// The undifferentiated boundary: all ring points flattened in document
    /// order. Holes are not distinguished from outer rings; the preview is a
    /// silhouette, not a hole-aware renderer.
    #[must_use]
    pub fn boundary_points(&self) -> Vec<GeoPoint> {
        self.rings()
            .iter()
            .flat_map(|ring| ring.iter().copied())
            .map(GeoPoint::from)
            .collect()
    }

    /// Total boundary point count across all rings.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.rings().iter().map(|ring| ring.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rings().iter().all(|ring| ring.is_empty())
    }
}
