use serde::{Deserialize, Serialize};

use crate::core::GeoPoint;
use crate::error::{DashboardError, DashboardResult};

/// Axis-aligned geographic bounding box in degrees.
///
/// A `GeoBounds` is always derived from a concrete point sequence and
/// recomputed per call; it is never cached across selections or mutated in
/// place. For non-empty input `min_lng <= max_lng` and `min_lat <= max_lat`
/// hold, with equality on both axes for a single-point input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl GeoBounds {
    /// Computes the bounds of a non-empty boundary point sequence.
    ///
    /// The four bounds seed from the first point; the remaining points are
    /// scanned once with strict comparisons, so ties never rewrite a bound.
    /// Comparisons follow IEEE-754 ordering: a NaN coordinate poisons the
    /// corresponding bound and is neither rejected nor repaired here.
    pub fn from_points(points: &[GeoPoint]) -> DashboardResult<Self> {
        let Some(first) = points.first() else {
            return Err(DashboardError::EmptyBoundary);
        };

        let mut bounds = Self {
            min_lng: first.lng,
            min_lat: first.lat,
            max_lng: first.lng,
            max_lat: first.lat,
        };

        for point in &points[1..] {
            if point.lng < bounds.min_lng {
                bounds.min_lng = point.lng;
            }
            if point.lng > bounds.max_lng {
                bounds.max_lng = point.lng;
            }
            if point.lat < bounds.min_lat {
                bounds.min_lat = point.lat;
            }
            if point.lat > bounds.max_lat {
                bounds.max_lat = point.lat;
            }
        }

        Ok(bounds)
    }

    /// Longitude span in degrees; zero for a vertical-line or single-point
    /// boundary.
    #[must_use]
    pub fn lng_span(self) -> f64 {
        self.max_lng - self.min_lng
    }

    /// Latitude span in degrees; zero for a horizontal-line or single-point
    /// boundary.
    #[must_use]
    pub fn lat_span(self) -> f64 {
        self.max_lat - self.min_lat
    }

    #[must_use]
    pub fn center(self) -> GeoPoint {
        GeoPoint::new(
            self.min_lng + self.lng_span() / 2.0,
            self.min_lat + self.lat_span() / 2.0,
        )
    }

    #[must_use]
    pub fn contains(self, point: GeoPoint) -> bool {
        point.lng >= self.min_lng
            && point.lng <= self.max_lng
            && point.lat >= self.min_lat
            && point.lat <= self.max_lat
    }
}
