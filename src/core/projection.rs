#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{GeoBounds, GeoPoint, PixelPoint, Viewport};
use crate::error::{DashboardError, DashboardResult};

/// Projects a geographic boundary into preview pixel space.
///
/// Each point is normalized against the boundary's own bounds and scaled to
/// the viewport, with the vertical axis inverted so northern points land
/// toward the raster top. The function is intentionally pure: one output
/// point per input point, same order, no filtering, no state between calls.
///
/// When the boundary spans zero degrees on an axis (a single point, or a
/// line along a meridian or parallel), every point maps to the midline of
/// that axis instead of dividing by zero. Non-finite input coordinates are
/// not rejected and flow through to the output.
pub fn project_boundary(
    points: &[GeoPoint],
    viewport: Viewport,
) -> DashboardResult<Vec<PixelPoint>> {
    let bounds = GeoBounds::from_points(points)?;

    if !viewport.is_valid() {
        return Err(DashboardError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    // Region boundaries can carry thousands of vertices; the optional
    // parallel path keeps output order and content identical.
    #[cfg(feature = "parallel-projection")]
    {
        Ok(points
            .par_iter()
            .map(|point| project_single_point(*point, bounds, viewport))
            .collect())
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        let mut out = Vec::with_capacity(points.len());
        for point in points {
            out.push(project_single_point(*point, bounds, viewport));
        }
        Ok(out)
    }
}

fn project_single_point(point: GeoPoint, bounds: GeoBounds, viewport: Viewport) -> PixelPoint {
    let x_norm = normalize_axis(point.lng, bounds.min_lng, bounds.lng_span());
    let y_norm = normalize_axis(point.lat, bounds.min_lat, bounds.lat_span());

    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);

    PixelPoint {
        x: x_norm * width,
        // Screen y grows downward while latitude grows northward.
        y: height - (y_norm * height),
    }
}

fn normalize_axis(value: f64, axis_min: f64, axis_span: f64) -> f64 {
    if axis_span == 0.0 {
        return 0.5;
    }
    (value - axis_min) / axis_span
}
