pub mod bounds;
pub mod feature;
pub mod geometry;
pub mod projection;
pub mod types;

pub use bounds::GeoBounds;
pub use feature::{FeatureProperties, MapFeature};
pub use geometry::{FeatureGeometry, Position};
pub use projection::project_boundary;
pub use types::{GeoPoint, PixelPoint, Viewport};
