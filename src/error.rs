use thiserror::Error;

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// A geometry boundary had no coordinates to derive bounds from.
    #[error("geometry boundary has no coordinates")]
    EmptyBoundary,

    #[error("invalid preview viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
