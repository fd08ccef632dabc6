mod class_chart;
mod engine;
mod engine_config;
mod population_format;
mod summary;

pub use class_chart::{ClassBreakdown, ClassSlice};
pub use engine::DashboardEngine;
pub use engine_config::{CameraState, DashboardConfig};
pub use population_format::{format_population, group_thousands};
pub use summary::{AreaSummary, CellSummary};
