use serde::Serialize;

use crate::classify::{ClassGranularity, ClassPalette};
use crate::core::MapFeature;

use super::class_chart::ClassBreakdown;
use super::population_format::format_population;

/// Stat panel content for one selected grid cell.
///
/// The class label always shows the detailed level 2 name, while the swatch
/// color follows the active scheme so the panel agrees with the map fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellSummary {
    pub cluster_name: String,
    pub class_label: Option<String>,
    pub class_color_hex: String,
    pub population: f64,
    pub population_display: String,
    pub density: Option<f64>,
    pub density_display: Option<String>,
}

impl CellSummary {
    #[must_use]
    pub fn from_feature(
        feature: &MapFeature,
        granularity: ClassGranularity,
        palette: &ClassPalette,
    ) -> Self {
        let properties = &feature.properties;
        let color_label = match granularity {
            ClassGranularity::Level1 => properties.l1_class.as_deref(),
            ClassGranularity::Level2 => properties.l2_class.as_deref(),
        };
        let population = properties.population.unwrap_or(0.0);
        let density = properties.density();

        Self {
            cluster_name: properties.core_name.clone().unwrap_or_default(),
            class_label: properties.l2_class.clone(),
            class_color_hex: palette.color_for_opt(color_label).to_hex(),
            population,
            population_display: format_population(population, 0),
            density,
            density_display: density.map(|d| format_population(d, 1)),
        }
    }
}

/// Stat panel content for a selected municipality or region: its title, the
/// total population and the per-class distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaSummary {
    pub title: String,
    pub total_population: f64,
    pub total_display: String,
    pub breakdown: ClassBreakdown,
}

impl AreaSummary {
    #[must_use]
    pub fn new(title: String, total_population: f64, breakdown: ClassBreakdown) -> Self {
        Self {
            title,
            total_population,
            total_display: format_population(total_population, 0),
            breakdown,
        }
    }
}
