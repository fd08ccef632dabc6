use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::classify::ClassGranularity;
use crate::core::FeatureProperties;

/// One bar of the class distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassSlice {
    pub code: &'static str,
    pub label: &'static str,
    pub color_hex: String,
    pub population: f64,
}

/// Population split over the classes of one scheme, ready to feed a bar
/// chart. Slices keep the scheme order, most urbanised first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassBreakdown {
    pub slices: Vec<ClassSlice>,
}

impl ClassBreakdown {
    /// Reads the per-class population counters off a feature.
    ///
    /// Counters absent from the feature contribute a zero-height bar, so the
    /// chart shape stays stable across features with sparse data.
    #[must_use]
    pub fn from_properties(properties: &FeatureProperties, granularity: ClassGranularity) -> Self {
        let slices = granularity
            .classes()
            .iter()
            .map(|def| ClassSlice {
                code: def.code,
                label: def.label,
                color_hex: def.color.to_hex(),
                population: properties.class_population(def.code),
            })
            .collect();
        Self { slices }
    }

    /// Sum of all bars.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|slice| slice.population).sum()
    }

    /// Slice with the largest population, ties going to the more urbanised
    /// class.
    #[must_use]
    pub fn dominant(&self) -> Option<&ClassSlice> {
        self.slices
            .iter()
            .rev()
            .max_by_key(|slice| OrderedFloat(slice.population))
    }
}
