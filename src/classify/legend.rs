use serde::Serialize;

use crate::classify::ClassGranularity;

/// One legend row for the active classification scheme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub code: &'static str,
    pub label: &'static str,
    pub color_hex: String,
}

/// Legend rows for a scheme, ordered from most to least urbanised.
#[must_use]
pub fn legend_entries(granularity: ClassGranularity) -> Vec<LegendEntry> {
    granularity
        .classes()
        .iter()
        .map(|def| LegendEntry {
            code: def.code,
            label: def.label,
            color_hex: def.color.to_hex(),
        })
        .collect()
}
