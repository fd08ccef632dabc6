use indexmap::IndexMap;

use crate::classify::{LEVEL1_CLASSES, LEVEL2_CLASSES};
use crate::render::Color;

/// Fill used for features whose class label is unknown or missing.
pub const FALLBACK_COLOR: Color = Color::from_rgb8(0x80, 0x80, 0x80);

/// Label-to-color lookup spanning both classification schemes.
///
/// Insertion order follows the level 1 scheme and then the level 2 scheme,
/// with the shared `city` entry kept from its first appearance, so iterating
/// the palette yields a stable legend-like ordering.
#[derive(Debug, Clone)]
pub struct ClassPalette {
    colors: IndexMap<&'static str, Color>,
}

impl ClassPalette {
    #[must_use]
    pub fn new() -> Self {
        let mut colors = IndexMap::new();
        for def in LEVEL1_CLASSES.iter().chain(LEVEL2_CLASSES.iter()) {
            colors.entry(def.label).or_insert(def.color);
        }
        Self { colors }
    }

    /// Fill color for a class label, falling back to grey for labels outside
    /// either scheme.
    #[must_use]
    pub fn color_for(&self, label: &str) -> Color {
        self.colors.get(label).copied().unwrap_or(FALLBACK_COLOR)
    }

    /// Same lookup for an optional label, so callers can pass a feature's
    /// class property straight through.
    #[must_use]
    pub fn color_for_opt(&self, label: Option<&str>) -> Color {
        label.map_or(FALLBACK_COLOR, |l| self.color_for(l))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Color)> + '_ {
        self.colors.iter().map(|(label, color)| (*label, *color))
    }
}

impl Default for ClassPalette {
    fn default() -> Self {
        Self::new()
    }
}
