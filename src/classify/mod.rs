mod legend;
mod palette;
mod scheme;

pub use legend::{LegendEntry, legend_entries};
pub use palette::{ClassPalette, FALLBACK_COLOR};
pub use scheme::{ClassDef, ClassGranularity, LEVEL1_CLASSES, LEVEL2_CLASSES};
