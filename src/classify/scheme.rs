use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Degree-of-urbanisation classification granularity.
///
/// Level 1 splits the population grid into three classes; level 2 refines the
/// same grid into seven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClassGranularity {
    Level1,
    #[default]
    Level2,
}

/// One urbanisation class: grid code, display label and map color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassDef {
    pub code: &'static str,
    pub label: &'static str,
    pub color: Color,
}

const fn class(code: &'static str, label: &'static str, color: Color) -> ClassDef {
    ClassDef { code, label, color }
}

/// Three-class scheme, ordered from most to least urbanised.
pub const LEVEL1_CLASSES: [ClassDef; 3] = [
    class("30", "city", Color::from_rgb8(0xfe, 0x00, 0x00)),
    class("20", "town and semi-dense area", Color::from_rgb8(0xff, 0xcc, 0x00)),
    class("10", "rural area", Color::from_rgb8(0x69, 0xb9, 0x72)),
];

/// Seven-class scheme, ordered from most to least urbanised.
pub const LEVEL2_CLASSES: [ClassDef; 7] = [
    class("30", "city", Color::from_rgb8(0xfe, 0x00, 0x00)),
    class("23", "dense town", Color::from_rgb8(0x74, 0x26, 0x02)),
    class("22", "semi-dense town", Color::from_rgb8(0xa8, 0x70, 0x01)),
    class(
        "21",
        "suburban area or peri-urban area",
        Color::from_rgb8(0xff, 0xff, 0x00),
    ),
    class("13", "village", Color::from_rgb8(0x38, 0x56, 0x24)),
    class("12", "dispersed rural area", Color::from_rgb8(0xaa, 0xcd, 0x65)),
    class("11", "very dispersed rural area", Color::from_rgb8(0xcd, 0xf5, 0x70)),
];

impl ClassGranularity {
    /// Classes of this scheme, ordered from most to least urbanised.
    #[must_use]
    pub fn classes(self) -> &'static [ClassDef] {
        match self {
            Self::Level1 => &LEVEL1_CLASSES,
            Self::Level2 => &LEVEL2_CLASSES,
        }
    }

    /// Looks up a class of this scheme by its grid code.
    #[must_use]
    pub fn class_by_code(self, code: &str) -> Option<&'static ClassDef> {
        self.classes().iter().find(|c| c.code == code)
    }
}
