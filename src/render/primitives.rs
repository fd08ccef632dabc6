use crate::core::PixelPoint;
use crate::error::{DashboardError, DashboardResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds an opaque color from 8-bit channels.
    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses a CSS-style hex color: `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> DashboardResult<Self> {
        let Some(digits) = hex.strip_prefix('#') else {
            return Err(DashboardError::InvalidData(format!(
                "color `{hex}` must start with `#`"
            )));
        };
        if !digits.is_ascii() {
            return Err(DashboardError::InvalidData(format!(
                "color `{hex}` must be ASCII hex digits"
            )));
        }

        let (red, green, blue, alpha) = match digits.len() {
            3 => {
                let r = hex_nibble(digits, 0, hex)?;
                let g = hex_nibble(digits, 1, hex)?;
                let b = hex_nibble(digits, 2, hex)?;
                (r * 17, g * 17, b * 17, 0xff)
            }
            6 => (
                hex_byte(digits, 0, hex)?,
                hex_byte(digits, 2, hex)?,
                hex_byte(digits, 4, hex)?,
                0xff,
            ),
            8 => (
                hex_byte(digits, 0, hex)?,
                hex_byte(digits, 2, hex)?,
                hex_byte(digits, 4, hex)?,
                hex_byte(digits, 6, hex)?,
            ),
            _ => {
                return Err(DashboardError::InvalidData(format!(
                    "color `{hex}` must have 3, 6 or 8 hex digits"
                )));
            }
        };

        Ok(Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            f64::from(alpha) / 255.0,
        ))
    }

    /// Lowercase `#rrggbb` form, with an alpha byte appended when the color
    /// is not fully opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        let red = channel_to_u8(self.red);
        let green = channel_to_u8(self.green);
        let blue = channel_to_u8(self.blue);
        let alpha = channel_to_u8(self.alpha);

        if alpha == 0xff {
            format!("#{red:02x}{green:02x}{blue:02x}")
        } else {
            format!("#{red:02x}{green:02x}{blue:02x}{alpha:02x}")
        }
    }

    pub fn validate(self) -> DashboardResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(DashboardError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn hex_byte(digits: &str, index: usize, full: &str) -> DashboardResult<u8> {
    u8::from_str_radix(&digits[index..index + 2], 16).map_err(|_| {
        DashboardError::InvalidData(format!("color `{full}` has invalid hex digits"))
    })
}

fn hex_nibble(digits: &str, index: usize, full: &str) -> DashboardResult<u8> {
    u8::from_str_radix(&digits[index..index + 1], 16).map_err(|_| {
        DashboardError::InvalidData(format!("color `{full}` has invalid hex digits"))
    })
}

fn channel_to_u8(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Draw command for one filled polygon in pixel space.
///
/// Consecutive points join into a closed outline; the fill color is already
/// resolved from the feature's classification by the time a primitive is
/// built.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub points: Vec<PixelPoint>,
    pub fill: Color,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(points: Vec<PixelPoint>, fill: Color) -> Self {
        Self { points, fill }
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if self.points.is_empty() {
            return Err(DashboardError::InvalidData(
                "polygon must have at least one point".to_owned(),
            ));
        }
        for point in &self.points {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(DashboardError::InvalidData(
                    "polygon coordinates must be finite".to_owned(),
                ));
            }
        }
        self.fill.validate()
    }
}
