//! Presentation style settings: fonts, sizes, accent color and slide size.

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Exactly six hex digits.
static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{6}$").unwrap());

/// English Metric Units per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    /// Create a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color such as `#1f77b4` or `1F77B4`.
    ///
    /// Surrounding whitespace and any leading `#` characters are ignored.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !HEX_COLOR_REGEX.is_match(digits) {
            return Err(Error::InvalidColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| Error::InvalidColor(hex.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Uppercase `RRGGBB` form, as used by DrawingML `srgbClr`.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::new(0x1f, 0x77, 0xb4)
    }
}

impl FromStr for RgbColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Slide dimensions in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideSize {
    pub width: i64,
    pub height: i64,
}

impl SlideSize {
    /// 10" x 7.5" (4:3).
    pub const STANDARD: Self = Self {
        width: 9_144_000,
        height: 6_858_000,
    };

    /// 13.33" x 7.5" (16:9).
    pub const WIDESCREEN: Self = Self {
        width: 1_333 * EMU_PER_INCH / 100,
        height: 6_858_000,
    };
}

/// Text styling applied to every slide of a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideStyle {
    /// Typeface for titles and bullets.
    pub font_name: String,

    /// Title font size in points.
    pub title_size: u32,

    /// Bullet font size in points.
    pub bullet_size: u32,

    /// Title color.
    pub accent_color: RgbColor,

    /// Use 16:9 slides instead of 4:3.
    pub widescreen: bool,
}

impl Default for SlideStyle {
    fn default() -> Self {
        Self {
            font_name: "DejaVu Sans".to_string(),
            title_size: 40,
            bullet_size: 24,
            accent_color: RgbColor::default(),
            widescreen: false,
        }
    }
}

impl SlideStyle {
    /// The slide size implied by the widescreen flag.
    pub fn slide_size(&self) -> SlideSize {
        if self.widescreen {
            SlideSize::WIDESCREEN
        } else {
            SlideSize::STANDARD
        }
    }
}
