//! Presentation parameters: colors, shadow, font size and speed.
//!
//! Numeric values are clamped into range at construction, never rejected.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a color string is not `#RRGGBB` or `#RGB`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color {0:?} (expected #RRGGBB)")]
pub struct InvalidColor(pub String);

/// An opaque RGB color written as a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl HexColor {
    /// White, the default text color.
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    /// Black, the default background and shadow color.
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    /// Progress bar fill.
    pub const PROGRESS_GREEN: Self = Self::rgb(0x4C, 0xAF, 0x50);

    /// Build from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for HexColor {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidColor(s.to_string());
        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| invalid());

        match digits.len() {
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&digits[i..=i]).map(|v| v * 17);
                Ok(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Font size in pixels, always within [`FontSize::MIN`]..=[`FontSize::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontSize(u32);

impl FontSize {
    /// Smallest font size.
    pub const MIN: u32 = 8;
    /// Largest font size.
    pub const MAX: u32 = 200;
    /// Step used by the font size keys.
    pub const STEP: i64 = 2;

    /// Clamp any integer into range.
    pub fn new_clamped(px: i64) -> Self {
        Self(px.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u32)
    }

    /// Raw pixel value.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Offset by `delta`, clamped.
    pub fn adjusted(self, delta: i64) -> Self {
        Self::new_clamped(i64::from(self.0) + delta)
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(36)
    }
}

/// Scroll speed in pixels per tick, always within [`Speed::MIN`]..=[`Speed::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed(u32);

impl Speed {
    /// Slowest speed.
    pub const MIN: u32 = 1;
    /// Fastest speed.
    pub const MAX: u32 = 40;

    /// Clamp any integer into range.
    pub fn new_clamped(px_per_tick: i64) -> Self {
        Self(px_per_tick.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u32)
    }

    /// Raw pixels per tick.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Offset by `delta`, clamped.
    pub fn adjusted(self, delta: i64) -> Self {
        Self::new_clamped(i64::from(self.0) + delta)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(2)
    }
}

/// Everything that affects how the script looks, passed by value into
/// rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleConfig {
    /// Text color.
    pub text_color: HexColor,
    /// Canvas background.
    pub bg_color: HexColor,
    /// Draw a drop shadow behind the text.
    pub shadow_enabled: bool,
    /// Font size.
    pub font_size: FontSize,
    /// Scroll speed.
    pub speed: Speed,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            text_color: HexColor::WHITE,
            bg_color: HexColor::BLACK,
            shadow_enabled: true,
            font_size: FontSize::default(),
            speed: Speed::default(),
        }
    }
}
