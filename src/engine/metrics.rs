//! Viewport and font measurement inputs to the layout engine.

/// Width used when the host reports a zero-width viewport.
pub const DEFAULT_VIEWPORT_WIDTH_PX: u32 = 800;

/// Height used when the host reports a zero-height viewport.
pub const DEFAULT_VIEWPORT_HEIGHT_PX: u32 = 600;

/// Average character width used when the font reports none.
pub const FALLBACK_CHAR_WIDTH_PX: u32 = 8;

/// Viewport dimensions in pixels.
///
/// Zero dimensions are legal inputs; they resolve to the defaults via
/// [`Viewport::effective_width`] and [`Viewport::effective_height`] so the
/// engine never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create viewport dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width with the zero-width fallback applied.
    pub fn effective_width(&self) -> u32 {
        if self.width == 0 {
            DEFAULT_VIEWPORT_WIDTH_PX
        } else {
            self.width
        }
    }

    /// Height with the zero-height fallback applied.
    pub fn effective_height(&self) -> u32 {
        if self.height == 0 {
            DEFAULT_VIEWPORT_HEIGHT_PX
        } else {
            self.height
        }
    }
}

/// Font measurements the layout depends on.
///
/// A graphical host fills these from its font engine. A terminal host has no
/// real glyph metrics and uses [`FontMetrics::estimated`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    /// Font size in pixels.
    pub font_size_px: u32,
    /// Width of an average glyph (`x`) in pixels. Zero means unknown.
    pub avg_char_width_px: u32,
    /// Measured height of one rendered line, when the host can measure it.
    pub measured_line_height_px: Option<u32>,
}

impl FontMetrics {
    /// Metrics estimated from the font size alone.
    ///
    /// Monospace glyphs are roughly 0.6 em wide.
    pub fn estimated(font_size_px: u32) -> Self {
        let avg = (f64::from(font_size_px) * 0.6).round() as u32;
        Self {
            font_size_px,
            avg_char_width_px: avg,
            measured_line_height_px: None,
        }
    }

    /// Average character width with the unknown-width fallback applied.
    pub fn char_width(&self) -> u32 {
        if self.avg_char_width_px == 0 {
            FALLBACK_CHAR_WIDTH_PX
        } else {
            self.avg_char_width_px
        }
    }

    /// Height of the glyphs of one line, without spacing.
    ///
    /// Falls back to `font_size * 1.2` when nothing was measured.
    pub fn text_height(&self) -> u32 {
        self.measured_line_height_px
            .unwrap_or_else(|| (f64::from(self.font_size_px) * 1.2) as u32)
    }

    /// Gap added below every line: `max(2, font_size * 0.1)`.
    pub fn line_spacing(&self) -> u32 {
        ((f64::from(self.font_size_px) * 0.1) as u32).max(2)
    }

    /// Total vertical advance of one line.
    pub fn line_advance(&self) -> u32 {
        self.text_height() + self.line_spacing()
    }
}
