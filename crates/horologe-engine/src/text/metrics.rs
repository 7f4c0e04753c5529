use super::FontId;

/// Single-line text metrics in logical pixels.
///
/// `ascent` and `descent` are both positive distances from the baseline.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TextMetrics {
    /// Sum of glyph advances.
    pub width: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl TextMetrics {
    #[inline]
    pub const fn new(width: f32, ascent: f32, descent: f32) -> Self {
        Self { width, ascent, descent }
    }

    /// Line height without gap: `ascent + descent`.
    #[inline]
    pub fn height(self) -> f32 {
        self.ascent + self.descent
    }

    /// Size-proportional estimate used when no font is available.
    pub fn estimate(text: &str, size: f32) -> Self {
        let chars = text.chars().count() as f32;
        Self::new(chars * size * 0.6, size * 0.8, size * 0.2)
    }
}

/// Text measurement backend queried at draw time.
///
/// Faces never assume metrics; they ask the active font for every label.
pub trait TextMeasure {
    fn text_metrics(&self, text: &str, font: FontId, size: f32) -> TextMetrics;
}
