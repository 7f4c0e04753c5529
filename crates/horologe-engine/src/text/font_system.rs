use std::fmt;

use super::{TextMeasure, TextMetrics};

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

impl FontId {
    /// Handle for the `index`-th font loaded into a [`FontSystem`].
    ///
    /// Measurement backends other than `FontSystem` may interpret the index freely.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }
}

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. Unknown ids are measured with
/// [`TextMetrics::estimate`] so a face can still be laid out before any
/// font has been supplied.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Returns the `FontId` that identifies the font in draw commands.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        log::debug!("loaded font {:?} as {id:?}", font_name(&font));
        self.fonts.push(font);
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }
}

fn font_name(font: &fontdue::Font) -> &str {
    font.name().unwrap_or("<unnamed>")
}

impl TextMeasure for FontSystem {
    /// Advance width plus horizontal line metrics at `size`.
    fn text_metrics(&self, text: &str, id: FontId, size: f32) -> TextMetrics {
        let Some(font) = self.get(id) else {
            return TextMetrics::estimate(text, size);
        };

        let width = text.chars().map(|c| font.metrics(c, size).advance_width).sum();

        // fontdue reports descent as a negative offset below the baseline.
        match font.horizontal_line_metrics(size) {
            Some(line) => TextMetrics::new(width, line.ascent, -line.descent),
            None => {
                let fallback = TextMetrics::estimate(text, size);
                TextMetrics::new(width, fallback.ascent, fallback.descent)
            }
        }
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}
