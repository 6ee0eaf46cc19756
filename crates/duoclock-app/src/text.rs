//! Font loading and measurement.
//!
//! Owns the `fontdue` fonts used by the label renderer and provides
//! single-line measurement so the layout code can center text without
//! touching fontdue directly.

use std::fmt;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

/// Error returned by [`FontCollection::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontCollection`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns the loaded fonts. Immutable after loading.
pub struct FontCollection {
    fonts: Vec<fontdue::Font>,
}

impl FontCollection {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType/OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Measures a single line of text at `size` logical pixels.
    ///
    /// Returns `(width, height)`. Width is the advance extent of the line;
    /// height falls back to `size * 1.2` for empty or unmeasurable text.
    #[must_use]
    pub fn measure_line(&self, text: &str, id: FontId, size: f32) -> (f32, f32) {
        let Some(font) = self.get(id) else {
            return (0.0, size * 1.2);
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return (0.0, size * 1.2);
        }

        let width = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let height = glyphs
            .iter()
            .map(|g| g.y + g.height as f32)
            .fold(size, f32::max);

        (width, height)
    }
}

impl Default for FontCollection {
    fn default() -> Self {
        Self::new()
    }
}
