use std::collections::HashMap;

/// Position and size of a glyph's cell in the font atlas, in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct AtlasRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl AtlasRect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// Metrics for one character: atlas cell, horizontal advance, and kerning
/// offsets toward specific successor characters.
///
/// Immutable after construction; the builder-style [`with_kerning`]
/// registrations happen before the glyph is stored in a [`Font`], and
/// lookups only ever hand out shared references.
///
/// [`with_kerning`]: Self::with_kerning
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    atlas: AtlasRect,
    advance: f32,
    kerning: HashMap<char, f32>,
}

impl Glyph {
    pub fn new(atlas: AtlasRect, advance: f32) -> Self {
        Self {
            atlas,
            advance,
            kerning: HashMap::new(),
        }
    }

    /// Registers a kerning offset applied when `next` follows this glyph.
    pub fn with_kerning(mut self, next: char, offset: f32) -> Self {
        self.kerning.insert(next, offset);
        self
    }

    #[inline]
    pub fn atlas(&self) -> AtlasRect {
        self.atlas
    }

    #[inline]
    pub fn advance(&self) -> f32 {
        self.advance
    }

    /// Kerning offset toward `next`. Exactly `0.0` for unregistered pairs.
    #[inline]
    pub fn kerning_to(&self, next: char) -> f32 {
        self.kerning.get(&next).copied().unwrap_or(0.0)
    }
}
