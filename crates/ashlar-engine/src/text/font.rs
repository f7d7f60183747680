use std::collections::HashMap;

use crate::paint::Color;

use super::glyph::Glyph;

/// One pre-decoded font variant: a nominal pixel size, a default color, and
/// the glyph table.
///
/// Decoding is external; game startup code builds fonts from whatever atlas
/// metadata the asset layer produced and registers them in an
/// [`AssetRegistry`](crate::assets::AssetRegistry).
pub struct Font {
    size: f32,
    color: Color,
    glyphs: HashMap<char, Glyph>,
}

impl Font {
    pub fn new(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            glyphs: HashMap::new(),
        }
    }

    pub fn insert_glyph(&mut self, character: char, glyph: Glyph) {
        self.glyphs.insert(character, glyph);
    }

    /// Metrics for `character`, or `None` if the variant does not cover it.
    pub fn glyph(&self, character: char) -> Option<&Glyph> {
        self.glyphs.get(&character)
    }

    /// Nominal pixel size this variant was rasterized at.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }
}

/// Size variants of one font face.
///
/// The pen renders at an arbitrary requested size by picking the closest
/// available variant and scaling its metrics, which keeps glyph quads crisp
/// near the rasterized sizes without requiring a variant per size.
#[derive(Default)]
pub struct FontCatalog {
    variants: Vec<Font>,
}

impl FontCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_variant(&mut self, font: Font) {
        self.variants.push(font);
    }

    /// Variant whose nominal size is nearest to `size`. Ties resolve to the
    /// earliest registered variant. `None` only for an empty catalog.
    pub fn closest(&self, size: f32) -> Option<&Font> {
        self.variants.iter().min_by(|a, b| {
            let da = (a.size() - size).abs();
            let db = (b.size() - size).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(sizes: &[f32]) -> FontCatalog {
        let mut catalog = FontCatalog::new();
        for &size in sizes {
            catalog.add_variant(Font::new(size, Color::white()));
        }
        catalog
    }

    #[test]
    fn closest_picks_the_nearest_variant() {
        let c = catalog(&[12.0, 24.0, 48.0]);
        assert_eq!(c.closest(14.0).unwrap().size(), 12.0);
        assert_eq!(c.closest(20.0).unwrap().size(), 24.0);
        assert_eq!(c.closest(100.0).unwrap().size(), 48.0);
    }

    #[test]
    fn exact_size_matches_itself() {
        let c = catalog(&[12.0, 24.0]);
        assert_eq!(c.closest(24.0).unwrap().size(), 24.0);
    }

    #[test]
    fn empty_catalog_has_no_closest() {
        assert!(FontCatalog::new().closest(16.0).is_none());
    }
}
