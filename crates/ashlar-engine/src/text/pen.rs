use crate::error::ResourceLookupError;
use crate::gpu::{BufferSpec, TexturedVertex, Topology};
use crate::paint::Color;
use crate::render::{Renderable, Viewport};

use super::font::{Font, FontCatalog};

/// Style flags carried by a pen.
///
/// Layout itself is style-agnostic; the flags travel with the produced text
/// so the asset layer can pick a matching face variant when it registers
/// per-style catalogs.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct StyleFlags {
    pub bold: bool,
    pub italic: bool,
}

/// Accumulates layout state (position, font variant, size, color, style)
/// and emits [`Text`] renderables.
///
/// Creating a pen selects the catalog variant closest to the requested size
/// and derives the scale factor applied to every glyph metric.
pub struct Pen<'a> {
    font: &'a Font,
    scale: f32,
    x: f32,
    y: f32,
    color: Color,
    style: StyleFlags,
}

impl<'a> Pen<'a> {
    /// Creates a pen writing at `size` pixels using the closest variant in
    /// `catalog`. An empty catalog fails loudly rather than falling back to
    /// some placeholder face.
    pub fn new(catalog: &'a FontCatalog, size: f32) -> Result<Self, ResourceLookupError> {
        let font = catalog
            .closest(size)
            .ok_or_else(|| ResourceLookupError("font catalog has no variants".to_string()))?;
        Ok(Self {
            font,
            scale: size / font.size(),
            x: 0.0,
            y: 0.0,
            color: font.color(),
            style: StyleFlags::default(),
        })
    }

    /// Moves the pen to a pixel position.
    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Overrides the font's default color.
    pub fn set_color(&mut self, color: Color) -> &mut Self {
        self.color = color;
        self
    }

    pub fn set_style(&mut self, style: StyleFlags) -> &mut Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> StyleFlags {
        self.style
    }

    /// Scale factor from the selected variant's nominal size to the
    /// requested size.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Lays out `text` left to right from the pen position, emitting one
    /// quad (two triangles, 6 vertices) per character.
    ///
    /// Atlas and placement coordinates are normalized into `[0, 1]` by the
    /// viewport pixel dimensions. Each character advances the pen by its
    /// scaled advance plus the kerning registered for the (current, next)
    /// pair. A character the variant has no glyph for is logged as a
    /// degraded asset and skipped; layout continues.
    pub fn write_text(&self, text: &str, viewport: Viewport) -> Text {
        let characters: Vec<char> = text.chars().collect();
        let mut vertices = Vec::with_capacity(characters.len() * 6);

        let color = self.color.to_linear();
        let mut pen_x = self.x;

        for (i, &character) in characters.iter().enumerate() {
            let Some(glyph) = self.font.glyph(character) else {
                log::warn!("font has no glyph for {character:?}; character skipped");
                continue;
            };

            let atlas = glyph.atlas();

            // Placement quad, pixels → [0, 1] clip range.
            let x0 = pen_x / viewport.width;
            let y0 = self.y / viewport.height;
            let x1 = (pen_x + atlas.width * self.scale) / viewport.width;
            let y1 = (self.y + atlas.height * self.scale) / viewport.height;

            // Atlas cell, normalized against the same viewport basis.
            let u0 = atlas.x / viewport.width;
            let v0 = atlas.y / viewport.height;
            let u1 = (atlas.x + atlas.width) / viewport.width;
            let v1 = (atlas.y + atlas.height) / viewport.height;

            let quad = [
                ([x0, y0], [u0, v0]),
                ([x1, y0], [u1, v0]),
                ([x1, y1], [u1, v1]),
                ([x0, y0], [u0, v0]),
                ([x1, y1], [u1, v1]),
                ([x0, y1], [u0, v1]),
            ];
            for (position, uv) in quad {
                vertices.push(TexturedVertex { position, color, uv });
            }

            let mut advance = glyph.advance();
            if let Some(&next) = characters.get(i + 1) {
                advance += glyph.kerning_to(next);
            }
            pen_x += advance * self.scale;
        }

        Text { vertices }
    }
}

/// A laid-out string, ready for registration with the renderer.
pub struct Text {
    vertices: Vec<TexturedVertex>,
}

impl Text {
    pub fn vertices(&self) -> &[TexturedVertex] {
        &self.vertices
    }
}

impl Renderable for Text {
    fn topology(&self) -> Topology {
        Topology::TriangleList
    }

    fn buffer_specs(&self) -> Vec<BufferSpec> {
        vec![BufferSpec::textured(&self.vertices)]
    }

    fn vertex_count(&self) -> i32 {
        self.vertices.len() as i32
    }
}
