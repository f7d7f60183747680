//! Glyph metrics and text layout.
//!
//! Responsibilities:
//! - hold per-character atlas metrics and kerning ([`Glyph`], [`Font`])
//! - lay out strings into renderable quads ([`Pen`], [`Text`])
//!
//! Font *decoding* is an external collaborator: glyphs arrive here already
//! measured. This module owns layout only and never touches the GPU.

mod font;
mod glyph;
mod pen;

pub use font::{Font, FontCatalog};
pub use glyph::{AtlasRect, Glyph};
pub use pen::{Pen, StyleFlags, Text};
