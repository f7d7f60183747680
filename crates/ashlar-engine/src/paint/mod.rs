//! Paint model shared between text layout and renderable producers.
//!
//! Scope:
//! - color representation (byte channels, clamped setters)
//!
//! Geometry stays with the caller; this module never touches the GPU.

pub mod color;

pub use color::Color;
