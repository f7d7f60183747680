//! Ashlar engine crate.
//!
//! This crate owns the GPU resource lifecycle and the per-frame render
//! registration pipeline used by higher layers (scene, game logic).

pub mod gpu;
pub mod render;
pub mod text;
pub mod time;
pub mod window;

pub mod assets;
pub mod core;
pub mod error;
pub mod logging;
pub mod paint;
