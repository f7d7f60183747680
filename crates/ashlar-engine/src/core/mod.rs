//! Core engine-facing contracts.
//!
//! Defines the stable interface between the render loop and the game layer:
//! the [`App`] callback trait, the per-frame context, and the loop driver
//! itself.

mod app;

pub use app::{App, AppControl, FrameCtx, LoopConfig, run};
