//! Window collaborator boundary.
//!
//! Window/context creation and input polling live outside this crate; the
//! render loop consumes them through this narrow trait only. The
//! implementation must have made its GL context current on the loop thread
//! before the device is loaded.

use crate::render::Viewport;

/// The window surface the render loop drives.
pub trait WindowBackend {
    /// Processes pending platform events (input, resize, close requests).
    fn poll_events(&mut self);

    /// Presents the finished frame.
    fn swap_buffers(&mut self);

    /// Cooperative shutdown flag, checked once per loop iteration.
    fn should_close(&self) -> bool;

    /// Current drawable size in pixels.
    fn viewport(&self) -> Viewport;
}
