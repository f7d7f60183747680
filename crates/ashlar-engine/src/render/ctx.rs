/// Viewport size in physical pixels, as reported by the window collaborator.
///
/// Renderable producers divide pixel positions by these dimensions to reach
/// the `[0, 1]` clip-space range the base vertex shader expects.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}
