/// Straight-alpha RGBA color with byte channels.
///
/// Invariant:
/// - every channel is in `0..=255`; setters clamp out-of-range input rather
///   than rejecting it, so game logic can animate channels without bounds
///   checks.
///
/// Vertex data wants `[f32; 4]` in `[0, 1]`; use [`to_linear`](Self::to_linear).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self::opaque(255, 255, 255)
    }

    /// Creates a color from unclamped integer channels.
    ///
    /// Each channel is clamped to `0..=255` independently: `300` becomes
    /// `255`, `-5` becomes `0`.
    #[inline]
    pub fn from_i32(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
            a: clamp_channel(a),
        }
    }

    #[inline]
    pub fn set_r(&mut self, v: i32) {
        self.r = clamp_channel(v);
    }

    #[inline]
    pub fn set_g(&mut self, v: i32) {
        self.g = clamp_channel(v);
    }

    #[inline]
    pub fn set_b(&mut self, v: i32) {
        self.b = clamp_channel(v);
    }

    #[inline]
    pub fn set_a(&mut self, v: i32) {
        self.a = clamp_channel(v);
    }

    #[inline]
    pub fn r(self) -> u8 {
        self.r
    }

    #[inline]
    pub fn g(self) -> u8 {
        self.g
    }

    #[inline]
    pub fn b(self) -> u8 {
        self.b
    }

    #[inline]
    pub fn a(self) -> u8 {
        self.a
    }

    /// Returns the color as `[r, g, b, a]` floats in `[0, 1]`, the form the
    /// `color` vertex attribute expects.
    #[inline]
    pub fn to_linear(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

#[inline]
fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}
