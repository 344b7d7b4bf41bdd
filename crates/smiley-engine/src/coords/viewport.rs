use crate::math::Vector2;

/// Drawable size in pixels (the shader's `resolution` uniform).
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

    #[inline]
    pub fn center(self) -> Vector2 {
        Vector2::new(self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.width, self.height]
    }

    /// Maps a pixel position to clip space: `p / resolution * 2 - 1`, Y negated.
    pub fn to_clip(self, p: Vector2) -> Vector2 {
        let zero_to_one = Vector2::new(p.x / self.width, p.y / self.height);
        let clip = zero_to_one * 2.0 - Vector2::splat(1.0);
        Vector2::new(clip.x, -clip.y)
    }
}
