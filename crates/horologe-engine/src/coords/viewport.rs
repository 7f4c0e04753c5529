use super::Vec2;

/// Viewport size in logical pixels, supplied by the host on every draw pass.
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
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Length of the shorter side.
    #[inline]
    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_negative_sizes_are_invalid() {
        assert!(!Viewport::new(0.0, 100.0).is_valid());
        assert!(!Viewport::new(100.0, 0.0).is_valid());
        assert!(!Viewport::new(-1.0, 100.0).is_valid());
        assert!(!Viewport::new(f32::INFINITY, 100.0).is_valid());
        assert!(!Viewport::new(f32::NAN, 100.0).is_valid());
    }

    #[test]
    fn center_and_min_side() {
        let v = Viewport::new(400.0, 300.0);
        assert!(v.is_valid());
        assert_eq!(v.center(), Vec2::new(200.0, 150.0));
        assert_eq!(v.min_side(), 300.0);
    }
}
