/// Edge length, in CSS pixels, of the decorative element trailing the pointer.
pub const DEFAULT_FOLLOWER_SIZE: f64 = 96.0;

/// Last observed pointer location in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Top-left offset that centres a square of `size` on the pointer.
    pub fn follower_offset(&self, size: f64) -> (f64, f64) {
        let half = size / 2.0;
        (self.x - half, self.y - half)
    }

    /// CSS `transform` value placing the follower.
    pub fn follower_transform(&self, size: f64) -> String {
        let (left, top) = self.follower_offset(size);
        format!("translate({left}px, {top}px)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin() {
        let pos = PointerPosition::default();
        assert_eq!(pos, PointerPosition::new(0.0, 0.0));
        assert_eq!(pos.follower_offset(DEFAULT_FOLLOWER_SIZE), (-48.0, -48.0));
    }

    #[test]
    fn follower_is_centred_on_pointer() {
        let pos = PointerPosition::new(300.0, 120.5);
        assert_eq!(pos.follower_offset(96.0), (252.0, 72.5));
        assert_eq!(pos.follower_transform(96.0), "translate(252px, 72.5px)");
    }
}
