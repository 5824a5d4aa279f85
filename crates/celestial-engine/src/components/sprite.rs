use glam::Vec2;

use crate::api::types::SpriteId;

/// A loaded image drawn at a fixed pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteComponent {
    /// Handle issued by the asset loader.
    pub id: SpriteId,
    /// Rendered width in pixels.
    pub width: u32,
    /// Rendered height in pixels.
    pub height: u32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl SpriteComponent {
    pub fn new(id: SpriteId, width: u32, height: u32) -> Self {
        Self {
            id,
            width,
            height,
            alpha: 1.0,
        }
    }

    /// Bounding rectangle when the sprite is centred on `center`.
    pub fn rect_at(&self, center: Vec2) -> PixelRect {
        PixelRect::centered_on(center, self.width, self.height)
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self::new(SpriteId(0), 1, 1)
    }
}

/// Integer pixel rectangle with half-open extents.
///
/// Centering truncates the centre to whole pixels and puts the odd pixel of
/// an odd-sized sprite on the right/bottom, so a 15 px sprite centred on
/// x = 100 spans 93..108.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn centered_on(center: Vec2, width: u32, height: u32) -> Self {
        let cx = center.x as i32;
        let cy = center.y as i32;
        Self {
            left: cx - (width / 2) as i32,
            top: cy - (height / 2) as i32,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.left + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height as i32
    }

    /// Top-left corner as canvas coordinates.
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.left as f32, self.top as f32)
    }

    /// Whether a pointer position falls inside. The point is floored to its pixel.
    pub fn contains(&self, point: Vec2) -> bool {
        let px = point.x.floor() as i32;
        let py = point.y.floor() as i32;
        px >= self.left && px < self.right() && py >= self.top && py < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_sprite_is_centred_exactly() {
        let rect = PixelRect::centered_on(Vec2::new(400.0, 390.0), 80, 80);
        assert_eq!(rect.left, 360);
        assert_eq!(rect.top, 350);
        assert_eq!(rect.right(), 440);
        assert_eq!(rect.bottom(), 430);
    }

    #[test]
    fn odd_sprite_puts_extra_pixel_right() {
        let rect = PixelRect::centered_on(Vec2::new(100.9, 50.2), 15, 15);
        assert_eq!(rect.left, 93);
        assert_eq!(rect.right(), 108);
        assert_eq!(rect.top, 43);
    }

    #[test]
    fn contains_is_half_open() {
        let rect = PixelRect::centered_on(Vec2::new(10.0, 10.0), 4, 4);
        assert!(rect.contains(Vec2::new(8.0, 8.0)));
        assert!(rect.contains(Vec2::new(11.9, 11.9)));
        assert!(!rect.contains(Vec2::new(12.0, 10.0)));
        assert!(!rect.contains(Vec2::new(10.0, 7.5)));
    }

    #[test]
    fn non_square_sprite_rect() {
        let sprite = SpriteComponent::new(SpriteId(6), 100, 40);
        let rect = sprite.rect_at(Vec2::new(660.0, 390.0));
        assert_eq!(rect.top_left(), Vec2::new(610.0, 370.0));
        assert!(rect.contains(Vec2::new(700.0, 400.0)));
        assert!(!rect.contains(Vec2::new(660.0, 411.0)));
    }
}
