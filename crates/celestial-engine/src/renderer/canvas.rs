//! Canvas contract for draw commands.
//!
//! The engine never rasterizes. Games issue blits and lines against a
//! `Canvas`; a host turns them into pixels (WebGPU/Canvas2D in the browser,
//! a recording canvas in tests) and shows the result on `present()`.

use glam::Vec2;

use crate::components::sprite::SpriteComponent;

/// RGBA color for draw operations, components in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Fully opaque color from RGB u8 values (0-255).
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 255)
    }

    /// Color from RGBA u8 values (0-255).
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Draw target for one frame.
///
/// Commands accumulate until `present()`, which makes the frame visible.
/// A canvas that receives no commands between two presents keeps showing
/// the previous frame.
pub trait Canvas {
    /// Draw a sprite with its top-left corner at `top_left` (canvas pixels).
    fn blit(&mut self, sprite: &SpriteComponent, top_left: Vec2);

    /// Draw a straight line segment.
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);

    /// Draw connected segments through `points`. Fewer than two points draw nothing.
    fn draw_polyline(&mut self, points: &[Vec2], color: Color, width: f32) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], color, width);
        }
    }

    /// Show everything drawn since the last present.
    fn present(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::SpriteId;

    #[derive(Default)]
    struct LineCounter {
        lines: Vec<(Vec2, Vec2)>,
        presents: u32,
    }

    impl Canvas for LineCounter {
        fn blit(&mut self, _sprite: &SpriteComponent, _top_left: Vec2) {}

        fn draw_line(&mut self, from: Vec2, to: Vec2, _color: Color, _width: f32) {
            self.lines.push((from, to));
        }

        fn present(&mut self) {
            self.presents += 1;
        }
    }

    #[test]
    fn rgb8_maps_to_unit_range() {
        let c = Color::rgb8(153, 153, 0);
        assert!((c.r - 0.6).abs() < 1e-6);
        assert!((c.g - 0.6).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
        assert_eq!(Color::YELLOW.with_alpha(0.5).a, 0.5);
    }

    #[test]
    fn polyline_draws_one_segment_per_pair() {
        let mut canvas = LineCounter::default();
        let points = [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y];
        canvas.draw_polyline(&points, Color::WHITE, 1.0);
        assert_eq!(canvas.lines.len(), 3);
        assert_eq!(canvas.lines[2], (Vec2::ONE, Vec2::Y));

        canvas.draw_polyline(&points[..1], Color::WHITE, 1.0);
        assert_eq!(canvas.lines.len(), 3);

        canvas.blit(&SpriteComponent::new(SpriteId(0), 4, 4), Vec2::ZERO);
        canvas.present();
        assert_eq!(canvas.presents, 1);
    }
}
