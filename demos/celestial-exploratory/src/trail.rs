//! Recent-path history for one orbiting body.

use std::collections::VecDeque;

use celestial_engine::{Canvas, Color};
use glam::Vec2;

use crate::orbit::Orbit;

/// Bounded ring buffer of screen positions, oldest first.
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl Trail {
    /// Capacity is clamped to at least 2 so a trail can always draw a segment.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(2);
        Self {
            points: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Enough samples to close one revolution, but never more than `max_samples`.
    pub fn for_orbit(orbit: &Orbit, step: f64, max_samples: usize) -> Self {
        let revolution = orbit.frames_per_revolution(step).ceil();
        let needed = if revolution.is_finite() && revolution < max_samples as f64 {
            revolution as usize + 1
        } else {
            max_samples
        };
        Self::with_capacity(needed.min(max_samples))
    }

    /// Append a sample, evicting the oldest once full.
    pub fn record(&mut self, point: Vec2) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    pub fn latest(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    /// One segment per consecutive pair of samples.
    pub fn draw(&self, canvas: &mut dyn Canvas, color: Color, width: f32) {
        let (head, tail) = self.points.as_slices();
        canvas.draw_polyline(head, color, width);
        if let (Some(&last), Some(&first)) = (head.last(), tail.first()) {
            canvas.draw_line(last, first, color, width);
        }
        canvas.draw_polyline(tail, color, width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_engine::SpriteComponent;

    #[derive(Default)]
    struct LineLog {
        lines: Vec<(Vec2, Vec2)>,
    }

    impl Canvas for LineLog {
        fn blit(&mut self, _sprite: &SpriteComponent, _top_left: Vec2) {}
        fn draw_line(&mut self, from: Vec2, to: Vec2, _color: Color, _width: f32) {
            self.lines.push((from, to));
        }
        fn present(&mut self) {}
    }

    fn pt(x: f32) -> Vec2 {
        Vec2::new(x, 0.0)
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut trail = Trail::with_capacity(3);
        for x in 0..5 {
            trail.record(pt(x as f32));
        }
        assert_eq!(trail.len(), 3);
        assert_eq!(trail.points().collect::<Vec<_>>(), vec![pt(2.0), pt(3.0), pt(4.0)]);
        assert_eq!(trail.latest(), Some(pt(4.0)));
    }

    #[test]
    fn draws_one_segment_per_pair_across_wraparound() {
        let mut trail = Trail::with_capacity(4);
        // Force the deque to wrap so samples span both slices.
        for x in 0..7 {
            trail.record(pt(x as f32));
        }
        let mut canvas = LineLog::default();
        trail.draw(&mut canvas, Color::YELLOW, 1.0);
        assert_eq!(
            canvas.lines,
            vec![(pt(3.0), pt(4.0)), (pt(4.0), pt(5.0)), (pt(5.0), pt(6.0))]
        );
    }

    #[test]
    fn single_sample_draws_nothing() {
        let mut trail = Trail::with_capacity(8);
        trail.record(pt(1.0));
        let mut canvas = LineLog::default();
        trail.draw(&mut canvas, Color::YELLOW, 1.0);
        assert!(canvas.lines.is_empty());
    }

    #[test]
    fn capacity_covers_one_revolution() {
        // Mercury: 2π·0.24/0.05 ≈ 30.2 frames per revolution.
        let mercury = Trail::for_orbit(&Orbit::new(65.0, 0.24), 0.05, 4096);
        assert_eq!(mercury.capacity(), 32);

        let neptune = Trail::for_orbit(&Orbit::new(370.0, 164.8), 0.05, 4096);
        assert_eq!(neptune.capacity(), 4096);
    }
}
