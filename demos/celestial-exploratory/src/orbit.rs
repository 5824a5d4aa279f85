//! Circular kinematic orbits. Pure math, no engine dependencies.
//!
//! f64 throughout: the angle only ever grows. Converted to f32 at the
//! screen step in game.rs.

use glam::DVec2;

/// Angular position of one orbiting body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    /// Radians. Never wrapped.
    pub angle: f64,
    /// Pixels from the central body.
    pub distance: f64,
    /// Relative period (Earth = 1). Must be > 0.
    pub period: f64,
}

impl Orbit {
    /// Start at angle 0 (due right of the central body).
    pub fn new(distance: f64, period: f64) -> Self {
        Self {
            angle: 0.0,
            distance,
            period,
        }
    }

    /// Radians gained per frame for a given angular step.
    pub fn angular_velocity(&self, step: f64) -> f64 {
        step / self.period
    }

    /// One frame of motion: `angle += step / period`.
    pub fn advance(&mut self, step: f64) {
        self.angle += self.angular_velocity(step);
    }

    /// Cartesian position around `center`.
    pub fn position(&self, center: DVec2) -> DVec2 {
        center + DVec2::from_angle(self.angle) * self.distance
    }

    /// Frames needed for one full revolution.
    pub fn frames_per_revolution(&self, step: f64) -> f64 {
        std::f64::consts::TAU / self.angular_velocity(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f64 = 0.05;
    const CENTER: DVec2 = DVec2::new(400.0, 390.0);

    #[test]
    fn starts_due_right() {
        let orbit = Orbit::new(125.0, 1.0);
        assert_eq!(orbit.position(CENTER), DVec2::new(525.0, 390.0));
    }

    #[test]
    fn ten_frames_of_earth() {
        let mut orbit = Orbit::new(125.0, 1.0);
        for _ in 0..10 {
            orbit.advance(STEP);
        }
        assert!((orbit.angle - 0.5).abs() < 1e-12);

        let pos = orbit.position(CENTER);
        assert!((pos.x - (400.0 + 125.0 * 0.5_f64.cos())).abs() < 1e-9);
        assert!((pos.y - (390.0 + 125.0 * 0.5_f64.sin())).abs() < 1e-9);
    }

    #[test]
    fn shorter_period_sweeps_faster() {
        let mut mercury = Orbit::new(65.0, 0.24);
        let mut earth = Orbit::new(125.0, 1.0);
        mercury.advance(STEP);
        earth.advance(STEP);
        assert!(mercury.angle > earth.angle);
        assert!((mercury.angle - STEP / 0.24).abs() < 1e-12);
    }

    #[test]
    fn stays_on_circle_without_wrapping() {
        let mut orbit = Orbit::new(65.0, 0.24);
        for _ in 0..100_000 {
            orbit.advance(STEP);
        }
        assert!(orbit.angle > std::f64::consts::TAU * 100.0);
        let r = (orbit.position(CENTER) - CENTER).length();
        assert!((r - 65.0).abs() < 1e-9);
    }

    #[test]
    fn revolution_length() {
        let earth = Orbit::new(125.0, 1.0);
        assert!((earth.frames_per_revolution(STEP) - std::f64::consts::TAU / STEP).abs() < 1e-9);
    }
}
