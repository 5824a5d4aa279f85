//! Body registry: the Sun and the eight planets, in hit-test order.
//!
//! Distances are screen pixels from the Sun. Periods are relative to
//! Earth's (Earth = 1), so inner planets sweep faster.

use std::collections::HashSet;

use celestial_engine::EngineError;

/// How a body moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyKind {
    /// Fixed for the whole session.
    Central { x: f64, y: f64 },
    /// Circular orbit around the central body.
    Orbiting { distance: f64, period: f64 },
}

/// Static definition of one body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyDef {
    /// Unique display name; also the speech catalog key.
    pub name: &'static str,
    /// Image file inside the asset directory.
    pub image: &'static str,
    /// Click sound file inside the sound directory.
    pub sound: &'static str,
    /// Sprite size in pixels.
    pub width: u32,
    pub height: u32,
    /// Display radius. Not used for motion or hit-testing.
    pub radius: f32,
    pub kind: BodyKind,
}

impl BodyDef {
    pub const fn central(name: &'static str, image: &'static str, sound: &'static str, size: (u32, u32), radius: f32, at: (f64, f64)) -> Self {
        Self {
            name,
            image,
            sound,
            width: size.0,
            height: size.1,
            radius,
            kind: BodyKind::Central { x: at.0, y: at.1 },
        }
    }

    pub const fn orbiting(name: &'static str, image: &'static str, sound: &'static str, size: (u32, u32), radius: f32, distance: f64, period: f64) -> Self {
        Self {
            name,
            image,
            sound,
            width: size.0,
            height: size.1,
            radius,
            kind: BodyKind::Orbiting { distance, period },
        }
    }

    pub fn is_central(&self) -> bool {
        matches!(self.kind, BodyKind::Central { .. })
    }
}

// ── Backdrop and ambience ────────────────────────────────────────────

pub const BACKGROUND_IMAGE: &str = "space.png";
pub const BACKGROUND_SIZE: (u32, u32) = (800, 800);
pub const AMBIENT_SOUND: &str = "universe_sound.mp3";

// ── Registry ─────────────────────────────────────────────────────────

pub const SUN_POSITION: (f64, f64) = (400.0, 390.0);

/// Central body first, then planets outward.
pub fn registry() -> Vec<BodyDef> {
    vec![
        BodyDef::central("Sun", "sun.png", "sun_sound.mp3", (80, 80), 200.0, SUN_POSITION),
        BodyDef::orbiting("Mercury", "mercury.png", "mercury_sound.mp3", (15, 15), 10.0, 65.0, 0.24),
        BodyDef::orbiting("Venus", "venus.png", "venus_sound.mp3", (25, 25), 20.0, 90.0, 0.62),
        BodyDef::orbiting("Earth", "earth.png", "earth_sound.mp3", (30, 30), 25.0, 125.0, 1.0),
        BodyDef::orbiting("Mars", "mars.png", "mars_sound.mp3", (20, 20), 15.0, 155.0, 1.88),
        BodyDef::orbiting("Jupiter", "jupiter.png", "jupiter_sound.mp3", (50, 50), 45.0, 195.0, 11.86),
        // Ringed sprite, hence the wide box.
        BodyDef::orbiting("Saturn", "saturn_ring.png", "saturn_sound.mp3", (100, 40), 40.0, 260.0, 29.5),
        BodyDef::orbiting("Uranus", "uranus.png", "uranus_sound.mp3", (35, 35), 30.0, 320.0, 84.0),
        BodyDef::orbiting("Neptune", "neptune.png", "neptune_sound.mp3", (40, 40), 35.0, 370.0, 164.8),
    ]
}

/// Check registry invariants: exactly one central body and it comes first,
/// unique non-empty names, non-zero sprite sizes, finite non-negative
/// distances, finite positive periods.
pub fn validate(bodies: &[BodyDef]) -> Result<(), EngineError> {
    let first = bodies
        .first()
        .ok_or_else(|| EngineError::invalid_body("<registry>", "no bodies defined"))?;
    if !first.is_central() {
        return Err(EngineError::invalid_body(first.name, "central body must come first"));
    }

    let mut names = HashSet::with_capacity(bodies.len());
    for (index, body) in bodies.iter().enumerate() {
        if body.name.is_empty() {
            return Err(EngineError::invalid_body(format!("#{index}"), "name is empty"));
        }
        if !names.insert(body.name) {
            return Err(EngineError::invalid_body(body.name, "duplicate name"));
        }
        if body.width == 0 || body.height == 0 {
            return Err(EngineError::invalid_body(body.name, "sprite size must be non-zero"));
        }
        match body.kind {
            BodyKind::Central { x, y } => {
                if index != 0 {
                    return Err(EngineError::invalid_body(body.name, "only one central body allowed"));
                }
                if !x.is_finite() || !y.is_finite() {
                    return Err(EngineError::invalid_body(body.name, "position must be finite"));
                }
            }
            BodyKind::Orbiting { distance, period } => {
                if !distance.is_finite() || distance < 0.0 {
                    return Err(EngineError::invalid_body(body.name, format!("distance {distance} must be >= 0")));
                }
                if !period.is_finite() || period <= 0.0 {
                    return Err(EngineError::invalid_body(body.name, format!("period {period} must be > 0")));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_is_valid() {
        let bodies = registry();
        assert_eq!(bodies.len(), 9);
        assert!(validate(&bodies).is_ok());
        assert_eq!(bodies[0].name, "Sun");
        assert_eq!(bodies[6].name, "Saturn");
        assert_eq!((bodies[6].width, bodies[6].height), (100, 40));
    }

    #[test]
    fn periods_grow_outward() {
        let periods: Vec<f64> = registry()
            .iter()
            .filter_map(|b| match b.kind {
                BodyKind::Orbiting { period, .. } => Some(period),
                BodyKind::Central { .. } => None,
            })
            .collect();
        assert_eq!(periods.len(), 8);
        assert!(periods.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rejects_non_positive_period() {
        let mut bodies = registry();
        bodies[3].kind = BodyKind::Orbiting { distance: 125.0, period: 0.0 };
        let err = validate(&bodies).unwrap_err();
        assert!(err.to_string().contains("Earth"));

        bodies[3].kind = BodyKind::Orbiting { distance: 125.0, period: f64::NAN };
        assert!(validate(&bodies).is_err());
    }

    #[test]
    fn rejects_bad_ordering_and_duplicates() {
        let mut bodies = registry();
        bodies.swap(0, 1);
        assert!(validate(&bodies).is_err());

        let mut bodies = registry();
        bodies[2].name = "Mercury";
        assert!(validate(&bodies).unwrap_err().to_string().contains("duplicate"));

        let mut bodies = registry();
        bodies.push(BodyDef::central("Sun2", "sun.png", "sun_sound.mp3", (10, 10), 1.0, (0.0, 0.0)));
        assert!(validate(&bodies).is_err());

        assert!(validate(&[]).is_err());
    }

    #[test]
    fn rejects_negative_distance_and_empty_sprite() {
        let mut bodies = registry();
        bodies[1].kind = BodyKind::Orbiting { distance: -1.0, period: 0.24 };
        assert!(validate(&bodies).is_err());

        let mut bodies = registry();
        bodies[1].width = 0;
        assert!(validate(&bodies).is_err());
    }
}
