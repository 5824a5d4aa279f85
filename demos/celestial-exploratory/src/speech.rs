//! What each body says about itself when clicked.

use std::collections::HashMap;

use celestial_engine::EngineError;

const SUN: &str = "I am the Sun, the heart of the Solar System, a massive sphere of plasma radiating light and heat. My gravitational pull holds the planets in their orbits, and my energy supports life on Earth. I am a constant, unyielding force, burning brightly at the center of it all.";

const MERCURY: &str = "As Mercury, I am the swift messenger of the Solar System, tracing a graceful path around the Sun in a dance of extremes. My surface is a testament to cosmic violence, scarred by countless impacts yet holding secrets of the universe's infancy. Days scorch under unrelenting sunlight, while nights freeze in eternal darkness. My iron heart beats faintly, a core generating a feeble magnetic shield against the Sun's tempestuous winds. Though small, I embody resilience and endurance, a silent witness to the grandeur and harshness of the cosmic stage around me.";

const VENUS: &str = "As Venus, I am cloaked in a veil of perpetual mystery and beauty. Swathed in thick clouds of sulfuric acid, I reflect sunlight with a serene radiance visible even from Earth. My surface is a tumultuous landscape of volcanic plains and towering mountains, shaped by ancient cataclysms. A runaway greenhouse effect envelopes me in searing heat, making me the hottest planet in the Solar System. Yet amidst this hostile environment, I harbor secrets of potential past oceans and atmospheric evolution. I am a planet of contrasts, both enchanting and forbidding, a celestial enigma awaiting further exploration and understanding.";

const EARTH: &str = "As Earth, I am a blue jewel in the vastness of space, adorned with swirling oceans, verdant landscapes, and towering mountains. My atmosphere is a delicate shield, nurturing life with a perfect balance of gases. From space, I appear serene yet dynamic, with weather systems sculpting my surface and shaping climates. I am home to a rich tapestry of life forms, from the depths of oceans to the heights of mountains. Humanity has flourished on my surface, building civilizations, exploring my wonders, and contemplating the mysteries of the cosmos. I am a planet of diversity, beauty, and interconnected ecosystems: a precious oasis in the cosmos.";

const MARS: &str = "As Mars, I am the red planet, a world of striking contrasts and ancient wonders. My rusty surface bears the scars of colossal volcanoes, deep canyons like Valles Marineris, and the remnants of vast, dry riverbeds. Dusty winds sweep across my barren landscapes, shaping dunes and painting the skies with hues of ochre. At my poles, caps of ice shimmer beneath thin atmospheres. I am a planet of exploration, where rovers traverse rocky terrain, seeking clues to my watery past and potential for life. Mars, the frontier of human ambition and scientific inquiry, a testament to the enduring spirit of exploration.";

const JUPITER: &str = "As Jupiter, I am the colossal giant of the Solar System, a swirling mass of clouds and storms. My Great Red Spot, a tempest that has raged for centuries, is a symbol of my dynamic atmosphere. Bands of clouds stretch across my vast expanse, while moons like Io and Europa orbit in a dance of gravity. I am a planet of extremes, with crushing pressures and intense magnetic fields. Jupiter, the king of planets, a majestic guardian of the outer Solar System: a realm of mystery and wonder.";

const SATURN: &str = "As Saturn, I am the elegant giant adorned with a crown of rings, a mesmerizing spectacle in the night sky. My rings, composed of countless icy particles, shimmer like cosmic jewels. Titan, my largest moon, hides beneath a thick atmosphere, while Enceladus spews geysers of water into space. I am a planet of grandeur, second in size only to Jupiter, with a composition of hydrogen and helium. Saturn, the ringed jewel of the Solar System: a planet of beauty, mystery, and scientific fascination.";

const URANUS: &str = "As Uranus, I am the icy giant of the Solar System, a world tilted on its side with a faint ring system and a host of icy moons. My atmosphere is composed mainly of hydrogen and helium, with traces of methane giving me a pale blue hue. Despite my frigid temperatures, I possess a dynamic atmosphere with winds and cloud patterns. I am unique among the planets, rotating on my side like a rolling ball through space, likely due to a cataclysmic collision in the ancient past. Uranus, the enigmatic ice giant: a planet of curiosity and intrigue, awaiting further exploration and understanding.";

const NEPTUNE: &str = "As Neptune, I am the distant blue giant of the Solar System, a world of frigid temperatures, turbulent storms, and a mysterious dark spot. My atmosphere is composed mainly of hydrogen, helium, and methane, giving me a vivid blue hue. Winds race through my atmosphere, creating dark storms like the Great Dark Spot, a swirling vortex larger than Earth. I am a planet of extremes, with temperatures plunging to icy depths yet harboring dynamic weather patterns. Neptune, the blue jewel of the outer Solar System: a planet of mystery and scientific discovery, beckoning explorers to unveil its secrets.";

/// Immutable name → text lookup.
#[derive(Debug, Clone)]
pub struct SpeechCatalog {
    entries: HashMap<&'static str, &'static str>,
}

impl SpeechCatalog {
    /// Texts for the Sun and the eight planets.
    pub fn builtin() -> Self {
        Self::from_entries([
            ("Sun", SUN),
            ("Mercury", MERCURY),
            ("Venus", VENUS),
            ("Earth", EARTH),
            ("Mars", MARS),
            ("Jupiter", JUPITER),
            ("Saturn", SATURN),
            ("Uranus", URANUS),
            ("Neptune", NEPTUNE),
        ])
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (&'static str, &'static str)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.entries.get(name).copied()
    }

    /// Text for `name`, or `MissingSpeech` if the body has none.
    pub fn text_for(&self, name: &str) -> Result<&'static str, EngineError> {
        self.get(name).ok_or_else(|| EngineError::MissingSpeech { name: name.to_string() })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SpeechCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
