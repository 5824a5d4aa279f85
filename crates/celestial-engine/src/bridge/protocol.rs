//! Shared buffer layout between the engine and the host renderer.
//! Must stay in sync with the host's protocol reader.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Instances: max_instances × 8 floats]
//! [Vector vertices: max_vector_vertices × 6 floats]
//! [Sounds: max_sounds × 2 floats]
//! [Events: max_events × 4 floats]
//! ```
//!
//! Capacities are written once into the header at init.
//! The host reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;
use crate::api::types::{GameEvent, SoundCommand};
use crate::renderer::instance::RenderInstance;
use crate::systems::vector::VectorVertex;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_MAX_VECTOR_VERTICES: usize = 4;
pub const HEADER_VECTOR_VERTEX_COUNT: usize = 5;
pub const HEADER_WORLD_WIDTH: usize = 6;
pub const HEADER_WORLD_HEIGHT: usize = 7;
pub const HEADER_MAX_SOUNDS: usize = 8;
pub const HEADER_SOUND_COUNT: usize = 9;
pub const HEADER_MAX_EVENTS: usize = 10;
pub const HEADER_EVENT_COUNT: usize = 11;
pub const HEADER_PROTOCOL_VERSION: usize = 12;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_vector_vertices: usize,
    pub max_sounds: usize,
    pub max_events: usize,

    /// Size of instance data section in floats.
    pub instance_data_floats: usize,
    /// Size of vector data section in floats.
    pub vector_data_floats: usize,
    /// Size of sound data section in floats.
    pub sound_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where vector data begins.
    pub vector_data_offset: usize,
    /// Offset (in floats) where sound data begins.
    pub sound_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_vector_vertices: usize, max_sounds: usize, max_events: usize) -> Self {
        let instance_data_floats = max_instances * RenderInstance::FLOATS;
        let vector_data_floats = max_vector_vertices * VectorVertex::FLOATS;
        let sound_data_floats = max_sounds * SoundCommand::FLOATS;
        let event_data_floats = max_events * GameEvent::FLOATS;

        let instance_data_offset = HEADER_FLOATS;
        let vector_data_offset = instance_data_offset + instance_data_floats;
        let sound_data_offset = vector_data_offset + vector_data_floats;
        let event_data_offset = sound_data_offset + sound_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_instances,
            max_vector_vertices,
            max_sounds,
            max_events,
            instance_data_floats,
            vector_data_floats,
            sound_data_floats,
            event_data_floats,
            instance_data_offset,
            vector_data_offset,
            sound_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_instances,
            config.max_vector_vertices,
            config.max_sounds,
            config.max_events,
        )
    }

    /// Header with capacities and world size filled in; counts start at zero.
    pub fn header(&self, config: &GameConfig) -> [f32; HEADER_FLOATS] {
        let mut header = [0.0; HEADER_FLOATS];
        header[HEADER_MAX_INSTANCES] = self.max_instances as f32;
        header[HEADER_MAX_VECTOR_VERTICES] = self.max_vector_vertices as f32;
        header[HEADER_WORLD_WIDTH] = config.world_width;
        header[HEADER_WORLD_HEIGHT] = config.world_height;
        header[HEADER_MAX_SOUNDS] = self.max_sounds as f32;
        header[HEADER_MAX_EVENTS] = self.max_events as f32;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());

        assert_eq!(layout.max_instances, 64);
        assert_eq!(layout.max_vector_vertices, 262_144);
        assert_eq!(layout.sound_data_floats, 32 * 2);
        assert_eq!(layout.event_data_floats, 32 * 4);
        assert_eq!(layout.instance_data_offset, HEADER_FLOATS);
        assert_eq!(layout.vector_data_offset, HEADER_FLOATS + 64 * 8);
    }

    #[test]
    fn custom_capacities_compute_correctly() {
        let layout = ProtocolLayout::new(16, 1000, 8, 4);
        let expected_total = HEADER_FLOATS + 16 * 8 + 1000 * 6 + 8 * 2 + 4 * 4;
        assert_eq!(layout.buffer_total_floats, expected_total);
        assert_eq!(layout.buffer_total_bytes, expected_total * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(100, 200, 10, 20);

        assert_eq!(layout.vector_data_offset, layout.instance_data_offset + layout.instance_data_floats);
        assert_eq!(layout.sound_data_offset, layout.vector_data_offset + layout.vector_data_floats);
        assert_eq!(layout.event_data_offset, layout.sound_data_offset + layout.sound_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.event_data_offset + layout.event_data_floats);
    }

    #[test]
    fn header_carries_capacities() {
        let config = GameConfig::default();
        let layout = ProtocolLayout::from_config(&config);
        let header = layout.header(&config);
        assert_eq!(header[HEADER_MAX_INSTANCES], 64.0);
        assert_eq!(header[HEADER_WORLD_WIDTH], 800.0);
        assert_eq!(header[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(header[HEADER_INSTANCE_COUNT], 0.0);
    }
}
