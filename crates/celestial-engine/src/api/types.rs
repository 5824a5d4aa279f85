use bytemuck::{Pod, Zeroable};

/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// Handle to a loaded sprite image, issued by an `AssetLoader`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpriteId(pub u32);

/// Handle to a loaded audio clip, issued by an `AssetLoader`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClipId(pub u32);

/// A sound command emitted by game logic and forwarded to the sound player.
///
/// Plays are fire-and-forget: several one-shot plays of the same clip may
/// overlap, and nothing reports completion back to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCommand {
    Play { clip: ClipId, looping: bool },
    Stop { clip: ClipId },
    StopAll,
}

impl SoundCommand {
    /// Floats per command in the wire format: kind, clip.
    pub const FLOATS: usize = 2;

    pub const KIND_PLAY_ONCE: f32 = 1.0;
    pub const KIND_PLAY_LOOP: f32 = 2.0;
    pub const KIND_STOP: f32 = 3.0;
    pub const KIND_STOP_ALL: f32 = 4.0;

    /// Encode as `[kind, clip]` for the host.
    pub fn to_floats(self) -> [f32; 2] {
        match self {
            Self::Play { clip, looping: false } => [Self::KIND_PLAY_ONCE, clip.0 as f32],
            Self::Play { clip, looping: true } => [Self::KIND_PLAY_LOOP, clip.0 as f32],
            Self::Stop { clip } => [Self::KIND_STOP, clip.0 as f32],
            Self::StopAll => [Self::KIND_STOP_ALL, 0.0],
        }
    }
}

/// A game event communicated from Rust to the host page.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sound_commands_encode_kind_and_clip() {
        let once = SoundCommand::Play { clip: ClipId(3), looping: false };
        assert_eq!(once.to_floats(), [SoundCommand::KIND_PLAY_ONCE, 3.0]);

        let looped = SoundCommand::Play { clip: ClipId(9), looping: true };
        assert_eq!(looped.to_floats(), [SoundCommand::KIND_PLAY_LOOP, 9.0]);

        assert_eq!(SoundCommand::Stop { clip: ClipId(9) }.to_floats()[0], SoundCommand::KIND_STOP);
        assert_eq!(SoundCommand::StopAll.to_floats(), [SoundCommand::KIND_STOP_ALL, 0.0]);
    }

    #[test]
    fn game_event_is_four_floats() {
        assert_eq!(std::mem::size_of::<GameEvent>(), GameEvent::FLOATS * 4);
    }
}
