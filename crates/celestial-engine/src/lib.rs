pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, SpriteId, ClipId, SoundCommand, GameEvent};
pub use components::entity::Entity;
pub use components::layer::RenderLayer;
pub use components::sprite::{SpriteComponent, PixelRect};
pub use core::scene::Scene;
pub use core::time::{FixedTimestep, FramePacer};
pub use core::frame_loop::{FrameLoop, FrameStatus, Host};
pub use renderer::canvas::{Canvas, Color};
pub use renderer::instance::{DrawSplit, RenderInstance, RenderBuffer};
pub use input::queue::{keys, InputEvent, InputQueue, PointerButton};
pub use assets::loader::AssetLoader;
pub use assets::manifest::{AssetManifest, ManifestLoader, SoundDescriptor, SpriteDescriptor};
pub use assets::image_loader::{prepare_sprite, ImageLoader, SpriteImage};
pub use bridge::protocol::ProtocolLayout;
pub use systems::audio::{dispatch_sounds, RecordingPlayer, SoundPlayer};
pub use systems::render::draw_scene;
pub use systems::vector::{VectorState, VectorVertex};
pub use error::EngineError;
