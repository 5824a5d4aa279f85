use crate::api::types::{ClipId, EntityId, GameEvent, SoundCommand};
use crate::assets::loader::AssetLoader;
use crate::core::scene::Scene;
use crate::error::EngineError;
use crate::input::queue::InputQueue;
use crate::renderer::canvas::Canvas;
use crate::systems::render::draw_scene;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Canvas width in pixels.
    pub world_width: f32,
    /// Canvas height in pixels.
    pub world_height: f32,
    /// Maximum number of sprite blits per frame (default: 64).
    pub max_instances: usize,
    /// Maximum number of tessellated line vertices per frame (default: 262144).
    pub max_vector_vertices: usize,
    /// Maximum number of sound commands per frame (default: 32).
    pub max_sounds: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 800.0,
            max_instances: 64,
            max_vector_vertices: 262_144,
            max_sounds: 32,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Load assets, spawn entities, configure the scene.
    /// An error here is fatal: the frame loop never starts.
    fn init(&mut self, ctx: &mut EngineContext, assets: &mut dyn AssetLoader) -> Result<(), EngineError>;

    /// One frame of game logic. `input` holds this frame's events in arrival order.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Issue draw commands for the frame. The frame loop presents afterwards.
    fn render(&self, ctx: &EngineContext, canvas: &mut dyn Canvas) {
        draw_scene(&ctx.scene, canvas);
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub sounds: Vec<SoundCommand>,
    pub events: Vec<GameEvent>,
    /// Descriptive text for the output channel (console/log, not the canvas).
    pub messages: Vec<String>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            sounds: Vec::new(),
            events: Vec::new(),
            messages: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Play a clip once. Overlaps any earlier play of the same clip.
    pub fn play_sound(&mut self, clip: ClipId) {
        self.sounds.push(SoundCommand::Play { clip, looping: false });
    }

    /// Play a clip on an infinite loop.
    pub fn loop_sound(&mut self, clip: ClipId) {
        self.sounds.push(SoundCommand::Play { clip, looping: true });
    }

    pub fn stop_sound(&mut self, clip: ClipId) {
        self.sounds.push(SoundCommand::Stop { clip });
    }

    /// Emit a game event to be forwarded to the host page.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Queue text for the output channel.
    pub fn say(&mut self, text: impl Into<String>) {
        self.messages.push(text.into());
    }

    /// Clear per-frame transient data (sounds, events, messages).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
        self.messages.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
