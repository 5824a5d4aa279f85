use celestial_engine::bridge::protocol::{
    HEADER_EVENT_COUNT, HEADER_FLOATS, HEADER_FRAME_COUNTER, HEADER_INSTANCE_COUNT, HEADER_SOUND_COUNT,
    HEADER_VECTOR_VERTEX_COUNT,
};
use celestial_engine::{
    AssetManifest, Canvas, ClipId, EngineError, FixedTimestep, FrameLoop, FrameStatus, Game, GameConfig,
    GameEvent, Host, InputEvent, InputQueue, ManifestLoader, ProtocolLayout, RenderBuffer, SoundCommand,
    SoundPlayer,
};

/// Sound player that packs commands as `[kind, clip]` float pairs for the page.
struct PackedSounds {
    floats: Vec<f32>,
    max: usize,
}

impl PackedSounds {
    fn push(&mut self, command: SoundCommand) {
        if self.floats.len() / SoundCommand::FLOATS >= self.max {
            log::warn!("sound buffer full, dropping {command:?}");
            return;
        }
        self.floats.extend_from_slice(&command.to_floats());
    }
}

impl SoundPlayer for PackedSounds {
    fn play(&mut self, clip: ClipId, looping: bool) {
        self.push(SoundCommand::Play { clip, looping });
    }

    fn stop(&mut self, clip: ClipId) {
        self.push(SoundCommand::Stop { clip });
    }

    fn stop_all(&mut self) {
        self.push(SoundCommand::StopAll);
    }
}

/// The browser side of the frame loop. Everything it receives is buffered
/// until the page reads it after `game_tick`.
pub struct WebHost {
    pending: Vec<InputEvent>,
    render_buffer: RenderBuffer,
    sounds: PackedSounds,
    events: Vec<GameEvent>,
    max_events: usize,
    messages: Vec<String>,
    released: bool,
}

impl WebHost {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pending: Vec::new(),
            render_buffer: RenderBuffer::new(config.max_instances, config.max_vector_vertices),
            sounds: PackedSounds {
                floats: Vec::with_capacity(config.max_sounds * SoundCommand::FLOATS),
                max: config.max_sounds,
            },
            events: Vec::with_capacity(config.max_events),
            max_events: config.max_events,
            messages: Vec::new(),
            released: false,
        }
    }

    /// Per-tick outputs start empty; text stays queued until taken.
    fn begin_tick(&mut self) {
        self.sounds.floats.clear();
        self.events.clear();
    }
}

impl Host for WebHost {
    fn poll_events(&mut self, input: &mut InputQueue) {
        input.extend(self.pending.drain(..));
    }

    fn canvas(&mut self) -> &mut dyn Canvas {
        &mut self.render_buffer
    }

    fn sound_player(&mut self) -> &mut dyn SoundPlayer {
        &mut self.sounds
    }

    fn write_text(&mut self, text: &str) {
        log::info!(target: "speech", "{text}");
        self.messages.push(text.to_string());
    }

    fn forward_events(&mut self, events: &[GameEvent]) {
        let room = self.max_events.saturating_sub(self.events.len());
        if events.len() > room {
            log::warn!("event buffer full, dropping {} events", events.len() - room);
        }
        self.events.extend(events.iter().take(room));
    }

    fn shutdown(&mut self) {
        self.released = true;
    }
}

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    frame_loop: FrameLoop<G>,
    host: WebHost,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    header: [f32; HEADER_FLOATS],
    manifest: AssetManifest,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let frame_loop = FrameLoop::new(game);
        let config = frame_loop.config().clone();
        let layout = ProtocolLayout::from_config(&config);

        Self {
            host: WebHost::new(&config),
            timestep: FixedTimestep::new(config.fixed_dt),
            header: layout.header(&config),
            layout,
            config,
            frame_loop,
            manifest: AssetManifest::default(),
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    /// Assets are registered, not fetched: the page loads them from the manifest.
    pub fn init(&mut self) -> Result<(), EngineError> {
        let mut loader = ManifestLoader::new();
        self.frame_loop.init(&mut loader)?;
        self.manifest = loader.into_manifest();
        log::info!(
            "registered {} sprites and {} sounds",
            self.manifest.sprites.len(),
            self.manifest.sounds.len()
        );
        self.initialized = true;
        Ok(())
    }

    /// Push an input event into the queue. It is handled by the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.host.pending.push(event);
    }

    /// Advance by `dt` seconds of wall time: run 0 or more fixed frames.
    /// Pending input goes to the first of them.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized || self.frame_loop.is_finished() {
            return;
        }

        self.host.begin_tick();
        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            if self.frame_loop.step(&mut self.host) == FrameStatus::Quit {
                self.frame_loop.shutdown(&mut self.host);
                log::info!("game finished");
                break;
            }
        }
        self.write_header();
    }

    fn write_header(&mut self) {
        self.header[HEADER_FRAME_COUNTER] = self.host.render_buffer.frame() as f32;
        self.header[HEADER_INSTANCE_COUNT] = self.host.render_buffer.instance_count() as f32;
        self.header[HEADER_VECTOR_VERTEX_COUNT] = self.host.render_buffer.vertex_count() as f32;
        self.header[HEADER_SOUND_COUNT] = self.sound_count() as f32;
        self.header[HEADER_EVENT_COUNT] = self.host.events.len() as f32;
    }

    /// Text emitted since the last call.
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.host.messages)
    }

    /// JSON asset manifest for the page.
    pub fn manifest_json(&self) -> String {
        match self.manifest.to_json() {
            Ok(json) => json,
            Err(err) => {
                log::error!("failed to serialise asset manifest: {err}");
                String::from("{}")
            }
        }
    }

    pub fn manifest(&self) -> &AssetManifest {
        &self.manifest
    }

    pub fn is_finished(&self) -> bool {
        self.frame_loop.is_finished()
    }

    pub fn game(&self) -> &G {
        self.frame_loop.game()
    }

    // ---- Pointer accessors for shared buffer reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn frame_counter(&self) -> u32 {
        self.host.render_buffer.frame() as u32
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.host.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.host.render_buffer.instance_count()
    }

    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.host.render_buffer.vertices_ptr()
    }

    pub fn vector_vertex_count(&self) -> u32 {
        self.host.render_buffer.vertex_count()
    }

    /// Sprite/line interleave points as `[instances, vertex]` pairs.
    pub fn draw_order(&self) -> Vec<u32> {
        self.host
            .render_buffer
            .draw_order()
            .iter()
            .flat_map(|split| [split.instances as u32, split.vertex as u32])
            .collect()
    }

    pub fn sound_commands_ptr(&self) -> *const f32 {
        self.host.sounds.floats.as_ptr()
    }

    /// Number of sound commands (not floats) from the last tick.
    pub fn sound_count(&self) -> u32 {
        (self.host.sounds.floats.len() / SoundCommand::FLOATS) as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.host.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.host.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    // ---- Capacity accessors (read by the page via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_vector_vertices(&self) -> u32 {
        self.layout.max_vector_vertices as u32
    }

    pub fn max_sounds(&self) -> u32 {
        self.layout.max_sounds as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
