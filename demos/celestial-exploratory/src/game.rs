//! Celestial exploratory: a kinematic solar system with trails.
//!
//! Enter pauses and resumes. While paused, clicking a body plays its sound
//! and prints what it has to say about itself.

use std::path::PathBuf;

use celestial_engine::*;
use glam::{DVec2, Vec2};

use crate::bodies::{self, BodyDef, BodyKind};
use crate::interaction::{Action, Interaction, RunState};
use crate::orbit::Orbit;
use crate::speech::SpeechCatalog;
use crate::trail::Trail;

// ── Motion ───────────────────────────────────────────────────────────

/// Radians per frame for a body with period 1.
const ANGULAR_STEP: f64 = 0.05;
/// Upper bound on samples kept per trail.
const MAX_TRAIL_SAMPLES: usize = 4096;
const TRAIL_WIDTH: f32 = 1.0;

// ── Game events to the host ──────────────────────────────────────────

/// a = 1.0 when paused, 0.0 when running.
pub const EVENT_RUN_STATE: f32 = 1.0;
/// a = registry index, b/c = body centre.
pub const EVENT_BODY_CLICKED: f32 = 2.0;

/// Tunables. Everything has a code-level default; there is no config file.
#[derive(Debug, Clone)]
pub struct ExploratoryConfig {
    pub angular_step: f64,
    pub max_trail_samples: usize,
    pub toggle_key: u32,
    pub asset_dir: PathBuf,
    pub sound_dir: PathBuf,
    pub trail_color: Color,
    pub trail_width: f32,
}

impl Default for ExploratoryConfig {
    fn default() -> Self {
        Self {
            angular_step: ANGULAR_STEP,
            max_trail_samples: MAX_TRAIL_SAMPLES,
            toggle_key: keys::ENTER,
            asset_dir: PathBuf::from("planets"),
            sound_dir: PathBuf::from("sounds"),
            trail_color: Color::rgb8(153, 153, 0),
            trail_width: TRAIL_WIDTH,
        }
    }
}

struct Motion {
    orbit: Orbit,
    trail: Trail,
}

/// Runtime state of one registry entry.
struct Body {
    entity: EntityId,
    name: &'static str,
    clip: ClipId,
    speech: &'static str,
    /// None for the central body.
    motion: Option<Motion>,
}

pub struct CelestialExploratory {
    config: ExploratoryConfig,
    registry: Vec<BodyDef>,
    speech: SpeechCatalog,
    /// Registry order.
    bodies: Vec<Body>,
    center: DVec2,
    background: Option<SpriteComponent>,
    ambient: ClipId,
    interaction: Interaction,
}

impl CelestialExploratory {
    pub fn new() -> Self {
        Self::with_bodies(bodies::registry(), SpeechCatalog::builtin())
    }

    pub fn with_bodies(registry: Vec<BodyDef>, speech: SpeechCatalog) -> Self {
        let config = ExploratoryConfig::default();
        Self {
            interaction: Interaction::new(config.toggle_key),
            config,
            registry,
            speech,
            bodies: Vec::new(),
            center: DVec2::ZERO,
            background: None,
            ambient: ClipId::default(),
        }
    }

    pub fn with_config(mut self, config: ExploratoryConfig) -> Self {
        self.interaction = Interaction::new(config.toggle_key);
        self.config = config;
        self
    }

    pub fn run_state(&self) -> RunState {
        self.interaction.state()
    }

    /// Current orbit of a body, if it orbits.
    pub fn orbit(&self, name: &str) -> Option<&Orbit> {
        self.body(name)?.motion.as_ref().map(|m| &m.orbit)
    }

    pub fn trail(&self, name: &str) -> Option<&Trail> {
        self.body(name)?.motion.as_ref().map(|m| &m.trail)
    }

    fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    fn on_toggle(&self, ctx: &mut EngineContext, state: RunState) {
        match state {
            RunState::Paused => ctx.stop_sound(self.ambient),
            RunState::Running => ctx.loop_sound(self.ambient),
        }
        log::debug!("run state: {:?}", state);
        ctx.emit_event(GameEvent {
            kind: EVENT_RUN_STATE,
            a: if state.is_paused() { 1.0 } else { 0.0 },
            ..Default::default()
        });
    }

    fn on_click(&self, ctx: &mut EngineContext, entity: EntityId) {
        let Some(index) = self.bodies.iter().position(|b| b.entity == entity) else {
            return;
        };
        let body = &self.bodies[index];
        let pos = ctx.scene.get(entity).map(|e| e.pos).unwrap_or_default();
        log::info!("clicked {} at ({}, {})", body.name, pos.x, pos.y);

        ctx.play_sound(body.clip);
        ctx.say(body.speech);
        ctx.emit_event(GameEvent {
            kind: EVENT_BODY_CLICKED,
            a: index as f32,
            b: pos.x,
            c: pos.y,
        });
    }

    /// One frame of orbital motion for every orbiting body.
    fn advance(&mut self, ctx: &mut EngineContext) {
        let step = self.config.angular_step;
        for body in &mut self.bodies {
            let Some(motion) = body.motion.as_mut() else {
                continue;
            };
            motion.orbit.advance(step);
            let pos = motion.orbit.position(self.center).as_vec2();
            motion.trail.record(pos);
            if let Some(entity) = ctx.scene.get_mut(body.entity) {
                entity.pos = pos;
            }
        }
    }
}

impl Default for CelestialExploratory {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for CelestialExploratory {
    fn config(&self) -> GameConfig {
        GameConfig {
            world_width: bodies::BACKGROUND_SIZE.0 as f32,
            world_height: bodies::BACKGROUND_SIZE.1 as f32,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext, assets: &mut dyn AssetLoader) -> Result<(), EngineError> {
        bodies::validate(&self.registry)?;

        let (bg_w, bg_h) = bodies::BACKGROUND_SIZE;
        self.background = Some(assets.load_sprite(&self.config.asset_dir.join(bodies::BACKGROUND_IMAGE), bg_w, bg_h)?);
        self.ambient = assets.load_sound(&self.config.sound_dir.join(bodies::AMBIENT_SOUND))?;

        if let BodyKind::Central { x, y } = self.registry[0].kind {
            self.center = DVec2::new(x, y);
        }

        for def in &self.registry {
            let speech = self.speech.text_for(def.name)?;
            let sprite = assets.load_sprite(&self.config.asset_dir.join(def.image), def.width, def.height)?;
            let clip = assets.load_sound(&self.config.sound_dir.join(def.sound))?;

            let (pos, layer, motion) = match def.kind {
                BodyKind::Central { .. } => (self.center, RenderLayer::Foreground, None),
                BodyKind::Orbiting { distance, period } => {
                    let orbit = Orbit::new(distance, period);
                    let trail = Trail::for_orbit(&orbit, self.config.angular_step, self.config.max_trail_samples);
                    (orbit.position(self.center), RenderLayer::Objects, Some(Motion { orbit, trail }))
                }
            };

            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(def.name)
                    .with_pos(pos.as_vec2())
                    .with_layer(layer)
                    .with_sprite(sprite),
            );
            log::debug!("{}: r={} at ({:.1}, {:.1})", def.name, def.radius, pos.x, pos.y);

            self.bodies.push(Body {
                entity: id,
                name: def.name,
                clip,
                speech,
                motion,
            });
        }

        ctx.loop_sound(self.ambient);
        log::info!("{} bodies around ({}, {})", self.bodies.len(), self.center.x, self.center.y);
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match self.interaction.handle(event, &ctx.scene) {
                Some(Action::Toggled(state)) => self.on_toggle(ctx, state),
                Some(Action::Clicked(entity)) => self.on_click(ctx, entity),
                None => {}
            }
        }

        if self.interaction.is_running() {
            self.advance(ctx);
        }
    }

    /// Paused frames draw nothing, so the last running frame stays on screen.
    fn render(&self, ctx: &EngineContext, canvas: &mut dyn Canvas) {
        if !self.interaction.is_running() {
            return;
        }
        if let Some(background) = &self.background {
            canvas.blit(background, Vec2::ZERO);
        }
        for motion in self.bodies.iter().filter_map(|b| b.motion.as_ref()) {
            motion.trail.draw(canvas, self.config.trail_color, self.config.trail_width);
        }
        // Central body is on the foreground layer, so it lands above trails and planets.
        draw_scene(&ctx.scene, canvas);
    }
}
