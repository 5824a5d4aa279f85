use crate::api::game::{EngineContext, Game, GameConfig};
use crate::api::types::{GameEvent, SoundCommand};
use crate::assets::loader::AssetLoader;
use crate::error::EngineError;
use crate::input::queue::InputQueue;
use crate::renderer::canvas::Canvas;
use crate::systems::audio::{dispatch_sounds, SoundPlayer};

/// The platform side of the frame loop: input source, draw target, audio
/// output and text output.
pub trait Host {
    /// Move every input event that arrived since the last call into `input`.
    fn poll_events(&mut self, input: &mut InputQueue);

    fn canvas(&mut self) -> &mut dyn Canvas;

    fn sound_player(&mut self) -> &mut dyn SoundPlayer;

    /// Output channel for descriptive text. Not drawn on the canvas.
    fn write_text(&mut self, text: &str) {
        log::info!(target: "speech", "{text}");
    }

    /// Game events of the frame that just ran, in emission order.
    fn forward_events(&mut self, _events: &[GameEvent]) {}

    /// Release the canvas and any other platform resources.
    fn shutdown(&mut self) {}
}

/// Outcome of a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Running,
    /// A quit request was processed this frame; call `shutdown`.
    Quit,
}

/// Drives a `Game` one frame at a time against a `Host`.
///
/// Each frame: poll input, let the game handle it and update, forward
/// sounds/text/events, render, present. Input is handed to the game exactly
/// once, in arrival order.
pub struct FrameLoop<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    config: GameConfig,
    frame: u64,
    finished: bool,
}

impl<G: Game> FrameLoop<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            game,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            config,
            frame: 0,
            finished: false,
        }
    }

    /// Let the game load its assets and build its scene.
    /// Sounds queued here (e.g. an ambient loop) go out with the first frame.
    pub fn init(&mut self, assets: &mut dyn AssetLoader) -> Result<(), EngineError> {
        self.game.init(&mut self.ctx, assets)?;
        log::info!("game initialised: {} entities", self.ctx.scene.len());
        Ok(())
    }

    /// Run one frame.
    pub fn step(&mut self, host: &mut dyn Host) -> FrameStatus {
        if self.finished {
            return FrameStatus::Quit;
        }

        host.poll_events(&mut self.input);
        let quit = self.input.has_quit();
        self.game.update(&mut self.ctx, &self.input);
        self.input.drain();

        dispatch_sounds(&self.ctx.sounds, host.sound_player());
        for text in &self.ctx.messages {
            host.write_text(text);
        }
        if !self.ctx.events.is_empty() {
            host.forward_events(&self.ctx.events);
        }
        self.ctx.clear_frame_data();

        let canvas = host.canvas();
        self.game.render(&self.ctx, canvas);
        canvas.present();
        self.frame += 1;

        if quit {
            log::info!("quit requested after {} frames", self.frame);
            FrameStatus::Quit
        } else {
            FrameStatus::Running
        }
    }

    /// Step until quit, sleeping to hold `fixed_dt` per frame, then shut down.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run(&mut self, host: &mut dyn Host) {
        let pacer = crate::core::time::FramePacer::from_dt(self.config.fixed_dt);
        loop {
            let started = std::time::Instant::now();
            if self.step(host) == FrameStatus::Quit {
                break;
            }
            let remaining = pacer.remaining(started.elapsed());
            if !remaining.is_zero() {
                std::thread::sleep(remaining);
            }
        }
        self.shutdown(host);
    }

    /// Stop all sound and release the host. Later calls do nothing.
    pub fn shutdown(&mut self, host: &mut dyn Host) {
        if self.finished {
            return;
        }
        let player = host.sound_player();
        dispatch_sounds(&[SoundCommand::StopAll], player);
        host.shutdown();
        self.finished = true;
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Frames run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::path::Path;

    use glam::Vec2;

    use crate::api::types::ClipId;
    use crate::assets::manifest::ManifestLoader;
    use crate::components::entity::Entity;
    use crate::components::sprite::SpriteComponent;
    use crate::input::queue::{keys, InputEvent};
    use crate::renderer::canvas::Color;
    use crate::systems::audio::RecordingPlayer;

    #[derive(Default)]
    struct CountingCanvas {
        blits: usize,
        presents: usize,
    }

    impl Canvas for CountingCanvas {
        fn blit(&mut self, _sprite: &SpriteComponent, _top_left: Vec2) {
            self.blits += 1;
        }
        fn draw_line(&mut self, _from: Vec2, _to: Vec2, _color: Color, _width: f32) {}
        fn present(&mut self) {
            self.presents += 1;
        }
    }

    /// Feeds one scripted batch of events per frame, then asks to quit.
    #[derive(Default)]
    struct ScriptedHost {
        script: VecDeque<Vec<InputEvent>>,
        canvas: CountingCanvas,
        player: RecordingPlayer,
        texts: Vec<String>,
        events: Vec<GameEvent>,
        shutdowns: usize,
    }

    impl ScriptedHost {
        fn with_script(frames: Vec<Vec<InputEvent>>) -> Self {
            Self {
                script: frames.into(),
                ..Default::default()
            }
        }
    }

    impl Host for ScriptedHost {
        fn poll_events(&mut self, input: &mut InputQueue) {
            match self.script.pop_front() {
                Some(events) => input.extend(events),
                None => input.push(InputEvent::Quit),
            }
        }
        fn canvas(&mut self) -> &mut dyn Canvas {
            &mut self.canvas
        }
        fn sound_player(&mut self) -> &mut dyn SoundPlayer {
            &mut self.player
        }
        fn write_text(&mut self, text: &str) {
            self.texts.push(text.to_string());
        }
        fn forward_events(&mut self, events: &[GameEvent]) {
            self.events.extend_from_slice(events);
        }
        fn shutdown(&mut self) {
            self.shutdowns += 1;
        }
    }

    #[derive(Default)]
    struct Beeper {
        clip: ClipId,
        updates: usize,
        seen: Vec<InputEvent>,
    }

    impl Game for Beeper {
        fn config(&self) -> GameConfig {
            GameConfig {
                fixed_dt: 0.001,
                ..GameConfig::default()
            }
        }

        fn init(&mut self, ctx: &mut EngineContext, assets: &mut dyn AssetLoader) -> Result<(), EngineError> {
            let sprite = assets.load_sprite(Path::new("dot.png"), 4, 4)?;
            self.clip = assets.load_sound(Path::new("beep.mp3"))?;
            let id = ctx.next_id();
            ctx.scene.spawn(Entity::new(id).with_pos(Vec2::splat(10.0)).with_sprite(sprite));
            ctx.loop_sound(self.clip);
            Ok(())
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            self.updates += 1;
            for event in input.iter() {
                self.seen.push(*event);
                if let InputEvent::KeyDown { key_code } = event {
                    ctx.play_sound(self.clip);
                    ctx.say(format!("key {key_code}"));
                    ctx.emit_event(GameEvent { kind: 7.0, ..Default::default() });
                }
            }
        }
    }

    fn started(game: Beeper) -> FrameLoop<Beeper> {
        let mut frame_loop = FrameLoop::new(game);
        frame_loop.init(&mut ManifestLoader::new()).unwrap();
        frame_loop
    }

    #[test]
    fn init_sounds_go_out_with_first_frame() {
        let mut frame_loop = started(Beeper::default());
        let mut host = ScriptedHost::with_script(vec![vec![], vec![]]);

        assert_eq!(frame_loop.step(&mut host), FrameStatus::Running);
        assert_eq!(host.player.take(), vec![SoundCommand::Play { clip: ClipId(0), looping: true }]);
        assert_eq!(frame_loop.step(&mut host), FrameStatus::Running);
        assert!(host.player.commands.is_empty());
        assert_eq!(host.canvas.presents, 2);
        assert_eq!(host.canvas.blits, 2);
    }

    #[test]
    fn input_is_delivered_once_in_order() {
        let mut frame_loop = started(Beeper::default());
        let first = vec![
            InputEvent::KeyDown { key_code: keys::ENTER },
            InputEvent::PointerMove { x: 1.0, y: 2.0 },
        ];
        let mut host = ScriptedHost::with_script(vec![first.clone(), vec![]]);

        frame_loop.step(&mut host);
        frame_loop.step(&mut host);

        assert_eq!(frame_loop.game().seen, first);
        assert_eq!(frame_loop.game().updates, 2);
        assert_eq!(host.texts, vec!["key 13".to_string()]);
        assert_eq!(host.events.len(), 1);
        assert!(frame_loop.context().messages.is_empty());
    }

    #[test]
    fn quit_frame_still_renders_then_loop_stops() {
        let mut frame_loop = started(Beeper::default());
        let mut host = ScriptedHost::with_script(vec![vec![InputEvent::Quit]]);

        assert_eq!(frame_loop.step(&mut host), FrameStatus::Quit);
        assert_eq!(host.canvas.presents, 1);

        frame_loop.shutdown(&mut host);
        frame_loop.shutdown(&mut host);
        assert!(frame_loop.is_finished());
        assert_eq!(host.shutdowns, 1);
        assert_eq!(host.player.commands.last(), Some(&SoundCommand::StopAll));

        assert_eq!(frame_loop.step(&mut host), FrameStatus::Quit);
        assert_eq!(frame_loop.frame(), 1);
    }

    #[test]
    fn run_steps_until_quit_and_cleans_up() {
        let mut frame_loop = started(Beeper::default());
        let mut host = ScriptedHost::with_script(vec![vec![], vec![], vec![]]);

        frame_loop.run(&mut host);

        assert_eq!(frame_loop.frame(), 4);
        assert_eq!(host.shutdowns, 1);
        assert_eq!(host.player.commands.last(), Some(&SoundCommand::StopAll));
    }

    #[test]
    fn failed_init_is_reported() {
        struct Broken;
        impl Game for Broken {
            fn init(&mut self, _ctx: &mut EngineContext, assets: &mut dyn AssetLoader) -> Result<(), EngineError> {
                assets.load_sprite(Path::new("zero.png"), 0, 0)?;
                Ok(())
            }
            fn update(&mut self, _ctx: &mut EngineContext, _input: &InputQueue) {}
        }

        let mut frame_loop = FrameLoop::new(Broken);
        assert!(frame_loop.init(&mut ManifestLoader::new()).is_err());
    }
}
