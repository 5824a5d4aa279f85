//! Pause toggle and click dispatch.
//!
//! Clicks only count while paused: positions are frozen then, so the
//! hit-test sees exactly what is on screen.

use celestial_engine::{EntityId, InputEvent, PointerButton, Scene};
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        }
    }

    pub fn is_paused(self) -> bool {
        self == RunState::Paused
    }
}

/// What an input event caused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Run state flipped; carries the new state.
    Toggled(RunState),
    /// A body was clicked while paused.
    Clicked(EntityId),
}

#[derive(Debug, Clone)]
pub struct Interaction {
    state: RunState,
    toggle_key: u32,
}

impl Interaction {
    pub fn new(toggle_key: u32) -> Self {
        Self {
            state: RunState::Running,
            toggle_key,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Apply one input event. Hit-testing walks the scene in spawn order, so
    /// the first registered body under the pointer wins.
    pub fn handle(&mut self, event: &InputEvent, scene: &Scene) -> Option<Action> {
        match *event {
            InputEvent::KeyDown { key_code } if key_code == self.toggle_key => {
                self.state = self.state.toggled();
                Some(Action::Toggled(self.state))
            }
            InputEvent::PointerDown { x, y, button: PointerButton::Primary } if self.state.is_paused() => {
                scene.hit_test(Vec2::new(x, y)).map(|entity| Action::Clicked(entity.id))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_engine::{keys, Entity, SpriteComponent, SpriteId};

    fn scene() -> Scene {
        let mut scene = Scene::new();
        scene.spawn(
            Entity::new(EntityId(1))
                .with_pos(Vec2::new(100.0, 100.0))
                .with_sprite(SpriteComponent::new(SpriteId(0), 40, 40)),
        );
        scene.spawn(
            Entity::new(EntityId(2))
                .with_pos(Vec2::new(110.0, 100.0))
                .with_sprite(SpriteComponent::new(SpriteId(1), 40, 40)),
        );
        scene
    }

    fn click(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerDown { x, y, button: PointerButton::Primary }
    }

    fn enter() -> InputEvent {
        InputEvent::KeyDown { key_code: keys::ENTER }
    }

    #[test]
    fn toggle_key_flips_state() {
        let scene = Scene::new();
        let mut interaction = Interaction::new(keys::ENTER);
        assert_eq!(interaction.handle(&enter(), &scene), Some(Action::Toggled(RunState::Paused)));
        assert_eq!(interaction.handle(&enter(), &scene), Some(Action::Toggled(RunState::Running)));
        assert!(interaction.is_running());
    }

    #[test]
    fn other_keys_are_ignored() {
        let scene = Scene::new();
        let mut interaction = Interaction::new(keys::ENTER);
        assert_eq!(interaction.handle(&InputEvent::KeyDown { key_code: keys::SPACE }, &scene), None);
        assert_eq!(interaction.handle(&InputEvent::KeyUp { key_code: keys::ENTER }, &scene), None);
        assert_eq!(interaction.state(), RunState::Running);
    }

    #[test]
    fn clicks_while_running_do_nothing() {
        let scene = scene();
        let mut interaction = Interaction::new(keys::ENTER);
        assert_eq!(interaction.handle(&click(100.0, 100.0), &scene), None);
    }

    #[test]
    fn overlap_resolves_to_first_spawned() {
        let scene = scene();
        let mut interaction = Interaction::new(keys::ENTER);
        interaction.handle(&enter(), &scene);
        assert_eq!(interaction.handle(&click(105.0, 100.0), &scene), Some(Action::Clicked(EntityId(1))));
        assert_eq!(interaction.handle(&click(125.0, 100.0), &scene), Some(Action::Clicked(EntityId(2))));
        assert_eq!(interaction.handle(&click(300.0, 300.0), &scene), None);
    }

    #[test]
    fn only_primary_button_hits() {
        let scene = scene();
        let mut interaction = Interaction::new(keys::ENTER);
        interaction.handle(&enter(), &scene);
        let right = InputEvent::PointerDown { x: 100.0, y: 100.0, button: PointerButton::Secondary };
        assert_eq!(interaction.handle(&right, &scene), None);
        let release = InputEvent::PointerUp { x: 100.0, y: 100.0, button: PointerButton::Primary };
        assert_eq!(interaction.handle(&release, &scene), None);
    }
}
