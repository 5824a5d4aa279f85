use crate::components::layer::RenderLayer;
use crate::core::scene::Scene;
use crate::renderer::canvas::Canvas;

/// Blit every active sprite entity.
/// Layers are drawn back-to-front; within a layer, entities keep spawn order.
/// Sprites are centred on the entity position, snapped to whole pixels.
pub fn draw_scene(scene: &Scene, canvas: &mut dyn Canvas) {
    for layer in RenderLayer::ALL {
        for entity in scene.iter().filter(|e| e.active && e.layer == layer) {
            if let (Some(sprite), Some(rect)) = (&entity.sprite, entity.bounds()) {
                canvas.blit(sprite, rect.top_left());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{EntityId, SpriteId};
    use crate::components::entity::Entity;
    use crate::components::sprite::SpriteComponent;
    use crate::renderer::canvas::Color;
    use glam::Vec2;

    #[derive(Default)]
    struct BlitLog(Vec<(u32, Vec2)>);

    impl Canvas for BlitLog {
        fn blit(&mut self, sprite: &SpriteComponent, top_left: Vec2) {
            self.0.push((sprite.id.0, top_left));
        }
        fn draw_line(&mut self, _from: Vec2, _to: Vec2, _color: Color, _width: f32) {}
        fn present(&mut self) {}
    }

    fn body(id: u32, pos: Vec2, size: u32) -> Entity {
        Entity::new(EntityId(id))
            .with_pos(pos)
            .with_sprite(SpriteComponent::new(SpriteId(id), size, size))
    }

    #[test]
    fn foreground_is_drawn_last() {
        let mut scene = Scene::new();
        scene.spawn(body(0, Vec2::new(400.0, 390.0), 80).with_layer(RenderLayer::Foreground));
        scene.spawn(body(1, Vec2::new(465.0, 390.0), 15));
        scene.spawn(body(2, Vec2::new(490.0, 390.0), 25));
        scene.spawn(body(9, Vec2::new(400.0, 400.0), 800).with_layer(RenderLayer::Background));

        let mut canvas = BlitLog::default();
        draw_scene(&scene, &mut canvas);

        let order: Vec<u32> = canvas.0.iter().map(|(id, _)| *id).collect();
        assert_eq!(order, vec![9, 1, 2, 0]);
        assert_eq!(canvas.0[3].1, Vec2::new(360.0, 350.0));
        assert_eq!(canvas.0[1].1, Vec2::new(458.0, 383.0));
    }

    #[test]
    fn inactive_and_spriteless_entities_are_skipped() {
        let mut scene = Scene::new();
        let mut hidden = body(1, Vec2::ZERO, 10);
        hidden.active = false;
        scene.spawn(hidden);
        scene.spawn(Entity::new(EntityId(2)));

        let mut canvas = BlitLog::default();
        draw_scene(&scene, &mut canvas);
        assert!(canvas.0.is_empty());
    }
}
