use glam::Vec2;

use crate::api::types::EntityId;
use crate::components::layer::RenderLayer;
use crate::components::sprite::{PixelRect, SpriteComponent};

/// One body on screen: a position, a draw layer and an optional sprite.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are neither drawn nor hit).
    pub active: bool,
    /// Centre position in canvas pixels.
    pub pos: Vec2,
    /// Draw order bucket.
    pub layer: RenderLayer,
    /// Sprite component (entities without one are invisible and never hit).
    pub sprite: Option<SpriteComponent>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec2::ZERO,
            layer: RenderLayer::default(),
            sprite: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = Some(sprite);
        self
    }

    /// Sprite bounds at the current position, if the entity has a sprite.
    pub fn bounds(&self) -> Option<PixelRect> {
        self.sprite.as_ref().map(|s| s.rect_at(self.pos))
    }
}
