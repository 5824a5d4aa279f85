use glam::Vec2;

use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Simple entity storage using a flat Vec, kept in spawn order.
/// Designed for small entity counts (tens, not thousands).
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(16),
        }
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Iterate over all entities in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    /// First active sprite entity, in spawn order, whose bounds contain `point`.
    ///
    /// Spawn order decides overlaps, not draw order: an entity spawned early
    /// wins even if a later one is drawn over it.
    pub fn hit_test(&self, point: Vec2) -> Option<&Entity> {
        self.entities
            .iter()
            .filter(|e| e.active)
            .find(|e| e.bounds().is_some_and(|rect| rect.contains(point)))
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
