//! Assembled level scene

pub mod light;
pub mod registry;

pub use light::Light;
pub use registry::{MaterialId, MaterialRegistry};

use std::fmt;

use crate::ecs::components::{Health, PlayerMotion, Transform};
use crate::ecs::{ComponentData, Entity, EntityId};

/// A fully loaded level
///
/// Owns every entity and light created while loading. The caller owns the
/// scene once the builder returns it.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// The player; always has a transform, motion and health
    pub player: Entity,
    /// Spawn marker; always has a transform
    pub start: Entity,
    /// Exit door; component-less when the map has no `end` section
    pub end: Entity,
    /// Walls, acid, triggers and models in load order
    pub entities: Vec<Entity>,
    /// Point lights in document order
    pub lights: Vec<Light>,
    /// Materials declared by the map
    pub materials: MaterialRegistry,
    next_entity_id: u32,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create a scene holding only the player, start and end entities
    pub fn new() -> Self {
        let mut player = Entity::new(EntityId(0));
        player
            .add(Transform::default())
            .add(PlayerMotion::default())
            .add(Health::default());

        let mut start = Entity::new(EntityId(1));
        start.add(Transform::default());

        Self {
            player,
            start,
            end: Entity::new(EntityId(2)),
            entities: Vec::new(),
            lights: Vec::new(),
            materials: MaterialRegistry::new(),
            next_entity_id: 3,
        }
    }

    /// Append a new empty entity and return it for component attachment
    pub fn spawn_entity(&mut self) -> &mut Entity {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.push(Entity::new(id));
        let index = self.entities.len() - 1;
        &mut self.entities[index]
    }

    /// Entities carrying a component of type `C`, in load order
    pub fn entities_with<C: ComponentData>(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|entity| entity.has::<C>())
    }

    /// Find an entity by id, including the player, start and end
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        [&self.player, &self.start, &self.end]
            .into_iter()
            .chain(self.entities.iter())
            .find(|entity| entity.id() == id)
    }

    /// Counts of what the scene holds
    pub fn summary(&self) -> SceneSummary {
        use crate::ecs::components::{AaCollisionBox, MeshDrawable, Trigger};

        SceneSummary {
            entities: self.entities.len(),
            drawables: self.entities_with::<MeshDrawable>().count(),
            colliders: self.entities_with::<AaCollisionBox>().count(),
            triggers: self.entities_with::<Trigger>().count(),
            lights: self.lights.len(),
            materials: self.materials.len(),
            has_end: !self.end.is_empty(),
        }
    }
}

/// Entity and resource counts of a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneSummary {
    /// Entities besides player, start and end
    pub entities: usize,
    /// Entities with a drawable
    pub drawables: usize,
    /// Entities with a collision box
    pub colliders: usize,
    /// Entities with a trigger
    pub triggers: usize,
    /// Point lights
    pub lights: usize,
    /// Registered material ids
    pub materials: usize,
    /// Whether an exit door was placed
    pub has_end: bool,
}

impl fmt::Display for SceneSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entities ({} drawable, {} colliding, {} triggers), {} lights, {} materials, {}",
            self.entities,
            self.drawables,
            self.colliders,
            self.triggers,
            self.lights,
            self.materials,
            if self.has_end { "exit placed" } else { "no exit" }
        )
    }
}
