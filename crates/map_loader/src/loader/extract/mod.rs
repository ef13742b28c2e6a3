//! Section extractors
//!
//! One function per map section. Each reads its section from the document
//! root and adds to the scene under construction. Only `spawn` can fail.

mod acids;
mod door;
mod lights;
mod materials;
mod models;
mod spawn;
mod triggers;
mod walls;

pub use acids::extract_acids;
pub use door::extract_door;
pub use lights::extract_lights;
pub use materials::extract_materials;
pub use models::extract_models;
pub use spawn::extract_spawn;
pub use triggers::extract_triggers;
pub use walls::extract_walls;

use crate::assets::Material;
use crate::ecs::components::{AaCollisionBox, MeshDrawable, Transform};
use crate::physics::Aabb;

use super::LoadContext;

/// Add a solid box entity: generated mesh plus collision cage
///
/// Walls and acid pools share this; they only differ in how the transform
/// and material are read.
fn spawn_box(ctx: &mut LoadContext<'_, '_, '_>, transform: Transform, material: Material) {
    let mesh = ctx.assets.portal_box(&transform);
    let cage = Aabb::cage(&transform);
    ctx.scene
        .spawn_entity()
        .add(transform)
        .add(MeshDrawable::new(material, mesh))
        .add(AaCollisionBox::new(cage));
}
