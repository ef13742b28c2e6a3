use crate::assets::Material;
use crate::ecs::components::Transform;
use crate::loader::document::{extract_position, extract_rotation, extract_scale};
use crate::loader::{LoadContext, LoadError};
use crate::scene::MaterialId;

use super::spawn_box;

/// Wall textures repeat twice per world unit
const WALL_UV_SCALE: f32 = 2.0;

/// Add a solid wall entity per `wall` section
///
/// The material comes from the registry by `mid`; an unknown or missing id
/// gives the default material.
pub fn extract_walls(ctx: &mut LoadContext<'_, '_, '_>) -> Result<(), LoadError> {
    for wall in ctx.root.children_named("wall") {
        let mut transform = Transform::from_position(extract_position(wall))
            .with_rotation(extract_rotation(wall));
        if let Some(scale) = extract_scale(wall) {
            transform.scale = scale;
        }

        let material = match wall.attr_i32("mid").and_then(MaterialId::from_raw) {
            Some(id) => ctx.scene.materials.resolve_or_default(id),
            None => {
                log::warn!(
                    "<wall> at {} has no valid 'mid', using default material",
                    wall.position()
                );
                Material::default()
            }
        };

        spawn_box(ctx, transform, material.with_uv_scale(WALL_UV_SCALE));
    }

    Ok(())
}
