use crate::assets::Material;
use crate::ecs::components::Transform;
use crate::loader::document::{extract_position, extract_scale};
use crate::loader::{LoadContext, LoadError};

use super::spawn_box;

const ACID_TEXTURE: &str = "acid.png";

/// Add an acid pool per `acid` section
///
/// Acid is never rotated and always uses the built-in acid texture.
pub fn extract_acids(ctx: &mut LoadContext<'_, '_, '_>) -> Result<(), LoadError> {
    for acid in ctx.root.children_named("acid") {
        let mut transform = Transform::from_position(extract_position(acid));
        if let Some(scale) = extract_scale(acid) {
            transform.scale = scale;
        }

        let material = Material::default().with_diffuse(ctx.assets.get_texture(ACID_TEXTURE));
        spawn_box(ctx, transform, material);
    }

    Ok(())
}
