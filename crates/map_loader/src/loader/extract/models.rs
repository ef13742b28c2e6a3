use crate::ecs::components::{MeshDrawable, Transform};
use crate::loader::document::{extract_position, extract_rotation};
use crate::loader::{LoadContext, LoadError};

/// Name handed to the resolvers when a model omits `mesh` or `texture`
const UNSET_ASSET: &str = "none";

/// Add a decorative entity per `model` section
pub fn extract_models(ctx: &mut LoadContext<'_, '_, '_>) -> Result<(), LoadError> {
    for model in ctx.root.children_named("model") {
        let mesh_name = model.attr_str("mesh").unwrap_or(UNSET_ASSET);
        let texture_name = model.attr_str("texture").unwrap_or(UNSET_ASSET);

        let transform = Transform::from_position(extract_position(model))
            .with_rotation(extract_rotation(model));
        let material = ctx.assets.from_texture(texture_name);
        let mesh = ctx.assets.get_mesh(mesh_name);

        ctx.scene
            .spawn_entity()
            .add(transform)
            .add(MeshDrawable::new(material, mesh));
    }

    Ok(())
}
