use crate::ecs::components::{MeshDrawable, Transform};
use crate::loader::document::{extract_position, extract_rotation};
use crate::loader::{LoadContext, LoadError};

const DOOR_MESH: &str = "Door.obj";
const DOOR_TEXTURE: &str = "Door.png";

/// Place the exit door from the optional `end` section
pub fn extract_door(ctx: &mut LoadContext<'_, '_, '_>) -> Result<(), LoadError> {
    let Some(end) = ctx.root.first_child("end") else {
        log::debug!("Map has no exit door");
        return Ok(());
    };

    let transform = Transform::from_position(extract_position(end))
        .with_rotation(extract_rotation(end));
    let material = ctx.assets.from_texture(DOOR_TEXTURE);
    let drawable = MeshDrawable::new(material, ctx.assets.get_mesh(DOOR_MESH));

    let door = &mut ctx.scene.end;
    door.clear_components();
    door.add(transform).add(drawable);

    Ok(())
}
