use crate::ecs::components::Transform;
use crate::loader::document::{extract_position, extract_rotation};
use crate::loader::{LoadContext, LoadError};

/// Place the start marker and the player at the `spawn` section
///
/// The only section a map must have.
pub fn extract_spawn(ctx: &mut LoadContext<'_, '_, '_>) -> Result<(), LoadError> {
    let spawn = ctx
        .root
        .first_child("spawn")
        .ok_or(LoadError::MissingRequiredSection("spawn"))?;

    let position = extract_position(spawn);
    let rotation = extract_rotation(spawn);

    let start = &mut ctx.scene.start;
    start.clear_components();
    start.add(Transform::from_position(position).with_rotation(rotation));

    let player = &mut ctx.scene.player;
    match player.get_mut::<Transform>() {
        Some(transform) => {
            transform.position = position;
            transform.rotation = rotation;
        }
        None => {
            player.add(Transform::from_position(position).with_rotation(rotation));
        }
    }

    Ok(())
}
