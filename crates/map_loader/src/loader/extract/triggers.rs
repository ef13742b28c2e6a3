use crate::ecs::components::{Transform, Trigger};
use crate::loader::document::{extract_position, extract_scale};
use crate::loader::{LoadContext, LoadError};

/// Add a trigger volume per `trigger` section
///
/// `type` is copied as written, empty if absent.
pub fn extract_triggers(ctx: &mut LoadContext<'_, '_, '_>) -> Result<(), LoadError> {
    for element in ctx.root.children_named("trigger") {
        let mut transform = Transform::from_position(extract_position(element));
        if let Some(scale) = extract_scale(element) {
            transform.scale = scale;
        }
        let trigger = Trigger::new(element.attr_str("type").unwrap_or_default());

        ctx.scene.spawn_entity().add(transform).add(trigger);
    }

    Ok(())
}
