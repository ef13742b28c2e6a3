use crate::foundation::math::Vec3;
use crate::loader::document::vector_attrs;
use crate::loader::{LoadContext, LoadError};
use crate::scene::Light;

/// Add a point light per `light` section
///
/// Position is read from the element's own `x`, `y`, `z` attributes and
/// color from `r`, `g`, `b`. A map without lights yields none.
pub fn extract_lights(ctx: &mut LoadContext<'_, '_, '_>) -> Result<(), LoadError> {
    let lights = ctx.root.children_named("light").map(|element| Light {
        position: vector_attrs(element),
        color: Vec3::new(
            element.attr_f32_or_zero("r"),
            element.attr_f32_or_zero("g"),
            element.attr_f32_or_zero("b"),
        ),
        distance: element.attr_f32_or_zero("distance"),
        energy: element.attr_f32_or_zero("energy"),
        specular: element.attr_f32_or_zero("specular"),
    });
    ctx.scene.lights.extend(lights);

    if ctx.scene.lights.is_empty() {
        log::debug!("Map has no lights");
    }

    Ok(())
}
