use crate::loader::{LoadContext, LoadError};
use crate::scene::MaterialId;

/// Register every `materials/mat` entry
///
/// Entries without a usable `mid` or with an empty `name` are skipped. A
/// later entry with the same id replaces the earlier one.
pub fn extract_materials(ctx: &mut LoadContext<'_, '_, '_>) -> Result<(), LoadError> {
    let Some(section) = ctx.root.first_child("materials") else {
        return Ok(());
    };

    for entry in section.children_named("mat") {
        let Some(id) = entry.attr_i32("mid").and_then(MaterialId::from_raw) else {
            log::warn!("Skipping <mat> at {}: no valid 'mid'", entry.position());
            continue;
        };

        let name = entry.attr_str("name").unwrap_or_default();
        if name.is_empty() {
            log::warn!("Skipping <mat mid=\"{}\"> at {}: no 'name'", id, entry.position());
            continue;
        }

        let material = ctx.assets.by_name(name);
        if let Some(previous) = ctx.scene.materials.register(id, material) {
            log::warn!(
                "Material id {} redefined, replacing '{}' with '{}'",
                id,
                previous.name,
                name
            );
        }
    }

    Ok(())
}
