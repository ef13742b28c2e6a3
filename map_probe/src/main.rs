//! Map probe
//!
//! Loads one map and logs what the scene builder produced.
//!
//! ```text
//! map_probe <map-name> [loader-config.toml|.ron]
//! ```

use map_loader::assets::AssetLibrary;
use map_loader::config::{Config, ConfigError, LoaderConfig};
use map_loader::ecs::components::{MeshDrawable, Transform, Trigger};
use map_loader::foundation::logging;
use map_loader::{LoadError, Scene, SceneBuilder};
use thiserror::Error;

#[derive(Error, Debug)]
enum ProbeError {
    #[error("usage: map_probe <map-name> [loader-config]")]
    Usage,

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("level failed to load: {0}")]
    Load(#[from] LoadError),
}

fn main() {
    logging::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ProbeError> {
    let mut args = std::env::args().skip(1);
    let map_name = args.next().ok_or(ProbeError::Usage)?;
    let config = match args.next() {
        Some(path) => LoaderConfig::load_from_file(path)?,
        None => LoaderConfig::default(),
    };

    log::info!("Loading '{}' from {}", map_name, config.map_path(&map_name).display());

    let builder = SceneBuilder::new(config);
    let mut assets = AssetLibrary::new();
    let scene = builder.build(&map_name, &mut assets)?;

    report(&scene);
    log::info!(
        "Asset library holds {} meshes and {} textures",
        assets.mesh_count(),
        assets.texture_count()
    );
    Ok(())
}

fn report(scene: &Scene) {
    if let Some(spawn) = scene.start.get::<Transform>() {
        log::info!("Spawn at {:?}", spawn.position.as_slice());
    }
    match scene.end.get::<Transform>() {
        Some(door) => log::info!("Exit door at {:?}", door.position.as_slice()),
        None => log::warn!("Map has no exit door"),
    }

    for (id, material) in scene.materials.iter() {
        log::debug!("Material {} -> '{}'", id, material.name);
    }

    for entity in &scene.entities {
        let position = entity
            .get::<Transform>()
            .map(|t| t.position)
            .unwrap_or_default();
        if let Some(trigger) = entity.get::<Trigger>() {
            log::debug!(
                "{:?}: trigger '{}' at {:?}",
                entity.id(),
                trigger.trigger_type,
                position.as_slice()
            );
        } else if let Some(drawable) = entity.get::<MeshDrawable>() {
            log::debug!(
                "{:?}: drawable '{}' at {:?}",
                entity.id(),
                drawable.material.name,
                position.as_slice()
            );
        }
    }

    for light in &scene.lights {
        log::debug!(
            "Light at {:?}, color {:?}, energy {}",
            light.position.as_slice(),
            light.color.as_slice(),
            light.energy
        );
    }

    log::info!("{}", scene.summary());
}
