//! Scene builder
//!
//! Reads one map document and runs the section extractors over it in a fixed
//! order:
//!
//! 1. materials
//! 2. spawn
//! 3. door (`end`)
//! 4. models
//! 5. lights
//! 6. walls
//! 7. acids
//! 8. triggers
//!
//! Walls look up the material registry filled by step 1, so the order is not
//! negotiable. The first fatal error aborts the remaining steps and no scene
//! is returned.

pub mod document;
mod error;
pub mod extract;

#[cfg(test)]
mod tests;

pub use document::{MapDocument, MapElement};
pub use error::LoadError;

use std::path::Path;

use crate::assets::AssetResolver;
use crate::config::LoaderConfig;
use crate::scene::Scene;

/// State threaded through every extractor of one load
pub struct LoadContext<'doc, 'input, 'assets> {
    /// Root element of the map document
    pub root: MapElement<'doc, 'input>,
    /// Scene under construction
    pub scene: Scene,
    /// Where meshes, textures and materials come from
    pub assets: &'assets mut dyn AssetResolver,
}

/// One pipeline step
pub type Extractor = fn(&mut LoadContext<'_, '_, '_>) -> Result<(), LoadError>;

/// Extraction steps in execution order
pub const PIPELINE: [(&str, Extractor); 8] = [
    ("materials", extract::extract_materials),
    ("spawn", extract::extract_spawn),
    ("door", extract::extract_door),
    ("models", extract::extract_models),
    ("lights", extract::extract_lights),
    ("walls", extract::extract_walls),
    ("acids", extract::extract_acids),
    ("triggers", extract::extract_triggers),
];

/// Builds scenes from map files
#[derive(Debug, Clone, Default)]
pub struct SceneBuilder {
    config: LoaderConfig,
}

impl SceneBuilder {
    /// Create a builder resolving map names through `config`
    pub const fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Get the loader configuration
    pub const fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load the named map from the configured data directory
    ///
    /// # Errors
    /// - [`LoadError::ResourceUnavailable`] if the file cannot be read
    /// - [`LoadError::MalformedDocument`] if it is not UTF-8 or not well-formed markup
    /// - [`LoadError::MissingRequiredSection`] if it has no `spawn`
    pub fn build(
        &self,
        map_name: &str,
        assets: &mut dyn AssetResolver,
    ) -> Result<Scene, LoadError> {
        let path = self.config.map_path(map_name);
        let scene = Self::build_from_file(&path, assets)?;
        log::info!("Map '{}' loaded: {}", map_name, scene.summary());
        Ok(scene)
    }

    /// Load a map from an explicit file path
    ///
    /// # Errors
    /// Same as [`SceneBuilder::build`].
    pub fn build_from_file(
        path: &Path,
        assets: &mut dyn AssetResolver,
    ) -> Result<Scene, LoadError> {
        log::debug!("Reading map file {}", path.display());
        let bytes = std::fs::read(path).map_err(|source| {
            log::error!("Unable to load map file {}: {}", path.display(), source);
            LoadError::ResourceUnavailable {
                path: path.to_path_buf(),
                source,
            }
        })?;

        // Readable but not text is a document problem, not a missing resource
        let source = std::str::from_utf8(&bytes).map_err(|error| {
            log::error!("Map file {} is not valid UTF-8: {}", path.display(), error);
            LoadError::MalformedDocument(format!("{}: {}", path.display(), error))
        })?;

        Self::build_from_str(source, assets)
    }

    /// Build a scene from in-memory markup
    ///
    /// # Errors
    /// [`LoadError::MalformedDocument`] or [`LoadError::MissingRequiredSection`].
    pub fn build_from_str(
        source: &str,
        assets: &mut dyn AssetResolver,
    ) -> Result<Scene, LoadError> {
        let document = MapDocument::parse(source)?;
        let mut ctx = LoadContext {
            root: document.root(),
            scene: Scene::new(),
            assets,
        };

        for (stage, extract) in PIPELINE {
            log::trace!("Extracting {}", stage);
            extract(&mut ctx).map_err(|error| {
                log::error!("Map load aborted during {} extraction: {}", stage, error);
                error
            })?;
        }

        Ok(ctx.scene)
    }
}
