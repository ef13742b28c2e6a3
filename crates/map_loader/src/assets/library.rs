//! In-memory caching asset library
//!
//! Each name is resolved once and the handle reused afterwards. Real file
//! decoding is the job of whoever fills the library; a name that was never
//! inserted resolves to a placeholder so a map with a typo still loads.

use std::collections::HashMap;

use super::{Material, MaterialResolver, MeshHandle, MeshResolver, TextureHandle, TextureResolver};
use crate::ecs::components::Transform;
use crate::foundation::collections::HandleMap;
use crate::render::Mesh;

/// Texture record known to the library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    /// Name the texture was requested by
    pub name: String,
}

/// Material definition: a diffuse texture name
#[derive(Debug, Clone)]
struct MaterialDefinition {
    diffuse: Option<String>,
}

/// Caching implementation of every resolver trait
#[derive(Debug, Default)]
pub struct AssetLibrary {
    meshes: HandleMap<Mesh>,
    mesh_names: HashMap<String, MeshHandle>,
    textures: HandleMap<Texture>,
    texture_names: HashMap<String, TextureHandle>,
    materials: HashMap<String, MaterialDefinition>,
}

impl AssetLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Register mesh data under `name`, replacing any cached entry
    pub fn insert_mesh(&mut self, name: impl Into<String>, mesh: Mesh) -> MeshHandle {
        let handle = MeshHandle::new(self.meshes.insert(mesh));
        self.mesh_names.insert(name.into(), handle);
        handle
    }

    /// Define a named material with an optional diffuse texture
    pub fn define_material(&mut self, name: impl Into<String>, diffuse: Option<&str>) {
        self.materials.insert(
            name.into(),
            MaterialDefinition {
                diffuse: diffuse.map(str::to_string),
            },
        );
    }

    /// Look up mesh data
    pub fn mesh(&self, handle: MeshHandle) -> Option<&Mesh> {
        self.meshes.get(handle.key())
    }

    /// Look up a texture record
    pub fn texture(&self, handle: TextureHandle) -> Option<&Texture> {
        self.textures.get(handle.key())
    }

    /// Number of meshes held, generated ones included
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Number of distinct textures held
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }
}

impl MeshResolver for AssetLibrary {
    fn get_mesh(&mut self, name: &str) -> MeshHandle {
        if let Some(&handle) = self.mesh_names.get(name) {
            return handle;
        }
        log::debug!("Mesh '{}' not preloaded, using empty placeholder", name);
        let handle = MeshHandle::new(self.meshes.insert(Mesh::default()));
        self.mesh_names.insert(name.to_string(), handle);
        handle
    }

    fn portal_box(&mut self, transform: &Transform) -> MeshHandle {
        MeshHandle::new(self.meshes.insert(Mesh::portal_box(transform)))
    }
}

impl TextureResolver for AssetLibrary {
    fn get_texture(&mut self, name: &str) -> TextureHandle {
        if let Some(&handle) = self.texture_names.get(name) {
            return handle;
        }
        let handle = TextureHandle::new(self.textures.insert(Texture {
            name: name.to_string(),
        }));
        self.texture_names.insert(name.to_string(), handle);
        handle
    }
}

impl MaterialResolver for AssetLibrary {
    fn from_texture(&mut self, texture: &str) -> Material {
        let diffuse = self.get_texture(texture);
        Material::named(texture).with_diffuse(diffuse)
    }

    fn by_name(&mut self, name: &str) -> Material {
        let Some(definition) = self.materials.get(name).cloned() else {
            log::warn!("Material '{}' is not defined, using it untextured", name);
            return Material::named(name);
        };

        let material = Material::named(name);
        match definition.diffuse {
            Some(texture) => material.with_diffuse(self.get_texture(&texture)),
            None => material,
        }
    }
}
