//! Asset resolution seams
//!
//! The loader never reads meshes, textures or materials itself. It asks an
//! [`AssetResolver`] for them by name and stores the returned handles.
//! [`AssetLibrary`] is the in-memory caching implementation.

pub mod library;
pub mod material;

pub use library::{AssetLibrary, Texture};
pub use material::Material;

use crate::ecs::components::Transform;
use crate::foundation::collections::TypedHandle;
use crate::render::Mesh;

/// Handle to a mesh owned by an asset resolver
pub type MeshHandle = TypedHandle<Mesh>;

/// Handle to a texture owned by an asset resolver
pub type TextureHandle = TypedHandle<Texture>;

/// Resolves meshes by name and generates procedural ones
pub trait MeshResolver {
    /// Get the mesh with the given name
    fn get_mesh(&mut self, name: &str) -> MeshHandle;

    /// Generate a box mesh fitted to `transform`
    fn portal_box(&mut self, transform: &Transform) -> MeshHandle;
}

/// Resolves materials by name or by texture
pub trait MaterialResolver {
    /// Material whose diffuse map is the named texture
    fn from_texture(&mut self, texture: &str) -> Material;

    /// Material registered under `name`
    fn by_name(&mut self, name: &str) -> Material;
}

/// Resolves textures by name
pub trait TextureResolver {
    /// Get the texture with the given name
    fn get_texture(&mut self, name: &str) -> TextureHandle;
}

/// Everything the scene builder needs from the asset side
pub trait AssetResolver: MeshResolver + MaterialResolver + TextureResolver {}

impl<T: MeshResolver + MaterialResolver + TextureResolver> AssetResolver for T {}
