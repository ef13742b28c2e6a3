//! Surface material records

use super::TextureHandle;

/// Surface description attached to drawables
///
/// `Material::default()` is the empty material: no name, no texture, UV
/// scale 1. Unresolved material references fall back to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Name the material was resolved from, empty if none
    pub name: String,
    /// Diffuse texture
    pub diffuse: Option<TextureHandle>,
    /// Texture repeat factor along U
    pub scale_u: f32,
    /// Texture repeat factor along V
    pub scale_v: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            diffuse: None,
            scale_u: 1.0,
            scale_v: 1.0,
        }
    }
}

impl Material {
    /// Create an untextured material with the given name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder pattern: Set the diffuse texture
    pub fn with_diffuse(mut self, texture: TextureHandle) -> Self {
        self.diffuse = Some(texture);
        self
    }

    /// Builder pattern: Set both UV repeat factors
    pub fn with_uv_scale(mut self, scale: f32) -> Self {
        self.scale_u = scale;
        self.scale_v = scale;
        self
    }

    /// Check whether this is the empty fallback material
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
