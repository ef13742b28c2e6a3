//! Drawable component

use crate::assets::{Material, MeshHandle};

/// Mesh plus the material it is drawn with
#[derive(Debug, Clone, PartialEq)]
pub struct MeshDrawable {
    /// Surface material
    pub material: Material,

    /// Geometry to draw
    pub mesh: MeshHandle,
}

impl MeshDrawable {
    /// Create a new drawable
    pub const fn new(material: Material, mesh: MeshHandle) -> Self {
        Self { material, mesh }
    }
}
