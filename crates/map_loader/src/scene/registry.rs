//! Material registry
//!
//! Maps the small integer ids written in a map's `materials` section to
//! resolved materials. Ids only mean something within the map that declared
//! them.

use std::collections::BTreeMap;
use std::fmt;

use crate::assets::Material;

/// Map-local material identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub u32);

impl MaterialId {
    /// Convert a raw document value; negative values are not ids
    pub fn from_raw(raw: i32) -> Option<Self> {
        u32::try_from(raw).ok().map(Self)
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Id to material mapping scoped to one scene load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialRegistry {
    entries: BTreeMap<MaterialId, Material>,
}

impl MaterialRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `material` at `id`, returning what was there before
    pub fn register(&mut self, id: MaterialId, material: Material) -> Option<Material> {
        self.entries.insert(id, material)
    }

    /// Look up a registered material
    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.entries.get(&id)
    }

    /// Look up a material, falling back to [`Material::default`]
    ///
    /// A wall pointing at an id the map never declared still loads; it just
    /// renders with the empty material.
    pub fn resolve_or_default(&self, id: MaterialId) -> Material {
        self.get(id).cloned().unwrap_or_else(|| {
            log::warn!("Material id {} is not registered, using default material", id);
            Material::default()
        })
    }

    /// Number of registered ids
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered entries in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (MaterialId, &Material)> {
        self.entries.iter().map(|(&id, material)| (id, material))
    }
}
