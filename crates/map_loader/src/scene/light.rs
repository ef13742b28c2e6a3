//! Point lights

use crate::foundation::math::Vec3;

/// Point light placed by the map
///
/// Lights are scene-level records rather than entities. Every field that a
/// map leaves out is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Light {
    /// World space position
    pub position: Vec3,
    /// RGB color
    pub color: Vec3,
    /// Falloff distance
    pub distance: f32,
    /// Intensity multiplier
    pub energy: f32,
    /// Specular contribution
    pub specular: f32,
}
