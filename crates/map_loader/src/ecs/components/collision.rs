//! Collision component

use crate::physics::Aabb;

/// Axis-aligned collision volume in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AaCollisionBox {
    /// World space bounds
    pub bounds: Aabb,
}

impl AaCollisionBox {
    /// Wrap world space bounds
    pub const fn new(bounds: Aabb) -> Self {
        Self { bounds }
    }
}
