//! Axis-aligned bounding boxes

use crate::ecs::components::Transform;
use crate::foundation::math::Vec3;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Create from corners; components are sorted so `min <= max`
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// Create from a center point and half extents
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half_extents = half_extents.abs();
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Generate the cage of a transform
    ///
    /// The cage is the smallest axis-aligned box that encloses the unit cube
    /// (side 1, centered at the origin) after scaling, rotating and
    /// translating it by `transform`. It is centered on `transform.position`.
    pub fn cage(transform: &Transform) -> Self {
        let half_size = transform.scale.abs() * 0.5;
        let rotation = transform.orientation().to_rotation_matrix();
        // Extent of a rotated box along each world axis: |R| * half_size
        let half_extents = rotation.matrix().abs() * half_size;
        Self::from_center_half_extents(transform.position, half_extents)
    }

    /// Center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths along each axis
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Check whether a point lies inside or on the boundary
    pub fn contains_point(&self, point: &Vec3) -> bool {
        (0..3).all(|axis| point[axis] >= self.min[axis] && point[axis] <= self.max[axis])
    }

    /// Check whether two boxes overlap (touching counts)
    pub fn intersects(&self, other: &Self) -> bool {
        (0..3).all(|axis| self.min[axis] <= other.max[axis] && self.max[axis] >= other.min[axis])
    }
}
