//! Transform component
//!
//! Position, rotation and scale of a map entity. Rotation is stored as Euler
//! angles in radians (applied X, then Y, then Z); map documents write degrees.

use crate::foundation::math::{euler_to_quat, Quat, Vec3};

/// Spatial placement of an entity in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World space position
    pub position: Vec3,

    /// Euler angles in radians
    pub rotation: Vec3,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create from position only
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Builder pattern: Set rotation from Euler angles in radians
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder pattern: Set scale (non-uniform)
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Rotation as a quaternion
    pub fn orientation(&self) -> Quat {
        euler_to_quat(&self.rotation)
    }
}
