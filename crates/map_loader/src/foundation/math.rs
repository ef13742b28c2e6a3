//! Math utilities and types
//!
//! Provides the vector and rotation types used by map transforms.

pub use nalgebra::{UnitQuaternion, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Quaternion type for rotations
pub type Quat = UnitQuaternion<f32>;

/// Convert degrees to radians component-wise
pub fn radians(degrees: Vec3) -> Vec3 {
    degrees.map(f32::to_radians)
}

/// Build a rotation from Euler angles in radians (X, then Y, then Z)
pub fn euler_to_quat(euler: &Vec3) -> Quat {
    Quat::from_euler_angles(euler.x, euler.y, euler.z)
}
