//! Player locomotion component

use crate::foundation::math::Vec3;

/// Movement state of the player
///
/// The loader only attaches it; movement systems own its contents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerMotion {
    /// Current velocity
    pub velocity: Vec3,
    /// Standing on solid ground
    pub grounded: bool,
    /// Walking speed
    pub speed: f32,
}

impl Default for PlayerMotion {
    fn default() -> Self {
        Self {
            velocity: Vec3::zeros(),
            grounded: false,
            speed: 0.1,
        }
    }
}
