//! Collision volumes
//!
//! Only the axis-aligned box used for map geometry lives here; simulation
//! belongs to the game.

pub mod aabb;

pub use aabb::Aabb;
