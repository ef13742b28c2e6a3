//! Component records attached to map entities
//!
//! Pure data, no behavior beyond small constructors and helpers.

pub mod collision;
pub mod health;
pub mod motion;
pub mod renderable;
pub mod transform;
pub mod trigger;

pub use collision::AaCollisionBox;
pub use health::Health;
pub use motion::PlayerMotion;
pub use renderable::MeshDrawable;
pub use transform::Transform;
pub use trigger::Trigger;
