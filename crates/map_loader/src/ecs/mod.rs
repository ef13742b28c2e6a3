//! Entity-Component model for assembled scenes
//!
//! Entities hold a closed set of component kinds. Each kind appears at most
//! once per entity; attaching a component of a kind that is already present
//! replaces it.

pub mod component;
pub mod components;
pub mod entity;

pub use component::{Component, ComponentData, ComponentKind};
pub use entity::{Entity, EntityId};
