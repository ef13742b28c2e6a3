//! # Map Loader
//!
//! Turns a declarative XML level description into an in-memory [`Scene`]:
//! a player, start and end markers, composite entities (walls, acid pools,
//! triggers, decorative models) and point lights.
//!
//! ## Features
//!
//! - **Ordered extraction pipeline**: materials, spawn, door, models, lights,
//!   walls, acids and triggers run in a fixed sequence over one document
//! - **Tagged component set**: entities carry at most one component per kind
//! - **Lenient material references**: unknown material ids fall back to the
//!   default material instead of failing the load
//! - **Pluggable assets**: meshes, textures and materials come from
//!   [`assets::AssetResolver`] implementations
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use map_loader::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let builder = SceneBuilder::new(LoaderConfig::default());
//!     let mut assets = AssetLibrary::new();
//!     let scene = builder.build("level1", &mut assets)?;
//!     println!("{}", scene.summary());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod assets;
pub mod config;
pub mod ecs;
pub mod foundation;
pub mod loader;
pub mod physics;
pub mod render;
pub mod scene;

pub use loader::{LoadError, SceneBuilder};
pub use scene::Scene;

/// Common imports for loader users
pub mod prelude {
    pub use crate::{
        assets::{AssetLibrary, AssetResolver, Material, MeshHandle, TextureHandle},
        config::{Config, ConfigError, LoaderConfig},
        ecs::{
            components::{AaCollisionBox, Health, MeshDrawable, PlayerMotion, Transform, Trigger},
            Component, ComponentData, ComponentKind, Entity, EntityId,
        },
        foundation::math::Vec3,
        loader::{LoadError, SceneBuilder},
        physics::Aabb,
        scene::{Light, MaterialId, MaterialRegistry, Scene},
    };
}
