//! Geometry data handed to the renderer

pub mod mesh;

pub use mesh::{Mesh, Vertex};
