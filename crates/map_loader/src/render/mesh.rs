//! Mesh representation for map geometry
//!
//! Backend-agnostic vertex and index data. Wall and acid boxes are generated
//! here; everything else is loaded by an asset resolver.

// The bytemuck derives expand to `unsafe impl` blocks.
#![allow(unsafe_code)]

use bytemuck::{Pod, Zeroable};

use crate::ecs::components::Transform;

/// 3D vertex with position, normal and texture coordinates
///
/// `#[repr(C)]` keeps the layout stable for GPU buffer uploads.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in 3D space
    pub position: [f32; 3],

    /// Normal vector
    pub normal: [f32; 3],

    /// Texture coordinates
    pub tex_coord: [f32; 2],
}

impl Vertex {
    /// Create a new vertex
    pub const fn new(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }
}

/// Vertices plus triangle indices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex data
    pub vertices: Vec<Vertex>,

    /// Index data for triangles
    pub indices: Vec<u32>,
}

/// One box face: outward normal, the two in-plane axes, and which scale
/// components tile along those axes
struct Face {
    normal: [f32; 3],
    u_axis: [f32; 3],
    v_axis: [f32; 3],
    u_scale: usize,
    v_scale: usize,
}

const BOX_FACES: [Face; 6] = [
    // +X
    Face {
        normal: [1.0, 0.0, 0.0],
        u_axis: [0.0, 0.0, -1.0],
        v_axis: [0.0, 1.0, 0.0],
        u_scale: 2,
        v_scale: 1,
    },
    // -X
    Face {
        normal: [-1.0, 0.0, 0.0],
        u_axis: [0.0, 0.0, 1.0],
        v_axis: [0.0, 1.0, 0.0],
        u_scale: 2,
        v_scale: 1,
    },
    // +Y
    Face {
        normal: [0.0, 1.0, 0.0],
        u_axis: [1.0, 0.0, 0.0],
        v_axis: [0.0, 0.0, -1.0],
        u_scale: 0,
        v_scale: 2,
    },
    // -Y
    Face {
        normal: [0.0, -1.0, 0.0],
        u_axis: [1.0, 0.0, 0.0],
        v_axis: [0.0, 0.0, 1.0],
        u_scale: 0,
        v_scale: 2,
    },
    // +Z
    Face {
        normal: [0.0, 0.0, 1.0],
        u_axis: [1.0, 0.0, 0.0],
        v_axis: [0.0, 1.0, 0.0],
        u_scale: 0,
        v_scale: 1,
    },
    // -Z
    Face {
        normal: [0.0, 0.0, -1.0],
        u_axis: [-1.0, 0.0, 0.0],
        v_axis: [0.0, 1.0, 0.0],
        u_scale: 0,
        v_scale: 1,
    },
];

impl Mesh {
    /// Create a new mesh
    pub const fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Generate a portal box fitted to `transform`
    ///
    /// The geometry is a unit cube centered at the origin; the transform
    /// itself scales it at draw time. Texture coordinates on each face run
    /// from 0 to the face's world-space size, so a tiling texture keeps its
    /// density however large the wall is. 24 vertices, 36 indices.
    pub fn portal_box(transform: &Transform) -> Self {
        let scale = transform.scale.abs();
        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (base, face) in (0u32..).step_by(4).zip(BOX_FACES.iter()) {
            let u_extent = scale[face.u_scale];
            let v_extent = scale[face.v_scale];

            for (du, dv) in [(-0.5f32, -0.5f32), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
                let position = [
                    face.normal[0] * 0.5 + face.u_axis[0] * du + face.v_axis[0] * dv,
                    face.normal[1] * 0.5 + face.u_axis[1] * du + face.v_axis[1] * dv,
                    face.normal[2] * 0.5 + face.u_axis[2] * du + face.v_axis[2] * dv,
                ];
                let tex_coord = [(du + 0.5) * u_extent, (dv + 0.5) * v_extent];
                vertices.push(Vertex::new(position, face.normal, tex_coord));
            }

            indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
        }

        Self::new(vertices, indices)
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check whether the mesh holds no geometry
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Raw vertex bytes for buffer uploads
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}
