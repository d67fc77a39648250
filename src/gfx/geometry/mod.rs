//! # Procedural Geometry Generation
//!
//! This module generates the primitive shapes the resort scene is built from,
//! so the layout never needs external model files for its dressing.
//!
//! ## Supported Primitives
//!
//! - **Box**: width × height × depth box (buildings, balconies, boat hulls)
//! - **Sphere**: UV sphere (tree foliage)
//! - **Cylinder**: tapered cylinder (tree trunks)
//! - **Plane**: horizontal plane in XZ (ground and water)
//!
//! All shapes are Y-up and centered at the origin; placement happens through
//! the owning object's transform.
//!
//! ## Usage
//!
//! ```rust
//! use resort_scene::gfx::geometry::{generate_box, generate_plane, generate_sphere};
//!
//! let hotel = generate_box(200.0, 160.0, 80.0);
//! let foliage = generate_sphere(10.0, 8, 6);
//! let ground = generate_plane(4000.0, 4000.0, 1, 1);
//! assert_eq!(hotel.triangle_count(), 12);
//! ```

pub mod bounds;
pub mod primitives;
pub mod vertex;

pub use bounds::BoundingBox;
pub use primitives::*;
pub use vertex::Vertex3D;

/// Represents generated geometry data ready for GPU upload
#[derive(Debug, Clone, Default)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Local-space bounds of the vertex positions
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_vertices(&self.vertices)
    }

    /// Interleaves positions and normals into the vertex format a renderer uploads.
    pub fn interleaved(&self) -> Vec<Vertex3D> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, position)| Vertex3D {
                position: *position,
                normal: self.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
            })
            .collect()
    }
}
