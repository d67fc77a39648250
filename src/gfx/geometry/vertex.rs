//! # Vertex Data Structures
//!
//! GPU-compatible vertex format handed to the host renderer.

/// A 3D vertex with position and normal data.
///
/// The `#[repr(C)]` layout lets a host renderer upload a `&[Vertex3D]` with
/// [`bytemuck::cast_slice`] without copying.
///
/// # Examples
///
/// ```
/// use resort_scene::gfx::geometry::Vertex3D;
///
/// let vertex = Vertex3D {
///     position: [0.0, 1.0, 0.0],
///     normal: [0.0, 1.0, 0.0],
/// };
/// let bytes: &[u8] = bytemuck::bytes_of(&vertex);
/// assert_eq!(bytes.len(), 24);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// 3D normal vector [nx, ny, nz] for lighting calculations
    pub normal: [f32; 3],
}

impl Vertex3D {
    /// Size in bytes of one vertex, the stride of an interleaved vertex buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex3D>();
}
