//! # Primitive Shape Generation
//!
//! Shapes are Y-up, centered at the origin and sized in world units, so a
//! layout object only needs a translation to land in place. All shapes carry
//! outward normals and UV coordinates.

use super::GeometryData;
use std::f32::consts::PI;

/// Outward normal, U axis and V axis of each box face. `u × v == normal`,
/// which keeps every face counter-clockwise seen from outside.
const BOX_FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
];

/// Generate a box of the given extents centered at the origin
///
/// # Arguments
/// * `width` - Extent along X
/// * `height` - Extent along Y
/// * `depth` - Extent along Z
///
/// Each face gets its own four vertices so normals stay flat.
pub fn generate_box(width: f32, height: f32, depth: f32) -> GeometryData {
    let mut data = GeometryData::new();
    let extents = [width, height, depth];

    for (normal, u_axis, v_axis) in BOX_FACES.iter() {
        let base = data.vertices.len() as u32;

        for &(s, t) in &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
            let mut position = [0.0; 3];
            for axis in 0..3 {
                let unit = normal[axis] * 0.5 + u_axis[axis] * (s - 0.5) + v_axis[axis] * (t - 0.5);
                position[axis] = unit * extents[axis];
            }
            data.vertices.push(position);
            data.normals.push(*normal);
            data.tex_coords.push([s, t]);
        }

        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generate a UV sphere with specified resolution
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `width_segments` - Number of longitude segments (at least 3)
/// * `height_segments` - Number of latitude segments (at least 2)
pub fn generate_sphere(radius: f32, width_segments: u32, height_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let long_segs = width_segments.max(3);
    let lat_segs = height_segments.max(2);

    for lat in 0..=lat_segs {
        let v = lat as f32 / lat_segs as f32;
        let theta = v * PI;

        for long in 0..=long_segs {
            let u = long as f32 / long_segs as f32;
            let phi = u * 2.0 * PI;

            let normal = [
                -phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            ];

            data.vertices
                .push([normal[0] * radius, normal[1] * radius, normal[2] * radius]);
            data.normals.push(normal);
            data.tex_coords.push([u, 1.0 - v]);
        }
    }

    let row = long_segs + 1;
    for lat in 0..lat_segs {
        for long in 0..long_segs {
            let a = lat * row + long + 1;
            let b = lat * row + long;
            let c = (lat + 1) * row + long;
            let d = (lat + 1) * row + long + 1;

            // The pole rows collapse to a point, skip their degenerate halves
            if lat != 0 {
                data.indices.extend_from_slice(&[a, b, d]);
            }
            if lat != lat_segs - 1 {
                data.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    data
}

/// Generate a horizontal plane in the XZ plane with its normal along +Y
///
/// # Arguments
/// * `width` - Extent along X
/// * `depth` - Extent along Z
/// * `width_segments` - Number of subdivisions along X
/// * `depth_segments` - Number of subdivisions along Z
pub fn generate_plane(width: f32, depth: f32, width_segments: u32, depth_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let w_segs = width_segments.max(1);
    let d_segs = depth_segments.max(1);

    for row in 0..=d_segs {
        let v = row as f32 / d_segs as f32;
        let z = (v - 0.5) * depth;

        for col in 0..=w_segs {
            let u = col as f32 / w_segs as f32;
            let x = (u - 0.5) * width;

            data.vertices.push([x, 0.0, z]);
            data.normals.push([0.0, 1.0, 0.0]);
            data.tex_coords.push([u, v]);
        }
    }

    for row in 0..d_segs {
        for col in 0..w_segs {
            let i = row * (w_segs + 1) + col;
            let next_row = i + w_segs + 1;

            data.indices.extend_from_slice(&[i, next_row, i + 1]);
            data.indices
                .extend_from_slice(&[next_row, next_row + 1, i + 1]);
        }
    }

    data
}

/// Generate a (possibly tapered) cylinder standing on the Y axis
///
/// # Arguments
/// * `radius_top` - Radius of the top ring
/// * `radius_bottom` - Radius of the bottom ring
/// * `height` - Extent along Y, from `-height/2` to `height/2`
/// * `radial_segments` - Number of segments around the axis (at least 3)
///
/// A cap is only emitted for a ring with a non-zero radius.
pub fn generate_cylinder(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    radial_segments: u32,
) -> GeometryData {
    let mut data = GeometryData::new();

    let segs = radial_segments.max(3);
    let half_height = height * 0.5;
    let slope = if height != 0.0 {
        (radius_bottom - radius_top) / height
    } else {
        0.0
    };

    // Side: a bottom ring followed by a top ring
    for &(y, radius, v) in &[(-half_height, radius_bottom, 0.0), (half_height, radius_top, 1.0)] {
        for i in 0..=segs {
            let u = i as f32 / segs as f32;
            let angle = u * 2.0 * PI;
            let (sin_a, cos_a) = angle.sin_cos();

            let length = (1.0 + slope * slope).sqrt();
            data.vertices.push([radius * cos_a, y, radius * sin_a]);
            data.normals
                .push([cos_a / length, slope / length, sin_a / length]);
            data.tex_coords.push([u, v]);
        }
    }

    let ring = segs + 1;
    for i in 0..segs {
        let bottom = i;
        let bottom_next = i + 1;
        let top = ring + i;
        let top_next = ring + i + 1;

        data.indices.extend_from_slice(&[bottom, top, bottom_next]);
        data.indices.extend_from_slice(&[top, top_next, bottom_next]);
    }

    if radius_bottom > 0.0 {
        push_cap(&mut data, -half_height, radius_bottom, segs, false);
    }
    if radius_top > 0.0 {
        push_cap(&mut data, half_height, radius_top, segs, true);
    }

    data
}

fn push_cap(data: &mut GeometryData, y: f32, radius: f32, segs: u32, facing_up: bool) {
    let normal = if facing_up {
        [0.0, 1.0, 0.0]
    } else {
        [0.0, -1.0, 0.0]
    };

    let center = data.vertices.len() as u32;
    data.vertices.push([0.0, y, 0.0]);
    data.normals.push(normal);
    data.tex_coords.push([0.5, 0.5]);

    for i in 0..=segs {
        let angle = i as f32 / segs as f32 * 2.0 * PI;
        let (sin_a, cos_a) = angle.sin_cos();
        data.vertices.push([radius * cos_a, y, radius * sin_a]);
        data.normals.push(normal);
        data.tex_coords
            .push([0.5 + 0.5 * cos_a, 0.5 + 0.5 * sin_a]);
    }

    for i in 0..segs {
        let current = center + 1 + i;
        let next = current + 1;
        if facing_up {
            data.indices.extend_from_slice(&[center, next, current]);
        } else {
            data.indices.extend_from_slice(&[center, current, next]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    fn face_normal(data: &GeometryData, tri: usize) -> [f32; 3] {
        let idx = &data.indices[tri * 3..tri * 3 + 3];
        let a = data.vertices[idx[0] as usize];
        let b = data.vertices[idx[1] as usize];
        let c = data.vertices[idx[2] as usize];
        let e1 = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
        let e2 = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
        [
            e1[1] * e2[2] - e1[2] * e2[1],
            e1[2] * e2[0] - e1[0] * e2[2],
            e1[0] * e2[1] - e1[1] * e2[0],
        ]
    }

    #[test]
    fn test_box_generation() {
        let hotel = generate_box(200.0, 160.0, 80.0);
        assert_eq!(hotel.vertex_count(), 24); // 6 faces * 4 vertices
        assert_eq!(hotel.indices.len(), 36); // 6 faces * 2 triangles * 3 indices
        assert_eq!(hotel.triangle_count(), 12);

        let bounds = hotel.bounds();
        assert_eq!(bounds.min, Vector3::new(-100.0, -80.0, -40.0));
        assert_eq!(bounds.max, Vector3::new(100.0, 80.0, 40.0));
    }

    #[test]
    fn test_box_winding_faces_outward() {
        let cube = generate_box(2.0, 2.0, 2.0);
        for tri in 0..cube.triangle_count() {
            let n = face_normal(&cube, tri);
            let stored = cube.normals[cube.indices[tri * 3] as usize];
            let dot = n[0] * stored[0] + n[1] * stored[1] + n[2] * stored[2];
            assert!(dot > 0.0, "triangle {} faces inward", tri);
        }
    }

    #[test]
    fn test_sphere_generation() {
        let sphere = generate_sphere(10.0, 8, 6);
        assert_eq!(sphere.vertex_count(), 9 * 7);
        assert_eq!(sphere.vertices.len(), sphere.normals.len());
        assert_eq!(sphere.vertices.len(), sphere.tex_coords.len());
        // Two triangles per quad, minus one per quad on each pole row
        assert_eq!(sphere.triangle_count(), 8 * 6 * 2 - 8 * 2);

        let size = sphere.bounds().size();
        assert!((size.y - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_plane_generation() {
        let plane = generate_plane(2.0, 2.0, 2, 2);
        assert_eq!(plane.vertices.len(), 9); // 3x3 grid
        assert_eq!(plane.indices.len(), 24); // 4 quads * 2 triangles * 3 indices
        assert!(plane.vertices.iter().all(|v| v[1] == 0.0));

        for tri in 0..plane.triangle_count() {
            assert!(face_normal(&plane, tri)[1] > 0.0);
        }
    }

    #[test]
    fn test_cylinder_generation() {
        let trunk = generate_cylinder(3.0, 4.0, 15.0, 8);
        let bounds = trunk.bounds();
        assert!((bounds.min.y + 7.5).abs() < 1e-5);
        assert!((bounds.max.y - 7.5).abs() < 1e-5);
        assert!((bounds.max.x - 4.0).abs() < 1e-5);

        // 2 rings + 2 caps (center + ring each)
        assert_eq!(trunk.vertex_count(), 9 * 2 + 10 * 2);
        assert_eq!(trunk.triangle_count(), 8 * 2 + 8 * 2);

        let cone = generate_cylinder(0.0, 4.0, 15.0, 8);
        assert_eq!(cone.triangle_count(), 8 * 2 + 8);
    }
}
