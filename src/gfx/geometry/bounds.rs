//! Axis-aligned bounding boxes used for camera framing and scene extents.

use std::ops::{BitOr, BitOrAssign};

use cgmath::{Vector3, Zero};

/// Axis-aligned bounding box in world units.
///
/// An empty box has `min = +inf` and `max = -inf`, so that the union with any
/// point yields that point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl BoundingBox {
    /// Create a box from its two corners
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Creates the empty box (+infinity min, -infinity max).
    pub fn empty() -> Self {
        Self {
            min: Vector3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Vector3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Create a box from a center point and a full size along each axis
    pub fn from_center_size(center: Vector3<f32>, size: Vector3<f32>) -> Self {
        let half = size * 0.5;
        Self::new(center - half, center + half)
    }

    /// Create a box from a flat `[x, y, z, x, y, z, ...]` position array,
    /// the layout OBJ meshes are loaded in.
    ///
    /// A trailing partial triple is ignored.
    pub fn from_positions(positions: &[f32]) -> Self {
        positions
            .chunks_exact(3)
            .fold(Self::empty(), |bounds, p| {
                bounds.with_point(Vector3::new(p[0], p[1], p[2]))
            })
    }

    /// Create a box from a set of vertices
    pub fn from_vertices(vertices: &[[f32; 3]]) -> Self {
        vertices.iter().fold(Self::empty(), |bounds, v| {
            bounds.with_point(Vector3::new(v[0], v[1], v[2]))
        })
    }

    /// True if the box encloses nothing.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Center of the box, or the origin if the box is empty
    pub fn center(&self) -> Vector3<f32> {
        if self.is_empty() {
            return Vector3::zero();
        }
        (self.min + self.max) * 0.5
    }

    /// Extent of the box along each axis, or zero if the box is empty
    pub fn size(&self) -> Vector3<f32> {
        if self.is_empty() {
            return Vector3::zero();
        }
        self.max - self.min
    }

    /// Largest of the three extents
    pub fn max_dimension(&self) -> f32 {
        let size = self.size();
        size.x.max(size.y).max(size.z)
    }

    /// Returns this box grown to contain `point`.
    pub fn with_point(self, point: Vector3<f32>) -> Self {
        Self {
            min: component_min(self.min, point),
            max: component_max(self.max, point),
        }
    }

    /// Smallest box containing both boxes
    pub fn union(&self, other: &BoundingBox) -> Self {
        Self {
            min: component_min(self.min, other.min),
            max: component_max(self.max, other.max),
        }
    }

    /// Box scaled about the world origin, matching an object scaled in place at
    /// the origin.
    pub fn scaled(&self, factor: f32) -> Self {
        if self.is_empty() {
            return *self;
        }
        let a = self.min * factor;
        let b = self.max * factor;
        Self::new(component_min(a, b), component_max(a, b))
    }

    /// Box moved by `offset`
    pub fn translated(&self, offset: Vector3<f32>) -> Self {
        if self.is_empty() {
            return *self;
        }
        Self::new(self.min + offset, self.max + offset)
    }

    /// True if `point` lies inside or on the boundary of the box
    pub fn contains(&self, point: Vector3<f32>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

/// Union
impl BitOr for BoundingBox {
    type Output = BoundingBox;

    fn bitor(self, rhs: BoundingBox) -> BoundingBox {
        self.union(&rhs)
    }
}

impl BitOrAssign for BoundingBox {
    fn bitor_assign(&mut self, rhs: BoundingBox) {
        *self = self.union(&rhs);
    }
}

fn component_min(a: Vector3<f32>, b: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z))
}

fn component_max(a: Vector3<f32>, b: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_positions() {
        let positions = [0.0, 0.0, 0.0, 1.0, 2.0, 3.0, -1.0, -2.0, -3.0];
        let bounds = BoundingBox::from_positions(&positions);

        assert_eq!(bounds.min, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(bounds.max, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(bounds.center(), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(bounds.size(), Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(bounds.max_dimension(), 6.0);
    }

    #[test]
    fn test_empty_box() {
        let bounds = BoundingBox::from_positions(&[]);
        assert!(bounds.is_empty());
        assert_eq!(bounds.size(), Vector3::zero());
        assert_eq!(bounds.center(), Vector3::zero());
        assert!(bounds.scaled(50.0).is_empty());
    }

    #[test]
    fn test_union_and_contains() {
        let a = BoundingBox::from_center_size(Vector3::new(0.0, 0.0, 0.0), Vector3::new(2.0, 2.0, 2.0));
        let b = BoundingBox::new(Vector3::new(3.0, -4.0, 0.0), Vector3::new(5.0, 0.0, 1.0));
        let both = a | b;

        assert_eq!(both.min, Vector3::new(-1.0, -4.0, -1.0));
        assert_eq!(both.max, Vector3::new(5.0, 1.0, 1.0));
        assert!(both.contains(Vector3::new(4.0, -3.0, 0.5)));
        assert!(!a.contains(Vector3::new(4.0, -3.0, 0.5)));

        let mut acc = BoundingBox::empty();
        acc |= a;
        assert_eq!(acc, a);
    }

    #[test]
    fn test_scaled_about_origin() {
        let bounds = BoundingBox::new(Vector3::new(-1.0, 0.0, 2.0), Vector3::new(1.0, 2.0, 4.0));
        let scaled = bounds.scaled(50.0);

        assert_eq!(scaled.min, Vector3::new(-50.0, 0.0, 100.0));
        assert_eq!(scaled.max, Vector3::new(50.0, 100.0, 200.0));

        let mirrored = bounds.scaled(-1.0);
        assert_eq!(mirrored.min, Vector3::new(-1.0, -2.0, -4.0));
        assert_eq!(mirrored.max, Vector3::new(1.0, 0.0, -2.0));
    }
}
