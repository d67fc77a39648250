//! Descriptors produced by the layout generator.

use std::collections::BTreeMap;
use std::fmt;

use cgmath::Vector3;

use super::color::Color;
use crate::gfx::geometry::BoundingBox;

/// What a placed object represents in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Hotel,
    Tower,
    BackgroundBuilding,
    Tree,
    Boat,
    Balcony,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Hotel,
        Category::Tower,
        Category::BackgroundBuilding,
        Category::Tree,
        Category::Boat,
        Category::Balcony,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Hotel => "hotel",
            Category::Tower => "tower",
            Category::BackgroundBuilding => "background_building",
            Category::Tree => "tree",
            Category::Boat => "boat",
            Category::Balcony => "balcony",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which piece of a composite object this is. Only trees are composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Whole,
    Trunk,
    Foliage,
}

/// Shape and size of a placed object, centered on its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
    },
    Sphere {
        radius: f32,
    },
}

impl Shape {
    /// Full extent along each axis
    pub fn extents(&self) -> Vector3<f32> {
        match *self {
            Shape::Box {
                width,
                height,
                depth,
            } => Vector3::new(width, height, depth),
            Shape::Cylinder {
                radius_top,
                radius_bottom,
                height,
            } => {
                let diameter = 2.0 * radius_top.max(radius_bottom);
                Vector3::new(diameter, height, diameter)
            }
            Shape::Sphere { radius } => Vector3::new(2.0 * radius, 2.0 * radius, 2.0 * radius),
        }
    }

    pub fn height(&self) -> f32 {
        self.extents().y
    }
}

/// One object of the generated layout. Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedObject {
    pub category: Category,
    pub part: Part,
    /// Center of the shape in world space
    pub position: Vector3<f32>,
    pub shape: Shape,
    pub color: Color,
}

impl PlacedObject {
    pub(crate) fn whole(category: Category, position: Vector3<f32>, shape: Shape, color: Color) -> Self {
        Self {
            category,
            part: Part::Whole,
            position,
            shape,
            color,
        }
    }

    /// Y of the lowest point of the shape
    pub fn base(&self) -> f32 {
        self.position.y - self.shape.height() / 2.0
    }

    /// World-space box enclosing the shape
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_center_size(self.position, self.shape.extents())
    }
}

/// Ground and water planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    Ground,
    Water,
}

/// A horizontal environment plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePlane {
    pub kind: SurfaceKind,
    pub center: Vector3<f32>,
    pub width: f32,
    pub depth: f32,
    pub color: Color,
    pub opacity: f32,
}

/// The full scene dressing: two surfaces plus every placed object, in
/// generation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub surfaces: [SurfacePlane; 2],
    pub objects: Vec<PlacedObject>,
}

impl Layout {
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter_category(&self, category: Category) -> impl Iterator<Item = &PlacedObject> + '_ {
        self.objects
            .iter()
            .filter(move |object| object.category == category)
    }

    /// Number of placed objects of a category (tree parts count separately)
    pub fn count(&self, category: Category) -> usize {
        self.iter_category(category).count()
    }

    pub fn surface(&self, kind: SurfaceKind) -> &SurfacePlane {
        self.surfaces
            .iter()
            .find(|surface| surface.kind == kind)
            .unwrap_or(&self.surfaces[0])
    }

    /// Union of every placed object's bounds (surfaces excluded)
    pub fn bounds(&self) -> BoundingBox {
        self.objects
            .iter()
            .fold(BoundingBox::empty(), |acc, object| acc | object.bounds())
    }

    /// Object counts per category
    pub fn summary(&self) -> LayoutSummary {
        let mut counts = BTreeMap::new();
        for object in &self.objects {
            *counts.entry(object.category).or_insert(0) += 1;
        }
        LayoutSummary {
            counts,
            total: self.objects.len(),
        }
    }
}

/// Per-category object counts of a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSummary {
    pub counts: BTreeMap<Category, usize>,
    pub total: usize,
}

impl fmt::Display for LayoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} objects (", self.total)?;
        for (i, (category, count)) in self.counts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", count, category)?;
        }
        f.write_str(")")
    }
}
