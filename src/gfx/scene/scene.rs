use std::collections::HashMap;

use crate::assets::LoadedAsset;
use crate::gfx::{
    geometry::{
        generate_box, generate_cylinder, generate_plane, generate_sphere, BoundingBox,
        GeometryData,
    },
    resources::material::{Material, MaterialId, MaterialManager},
};
use crate::layout::{Category, Layout, Part, PlacedObject, Shape, SurfaceKind, SurfacePlane};

use super::object::Object;

const SPHERE_WIDTH_SEGMENTS: u32 = 16;
const SPHERE_HEIGHT_SEGMENTS: u32 = 12;
const CYLINDER_SEGMENTS: u32 = 12;

/// Objects and materials handed to the host renderer
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub objects: Vec<Object>,
    pub material_manager: MaterialManager, // One material per distinct color
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            material_manager: MaterialManager::new(),
        }
    }

    /// Builds the scene dressing for a generated layout.
    ///
    /// Surfaces come first (ground, then water), followed by the placed
    /// objects in generation order. Equal colors share a material.
    pub fn from_layout(layout: &Layout) -> Self {
        let mut scene = Self::new();

        for surface in &layout.surfaces {
            scene.add_surface(surface);
        }

        let mut counters: HashMap<Category, usize> = HashMap::new();
        for placed in &layout.objects {
            let index = counters.entry(placed.category).or_insert(0);
            if placed.part != Part::Foliage {
                *index += 1;
            }
            let name = match placed.part {
                Part::Whole => format!("{}_{}", placed.category, index),
                Part::Trunk => format!("{}_{}_trunk", placed.category, index),
                Part::Foliage => format!("{}_{}_foliage", placed.category, index),
            };
            scene.add_placed_object(&name, placed);
        }

        log::debug!(
            "Built scene with {} objects and {} materials",
            scene.objects.len(),
            scene.material_manager.len()
        );
        scene
    }

    fn add_surface(&mut self, surface: &SurfacePlane) {
        let name = match surface.kind {
            SurfaceKind::Ground => "ground",
            SurfaceKind::Water => "water",
        };
        let material = self.intern_color_material(surface.color, surface.opacity);
        let object = Object::new(
            name,
            vec![generate_plane(surface.width, surface.depth, 1, 1)],
        )
        .at(surface.center)
        .with_material(material)
        .with_shadows(false, true);
        self.objects.push(object);
    }

    fn add_placed_object(&mut self, name: &str, placed: &PlacedObject) {
        let material = self.intern_color_material(placed.color, 1.0);
        let object = Object::new(name, vec![shape_geometry(&placed.shape)])
            .at(placed.position)
            .with_material(material)
            .with_category(placed.category);
        self.objects.push(object);
    }

    fn intern_color_material(&mut self, color: crate::layout::Color, opacity: f32) -> MaterialId {
        self.material_manager.intern(Material::matte(color, opacity))
    }

    /// Adds a loaded model at the origin with its uniform scale applied.
    ///
    /// Returns the index of the new object.
    pub fn add_asset(&mut self, asset: &LoadedAsset) -> usize {
        let name = self.ensure_unique_name(&asset.name);
        let mut object = Object::new(&name, asset.meshes.clone());
        object.set_scale(asset.scale);
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Adds an object, renaming it if the name is taken
    pub fn add_object(&mut self, mut object: Object) -> usize {
        object.name = self.ensure_unique_name(&object.name);
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Gets material for rendering an object, falling back to the default
    pub fn get_material_for_object(&self, object: &Object) -> &Material {
        self.material_manager
            .get_material_for_object(object.get_material_id())
    }

    pub fn get_object_names(&self) -> Vec<String> {
        self.objects.iter().map(|obj| obj.name.clone()).collect()
    }

    pub fn get_object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn get_object(&self, index: usize) -> Option<&Object> {
        self.objects.get(index)
    }

    pub fn find_object(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|obj| obj.name == name)
    }

    /// World bounds of every visible object
    pub fn bounds(&self) -> BoundingBox {
        self.objects
            .iter()
            .filter(|obj| obj.visible)
            .fold(BoundingBox::empty(), |acc, obj| acc | obj.world_bounds())
    }

    pub fn get_statistics(&self) -> SceneStatistics {
        SceneStatistics {
            object_count: self.objects.len(),
            material_count: self.material_manager.len(),
            total_triangles: self.objects.iter().map(Object::triangle_count).sum(),
            total_vertices: self.objects.iter().map(Object::vertex_count).sum(),
        }
    }

    pub fn ensure_unique_name(&self, desired_name: &str) -> String {
        let mut counter = 0;
        let mut test_name = desired_name.to_string();

        while self.objects.iter().any(|obj| obj.name == test_name) {
            counter += 1;
            test_name = format!("{} ({})", desired_name, counter);
        }

        test_name
    }
}

fn shape_geometry(shape: &Shape) -> GeometryData {
    match *shape {
        Shape::Box {
            width,
            height,
            depth,
        } => generate_box(width, height, depth),
        Shape::Cylinder {
            radius_top,
            radius_bottom,
            height,
        } => generate_cylinder(radius_top, radius_bottom, height, CYLINDER_SEGMENTS),
        Shape::Sphere { radius } => {
            generate_sphere(radius, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS)
        }
    }
}

/// Scene statistics for debugging and UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneStatistics {
    pub object_count: usize,
    pub material_count: usize,
    pub total_triangles: usize,
    pub total_vertices: usize,
}
