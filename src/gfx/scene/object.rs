use cgmath::{Matrix4, Vector3};

use crate::gfx::geometry::{BoundingBox, GeometryData};
use crate::gfx::resources::material::MaterialId;
use crate::layout::Category;

/// A drawable scene object: meshes, a translate-then-scale transform and a
/// material reference.
#[derive(Debug, Clone)]
pub struct Object {
    pub name: String,
    pub meshes: Vec<GeometryData>,
    pub translation: Vector3<f32>,
    pub scale: Vector3<f32>,
    pub transform: Matrix4<f32>,
    pub material_id: Option<MaterialId>,
    /// Layout category, `None` for loaded models
    pub category: Option<Category>,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub visible: bool,
}

impl Object {
    pub fn new(name: &str, meshes: Vec<GeometryData>) -> Self {
        Self {
            name: name.to_string(),
            meshes,
            translation: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
            transform: Matrix4::from_scale(1.0),
            material_id: None,
            category: None,
            cast_shadow: true,
            receive_shadow: true,
            visible: true,
        }
    }

    /// Builder: places the object at `translation`
    pub fn at(mut self, translation: Vector3<f32>) -> Self {
        self.set_translation(translation);
        self
    }

    pub fn with_material(mut self, material_id: MaterialId) -> Self {
        self.material_id = Some(material_id);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_shadows(mut self, cast: bool, receive: bool) -> Self {
        self.cast_shadow = cast;
        self.receive_shadow = receive;
        self
    }

    pub fn set_translation(&mut self, translation: Vector3<f32>) {
        self.translation = translation;
        self.rebuild_transform();
    }

    pub fn translate(&mut self, offset: Vector3<f32>) {
        self.set_translation(self.translation + offset);
    }

    /// Uniform scale
    pub fn set_scale(&mut self, scale: f32) {
        self.set_scale_xyz(Vector3::new(scale, scale, scale));
    }

    pub fn set_scale_xyz(&mut self, scale: Vector3<f32>) {
        self.scale = scale;
        self.rebuild_transform();
    }

    pub fn get_material_id(&self) -> Option<&str> {
        self.material_id.as_deref()
    }

    pub fn reset_transform(&mut self) {
        self.translation = Vector3::new(0.0, 0.0, 0.0);
        self.scale = Vector3::new(1.0, 1.0, 1.0);
        self.rebuild_transform();
    }

    /// Column-major model matrix as uploaded to the GPU
    pub fn transform_data(&self) -> [[f32; 4]; 4] {
        self.transform.into()
    }

    pub fn vertex_count(&self) -> usize {
        self.meshes.iter().map(GeometryData::vertex_count).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(GeometryData::triangle_count).sum()
    }

    /// Bounds of the meshes before the transform
    pub fn local_bounds(&self) -> BoundingBox {
        self.meshes
            .iter()
            .fold(BoundingBox::empty(), |acc, mesh| acc | mesh.bounds())
    }

    /// Bounds after scale and translation
    pub fn world_bounds(&self) -> BoundingBox {
        let local = self.local_bounds();
        if local.is_empty() {
            return local;
        }
        let corners = [local.min, local.max].map(|corner| {
            Vector3::new(
                corner.x * self.scale.x,
                corner.y * self.scale.y,
                corner.z * self.scale.z,
            ) + self.translation
        });
        BoundingBox::empty()
            .with_point(corners[0])
            .with_point(corners[1])
    }

    fn rebuild_transform(&mut self) {
        self.transform = Matrix4::from_translation(self.translation)
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::generate_box;
    use cgmath::Vector4;

    #[test]
    fn test_transform_scales_then_translates() {
        let mut object = Object::new("crate", vec![generate_box(2.0, 2.0, 2.0)]);
        object.set_scale(50.0);
        object.set_translation(Vector3::new(10.0, 0.0, 0.0));

        let corner = object.transform * Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(corner, Vector4::new(60.0, 50.0, 50.0, 1.0));

        let bounds = object.world_bounds();
        assert_eq!(bounds.min, Vector3::new(-40.0, -50.0, -50.0));
        assert_eq!(bounds.max, Vector3::new(60.0, 50.0, 50.0));
    }

    #[test]
    fn test_empty_object_has_empty_bounds() {
        let object = Object::new("nothing", Vec::new()).at(Vector3::new(1.0, 2.0, 3.0));
        assert!(object.world_bounds().is_empty());
        assert_eq!(object.triangle_count(), 0);
    }

    #[test]
    fn test_reset_transform() {
        let mut object = Object::new("box", vec![generate_box(1.0, 1.0, 1.0)]);
        object.translate(Vector3::new(3.0, 4.0, 5.0));
        object.set_scale(2.0);
        object.reset_transform();
        assert_eq!(object.transform, Matrix4::from_scale(1.0));
    }
}
