//! Material system
//!
//! Provides material definitions and centralized management. Materials are
//! stored in MaterialManager and objects reference them by ID; the host
//! renderer uploads each one as a [`MaterialUniform`].

use std::collections::HashMap;

use crate::layout::Color;

/// Material ID for referencing materials
pub type MaterialId = String;

/// GPU uniform data for materials
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub base_color: [f32; 4],
    pub metallic: f32,
    pub roughness: f32,
    pub normal_scale: f32,
    pub occlusion_strength: f32,
    pub emissive: [f32; 3],
    _padding: f32,
}

/// Material definition with PBR properties
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub base_color: [f32; 4],
    pub metallic: f32,
    pub roughness: f32,
    pub normal_scale: f32,
    pub occlusion_strength: f32,
    pub emissive: [f32; 3],
}

impl Default for Material {
    fn default() -> Self {
        Self::new("default", [0.8, 0.8, 0.8, 1.0], 0.0, 0.5)
    }
}

impl Material {
    /// Creates a new material with basic PBR properties
    ///
    /// # Arguments
    /// * `name` - Unique name for this material
    /// * `base_color` - RGBA base color
    /// * `metallic` - Metallic factor (0.0 = dielectric, 1.0 = metallic)
    /// * `roughness` - Surface roughness (0.0 = mirror, 1.0 = rough)
    pub fn new(name: &str, base_color: [f32; 4], metallic: f32, roughness: f32) -> Self {
        Self {
            name: name.to_string(),
            base_color,
            metallic: metallic.clamp(0.0, 1.0),
            roughness: roughness.clamp(0.0, 1.0),
            normal_scale: 1.0,
            occlusion_strength: 1.0,
            emissive: [0.0, 0.0, 0.0],
        }
    }

    /// Matte dielectric material for a layout color, named after its hex value
    /// and opacity so equal colors share one material.
    pub fn matte(color: Color, opacity: f32) -> Self {
        let name = if opacity < 1.0 {
            format!("#{:06X}@{:.2}", color.to_hex(), opacity)
        } else {
            format!("#{:06X}", color.to_hex())
        };
        Self::new(&name, color.to_rgba(opacity.clamp(0.0, 1.0)), 0.0, 0.9)
    }

    /// Builder pattern: Set alpha transparency
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.base_color[3] = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.base_color[3] < 1.0
    }

    /// Uniform data for this material
    pub fn uniform(&self) -> MaterialUniform {
        MaterialUniform {
            base_color: self.base_color,
            metallic: self.metallic,
            roughness: self.roughness,
            normal_scale: self.normal_scale,
            occlusion_strength: self.occlusion_strength,
            emissive: self.emissive,
            _padding: 0.0,
        }
    }
}

/// Manages all materials of a scene
///
/// Objects reference materials by ID rather than storing material data
/// directly, so objects of the same color share one material.
#[derive(Debug, Clone)]
pub struct MaterialManager {
    materials: HashMap<MaterialId, Material>,
    default_material: Material,
}

impl MaterialManager {
    /// Creates a new material manager with a default material
    pub fn new() -> Self {
        Self {
            materials: HashMap::new(),
            default_material: Material::default(),
        }
    }

    /// Adds `material` unless one with the same name exists; returns its ID
    pub fn intern(&mut self, material: Material) -> MaterialId {
        let id = material.name.clone();
        self.materials.entry(id.clone()).or_insert(material);
        id
    }

    pub fn get_material(&self, id: &str) -> Option<&Material> {
        self.materials.get(id)
    }

    /// Gets material for an object with fallback to default
    pub fn get_material_for_object(&self, material_id: Option<&str>) -> &Material {
        material_id
            .and_then(|id| self.get_material(id))
            .unwrap_or(&self.default_material)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matte_material_naming() {
        let ground = Material::matte(Color::from_hex(0x8B7355), 0.8);
        assert_eq!(ground.name, "#8B7355@0.80");
        assert!(ground.is_transparent());
        assert_eq!(ground.base_color[3], 0.8);

        let hotel = Material::matte(Color::from_hex(0xF5F5DC), 1.0);
        assert_eq!(hotel.name, "#F5F5DC");
        assert!(!hotel.is_transparent());
    }

    #[test]
    fn test_intern_shares_equal_colors() {
        let mut manager = MaterialManager::new();
        let a = manager.intern(Material::matte(Color::from_hex(0xFFFFFF), 1.0));
        let b = manager.intern(Material::matte(Color::from_hex(0xFFFFFF), 1.0));
        let c = manager.intern(Material::matte(Color::from_hex(0x228B22), 1.0));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_fallback_to_default() {
        let manager = MaterialManager::new();
        assert_eq!(manager.get_material_for_object(Some("missing")).name, "default");
        assert_eq!(manager.get_material_for_object(None).name, "default");
    }

    #[test]
    fn test_uniform_layout() {
        let uniform = Material::default().with_alpha(0.5).uniform();
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 48);
        assert_eq!(uniform.base_color[3], 0.5);
    }
}
