//! # Layout Generator
//!
//! Places the resort's structural and decorative objects. Landmarks and
//! balcony grids come straight from the config; background buildings, trees
//! and boats are scattered with an injected random source, so the same seed
//! always yields the same layout.
//!
//! Every object rests on its support: background buildings and tree trunks
//! have their base at ground level, boat hulls at water level, balconies sit
//! in their building's frame.

use cgmath::Vector3;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::color::Color;
use super::config::{BalconyGrid, BuildingSpec, LayoutConfig};
use super::error::LayoutResult;
use super::object::{Category, Layout, Part, PlacedObject, Shape, SurfaceKind, SurfacePlane};

/// Generates layouts from a validated [`LayoutConfig`].
#[derive(Debug, Clone, Default)]
pub struct LayoutGenerator {
    config: LayoutConfig,
}

impl LayoutGenerator {
    /// Validates the config and wraps it in a generator
    pub fn try_new(config: LayoutConfig) -> LayoutResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Generates a layout seeded with `seed`.
    pub fn generate_seeded(&self, seed: u64) -> Layout {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }

    /// Generates a layout drawing every random value from `rng`.
    ///
    /// Objects come out in a fixed order: landmarks, hotel balconies
    /// (row-major), tower balconies, background buildings, trees (trunk then
    /// foliage), boats.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Layout {
        let config = &self.config;
        let mut objects = Vec::with_capacity(config.object_count());

        self.push_landmarks(&mut objects);
        self.push_balconies(&mut objects, &config.hotel, &config.hotel_balconies);
        self.push_balconies(&mut objects, &config.tower, &config.tower_balconies);
        self.push_background(&mut objects, rng);
        self.push_trees(&mut objects, rng);
        self.push_boats(&mut objects, rng);

        let layout = Layout {
            surfaces: [
                surface(SurfaceKind::Ground, config),
                surface(SurfaceKind::Water, config),
            ],
            objects,
        };
        log::debug!("Generated layout: {}", layout.summary());
        layout
    }

    fn push_landmarks(&self, objects: &mut Vec<PlacedObject>) {
        let config = &self.config;
        for (category, building) in [
            (Category::Hotel, &config.hotel),
            (Category::Tower, &config.tower),
            (Category::Hotel, &config.lobby),
        ] {
            objects.push(PlacedObject::whole(
                category,
                building.center,
                Shape::Box {
                    width: building.width,
                    height: building.height,
                    depth: building.depth,
                },
                building.color,
            ));
        }
    }

    fn push_balconies(&self, objects: &mut Vec<PlacedObject>, building: &BuildingSpec, grid: &BalconyGrid) {
        let balcony = &self.config.balcony;
        let shape = Shape::Box {
            width: balcony.width,
            height: balcony.height,
            depth: balcony.depth,
        };
        let left = building.center.x - building.width / 2.0;
        let column_width = building.width / grid.columns.max(1) as f32;
        let z = building.center.z + building.depth / 2.0 + balcony.depth / 2.0;

        for row in 0..grid.rows {
            let y = building.base() + grid.first_floor + row as f32 * grid.floor_spacing;
            for column in 0..grid.columns {
                let x = left + (column as f32 + 0.5) * column_width;
                objects.push(PlacedObject::whole(
                    Category::Balcony,
                    Vector3::new(x, y, z),
                    shape,
                    balcony.color,
                ));
            }
        }
    }

    fn push_background<R: Rng + ?Sized>(&self, objects: &mut Vec<PlacedObject>, rng: &mut R) {
        let spec = &self.config.background;
        let ground = self.config.ground_level;

        for _ in 0..spec.count {
            let width = spec.width.sample(rng);
            let height = spec.height.sample(rng);
            let depth = spec.depth.sample(rng);
            let x = spec.x.sample(rng);
            let z = spec.z.sample(rng);
            let hue: f32 = rng.random();

            objects.push(PlacedObject::whole(
                Category::BackgroundBuilding,
                Vector3::new(x, ground + height / 2.0, z),
                Shape::Box {
                    width,
                    height,
                    depth,
                },
                Color::hsl(hue, spec.saturation, spec.lightness),
            ));
        }
    }

    fn push_trees<R: Rng + ?Sized>(&self, objects: &mut Vec<PlacedObject>, rng: &mut R) {
        let spec = &self.config.trees;
        let ground = self.config.ground_level;

        for _ in 0..spec.count {
            let x = spec.x.sample(rng);
            let z = spec.z.sample(rng);

            objects.push(PlacedObject {
                category: Category::Tree,
                part: Part::Trunk,
                position: Vector3::new(x, ground + spec.trunk_height / 2.0, z),
                shape: Shape::Cylinder {
                    radius_top: spec.trunk_radius_top,
                    radius_bottom: spec.trunk_radius_bottom,
                    height: spec.trunk_height,
                },
                color: spec.trunk_color,
            });
            objects.push(PlacedObject {
                category: Category::Tree,
                part: Part::Foliage,
                position: Vector3::new(x, ground + spec.foliage_height, z),
                shape: Shape::Sphere {
                    radius: spec.foliage_radius,
                },
                color: spec.foliage_color,
            });
        }
    }

    fn push_boats<R: Rng + ?Sized>(&self, objects: &mut Vec<PlacedObject>, rng: &mut R) {
        let spec = &self.config.boats;
        let water = self.config.water_level;

        for _ in 0..spec.count {
            let x = spec.x.sample(rng);
            let z = spec.z.sample(rng);

            objects.push(PlacedObject::whole(
                Category::Boat,
                Vector3::new(x, water + spec.height / 2.0, z),
                Shape::Box {
                    width: spec.width,
                    height: spec.height,
                    depth: spec.depth,
                },
                spec.color,
            ));
        }
    }
}

fn surface(kind: SurfaceKind, config: &LayoutConfig) -> SurfacePlane {
    let spec = match kind {
        SurfaceKind::Ground => &config.ground,
        SurfaceKind::Water => &config.water,
    };
    SurfacePlane {
        kind,
        center: spec.center,
        width: spec.width,
        depth: spec.depth,
        color: spec.color,
        opacity: spec.opacity,
    }
}

/// Generates the default resort layout.
///
/// With a seed the result is reproducible; without one it draws from the
/// thread-local random source.
///
/// # Examples
///
/// ```
/// use resort_scene::layout::{generate_layout, Category};
///
/// let layout = generate_layout(Some(42));
/// assert_eq!(layout.len(), 167);
/// assert_eq!(layout.count(Category::Balcony), 116);
/// assert_eq!(layout, generate_layout(Some(42)));
/// ```
pub fn generate_layout(seed: Option<u64>) -> Layout {
    let generator = LayoutGenerator::default();
    match seed {
        Some(seed) => generator.generate_seeded(seed),
        None => generator.generate(&mut rand::rng()),
    }
}
