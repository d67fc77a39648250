//! # Layout Configuration
//!
//! Every constant the layout generator uses. [`LayoutConfig::default`] is the
//! resort's hand-placed art direction: landmark coordinates, balcony grids,
//! scatter ranges and palette. Builder methods adjust counts and ranges.
//!
//! ```
//! use resort_scene::layout::{LayoutConfig, Span};
//!
//! let config = LayoutConfig::default()
//!     .with_tree_count(40)
//!     .with_tree_area(Span::new(-800.0, 800.0), Span::new(-250.0, 250.0));
//! assert!(config.validate().is_ok());
//! ```

use cgmath::Vector3;
use rand::Rng;

use super::color::Color;
use super::error::{LayoutError, LayoutResult};

/// Closed interval `[min, max]` objects are sampled from uniformly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Draws a value uniformly from the span.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.random_range(self.min..=self.max)
    }

    /// Rejects inverted spans and spans too wide to sample from.
    fn validate(&self, field: &'static str) -> LayoutResult<()> {
        if (self.max - self.min).is_finite() && self.min <= self.max {
            Ok(())
        } else {
            Err(LayoutError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// A fixed landmark building.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingSpec {
    pub center: Vector3<f32>,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub color: Color,
}

impl BuildingSpec {
    /// Y of the building's floor
    pub fn base(&self) -> f32 {
        self.center.y - self.height / 2.0
    }
}

/// Balcony grid on a building's front (+Z) face.
///
/// Row `r` sits at `base + first_floor + r * floor_spacing`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalconyGrid {
    pub rows: usize,
    pub columns: usize,
    pub first_floor: f32,
    pub floor_spacing: f32,
}

impl BalconyGrid {
    /// Grid for the structural building with the given index (hotel 0,
    /// tower 1). Floors start lower and pack tighter on taller buildings.
    pub fn for_building(index: usize, rows: usize, columns: usize) -> Self {
        let b = index as f32;
        Self {
            rows,
            columns,
            first_floor: 15.0 - 5.0 * b,
            floor_spacing: 18.0 - 8.5 * b,
        }
    }

    pub fn len(&self) -> usize {
        self.rows * self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Height above the building base of the topmost row
    pub fn top_row(&self) -> f32 {
        self.first_floor + self.rows.saturating_sub(1) as f32 * self.floor_spacing
    }
}

/// Size and color shared by every balcony.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalconySpec {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub color: Color,
}

/// Randomly sized, randomly tinted buildings behind the resort.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundSpec {
    pub count: usize,
    pub width: Span,
    pub height: Span,
    pub depth: Span,
    pub x: Span,
    pub z: Span,
    pub saturation: f32,
    pub lightness: f32,
}

/// Trunk + foliage trees scattered on the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeSpec {
    pub count: usize,
    pub x: Span,
    pub z: Span,
    pub trunk_radius_top: f32,
    pub trunk_radius_bottom: f32,
    pub trunk_height: f32,
    pub trunk_color: Color,
    pub foliage_radius: f32,
    /// Height of the foliage center above the ground
    pub foliage_height: f32,
    pub foliage_color: Color,
}

/// Boat hulls floating on the water.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoatSpec {
    pub count: usize,
    pub x: Span,
    pub z: Span,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub color: Color,
}

/// A ground or water plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSpec {
    pub center: Vector3<f32>,
    pub width: f32,
    pub depth: f32,
    pub color: Color,
    pub opacity: f32,
}

/// Landmarks must sit on the ground within this tolerance
const RESTING_TOLERANCE: f32 = 1.0e-3;

/// All layout constants.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Y that ground-standing objects rest on
    pub ground_level: f32,
    /// Y that boats rest on
    pub water_level: f32,
    pub ground: SurfaceSpec,
    pub water: SurfaceSpec,
    pub hotel: BuildingSpec,
    pub tower: BuildingSpec,
    pub lobby: BuildingSpec,
    pub hotel_balconies: BalconyGrid,
    pub tower_balconies: BalconyGrid,
    pub balcony: BalconySpec,
    pub background: BackgroundSpec,
    pub trees: TreeSpec,
    pub boats: BoatSpec,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            ground_level: 0.0,
            water_level: -2.0,
            ground: SurfaceSpec {
                center: Vector3::new(0.0, -5.0, 0.0),
                width: 4000.0,
                depth: 4000.0,
                color: Color::from_hex(0x8B7355),
                opacity: 0.8,
            },
            water: SurfaceSpec {
                center: Vector3::new(0.0, -2.0, 1050.0),
                width: 3000.0,
                depth: 1000.0,
                color: Color::from_hex(0x006994),
                opacity: 0.8,
            },
            hotel: BuildingSpec {
                center: Vector3::new(-250.0, 80.0, -50.0),
                width: 200.0,
                height: 160.0,
                depth: 80.0,
                color: Color::from_hex(0xF5F5DC),
            },
            tower: BuildingSpec {
                center: Vector3::new(250.0, 100.0, -80.0),
                width: 60.0,
                height: 200.0,
                depth: 60.0,
                color: Color::from_hex(0xB0C4DE),
            },
            lobby: BuildingSpec {
                center: Vector3::new(-250.0, 20.0, 40.0),
                width: 120.0,
                height: 40.0,
                depth: 60.0,
                color: Color::from_hex(0xDEB887),
            },
            hotel_balconies: BalconyGrid::for_building(0, 8, 12),
            tower_balconies: BalconyGrid::for_building(1, 20, 1),
            balcony: BalconySpec {
                width: 12.0,
                height: 2.0,
                depth: 5.0,
                color: Color::from_hex(0xFFFFFF),
            },
            background: BackgroundSpec {
                count: 5,
                width: Span::new(50.0, 150.0),
                height: Span::new(30.0, 110.0),
                depth: Span::new(50.0, 150.0),
                x: Span::new(-800.0, 800.0),
                z: Span::new(-500.0, -200.0),
                saturation: 0.3,
                lightness: 0.6,
            },
            trees: TreeSpec {
                count: 20,
                x: Span::new(-600.0, 600.0),
                z: Span::new(-200.0, 200.0),
                trunk_radius_top: 3.0,
                trunk_radius_bottom: 4.0,
                trunk_height: 15.0,
                trunk_color: Color::from_hex(0x8B4513),
                foliage_radius: 10.0,
                foliage_height: 20.0,
                foliage_color: Color::from_hex(0x228B22),
            },
            boats: BoatSpec {
                count: 3,
                x: Span::new(-1000.0, 1000.0),
                z: Span::new(800.0, 1300.0),
                width: 30.0,
                height: 8.0,
                depth: 12.0,
                color: Color::from_hex(0xFFFFFF),
            },
        }
    }
}

impl LayoutConfig {
    pub fn with_background_count(mut self, count: usize) -> Self {
        self.background.count = count;
        self
    }

    pub fn with_background_area(mut self, x: Span, z: Span) -> Self {
        self.background.x = x;
        self.background.z = z;
        self
    }

    pub fn with_background_size(mut self, width: Span, height: Span, depth: Span) -> Self {
        self.background.width = width;
        self.background.height = height;
        self.background.depth = depth;
        self
    }

    pub fn with_tree_count(mut self, count: usize) -> Self {
        self.trees.count = count;
        self
    }

    pub fn with_tree_area(mut self, x: Span, z: Span) -> Self {
        self.trees.x = x;
        self.trees.z = z;
        self
    }

    pub fn with_boat_count(mut self, count: usize) -> Self {
        self.boats.count = count;
        self
    }

    pub fn with_boat_area(mut self, x: Span, z: Span) -> Self {
        self.boats.x = x;
        self.boats.z = z;
        self
    }

    pub fn with_hotel_balconies(mut self, rows: usize, columns: usize) -> Self {
        self.hotel_balconies = BalconyGrid::for_building(0, rows, columns);
        self
    }

    pub fn with_tower_balconies(mut self, rows: usize) -> Self {
        self.tower_balconies = BalconyGrid::for_building(1, rows, 1);
        self
    }

    /// Number of placed objects a layout with this config contains
    pub fn object_count(&self) -> usize {
        3 + self.hotel_balconies.len()
            + self.tower_balconies.len()
            + self.background.count
            + self.trees.count * 2
            + self.boats.count
    }

    /// Checks every range, size and balcony grid, and that landmarks and
    /// surfaces sit on the configured ground and water levels.
    pub fn validate(&self) -> LayoutResult<()> {
        for (field, value) in [
            ("ground_level", self.ground_level),
            ("water_level", self.water_level),
        ] {
            if !value.is_finite() {
                return Err(LayoutError::InvalidDimension { field, value });
            }
        }

        for (name, building) in [
            ("hotel", &self.hotel),
            ("tower", &self.tower),
            ("lobby", &self.lobby),
        ] {
            positive(name, building.width)?;
            positive(name, building.height)?;
            positive(name, building.depth)?;
            resting(name, building.base(), self.ground_level)?;
        }

        positive("ground.width", self.ground.width)?;
        positive("ground.depth", self.ground.depth)?;
        positive("water.width", self.water.width)?;
        positive("water.depth", self.water.depth)?;
        resting("water", self.water.center.y, self.water_level)?;
        // The ground plane may sit below ground level but never above it
        if self.ground.center.y > self.ground_level {
            return Err(LayoutError::NotResting {
                object: "ground",
                base: self.ground.center.y,
                level: self.ground_level,
            });
        }

        positive("balcony.width", self.balcony.width)?;
        positive("balcony.height", self.balcony.height)?;
        positive("balcony.depth", self.balcony.depth)?;
        self.validate_balconies("hotel", &self.hotel, &self.hotel_balconies)?;
        self.validate_balconies("tower", &self.tower, &self.tower_balconies)?;

        let background = &self.background;
        background.width.validate("background.width")?;
        background.height.validate("background.height")?;
        background.depth.validate("background.depth")?;
        background.x.validate("background.x")?;
        background.z.validate("background.z")?;
        positive("background.width.min", background.width.min)?;
        positive("background.height.min", background.height.min)?;
        positive("background.depth.min", background.depth.min)?;

        let trees = &self.trees;
        trees.x.validate("trees.x")?;
        trees.z.validate("trees.z")?;
        positive("trees.trunk_height", trees.trunk_height)?;
        positive("trees.foliage_radius", trees.foliage_radius)?;
        non_negative("trees.trunk_radius_top", trees.trunk_radius_top)?;
        positive("trees.trunk_radius_bottom", trees.trunk_radius_bottom)?;

        let boats = &self.boats;
        boats.x.validate("boats.x")?;
        boats.z.validate("boats.z")?;
        positive("boats.width", boats.width)?;
        positive("boats.height", boats.height)?;
        positive("boats.depth", boats.depth)?;

        Ok(())
    }

    fn validate_balconies(
        &self,
        building_name: &'static str,
        building: &BuildingSpec,
        grid: &BalconyGrid,
    ) -> LayoutResult<()> {
        if (grid.rows == 0) != (grid.columns == 0) {
            return Err(LayoutError::EmptyBalconyGrid {
                building: building_name,
                rows: grid.rows,
                columns: grid.columns,
            });
        }
        if grid.is_empty() {
            return Ok(());
        }

        let top = grid.top_row() + self.balcony.height / 2.0;
        if grid.first_floor < self.balcony.height / 2.0 || top > building.height {
            return Err(LayoutError::BalconiesOverflow {
                building: building_name,
                top,
                height: building.height,
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> LayoutResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidDimension { field, value })
    }
}

fn resting(object: &'static str, base: f32, level: f32) -> LayoutResult<()> {
    if (base - level).abs() <= RESTING_TOLERANCE {
        Ok(())
    } else {
        Err(LayoutError::NotResting {
            object,
            base,
            level,
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> LayoutResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidDimension { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LayoutConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.object_count(), 3 + 96 + 20 + 5 + 40 + 3);
    }

    #[test]
    fn test_balcony_grid_formulas() {
        let hotel = BalconyGrid::for_building(0, 8, 12);
        assert_eq!(hotel.len(), 96);
        assert_eq!(hotel.first_floor, 15.0);
        assert_eq!(hotel.top_row(), 141.0);

        let tower = BalconyGrid::for_building(1, 20, 1);
        assert_eq!(tower.len(), 20);
        assert_eq!(tower.first_floor, 10.0);
        assert_eq!(tower.top_row(), 190.5);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = LayoutConfig::default().with_tree_area(Span::new(10.0, -10.0), Span::new(0.0, 1.0));
        assert_eq!(
            config.validate(),
            Err(LayoutError::InvalidRange {
                field: "trees.x",
                min: 10.0,
                max: -10.0,
            })
        );
    }

    #[test]
    fn test_non_finite_range_rejected() {
        let config = LayoutConfig::default()
            .with_boat_area(Span::new(f32::NEG_INFINITY, 0.0), Span::new(800.0, 1300.0));
        assert!(matches!(
            config.validate(),
            Err(LayoutError::InvalidRange { field: "boats.x", .. })
        ));
    }

    #[test]
    fn test_overflowing_range_width_rejected() {
        let config = LayoutConfig::default()
            .with_tree_area(Span::new(-f32::MAX, f32::MAX), Span::new(-200.0, 200.0));
        assert!(matches!(
            config.validate(),
            Err(LayoutError::InvalidRange { field: "trees.x", .. })
        ));
    }

    #[test]
    fn test_raised_ground_level_rejected() {
        let mut config = LayoutConfig::default();
        config.ground_level = 10.0;
        assert_eq!(
            config.validate(),
            Err(LayoutError::NotResting {
                object: "hotel",
                base: 0.0,
                level: 10.0,
            })
        );

        // Moving every landmark up with it is consistent again
        for building in [&mut config.hotel, &mut config.tower, &mut config.lobby] {
            building.center.y += 10.0;
        }
        config.ground.center.y = 5.0;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_water_plane_must_match_water_level() {
        let mut config = LayoutConfig::default();
        config.water_level = 0.0;
        assert!(matches!(
            config.validate(),
            Err(LayoutError::NotResting { object: "water", .. })
        ));
    }

    #[test]
    fn test_ground_plane_above_ground_level_rejected() {
        let mut config = LayoutConfig::default();
        config.ground.center.y = 1.0;
        assert!(matches!(
            config.validate(),
            Err(LayoutError::NotResting { object: "ground", .. })
        ));
    }

    #[test]
    fn test_balcony_overflow_rejected() {
        let config = LayoutConfig::default().with_tower_balconies(30);
        assert!(matches!(
            config.validate(),
            Err(LayoutError::BalconiesOverflow { building: "tower", .. })
        ));
    }

    #[test]
    fn test_empty_balcony_grid_is_allowed() {
        let config = LayoutConfig::default().with_hotel_balconies(0, 0);
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.object_count(), 3 + 20 + 5 + 40 + 3);

        let lopsided = LayoutConfig::default().with_hotel_balconies(4, 0);
        assert!(lopsided.validate().is_err());
    }

    #[test]
    fn test_zero_height_background_rejected() {
        let config = LayoutConfig::default().with_background_size(
            Span::new(50.0, 150.0),
            Span::new(0.0, 110.0),
            Span::new(50.0, 150.0),
        );
        assert!(matches!(
            config.validate(),
            Err(LayoutError::InvalidDimension { field: "background.height.min", .. })
        ));
    }

    #[test]
    fn test_span_sampling_stays_in_range() {
        use rand::{rngs::StdRng, SeedableRng};

        let span = Span::new(-800.0, 800.0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(span.contains(span.sample(&mut rng)));
        }

        let point = Span::new(3.0, 3.0);
        assert_eq!(point.sample(&mut rng), 3.0);
    }
}
