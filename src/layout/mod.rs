//! # Scene Layout
//!
//! Deterministic placement of the resort's scene dressing: the landmark
//! buildings and their balconies, background buildings, trees, boats, and the
//! ground and water planes.
//!
//! ```
//! use resort_scene::layout::{Category, LayoutConfig, LayoutGenerator};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let generator = LayoutGenerator::try_new(LayoutConfig::default().with_boat_count(6))?;
//! let layout = generator.generate(&mut StdRng::seed_from_u64(7));
//! assert_eq!(layout.count(Category::Boat), 6);
//! # Ok::<(), resort_scene::layout::LayoutError>(())
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod generator;
pub mod object;

pub use color::Color;
pub use config::{
    BackgroundSpec, BalconyGrid, BalconySpec, BoatSpec, BuildingSpec, LayoutConfig, Span,
    SurfaceSpec, TreeSpec,
};
pub use error::{LayoutError, LayoutResult};
pub use generator::{generate_layout, LayoutGenerator};
pub use object::{
    Category, Layout, LayoutSummary, Part, PlacedObject, Shape, SurfaceKind, SurfacePlane,
};
