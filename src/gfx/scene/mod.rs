//! # Scene Management Module
//!
//! Turns a generated [`Layout`](crate::layout::Layout) and any loaded models
//! into a flat list of drawable objects with shared materials. The crate has
//! no GPU backend of its own; a host renderer walks [`Scene::objects`], uploads
//! each [`GeometryData`](crate::gfx::geometry::GeometryData) once and binds
//! the object's transform and material per draw.
//!
//! ## Key Components
//!
//! - [`Scene`] - Objects plus their [`MaterialManager`](crate::gfx::resources::MaterialManager)
//! - [`Object`] - Meshes, transform, material reference and shadow flags
//!
//! ```rust
//! use resort_scene::gfx::scene::Scene;
//! use resort_scene::layout::generate_layout;
//!
//! let layout = generate_layout(Some(7));
//! let scene = Scene::from_layout(&layout);
//! assert_eq!(scene.get_object_count(), layout.len() + 2);
//! ```

pub mod object;
pub mod scene;

pub use object::Object;
pub use scene::{Scene, SceneStatistics};
