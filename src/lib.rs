//! Procedural resort scene.
//!
//! Generates the dressing around a hero model (hotel, tower, balconies,
//! background buildings, trees, boats, ground and water), loads the model off
//! the render thread and frames an orbit camera on it.
//!
//! ```rust
//! use resort_scene::{solve_camera_frame, SceneContext};
//! use resort_scene::layout::LayoutConfig;
//! use cgmath::Vector3;
//!
//! let ctx = SceneContext::new(LayoutConfig::default(), Some(1))?;
//! assert_eq!(ctx.layout.len(), 167);
//!
//! let frame = solve_camera_frame(Vector3::new(0.0, 0.0, 0.0), Vector3::new(100.0, 100.0, 100.0), 75.0);
//! assert!((frame.distance - 65.16).abs() < 0.01);
//! # Ok::<(), resort_scene::layout::LayoutError>(())
//! ```

pub mod app;
pub mod assets;
pub mod gfx;
pub mod layout;
pub mod prelude;

// Re-export main types for convenience
pub use app::SceneContext;
pub use gfx::camera::solve_camera_frame;
pub use layout::generate_layout;
