//! # Graphics Module
//!
//! Renderer-agnostic graphics data for the resort viewer: the camera system,
//! procedural geometry, materials and the assembled scene. A host renderer
//! consumes these types; nothing here talks to a GPU.
//!
//! - **Camera System** ([`camera`]) - Damped orbit camera, presets and asset framing
//! - **Geometry** ([`geometry`]) - Boxes, spheres, cylinders, planes and bounding boxes
//! - **Resources** ([`resources`]) - Materials and their uniform layout
//! - **Scene Management** ([`scene`]) - Objects built from a layout or a loaded model

pub mod camera;
pub mod geometry;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::orbit_camera::OrbitCamera;
pub use geometry::BoundingBox;
pub use scene::Scene;
