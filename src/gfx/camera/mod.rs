//! # Camera System
//!
//! Orbit camera, its input controller, navigation presets, and the
//! bounding-box framing solver that places the camera around a loaded asset.

pub mod camera_controller;
pub mod camera_utils;
pub mod framing;
pub mod orbit_camera;
pub mod presets;

// Re-export main types
pub use camera_controller::CameraController;
pub use camera_utils::{Camera, CameraManager, CameraUniform};
pub use framing::{fit_distance, frame_bounding_box, solve_camera_frame, CameraFrame};
pub use orbit_camera::{OrbitCamera, OrbitCameraBounds};
pub use presets::CameraPreset;
