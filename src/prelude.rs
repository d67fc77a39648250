//! # Prelude
//!
//! Commonly used types in one import:
//!
//! ```rust
//! use resort_scene::prelude::*;
//!
//! let layout = generate_layout(Some(9));
//! let scene = Scene::from_layout(&layout);
//! assert!(scene.bounds().contains(Vector3::new(0.0, 0.0, 0.0)));
//! ```

// Host context
pub use crate::app::{Environment, SceneContext};

// Layout generation
pub use crate::layout::{
    generate_layout, Category, Color, Layout, LayoutConfig, LayoutError, LayoutGenerator,
    PlacedObject, Shape, Span,
};

// Asset loading
pub use crate::assets::{AssetError, AssetEvent, AssetHandle, AssetLoader, LoadedAsset};

// Graphics and scene types
pub use crate::gfx::camera::{
    frame_bounding_box, solve_camera_frame, CameraFrame, CameraManager, CameraPreset, OrbitCamera,
};
pub use crate::gfx::geometry::{
    generate_box, generate_cylinder, generate_plane, generate_sphere, BoundingBox, GeometryData,
};
pub use crate::gfx::resources::{Material, MaterialManager};
pub use crate::gfx::scene::{Object, Scene};

// Common external dependencies
pub use cgmath::{InnerSpace, Vector3, Zero};
