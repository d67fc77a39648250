//! Model loading off the render thread.
//!
//! ```no_run
//! use resort_scene::assets::{AssetLoader, DEFAULT_MODEL_SCALE};
//!
//! let asset = AssetLoader::load_obj("resort.obj", DEFAULT_MODEL_SCALE).wait()?;
//! println!("{} spans {:?}", asset.name, asset.bounds().size());
//! # Ok::<(), resort_scene::assets::AssetError>(())
//! ```

pub mod error;
pub mod loader;

pub use error::{AssetError, AssetResult};
pub use loader::{
    load_obj_blocking, AssetEvent, AssetHandle, AssetLoader, LoadedAsset, DEFAULT_MODEL_SCALE,
};
