//! Headless walkthrough of the resort viewer.
//!
//! ```text
//! cargo run --example resort -- [model.obj] [seed]
//! ```
//!
//! Generates the resort, loads the model (if given) on the loader thread,
//! frames the camera on it and steps through the navigation presets.

use anyhow::{Context, Result};
use resort_scene::assets::{AssetLoader, DEFAULT_MODEL_SCALE};
use resort_scene::gfx::camera::CameraPreset;
use resort_scene::layout::LayoutConfig;
use resort_scene::SceneContext;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let model_path = args.next();
    let seed = args
        .next()
        .map(|seed| seed.parse::<u64>())
        .transpose()
        .context("seed must be an unsigned integer")?;

    let mut ctx = SceneContext::new(LayoutConfig::default(), seed)
        .context("failed to build the resort layout")?;

    let stats = ctx.scene.get_statistics();
    log::info!(
        "Scene: {} objects, {} materials, {} triangles",
        stats.object_count,
        stats.material_count,
        stats.total_triangles
    );

    if let Some(path) = model_path {
        let mut handle = AssetLoader::load_obj(&path, DEFAULT_MODEL_SCALE);
        pollster::block_on(async {
            while let Some(event) = handle.next_event().await {
                ctx.handle_asset_event(event);
            }
        });
        if ctx.model().is_none() {
            anyhow::bail!("could not load {}", path);
        }
    }

    for preset in CameraPreset::ALL {
        ctx.apply_preset(preset);
        ctx.update();
        let camera = &ctx.camera_manager.camera;
        log::info!(
            "{:?}: eye ({:.1}, {:.1}, {:.1}), distance {:.1}",
            preset,
            camera.eye.x,
            camera.eye.y,
            camera.eye.z,
            camera.distance
        );
    }

    Ok(())
}
