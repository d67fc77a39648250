//! End-to-end: generate the resort, load a model through the loader thread,
//! frame it, then move through the presets.

use std::fs;
use std::path::PathBuf;

use cgmath::{InnerSpace, Vector3};
use resort_scene::assets::{AssetEvent, AssetLoader, DEFAULT_MODEL_SCALE};
use resort_scene::gfx::camera::CameraPreset;
use resort_scene::layout::{Category, LayoutConfig};
use resort_scene::SceneContext;

// Unit cube centered on (0, 1, 0)
const CUBE_OBJ: &str = "\
o resort
v -1 0 -1
v 1 0 -1
v 1 2 -1
v -1 2 -1
v -1 0 1
v 1 0 1
v 1 2 1
v -1 2 1
f 1 2 3 4
f 5 8 7 6
f 1 5 6 2
f 4 3 7 8
f 1 4 8 5
f 2 6 7 3
";

fn temp_obj(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("resort-it-{}-{}", std::process::id(), name));
    fs::write(&path, CUBE_OBJ).unwrap();
    path
}

#[test]
fn default_resort_has_expected_dressing() {
    let ctx = SceneContext::new(LayoutConfig::default(), Some(2024)).unwrap();

    assert_eq!(ctx.layout.len(), 167);
    assert_eq!(ctx.layout.count(Category::Balcony), 116);
    assert_eq!(ctx.layout.count(Category::Tree), 40);
    assert_eq!(ctx.scene.get_object_count(), 169);
}

#[test]
fn same_seed_same_scene() {
    let a = SceneContext::new(LayoutConfig::default(), Some(7)).unwrap();
    let b = SceneContext::new(LayoutConfig::default(), Some(7)).unwrap();
    assert_eq!(a.layout, b.layout);
    assert_eq!(a.scene.get_object_names(), b.scene.get_object_names());
}

#[test]
fn loaded_model_is_framed() {
    let path = temp_obj("cube.obj");
    let mut ctx = SceneContext::new(LayoutConfig::default(), Some(1)).unwrap();

    let mut handle = AssetLoader::load_obj(&path, DEFAULT_MODEL_SCALE);
    let mut saw_progress = false;
    let mut frame = None;
    while let Some(event) = pollster::block_on(handle.next_event()) {
        saw_progress |= matches!(event, AssetEvent::Progress(_));
        if let Some(solved) = ctx.handle_asset_event(event) {
            frame = Some(solved);
        }
    }
    fs::remove_file(&path).ok();

    let frame = frame.expect("model framed");
    assert!(saw_progress);
    assert_eq!(ctx.scene.get_object_count(), 170);

    // Scaled cube: 100 units on every side, centered on (0, 50, 0)
    assert!((frame.target - Vector3::new(0.0, 50.0, 0.0)).magnitude() < 1e-3);
    assert!((frame.distance - 65.16).abs() < 0.01);
    let offset = frame.position - frame.target;
    assert!((offset.y - frame.distance / 2.0).abs() < 1e-3);

    // The orbit camera keeps its minimum distance
    let camera = &ctx.camera_manager.camera;
    assert_eq!(camera.target, frame.target);
    assert!(camera.distance >= 200.0 - 1e-3);
}

#[test]
fn failed_load_keeps_scene() {
    let mut ctx = SceneContext::new(LayoutConfig::default(), Some(1)).unwrap();
    let before = ctx.scene.get_object_count();

    let result = AssetLoader::load_obj("/nonexistent/resort.obj", DEFAULT_MODEL_SCALE).wait();
    let err = result.unwrap_err();
    assert!(ctx.handle_asset_event(AssetEvent::Failed(err)).is_none());
    assert_eq!(ctx.scene.get_object_count(), before);
}

#[test]
fn presets_move_the_eye() {
    let mut ctx = SceneContext::new(LayoutConfig::default(), Some(1)).unwrap();

    for preset in CameraPreset::ALL {
        ctx.apply_preset(preset);
        ctx.update();
        let eye = ctx.camera_manager.camera.eye;
        assert!(
            (eye - preset.eye_position()).magnitude() < 0.5,
            "{:?} eye {:?}",
            preset,
            eye
        );
    }
}
