//! Host-facing context: everything the resort viewer keeps between frames.
//!
//! A host owns one [`SceneContext`], forwards window input to its camera
//! manager, feeds it [`AssetEvent`]s from a running load and calls
//! [`SceneContext::update`] once per frame before drawing.

use cgmath::{ortho, Matrix4, Point3, Vector3};

use crate::assets::{AssetEvent, LoadedAsset};
use crate::gfx::{
    camera::{
        frame_bounding_box, CameraController, CameraFrame, CameraManager, CameraPreset,
        OrbitCamera,
    },
    scene::Scene,
};
use crate::layout::{Color, Layout, LayoutConfig, LayoutGenerator, LayoutResult};

/// Sky blue used for both the clear color and the fog
pub const SKY_COLOR: u32 = 0x87CEEB;

const ROTATE_SPEED: f32 = 0.005;
const ZOOM_SPEED: f32 = 10.0;
const INITIAL_ASPECT: f32 = 1200.0 / 800.0;

/// Linear distance fog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    pub color: Color,
    pub near: f32,
    pub far: f32,
}

impl Fog {
    /// Fog contribution at `distance` from the eye: 0 before `near`, 1 past `far`
    pub fn factor(&self, distance: f32) -> f32 {
        if self.far <= self.near {
            return if distance >= self.far { 1.0 } else { 0.0 };
        }
        ((distance - self.near) / (self.far - self.near)).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

/// Orthographic shadow camera of the sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSettings {
    /// Width and height of the square shadow map in texels
    pub map_size: u32,
    /// Half extent of the shadow frustum on both axes
    pub extent: f32,
    pub near: f32,
    pub far: f32,
}

/// Shadow-casting sun looking at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Vector3<f32>,
    pub target: Vector3<f32>,
    pub shadow: ShadowSettings,
}

impl DirectionalLight {
    /// View-projection matrix of the shadow pass
    pub fn shadow_view_proj(&self) -> Matrix4<f32> {
        let extent = self.shadow.extent;
        let view = Matrix4::look_at_rh(
            Point3::new(self.position.x, self.position.y, self.position.z),
            Point3::new(self.target.x, self.target.y, self.target.z),
            Vector3::unit_y(),
        );
        ortho(-extent, extent, -extent, extent, self.shadow.near, self.shadow.far) * view
    }
}

/// Sky, fog and lighting of the resort.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub clear_color: Color,
    pub fog: Fog,
    pub ambient: AmbientLight,
    pub sun: DirectionalLight,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            clear_color: Color::from_hex(SKY_COLOR),
            fog: Fog {
                color: Color::from_hex(SKY_COLOR),
                near: 1000.0,
                far: 5000.0,
            },
            ambient: AmbientLight {
                color: Color::from_hex(0x404040),
                intensity: 0.6,
            },
            sun: DirectionalLight {
                color: Color::from_hex(0xFFFFFF),
                intensity: 1.0,
                position: Vector3::new(1000.0, 1000.0, 500.0),
                target: Vector3::new(0.0, 0.0, 0.0),
                shadow: ShadowSettings {
                    map_size: 2048,
                    extent: 1000.0,
                    near: 0.5,
                    far: 3000.0,
                },
            },
        }
    }
}

/// The resort viewer's state, owned by the host.
pub struct SceneContext {
    pub layout: Layout,
    pub scene: Scene,
    pub camera_manager: CameraManager,
    pub environment: Environment,
    model_index: Option<usize>,
}

impl SceneContext {
    /// Generates the layout and builds the scene around it.
    ///
    /// `seed` makes the scatter reproducible; `None` draws from the thread RNG.
    pub fn new(config: LayoutConfig, seed: Option<u64>) -> LayoutResult<Self> {
        let generator = LayoutGenerator::try_new(config)?;
        let layout = match seed {
            Some(seed) => generator.generate_seeded(seed),
            None => generator.generate(&mut rand::rng()),
        };
        let scene = Scene::from_layout(&layout);

        let camera = OrbitCamera::looking_at_origin(INITIAL_ASPECT);
        let controller = CameraController::new(ROTATE_SPEED, ZOOM_SPEED);

        log::info!(
            "Resort ready: {} ({} materials)",
            layout.summary(),
            scene.material_manager.len()
        );

        Ok(Self {
            layout,
            scene,
            camera_manager: CameraManager::new(camera, controller),
            environment: Environment::default(),
            model_index: None,
        })
    }

    /// Applies one event of a running model load.
    ///
    /// Returns the camera frame when the model arrived and was framed.
    pub fn handle_asset_event(&mut self, event: AssetEvent) -> Option<CameraFrame> {
        match event {
            AssetEvent::Progress(fraction) => {
                log::info!("Loading model: {:.0}%", fraction * 100.0);
                None
            }
            AssetEvent::Loaded(asset) => Some(self.add_model(&asset)),
            AssetEvent::Failed(err) => {
                log::error!("Failed to load model: {}", err);
                None
            }
        }
    }

    /// Adds a loaded model to the scene and frames the camera on it
    pub fn add_model(&mut self, asset: &LoadedAsset) -> CameraFrame {
        self.model_index = Some(self.scene.add_asset(asset));

        let frame = frame_bounding_box(
            &asset.bounds(),
            self.camera_manager.camera.fov_degrees(),
        );
        self.camera_manager.apply_frame(&frame);

        log::info!(
            "Framed {}: target {:?}, distance {:.2}",
            asset.name,
            frame.target,
            frame.distance
        );
        frame
    }

    /// The loaded model, if any
    pub fn model(&self) -> Option<&crate::gfx::scene::Object> {
        self.model_index.and_then(|index| self.scene.get_object(index))
    }

    pub fn apply_preset(&mut self, preset: CameraPreset) {
        log::debug!("Camera preset {:?}", preset);
        self.camera_manager.apply_preset(preset);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera_manager.camera.resize_projection(width, height);
    }

    /// Per-frame tick. Returns true while the camera is still moving.
    pub fn update(&mut self) -> bool {
        self.camera_manager.update()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetError;
    use cgmath::Vector4;
    use crate::gfx::geometry::{generate_box, BoundingBox};

    fn context() -> SceneContext {
        SceneContext::new(LayoutConfig::default(), Some(42)).unwrap()
    }

    fn model(size: f32) -> LoadedAsset {
        let half = size / 2.0;
        LoadedAsset {
            name: "resort".to_string(),
            meshes: vec![generate_box(size, size, size)],
            local_bounds: BoundingBox::new(
                Vector3::new(-half, -half, -half),
                Vector3::new(half, half, half),
            ),
            scale: 50.0,
        }
    }

    #[test]
    fn test_environment_defaults() {
        let env = Environment::default();
        assert_eq!(env.clear_color.to_hex(), SKY_COLOR);
        assert_eq!(env.fog.factor(500.0), 0.0);
        assert_eq!(env.fog.factor(3000.0), 0.5);
        assert_eq!(env.fog.factor(9000.0), 1.0);
        assert_eq!(env.sun.shadow.map_size, 2048);
    }

    #[test]
    fn test_shadow_camera_sees_sun_target() {
        let sun = Environment::default().sun;
        let clip = sun.shadow_view_proj() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!((clip.w - 1.0).abs() < 1e-6);
        for value in [clip.x, clip.y, clip.z] {
            assert!((-1.0..=1.0).contains(&value), "{:?}", clip);
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = LayoutConfig::default().with_tower_balconies(40);
        assert!(SceneContext::new(config, Some(1)).is_err());
    }

    #[test]
    fn test_loaded_event_frames_model() {
        let mut ctx = context();
        let before = ctx.scene.get_object_count();

        let frame = ctx.handle_asset_event(AssetEvent::Loaded(model(4.0)));
        let frame = frame.expect("loaded model is framed");

        assert_eq!(ctx.scene.get_object_count(), before + 1);
        assert_eq!(ctx.model().map(|obj| obj.name.as_str()), Some("resort"));
        // 4 units scaled by 50: a 200-unit box
        assert!((frame.distance - 130.32).abs() < 0.01);
        assert_eq!(ctx.camera_manager.camera.target, frame.target);
    }

    #[test]
    fn test_progress_and_failure_leave_scene_untouched() {
        let mut ctx = context();
        let before = ctx.scene.get_object_count();
        let eye = ctx.camera_manager.camera.eye;

        assert!(ctx.handle_asset_event(AssetEvent::Progress(0.5)).is_none());
        assert!(ctx
            .handle_asset_event(AssetEvent::Failed(AssetError::Disconnected))
            .is_none());

        assert_eq!(ctx.scene.get_object_count(), before);
        assert_eq!(ctx.camera_manager.camera.eye, eye);
        assert!(ctx.model().is_none());
    }

    #[test]
    fn test_resize_ignores_zero_size() {
        let mut ctx = context();
        ctx.resize(0, 600);
        assert!((ctx.camera_manager.camera.aspect - INITIAL_ASPECT).abs() < 1e-6);
        ctx.resize(800, 400);
        assert!((ctx.camera_manager.camera.aspect - 2.0).abs() < 1e-6);
    }
}
