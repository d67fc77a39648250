use cgmath::{Matrix4, SquareMatrix};
use winit::{
    event::{DeviceEvent, ElementState},
    keyboard::KeyCode,
};

use super::{
    camera_controller::CameraController, framing::CameraFrame, orbit_camera::OrbitCamera,
    presets::CameraPreset,
};

/// Owns the orbit camera and the controller that drives it.
pub struct CameraManager {
    pub camera: OrbitCamera,
    pub controller: CameraController,
}

impl CameraManager {
    pub fn new(camera: OrbitCamera, controller: CameraController) -> Self {
        Self { camera, controller }
    }

    /// Feeds a raw device event to the controller.
    ///
    /// Returns true when the view changed and the host should redraw.
    pub fn process_event(&mut self, event: &DeviceEvent) -> bool {
        self.controller.process_events(event, &mut self.camera)
    }

    /// Feeds a key press or release to the controller. Returns true on a reset.
    pub fn process_key(&mut self, key: KeyCode, state: ElementState) -> bool {
        self.controller.process_key(key, state, &mut self.camera)
    }

    /// Advances damped motion by one frame and refreshes the camera uniform.
    ///
    /// Returns true while the camera is still settling.
    pub fn update(&mut self) -> bool {
        let moving = self.controller.update(&mut self.camera);
        self.camera.update_view_proj();
        moving
    }

    /// Moves the eye to a navigation preset, keeping the current target
    pub fn apply_preset(&mut self, preset: CameraPreset) {
        self.controller.stop();
        self.camera.set_eye(preset.eye_position());
    }

    /// Points the camera at a solved frame
    pub fn apply_frame(&mut self, frame: &CameraFrame) {
        self.controller.stop();
        self.camera.set_frame(frame);
    }
}

pub trait Camera: Sized {
    fn build_view_projection_matrix(&self) -> Matrix4<f32>;
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct CameraUniform {
    /// The eye position of the camera in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fullfill the 16 byte alignment requirement.
    pub view_position: [f32; 4],

    /// Contains the view projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    /// Creates a default [CameraUniform].
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: Matrix4::identity().into(),
        }
    }
}
