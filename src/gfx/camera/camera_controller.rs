use winit::{
    dpi::PhysicalPosition,
    event::{DeviceEvent, ElementState, KeyEvent, MouseScrollDelta},
    keyboard::{KeyCode, PhysicalKey},
};

use super::orbit_camera::OrbitCamera;

/// Pending motion below this is dropped instead of decayed forever
const SETTLE_EPSILON: f32 = 1.0e-5;

/// Maps mouse and keyboard input onto an [`OrbitCamera`].
///
/// Drag rotates, shift-drag pans, the wheel zooms. Rotation and panning are
/// damped: drags accumulate pending motion that [`CameraController::update`]
/// applies a fraction of each frame. Zoom is immediate.
pub struct CameraController {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    /// Fraction of the pending motion applied per update; 1.0 disables damping
    pub damping_factor: f32,
    pending_yaw: f32,
    pending_pitch: f32,
    pending_pan: (f32, f32),
    is_shift_held: bool,
    is_mouse_pressed: bool,
}

impl CameraController {
    pub fn new(rotate_speed: f32, zoom_speed: f32) -> Self {
        Self {
            rotate_speed,
            zoom_speed,
            pan_speed: 0.01,
            damping_factor: 0.05,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_pan: (0.0, 0.0),
            is_shift_held: false,
            is_mouse_pressed: false,
        }
    }

    pub fn with_damping(mut self, damping_factor: f32) -> Self {
        self.damping_factor = damping_factor.clamp(f32::EPSILON, 1.0);
        self
    }

    /// Handles one device event. Returns true if the host should redraw.
    pub fn process_events(&mut self, event: &DeviceEvent, camera: &mut OrbitCamera) -> bool {
        match event {
            DeviceEvent::Button {
                button: 0, // Left Mouse Button
                state,
            } => {
                self.is_mouse_pressed = *state == ElementState::Pressed;
                false
            }
            DeviceEvent::MouseWheel { delta, .. } => {
                let scroll_amount = -match delta {
                    MouseScrollDelta::LineDelta(_, scroll) => *scroll,
                    MouseScrollDelta::PixelDelta(PhysicalPosition { y: scroll, .. }) => {
                        *scroll as f32
                    }
                };
                camera.add_distance(scroll_amount * self.zoom_speed);
                true
            }
            DeviceEvent::MouseMotion { delta } if self.is_mouse_pressed => {
                if self.is_shift_held {
                    self.pending_pan.0 += -delta.0 as f32 * self.pan_speed;
                    self.pending_pan.1 += delta.1 as f32 * self.pan_speed;
                } else {
                    self.pending_yaw += -delta.0 as f32 * self.rotate_speed;
                    self.pending_pitch += delta.1 as f32 * self.rotate_speed;
                }
                true
            }
            _ => false,
        }
    }

    pub fn process_keyed_events(&mut self, event: &KeyEvent, camera: &mut OrbitCamera) -> bool {
        match event.physical_key {
            PhysicalKey::Code(key) => self.process_key(key, event.state, camera),
            PhysicalKey::Unidentified(_) => false,
        }
    }

    /// Shift tracks the pan modifier, Shift+C resets the view.
    ///
    /// Returns true if the camera moved.
    pub fn process_key(&mut self, key: KeyCode, state: ElementState, camera: &mut OrbitCamera) -> bool {
        match key {
            KeyCode::ShiftLeft | KeyCode::ShiftRight => {
                self.set_shift_held(state == ElementState::Pressed);
                false
            }
            KeyCode::KeyC if state == ElementState::Pressed && self.is_shift_held => {
                log::debug!("Resetting camera to default position");
                self.stop();
                camera.reset_to_default();
                true
            }
            _ => false,
        }
    }

    pub fn set_shift_held(&mut self, held: bool) {
        if held != self.is_shift_held {
            log::trace!("Shift state changed: {}", held);
        }
        self.is_shift_held = held;
    }

    /// Applies one frame of damped motion. Returns true while motion remains.
    pub fn update(&mut self, camera: &mut OrbitCamera) -> bool {
        if !self.is_moving() {
            return false;
        }

        let factor = self.damping_factor;
        camera.add_yaw(self.pending_yaw * factor);
        camera.add_pitch(self.pending_pitch * factor);
        if self.pending_pan != (0.0, 0.0) {
            camera.pan((self.pending_pan.0 * factor, self.pending_pan.1 * factor));
        }

        let decay = 1.0 - factor;
        self.pending_yaw = settle(self.pending_yaw * decay);
        self.pending_pitch = settle(self.pending_pitch * decay);
        self.pending_pan = (
            settle(self.pending_pan.0 * decay),
            settle(self.pending_pan.1 * decay),
        );

        self.is_moving()
    }

    /// Drops any pending damped motion
    pub fn stop(&mut self) {
        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
        self.pending_pan = (0.0, 0.0);
    }

    pub fn is_moving(&self) -> bool {
        self.pending_yaw != 0.0 || self.pending_pitch != 0.0 || self.pending_pan != (0.0, 0.0)
    }

    /// Returns true if currently panning
    pub fn is_panning(&self) -> bool {
        self.is_mouse_pressed && self.is_shift_held
    }

    /// Returns true if currently rotating
    pub fn is_rotating(&self) -> bool {
        self.is_mouse_pressed && !self.is_shift_held
    }
}

fn settle(value: f32) -> f32 {
    if value.abs() < SETTLE_EPSILON {
        0.0
    } else {
        value
    }
}
