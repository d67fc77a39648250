use super::camera_utils::{Camera, CameraUniform};
use super::framing::CameraFrame;
use cgmath::*;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Vertical field of view of the resort viewer, in degrees
pub const DEFAULT_FOV_DEGREES: f32 = 75.0;

/// Eye position the viewer starts from, looking at the origin
pub const DEFAULT_EYE: Vector3<f32> = Vector3::new(200.0, 300.0, 400.0);

/// Camera orbiting a target point, Y-up.
///
/// `pitch` is the elevation above the horizon and `yaw` the angle around +Y
/// measured from +Z; the eye is derived from them and `distance`.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub distance: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub bounds: OrbitCameraBounds,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub uniform: CameraUniform,
}

impl Camera for OrbitCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.eye);
        let target = Point3::from_vec(self.target);
        let view = Matrix4::look_at_rh(eye, target, self.up);
        let proj =
            OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }
}

impl OrbitCamera {
    pub fn new(distance: f32, pitch: f32, yaw: f32, target: Vector3<f32>, aspect: f32) -> Self {
        let mut camera = Self {
            distance,
            pitch,
            yaw,
            eye: Vector3::zero(), // Will be auto-calculted in `update()` nevertheless.
            target,
            up: Vector3::unit_y(),
            bounds: OrbitCameraBounds::default(),
            aspect,
            fovy: Deg(DEFAULT_FOV_DEGREES).into(),
            znear: 0.1,
            zfar: 10000.0,
            uniform: CameraUniform::default(),
        };
        camera.update();
        camera
    }

    /// The viewer's starting camera: eye at [`DEFAULT_EYE`] looking at the origin.
    pub fn looking_at_origin(aspect: f32) -> Self {
        let mut camera = Self::new(1.0, 0.0, 0.0, Vector3::zero(), aspect);
        camera.set_eye(DEFAULT_EYE);
        camera
    }

    pub fn reset_to_default(&mut self) {
        self.target = Vector3::zero();
        self.set_eye(DEFAULT_EYE);
    }

    /// Vertical field of view in degrees
    pub fn fov_degrees(&self) -> f32 {
        Deg::from(self.fovy).0
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(
            self.bounds.min_distance.unwrap_or(f32::EPSILON),
            self.bounds.max_distance.unwrap_or(f32::MAX),
        );
        self.update();
    }

    pub fn add_distance(&mut self, delta: f32) {
        let corrected_zoom = f32::log10(self.distance.max(10.0)) * delta;
        self.set_distance(self.distance + corrected_zoom);
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(self.bounds.min_pitch, self.bounds.max_pitch);
        self.update();
    }

    pub fn add_pitch(&mut self, delta: f32) {
        self.set_pitch(self.pitch + delta);
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        let mut bounded_yaw = yaw;
        if let Some(min_yaw) = self.bounds.min_yaw {
            bounded_yaw = bounded_yaw.max(min_yaw);
        }
        if let Some(max_yaw) = self.bounds.max_yaw {
            bounded_yaw = bounded_yaw.min(max_yaw);
        }
        self.yaw = bounded_yaw;
        self.update();
    }

    pub fn add_yaw(&mut self, delta: f32) {
        self.set_yaw(self.yaw + delta);
    }

    /// Moves the eye to `position` around the current target.
    ///
    /// Distance and pitch are clamped to the bounds, so the resulting eye may
    /// differ from `position`. An eye on the target keeps the current angles.
    pub fn set_eye(&mut self, position: Vector3<f32>) {
        let offset = position - self.target;
        let distance = offset.magnitude();

        if distance > f32::EPSILON {
            self.pitch = (offset.y / distance).asin();
            self.yaw = offset.x.atan2(offset.z);
        }
        self.distance = distance;

        // Re-run the setters so the bounds apply
        self.set_yaw(self.yaw);
        self.set_pitch(self.pitch);
        self.set_distance(self.distance);
    }

    /// Looks at the frame's target from the frame's position.
    pub fn set_frame(&mut self, frame: &CameraFrame) {
        self.target = frame.target;
        self.set_eye(frame.position);
    }

    /// Pans the camera relative to the current view direction
    /// delta.0 = horizontal pan (left/right relative to camera view)
    /// delta.1 = vertical pan (up/down relative to camera view)
    pub fn pan(&mut self, delta: (f32, f32)) {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward).normalize();

        // Scale pan movement by distance for consistent feel at all zoom levels
        let pan_scale = self.distance * 0.1;

        let total_movement = right * delta.0 * pan_scale + up * delta.1 * pan_scale;

        // Move both eye and target to maintain the view direction
        self.eye += total_movement;
        self.target += total_movement;
    }

    /// Updates the camera after changing `distance`, `pitch` or `yaw`.
    fn update(&mut self) {
        self.eye =
            calculate_cartesian_eye_position(self.pitch, self.yaw, self.distance, self.target);
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn update_view_proj(&mut self) {
        self.uniform.view_position = [self.eye.x, self.eye.y, self.eye.z, 1.0];
        self.uniform.view_proj = self.build_view_projection_matrix().into();
    }
}

/// Limits applied to every camera movement.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCameraBounds {
    pub min_distance: Option<f32>,
    pub max_distance: Option<f32>,
    pub min_pitch: f32,
    pub max_pitch: f32,
    pub min_yaw: Option<f32>,
    pub max_yaw: Option<f32>,
}

impl OrbitCameraBounds {
    /// No distance limits and the full pitch range
    pub fn unbounded() -> Self {
        Self {
            min_distance: None,
            max_distance: None,
            min_pitch: -std::f32::consts::FRAC_PI_2 + f32::EPSILON,
            max_pitch: std::f32::consts::FRAC_PI_2 - f32::EPSILON,
            min_yaw: None,
            max_yaw: None,
        }
    }
}

impl Default for OrbitCameraBounds {
    /// The resort viewer's limits: 200..2000 units away, never below a polar
    /// angle of `π / 2.2` from straight up.
    fn default() -> Self {
        Self {
            min_distance: Some(200.0),
            max_distance: Some(2000.0),
            min_pitch: std::f32::consts::FRAC_PI_2 - std::f32::consts::PI / 2.2,
            max_pitch: std::f32::consts::FRAC_PI_2 - f32::EPSILON,
            min_yaw: None,
            max_yaw: None,
        }
    }
}

fn calculate_cartesian_eye_position(
    pitch: f32,
    yaw: f32,
    distance: f32,
    target: Vector3<f32>,
) -> Vector3<f32> {
    Vector3::new(
        distance * yaw.sin() * pitch.cos(),
        distance * pitch.sin(),
        distance * yaw.cos() * pitch.cos(),
    ) + target
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_close(a: Vector3<f32>, b: Vector3<f32>) {
        assert!((a - b).magnitude() < 1e-2, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_default_view() {
        let camera = OrbitCamera::looking_at_origin(1.5);
        assert_vec_close(camera.eye, DEFAULT_EYE);
        assert_eq!(camera.target, Vector3::zero());
        assert!((camera.fov_degrees() - 75.0).abs() < 1e-4);
    }

    #[test]
    fn test_set_eye_round_trips_within_bounds() {
        let mut camera = OrbitCamera::looking_at_origin(1.0);
        let eye = Vector3::new(-500.0, 600.0, 800.0);
        camera.set_eye(eye);
        assert_vec_close(camera.eye, eye);
        assert!((camera.distance - eye.magnitude()).abs() < 1e-2);
    }

    #[test]
    fn test_distance_bounds_clamp() {
        let mut camera = OrbitCamera::looking_at_origin(1.0);
        camera.set_distance(10.0);
        assert_eq!(camera.distance, 200.0);
        camera.set_distance(1.0e6);
        assert_eq!(camera.distance, 2000.0);
    }

    #[test]
    fn test_cannot_orbit_below_polar_limit() {
        let mut camera = OrbitCamera::looking_at_origin(1.0);
        camera.set_eye(Vector3::new(0.0, -300.0, 400.0));
        assert!(camera.eye.y > 0.0);
        assert!((camera.pitch - camera.bounds.min_pitch).abs() < 1e-6);
    }

    #[test]
    fn test_set_frame_looks_at_target() {
        let mut camera = OrbitCamera::looking_at_origin(1.0);
        camera.bounds = OrbitCameraBounds::unbounded();

        let frame = CameraFrame {
            position: Vector3::new(110.0, 55.0, 110.0),
            target: Vector3::new(10.0, 5.0, 10.0),
            distance: 100.0,
        };
        camera.set_frame(&frame);

        assert_eq!(camera.target, frame.target);
        assert_vec_close(camera.eye, frame.position);
        assert!((camera.distance - 150.0).abs() < 1e-2);
    }

    #[test]
    fn test_pan_keeps_view_direction() {
        let mut camera = OrbitCamera::looking_at_origin(1.0);
        let before = (camera.target - camera.eye).normalize();
        camera.pan((1.0, 0.5));
        let after = (camera.target - camera.eye).normalize();
        assert_vec_close(before, after);
        assert!(camera.target.magnitude() > 0.0);
    }

    #[test]
    fn test_uniform_tracks_eye() {
        let mut camera = OrbitCamera::looking_at_origin(16.0 / 9.0);
        camera.update_view_proj();
        assert_eq!(camera.uniform.view_position[3], 1.0);
        assert!((camera.uniform.view_position[1] - camera.eye.y).abs() < 1e-4);
        assert_ne!(camera.uniform.view_proj, CameraUniform::default().view_proj);
    }
}
