//! Bounding-box camera framing.
//!
//! Computes where to put a camera so that a loaded asset fills the view:
//! the camera sits on a fixed elevated diagonal `(1, 1/2, 1)` from the box
//! center, far enough back that the box's largest extent spans the vertical
//! field of view.
//!
//! The fit only accounts for the vertical field of view. With a wide viewport
//! the box may clip horizontally.

use cgmath::{Deg, Rad, Vector3};

use crate::gfx::geometry::BoundingBox;

/// A camera placement: where the eye is and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    /// Eye position
    pub position: Vector3<f32>,
    /// Look-at target (the framed box center)
    pub target: Vector3<f32>,
    /// Fit distance the offset was scaled by
    pub distance: f32,
}

/// Distance at which an extent of `max_dim` spans a vertical field of view
/// of `vertical_fov`.
///
/// Returns `0` for `max_dim == 0` and a non-finite value for a zero field of
/// view; callers guard degenerate input.
pub fn fit_distance(max_dim: f32, vertical_fov: Deg<f32>) -> f32 {
    let fov: Rad<f32> = vertical_fov.into();
    (max_dim / 2.0 / (fov.0 / 2.0).tan()).abs()
}

/// Frames a box given by its center and size for a camera with the given
/// vertical field of view in degrees.
///
/// # Preconditions
///
/// `size` components are non-negative and `0 < vertical_fov_degrees < 180`.
/// Nothing is validated: a zero-size box yields distance 0 (eye on the
/// target) and a zero field of view yields non-finite coordinates.
///
/// # Examples
///
/// ```
/// use cgmath::Vector3;
/// use resort_scene::gfx::camera::solve_camera_frame;
///
/// let frame = solve_camera_frame(Vector3::new(0.0, 0.0, 0.0), Vector3::new(100.0, 100.0, 100.0), 75.0);
/// assert!((frame.distance - 65.16).abs() < 1e-2);
/// assert_eq!(frame.target, Vector3::new(0.0, 0.0, 0.0));
/// ```
pub fn solve_camera_frame(
    center: Vector3<f32>,
    size: Vector3<f32>,
    vertical_fov_degrees: f32,
) -> CameraFrame {
    let max_dim = size.x.max(size.y).max(size.z);
    let distance = fit_distance(max_dim, Deg(vertical_fov_degrees));

    CameraFrame {
        position: center + Vector3::new(distance, distance / 2.0, distance),
        target: center,
        distance,
    }
}

/// [`solve_camera_frame`] for a bounding box.
pub fn frame_bounding_box(bounds: &BoundingBox, vertical_fov_degrees: f32) -> CameraFrame {
    solve_camera_frame(bounds.center(), bounds.size(), vertical_fov_degrees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Zero};

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-2, "{} != {}", a, b);
    }

    #[test]
    fn test_cube_at_origin() {
        let frame = solve_camera_frame(Vector3::zero(), Vector3::new(100.0, 100.0, 100.0), 75.0);
        let expected = 50.0 / 37.5f32.to_radians().tan();

        assert_close(frame.distance, expected);
        assert_close(frame.distance, 65.16);
        assert_close(frame.position.x, expected);
        assert_close(frame.position.y, expected / 2.0);
        assert_close(frame.position.z, expected);
        assert_eq!(frame.target, Vector3::zero());
    }

    #[test]
    fn test_largest_axis_drives_distance() {
        let flat = solve_camera_frame(Vector3::zero(), Vector3::new(10.0, 100.0, 1.0), 60.0);
        let tall = solve_camera_frame(Vector3::zero(), Vector3::new(100.0, 100.0, 100.0), 60.0);
        assert_close(flat.distance, tall.distance);
    }

    #[test]
    fn test_distance_is_scale_linear() {
        let size = Vector3::new(12.0, 30.0, 7.0);
        let single = solve_camera_frame(Vector3::zero(), size, 45.0);
        let double = solve_camera_frame(Vector3::zero(), size * 2.0, 45.0);
        assert_close(double.distance, single.distance * 2.0);
    }

    #[test]
    fn test_offset_is_relative_to_center() {
        let center = Vector3::new(-250.0, 80.0, 40.0);
        let frame = solve_camera_frame(center, Vector3::new(20.0, 20.0, 20.0), 75.0);
        let offset = frame.position - frame.target;

        assert_eq!(frame.target, center);
        assert_close(offset.x, frame.distance);
        assert_close(offset.y, frame.distance / 2.0);
        assert_close(offset.magnitude(), frame.distance * 1.5);
    }

    #[test]
    fn test_zero_box_puts_camera_on_target() {
        let center = Vector3::new(1.0, 2.0, 3.0);
        let frame = solve_camera_frame(center, Vector3::zero(), 75.0);
        assert_eq!(frame.distance, 0.0);
        assert_eq!(frame.position, center);
    }

    #[test]
    fn test_zero_fov_is_not_finite() {
        let frame = solve_camera_frame(Vector3::zero(), Vector3::new(1.0, 1.0, 1.0), 0.0);
        assert!(!frame.distance.is_finite());
    }

    #[test]
    fn test_frame_bounding_box() {
        let bounds = BoundingBox::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(100.0, 50.0, 20.0));
        let frame = frame_bounding_box(&bounds, 75.0);
        assert_eq!(frame.target, Vector3::new(50.0, 25.0, 10.0));
        assert_close(frame.distance, fit_distance(100.0, Deg(75.0)));
    }
}
